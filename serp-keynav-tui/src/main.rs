//! serp-keynav TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 存储与页面来源 (`backend/`)
//!
//!
//! main.rs
//! serp-keynav TUI 的程序入口
//!
//! 其执行：
//! async fn `main()` {
//!
//!     Args::parse()           // 解析命令行参数
//!     init_logging()          // 日志写入配置目录（终端被 TUI 占用）
//!     Browser::new()          // 加载快照、打开存储、加载起始页
//!     init_terminal()         // 初始化终端
//!     app::run()              // 运行 app.rs 主循环
//!     restore_terminal()      // 无论成功与否，都恢复终端
//!
//! }
//!
//!
//! 当启动程序时，main.rs：
//!     `init_terminal()`         // from util/terminal.rs
//!
//!     有：
//!         · enable_raw_mode()
//!             - 以关闭终端行缓冲模式、关闭回显与允许读取单个按键事件
//!         · execute!(io::stdout , EnterAlternateScreen)?
//!             - 切换到 备用屏幕
//!         · 返回 Terminal 对象
//!
//!
//!     进入主循环 app::run()   // from /app.rs

mod app;
mod backend;
mod event;
mod message;
mod model;
mod update;
mod util;
mod view;

#[cfg(test)]
mod test_utils;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use serp_keynav_core::{KeyValueStore, Options, OptionsService};

use backend::{default_config_dir, JsonFileStore, SnapshotLibrary, SystemOpener, MEMORY_FILE, OPTIONS_FILE};
use model::{App, Browser};
use util::{init_logging, init_terminal, restore_terminal};
use view::theme::{set_theme, Theme};

/// 没有任何快照时的起始页
const FALLBACK_START_URL: &str = "https://www.google.com/search?q=cats";

/// Keyboard navigation for search result pages, in the terminal
#[derive(Debug, Parser)]
#[command(name = "serp-keynav", version, about)]
struct Args {
    /// Directory of page snapshot JSON files (default: built-in samples)
    #[arg(long, value_name = "DIR")]
    snapshots: Option<PathBuf>,

    /// URL to open first
    #[arg(long, value_name = "URL")]
    start: Option<String>,

    /// Directory holding options, navigation memory and the log file
    #[arg(long, value_name = "DIR")]
    config_dir: Option<PathBuf>,

    /// Color theme
    #[arg(long, value_enum, default_value_t = Theme::Dark)]
    theme: Theme,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config_dir = args.config_dir.clone().unwrap_or_else(default_config_dir);

    // 1. 日志（失败不影响运行）
    if let Err(e) = init_logging(&config_dir) {
        eprintln!("warning: logging disabled: {e:#}");
    }
    set_theme(args.theme);

    // 2. 页面来源
    let library = match &args.snapshots {
        Some(dir) => SnapshotLibrary::load_dir(dir)
            .await
            .with_context(|| format!("Failed to load snapshots from {}", dir.display()))?,
        None => SnapshotLibrary::builtin(),
    };
    if library.is_empty() {
        log::warn!("No snapshots loaded, every page will be empty");
    }
    let start_url = args
        .start
        .clone()
        .or_else(|| library.first_url().map(str::to_string))
        .unwrap_or_else(|| FALLBACK_START_URL.to_string());

    // 3. 存储
    let options_store = Arc::new(JsonFileStore::new(config_dir.join(OPTIONS_FILE)));
    if !options_store.exists().await {
        write_default_options(options_store.clone()).await;
    }
    let memory_store: Arc<dyn KeyValueStore> =
        Arc::new(JsonFileStore::new(config_dir.join(MEMORY_FILE)));

    // 4. 加载起始页
    log::info!("Starting at {start_url} with {} snapshots", library.len());
    let browser = Browser::new(library, options_store, memory_store, &start_url).await;
    let mut app = App::new(browser, Arc::new(SystemOpener));

    // 5. 初始化终端并运行主循环
    let mut terminal = init_terminal()?;
    let result = app::run(&mut terminal, &mut app).await;

    // 6. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    if let Err(ref e) = result {
        log::error!("Exited with error: {e:#}");
    }
    result
}

/// 首次运行时写出默认选项，便于用户编辑
async fn write_default_options(store: Arc<JsonFileStore>) {
    let path = store.path().display().to_string();
    let service = OptionsService::new(store);
    match service.save(&Options::default()).await {
        Ok(()) => log::info!("Wrote default options to {path}"),
        Err(e) => log::warn!("Failed to write default options to {path}: {e}"),
    }
}
