//! 日志初始化
//!
//! 终端被 TUI 占用，日志写入配置目录下的文件。

use std::fs::{self, OpenOptions};
use std::path::Path;

use anyhow::{Context, Result};
use env_logger::{Env, Target};

/// 日志文件名
pub const LOG_FILE: &str = "serp-keynav.log";

/// 日志级别环境变量
pub const LOG_ENV: &str = "SERP_KEYNAV_LOG";

/// 初始化 env_logger，追加写入 `<dir>/serp-keynav.log`
pub fn init_logging(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create {}", dir.display()))?;

    let path = dir.join(LOG_FILE);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    env_logger::Builder::from_env(Env::default().filter_or(LOG_ENV, "info"))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .context("Logger already initialized")?;

    Ok(())
}
