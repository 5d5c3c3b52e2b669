//!
//! src/util/mod.rs
//! Util 层：基础设施和工具函数
//!
//! 与业务逻辑无关的代码：
//!
//!     mod terminal;       // 原始模式 + 备用屏幕；panic 时恢复终端
//!     mod logging;        // env_logger 追加写入 <config>/serp-keynav.log
//!                         // 级别取自 SERP_KEYNAV_LOG（默认 info）
//!     mod text;           // 按显示宽度截断文本（unicode-width）
//!
//! 终端被 TUI 占用，因此日志只能写文件。
//! main.rs 在 app::run 返回后（无论成功失败）都调用 restore_terminal。
//!

mod logging;
mod terminal;
mod text;

pub use logging::init_logging;
pub use terminal::{init_terminal, restore_terminal, Term};
pub use text::truncate;
