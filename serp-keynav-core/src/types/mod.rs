//! 类型定义模块

mod link;
mod navigation;
mod options;

pub use link::Link;
pub use navigation::{Command, LastNavigation, NavAction, OpenTarget, Region};
pub use options::Options;
