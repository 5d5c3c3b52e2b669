//! 搜索框相关消息

/// 搜索框消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchMessage {
    /// 输入字符
    Input(char),
    /// 删除最后一个字符
    Backspace,
    /// 提交查询
    Submit,
    /// 离开搜索框
    Cancel,
}
