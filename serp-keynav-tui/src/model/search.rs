//! 搜索框状态

/// 搜索框
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SearchInput {
    /// 是否获得焦点（获得焦点时按键不交给导航控制器）
    pub focused: bool,
    pub query: String,
}

impl SearchInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// 获得焦点；给出 `query` 时替换当前内容
    pub fn focus(&mut self, query: Option<String>) {
        if let Some(query) = query {
            self.query = query;
        }
        self.focused = true;
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    pub fn input(&mut self, c: char) {
        self.query.push(c);
    }

    pub fn backspace(&mut self) {
        self.query.pop();
    }
}
