//! 浏览器状态：当前页面与后退历史

use std::sync::Arc;

use serp_keynav_core::{site, KeyValueStore, NavigationController, ResultPage};

use crate::backend::{PageSnapshot, SnapshotLibrary};

/// 已加载的页面
pub enum LoadedPage {
    /// 搜索结果页，安装了键盘导航
    Search(NavigationController<PageSnapshot>),
    /// 其他页面
    Plain(PageSnapshot),
}

impl LoadedPage {
    pub fn snapshot(&self) -> &PageSnapshot {
        match self {
            Self::Search(controller) => controller.page(),
            Self::Plain(page) => page,
        }
    }
}

/// 模拟浏览器
///
/// 每次加载页面都会创建新的 `NavigationController` 并等待 `start()`，
/// 因此返回结果页时会从导航记忆中恢复焦点。
pub struct Browser {
    library: SnapshotLibrary,
    options_store: Arc<dyn KeyValueStore>,
    memory_store: Arc<dyn KeyValueStore>,
    current: LoadedPage,
    history: Vec<String>,
}

impl Browser {
    /// 创建浏览器并加载起始页
    pub async fn new(
        library: SnapshotLibrary,
        options_store: Arc<dyn KeyValueStore>,
        memory_store: Arc<dyn KeyValueStore>,
        start_url: &str,
    ) -> Self {
        let current = LoadedPage::Plain(PageSnapshot::empty(start_url));
        let mut browser = Self {
            library,
            options_store,
            memory_store,
            current,
            history: Vec::new(),
        };
        browser.load(start_url).await;
        browser
    }

    /// 打开链接（相对地址按当前页面解析），记入历史
    pub async fn navigate(&mut self, href: &str) {
        let url = site::resolve(self.location(), href);
        let previous = self.location().to_string();
        self.history.push(previous);
        self.load(&url).await;
    }

    /// 返回上一页；没有历史时返回 false
    pub async fn back(&mut self) -> bool {
        let Some(url) = self.history.pop() else {
            return false;
        };
        self.load(&url).await;
        true
    }

    async fn load(&mut self, url: &str) {
        let page = self.library.page(url);
        log::info!("Loading {url} ({} results)", page.result_links().len());

        self.current = if site::is_search_host(url) {
            let mut controller = NavigationController::new(
                page,
                self.options_store.clone(),
                self.memory_store.clone(),
            );
            controller.start().await;
            LoadedPage::Search(controller)
        } else {
            log::debug!("{url} is not a search host, navigation not installed");
            LoadedPage::Plain(page)
        };
    }

    pub fn location(&self) -> &str {
        self.current.snapshot().location()
    }

    pub fn current(&self) -> &LoadedPage {
        &self.current
    }

    /// 当前页面的导航控制器（非搜索页为 None）
    pub fn controller(&self) -> Option<&NavigationController<PageSnapshot>> {
        match &self.current {
            LoadedPage::Search(controller) => Some(controller),
            LoadedPage::Plain(_) => None,
        }
    }

    pub fn controller_mut(&mut self) -> Option<&mut NavigationController<PageSnapshot>> {
        match &mut self.current {
            LoadedPage::Search(controller) => Some(controller),
            LoadedPage::Plain(_) => None,
        }
    }

    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }

    /// 当前页面是否有对应的快照
    pub fn has_snapshot(&self) -> bool {
        self.library.contains(self.location())
    }
}
