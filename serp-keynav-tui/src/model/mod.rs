//！┌─────────────────────────────────────────────────────────────────────────────┐
//！│                              主循环 (app.rs)                               │
//！│                                                                            │
//！│  ┌────────────────────────────── UI 层 ───────────────────────────────┐   │
//！│  │                                                                     │   │
//！│  │   ┌─────────┐          ┌───────────┐          ┌──────────┐         │   │
//！│  │   │  Event  │ ───────▶ │  Message  │ ───────▶ │  Update  │         │   │
//！│  │   │   层    │   翻译    │    层     │   消费    │    层    │         │   │
//！│  │   └─────────┘          │           │          └────┬─────┘         │   │
//！│  │        ▲               │ AppMessage│               │ 修改          │   │
//！│  │        │               │ NavMsg    │               ▼               │   │
//！│  │   ┌─────────┐          │ SearchMsg │          ┌──────────┐         │   │
//！│  │   │  View   │          │           │   ┌───── │  Model   │         │   │
//！│  │   │   层    │          └───────────┘   │      │    层    │         │   │
//！│  │   └────┬────┘ ◀──────── 读取 ──────────┘      └────┬─────┘         │   │
//！│  │        │                                           │               │   │
//！│  └────────│───────────────────────────────────────────│───────────────┘   │
//！│           │                                           │ 异步调用          │
//！│           ▼                                           ▼                   │
//！│      ┌─────────┐                                ┌──────────┐              │
//！│      │  终端   │                                │ Browser  │              │
//！│      │ (Util)  │                                │ Backend  │              │
//！│      └─────────┘                                └────┬─────┘              │
//！│                                                      │                    │
//！│                                                      ▼                    │
//！│                                           ┌───────────────────┐           │
//！│                                           │   serp-keynav-    │           │
//！│                                           │      core         │           │
//！│                                           └───────────────────┘           │
//！└─────────────────────────────────────────────────────────────────────────────┘

//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的 “唯一真相来源”。
//! 所有状态变更都通过 Update 层来触发。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod browser;        // 当前页面、导航控制器与后退历史
//!         mod search;         // 搜索框
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、主应用状态（App）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/model/app.rs 中定义：
//!
//!         pub struct App {
//!             pub should_quit: bool,              // 退出标志
//!             pub browser: Browser,               // 当前页面与历史
//!             pub search: SearchInput,            // 搜索框
//!             pub status_message: Option<String>, // 状态栏消息（可选）
//!             pub opener: Arc<dyn UrlOpener>,     // 在新上下文中打开链接
//!         }
//!
//!     使用：
//!         - 在 main.rs 中创建：let mut app = model::App::new(browser, opener);
//!         - 在 update/mod.rs 中修改：app.should_quit = true;
//!         - 在 view/mod.rs 中读取：pub fn render(app: &App, ...)
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、浏览器（Browser）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/model/browser.rs 中定义：
//!
//!         Browser {
//!             library: SnapshotLibrary,           // 页面来源
//!             current: LoadedPage,                // 当前页面
//!             history: Vec<String>,               // 后退历史
//!             ...
//!         }
//!
//!         LoadedPage::Search(NavigationController<PageSnapshot>)
//!             搜索结果页：结果列表、标记项均由控制器持有
//!         LoadedPage::Plain(PageSnapshot)
//!             其他页面：没有键盘导航
//!
//!     数据流：
//!         用户按 Enter（结果页上）
//!             ↓
//!         控制器保存 (originKey, index) 并返回 Command::Open
//!             ↓
//!         update/navigation.rs 调用 browser.navigate(href)
//!             ↓
//!         用户按 Backspace
//!             ↓
//!         browser.back() 重新加载结果页，新控制器 start() 时恢复焦点
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 三、搜索框（SearchInput）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/model/search.rs 中定义：
//!
//!         SearchInput {
//!             focused: bool,                      // 是否获得焦点
//!             query: String,                      // 输入内容
//!         }
//!
//!     Command::FocusSearchInput 使其获得焦点，并以当前页面的 q 参数预填。
//!
//!
//! Model 层的数据被 Update 层修改，然后被 View 层读取并渲染成 UI。
//!

mod app;
mod browser;
mod search;

pub use app::App;
pub use browser::{Browser, LoadedPage};
pub use search::SearchInput;
