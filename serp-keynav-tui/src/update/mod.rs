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
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态。
//! 是唯一可以修改 Model 的地方。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod navigation;         // 结果页按键与历史
//!         mod search;             // 搜索框
//!
//!         pub async fn update(app: &mut App , msg: AppMessage) {...}
//!
//!
//!     页面加载需要等待导航控制器读取存储，因此 update 是异步的；
//!     主循环在两次渲染之间 await 它。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 结果页按键（navigation.rs）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     NavigationMessage::Key(press)
//!         ↓
//!     controller.handle_key(&mut press)       // 匹配绑定时按键被拦截
//!         ↓
//!     执行返回的 Command：
//!         Open { CurrentContext }  → browser.navigate(href)
//!         Open { NewContext }      → opener.open(url)，状态栏提示
//!         FocusSearchInput         → 搜索框获得焦点
//!         ↓
//!     未被拦截的按键才落回宿主快捷键（q 退出、Backspace / Alt+← 后退）
//!
//!
//! Update 完成后，控制权返回主循环（app.rs）。
//! 下一轮循环时，View 层会读取更新后的 Model 来重新渲染。
//!

mod navigation;
mod search;

use crate::message::AppMessage;
use crate::model::App;

/// 处理应用消息，更新状态
pub async fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::Navigation(nav_msg) => {
            navigation::update(app, nav_msg).await;
        }

        AppMessage::Search(search_msg) => {
            search::update(app, search_msg).await;
        }

        AppMessage::Noop => {}
    }
}
