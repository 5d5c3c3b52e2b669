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
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘等输入事件转换为 Message。
//!
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 宿主快捷键与按键转换
//!
//!         pub use handler::{handle_event , poll_event};
//!
//!
//!     其中有：
//!         · poll_event      事件轮询，受 ~/app.rs 调用
//!
//!         pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
//!
//!             if event::poll(timeout)? {                  // 此处阻塞以等待事件，最长等待 timeout
//!                 Ok(Some(event::read()?))
//!             } else {
//!                 Ok(None)
//!             }
//!         }
//!
//!
//!         · handle_event    事件分发
//!
//!         接收以下 Event 类型：
//!             Event::Key(KeyEvent)                // 键盘事件
//!             Event::Resize(width , height)       // 终端窗口大小发生变化，重绘终端
//!             其他                                 // 暂不处理
//!
//!             当接收到键盘事件时，判断：
//!                 - Ctrl+C 任何时候都退出
//!                 - 搜索框获得焦点时，转为 SearchMessage
//!                 - 否则转为 core 的 KeyPress，包装为 NavigationMessage::Key
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 按键转换
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/event/keymap.rs 中定义：
//!
//!         to_key_press(&KeyEvent) -> Option<KeyPress>
//!
//!             KeyCode::Char(c)        → Key::Char(c)
//!             KeyCode::Down           → Key::Down
//!             KeyModifiers::CONTROL   → Modifiers { ctrl: true, .. }
//!             KeyModifiers::SUPER     → Modifiers { meta: true, .. }
//!
//!         Event 层不判断按键含义：是否为导航按键由 update 层交给
//!         NavigationController 决定。
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
pub use keymap::DefaultKeymap;
