//! 测试辅助模块

use std::io;
use std::sync::{Arc, Mutex};

use serp_keynav_core::InMemoryKeyValueStore;

use crate::backend::{SnapshotLibrary, UrlOpener};
use crate::model::{App, Browser};

pub const CATS_URL: &str = "https://www.google.com/search?q=cats";

/// 记录打开过的链接
#[derive(Default)]
pub struct RecordingOpener {
    pub opened: Mutex<Vec<String>>,
}

impl RecordingOpener {
    pub fn opened(&self) -> Vec<String> {
        self.opened.lock().map(|v| v.clone()).unwrap_or_default()
    }
}

impl UrlOpener for RecordingOpener {
    fn open(&self, url: &str) -> io::Result<()> {
        if let Ok(mut opened) = self.opened.lock() {
            opened.push(url.to_string());
        }
        Ok(())
    }
}

/// 使用内置快照和内存存储、停在猫搜索结果页的浏览器
pub async fn test_browser() -> Browser {
    Browser::new(
        SnapshotLibrary::builtin(),
        Arc::new(InMemoryKeyValueStore::new()),
        Arc::new(InMemoryKeyValueStore::new()),
        CATS_URL,
    )
    .await
}

pub async fn test_app() -> App {
    App::new(test_browser().await, Arc::new(RecordingOpener::default()))
}

/// 同 `test_app`，并返回打开记录
pub async fn test_app_with_opener() -> (App, Arc<RecordingOpener>) {
    let opener = Arc::new(RecordingOpener::default());
    let app = App::new(test_browser().await, opener.clone());
    (app, opener)
}
