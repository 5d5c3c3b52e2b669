//! 结果页快照
//!
//! 以 JSON 文件保存的搜索结果页，实现 serp-keynav-core 的 ResultPage trait
//!
//! `results` 按页面顺序排列，翻页链接（上一页 / 下一页）排在结果链接之后，
//! 同样可以用导航键选中。
//!
//! 文件格式：
//!     {
//!         "url": "https://www.google.com/search?q=cats",
//!         "results": [{ "title": "...", "href": "...", "snippet": "..." }],
//!         "regions": { "nextPage": { "title": "Next", "href": "/search?q=cats&start=10" } }
//!     }

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serp_keynav_core::{Link, Region, ResultPage};
use thiserror::Error;
use tokio::fs;

/// 内置示例快照
const BUILTIN_SNAPSHOTS: [&str; 3] = [
    include_str!("../../snapshots/cats.json"),
    include_str!("../../snapshots/cats_page2.json"),
    include_str!("../../snapshots/cats_images.json"),
];

/// 快照加载错误
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid snapshot {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// 单个结果页快照
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSnapshot {
    pub url: String,
    #[serde(default)]
    pub results: Vec<Link>,
    #[serde(default)]
    pub regions: HashMap<Region, Link>,
}

impl PageSnapshot {
    /// 没有快照时的空白页
    pub fn empty(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            results: Vec::new(),
            regions: HashMap::new(),
        }
    }
}

impl ResultPage for PageSnapshot {
    fn location(&self) -> &str {
        &self.url
    }

    fn result_links(&self) -> Vec<Link> {
        self.results.clone()
    }

    fn region_link(&self, region: Region) -> Option<Link> {
        self.regions.get(&region).cloned()
    }
}

/// 按地址索引的快照集合
#[derive(Debug, Default, Clone)]
pub struct SnapshotLibrary {
    pages: HashMap<String, PageSnapshot>,
}

impl SnapshotLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// 内置示例快照
    pub fn builtin() -> Self {
        let mut library = Self::new();
        for source in BUILTIN_SNAPSHOTS {
            match serde_json::from_str::<PageSnapshot>(source) {
                Ok(page) => library.insert(page),
                Err(e) => log::error!("Invalid builtin snapshot: {e}"),
            }
        }
        library
    }

    /// 加载目录下所有 `.json` 快照
    pub async fn load_dir(dir: &Path) -> Result<Self, SnapshotError> {
        let io_error = |source| SnapshotError::Io {
            path: dir.to_path_buf(),
            source,
        };

        let mut library = Self::new();
        let mut entries = fs::read_dir(dir).await.map_err(io_error)?;
        while let Some(entry) = entries.next_entry().await.map_err(io_error)? {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let page = Self::load_file(&path).await?;
            log::debug!("Loaded snapshot {} for {}", path.display(), page.url);
            library.insert(page);
        }

        log::info!("Loaded {} snapshots from {}", library.len(), dir.display());
        Ok(library)
    }

    async fn load_file(path: &Path) -> Result<PageSnapshot, SnapshotError> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|source| SnapshotError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        serde_json::from_str(&content).map_err(|source| SnapshotError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn insert(&mut self, page: PageSnapshot) {
        self.pages.insert(page.url.clone(), page);
    }

    /// 获取地址对应的页面；未知地址返回空白页
    pub fn page(&self, url: &str) -> PageSnapshot {
        self.pages
            .get(url)
            .cloned()
            .unwrap_or_else(|| PageSnapshot::empty(url))
    }

    pub fn contains(&self, url: &str) -> bool {
        self.pages.contains_key(url)
    }

    /// 任意一个页面地址（按字典序最小），用作默认起始页
    pub fn first_url(&self) -> Option<&str> {
        self.pages.keys().min().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}
