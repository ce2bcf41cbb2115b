//! 启动期任务清单：读取 `{"tasks": [{type, content, priority}, ...]}`
//!
//! 文件缺失或损坏不会中止启动，而是得到单元素的错误列表。

use std::fmt;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

pub const DEFAULT_TASKS_PATH: &str = "data/tasks.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedTask {
    #[serde(rename = "type")]
    pub kind: String,
    pub content: String,
    pub priority: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeedEntry {
    Task(FeedTask),
    Error { error: String },
}

impl fmt::Display for FeedEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedEntry::Task(t) => write!(f, "[{}] {} (priority: {})", t.kind, t.content, t.priority),
            FeedEntry::Error { error } => write!(f, "[error] {}", error),
        }
    }
}

#[derive(Deserialize)]
struct TaskFeed {
    tasks: Vec<FeedTask>,
}

fn read_feed(path: &Path) -> anyhow::Result<Vec<FeedTask>> {
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read {}", path.display()))?;
    let feed: TaskFeed = serde_json::from_str(&data)?;
    Ok(feed.tasks)
}

/// 加载任务清单；失败时返回 `[{"error": "Failed to load tasks: ..."}]`
pub fn load_tasks(path: impl AsRef<Path>) -> Vec<FeedEntry> {
    match read_feed(path.as_ref()) {
        Ok(tasks) => tasks.into_iter().map(FeedEntry::Task).collect(),
        Err(e) => {
            tracing::warn!("task feed unavailable: {:#}", e);
            vec![FeedEntry::Error {
                error: format!("Failed to load tasks: {:#}", e),
            }]
        }
    }
}
