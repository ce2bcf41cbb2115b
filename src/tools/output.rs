//! 工具返回值：按工具族区分的结构化结果
//!
//! 序列化为无标签 JSON，与各工具约定的字段形状一致（status / matches+count / summary ...）。
//! 工具失败不抛错，而是返回 `Error { status: "error", message }`。

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskRecord {
    pub id: String,
    pub title: String,
    pub due_date: Option<String>,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MailMessage {
    pub id: u32,
    pub subject: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailDraft {
    pub to: String,
    pub subject: String,
    pub body: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ToolOutput {
    TaskCreated {
        status: String,
        message: String,
        task: TaskRecord,
    },
    MailSearch {
        matches: Vec<MailMessage>,
        count: usize,
    },
    Draft(EmailDraft),
    Summary {
        summary: String,
    },
    Error {
        status: String,
        message: String,
    },
}

impl ToolOutput {
    pub fn error(message: impl Into<String>) -> Self {
        ToolOutput::Error {
            status: "error".to_string(),
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ToolOutput::Error { .. })
    }
}
