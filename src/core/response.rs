//! 响应：按 `type` 打标签的结构化结果
//!
//! `{"type":"chat","reply":...}` / `{"type":"tool","tool":...,"result":...}` /
//! `{"type":"workflow","workflow":...,"result":...}`。请求级错误落在 result 的 `error` 字段里。

use serde::Serialize;

use crate::core::DispatchError;
use crate::tools::ToolOutput;
use crate::workflow::WorkflowOutput;

/// 调用结果：成功时原样输出，失败时为 `{"error": "..."}`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Outcome<T> {
    Success(T),
    Failure { error: String },
}

impl<T> Outcome<T> {
    pub fn error(&self) -> Option<&str> {
        match self {
            Outcome::Failure { error } => Some(error),
            Outcome::Success(_) => None,
        }
    }

    pub fn success(&self) -> Option<&T> {
        match self {
            Outcome::Success(v) => Some(v),
            Outcome::Failure { .. } => None,
        }
    }
}

impl<T> From<Result<T, DispatchError>> for Outcome<T> {
    fn from(r: Result<T, DispatchError>) -> Self {
        match r {
            Ok(v) => Outcome::Success(v),
            Err(e) => Outcome::Failure {
                error: e.to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Response {
    Chat {
        reply: String,
    },
    Tool {
        tool: String,
        result: Outcome<ToolOutput>,
    },
    Workflow {
        workflow: String,
        result: Outcome<WorkflowOutput>,
    },
}

impl Response {
    /// `chat` / `tool` / `workflow`
    pub fn kind(&self) -> &'static str {
        match self {
            Response::Chat { .. } => "chat",
            Response::Tool { .. } => "tool",
            Response::Workflow { .. } => "workflow",
        }
    }

    /// Tool / Workflow 路径上的错误信息
    pub fn error(&self) -> Option<&str> {
        match self {
            Response::Chat { .. } => None,
            Response::Tool { result, .. } => result.error(),
            Response::Workflow { result, .. } => result.error(),
        }
    }
}
