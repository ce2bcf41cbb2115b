//! 错误类型
//!
//! AgentError：构造期错误（重复注册、容量非法、配置文件错误），允许中止启动；
//! DispatchError：单次请求内的错误，只会被转成结构化的 `{"error": ...}`，绝不向外传播。

use thiserror::Error;

/// 构造期错误
#[derive(Error, Debug)]
pub enum AgentError {
    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("Duplicate tool: {0}")]
    DuplicateTool(String),

    #[error("Duplicate workflow: {0}")]
    DuplicateWorkflow(String),

    #[error("Invalid memory capacity: {0} (must be positive)")]
    InvalidMemoryCapacity(usize),
}

impl From<config::ConfigError> for AgentError {
    fn from(e: config::ConfigError) -> Self {
        AgentError::ConfigError(e.to_string())
    }
}

/// 请求级错误（非致命）
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Unknown workflow: {0}")]
    UnknownWorkflow(String),

    #[error("Tools are disabled by configuration")]
    ToolsDisabled,

    #[error("Workflows are disabled by configuration")]
    WorkflowsDisabled,
}
