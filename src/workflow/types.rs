//! 工作流类型定义
//!
//! Workflow trait：拿到 Orchestrator 本身与关键字参数，可回调工具、读取记忆；结果为结构化 WorkflowOutput。

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use crate::core::Orchestrator;
use crate::planner::{Plan, PlannedAction, Priority};
use crate::tools::ToolOutput;

#[async_trait]
pub trait Workflow: Send + Sync {
    fn name(&self) -> &str;

    fn description(&self) -> &str;

    /// args 为关键字参数（JSON 对象，`process` 调用时为空对象）
    async fn run(&self, agent: &Orchestrator, args: Value) -> WorkflowOutput;
}

/// 规划动作的执行状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepStatus {
    Done,
    /// 暂无对应工具（如 schedule_meeting），留待人工处理
    Pending,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExecutedAction {
    pub action: PlannedAction,
    pub priority: Priority,
    pub status: StepStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<ToolOutput>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum WorkflowOutput {
    DailySummary {
        summary: ToolOutput,
        recent_history: String,
    },
    EmailTriage {
        plan: Plan,
        executed: Vec<ExecutedAction>,
    },
}
