//! daily_summary 工作流：汇总任务 + 最近对话

use async_trait::async_trait;
use serde_json::Value;

use crate::core::Orchestrator;
use crate::tools::ToolOutput;
use crate::workflow::{Workflow, WorkflowOutput};

pub struct DailySummaryWorkflow;

#[async_trait]
impl Workflow for DailySummaryWorkflow {
    fn name(&self) -> &str {
        "daily_summary"
    }

    fn description(&self) -> &str {
        "Summarizes the given tasks and recalls the most recent conversation turns."
    }

    async fn run(&self, agent: &Orchestrator, args: Value) -> WorkflowOutput {
        let tasks = args.get("tasks").cloned().unwrap_or(Value::Array(vec![]));
        let summary = agent
            .call_tool("summarize_tasks", serde_json::json!({ "tasks": tasks }))
            .await
            .unwrap_or_else(|e| ToolOutput::error(e.to_string()));

        WorkflowOutput::DailySummary {
            summary,
            recent_history: agent.recall_history(),
        }
    }
}
