//! email_triage 工作流：对邮件跑规则规划，并把 create_task 动作落实为待办
//!
//! args 即 ParsedEmail（`raw` + `actions`），格式不对时按空邮件处理。

use async_trait::async_trait;
use serde_json::Value;

use crate::core::Orchestrator;
use crate::planner::{self, ParsedEmail, PlannedAction};
use crate::tools::ToolOutput;
use crate::workflow::{ExecutedAction, StepStatus, Workflow, WorkflowOutput};

/// 待办标题：原文第一行非空内容
fn task_title(raw: &str) -> &str {
    raw.lines().map(str::trim).find(|l| !l.is_empty()).unwrap_or("")
}

pub struct EmailTriageWorkflow;

#[async_trait]
impl Workflow for EmailTriageWorkflow {
    fn name(&self) -> &str {
        "email_triage"
    }

    fn description(&self) -> &str {
        "Plans actions for a parsed email and creates tasks for them."
    }

    async fn run(&self, agent: &Orchestrator, args: Value) -> WorkflowOutput {
        let email: ParsedEmail = serde_json::from_value(args).unwrap_or_else(|e| {
            tracing::warn!("email_triage: malformed email arguments ({}), treating as empty", e);
            ParsedEmail::default()
        });
        let plan = planner::plan(&email);
        tracing::info!(notes = %plan.notes, "email_triage planned");

        let mut executed = Vec::with_capacity(plan.actions.len());
        for action in &plan.actions {
            let priority = plan.priorities[action];
            let step = match action {
                PlannedAction::CreateTask => {
                    let output = agent
                        .call_tool(
                            "create_task",
                            serde_json::json!({ "title": task_title(&email.raw) }),
                        )
                        .await
                        .unwrap_or_else(|e| ToolOutput::error(e.to_string()));
                    let status = if output.is_error() {
                        StepStatus::Failed
                    } else {
                        StepStatus::Done
                    };
                    ExecutedAction {
                        action: *action,
                        priority,
                        status,
                        output: Some(output),
                    }
                }
                PlannedAction::ScheduleMeeting => ExecutedAction {
                    action: *action,
                    priority,
                    status: StepStatus::Pending,
                    output: None,
                },
            };
            executed.push(step);
        }

        WorkflowOutput::EmailTriage { plan, executed }
    }
}
