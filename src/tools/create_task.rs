//! create_task 工具：创建个人待办（可选截止日期）

use async_trait::async_trait;
use serde_json::Value;

use crate::tools::registry::{primary_arg, str_arg};
use crate::tools::{ParamType, TaskRecord, Tool, ToolOutput};

pub struct CreateTaskTool;

#[async_trait]
impl Tool for CreateTaskTool {
    fn name(&self) -> &str {
        "create_task"
    }

    fn description(&self) -> &str {
        "Creates a personal task with optional due date."
    }

    fn input_spec(&self) -> Vec<(&'static str, ParamType)> {
        vec![
            ("title", ParamType::String),
            ("due_date", ParamType::OptionalString),
        ]
    }

    async fn execute(&self, args: Value) -> ToolOutput {
        let Some(title) = primary_arg(&args, "title") else {
            return ToolOutput::error("create_task: 'title' is required");
        };
        let task = TaskRecord {
            id: uuid::Uuid::new_v4().to_string(),
            title: title.to_string(),
            due_date: str_arg(&args, "due_date").map(str::to_string),
            created_at: chrono::Local::now().to_rfc3339(),
        };
        ToolOutput::TaskCreated {
            status: "success".to_string(),
            message: format!("Task added: {}", title),
            task,
        }
    }
}
