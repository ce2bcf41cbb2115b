//! summarize_tasks 工具：把任务列表汇总成一句话

use async_trait::async_trait;
use serde_json::Value;

use crate::tools::{ParamType, Tool, ToolOutput};

/// 列表元素可以是 `{"title": ...}` / `{"content": ...}`（任务文件格式）或纯字符串
fn task_title(item: &Value) -> Option<String> {
    match item {
        Value::String(s) => Some(s.clone()),
        Value::Object(map) => map
            .get("title")
            .or_else(|| map.get("content"))
            .and_then(|v| v.as_str())
            .map(str::to_string),
        _ => None,
    }
}

pub struct SummarizeTasksTool;

#[async_trait]
impl Tool for SummarizeTasksTool {
    fn name(&self) -> &str {
        "summarize_tasks"
    }

    fn description(&self) -> &str {
        "Summarizes a list of tasks."
    }

    fn input_spec(&self) -> Vec<(&'static str, ParamType)> {
        vec![("tasks", ParamType::List)]
    }

    async fn execute(&self, args: Value) -> ToolOutput {
        let titles: Vec<String> = args
            .get("tasks")
            .and_then(|v| v.as_array())
            .map(|items| items.iter().filter_map(task_title).collect())
            .unwrap_or_default();

        if titles.is_empty() {
            return ToolOutput::Summary {
                summary: "No tasks available.".to_string(),
            };
        }
        ToolOutput::Summary {
            summary: format!("You have {} tasks: {}", titles.len(), titles.join(", ")),
        }
    }
}
