//! search_mail 工具：按主题关键词检索邮件（内置模拟邮箱，不访问真实邮件服务）

use async_trait::async_trait;
use serde_json::Value;

use crate::tools::registry::primary_arg;
use crate::tools::{MailMessage, ParamType, Tool, ToolOutput};

fn mailbox() -> Vec<MailMessage> {
    vec![
        MailMessage {
            id: 1,
            subject: "Meeting Tomorrow".to_string(),
            body: "Don't forget our call.".to_string(),
        },
        MailMessage {
            id: 2,
            subject: "Invoice Reminder".to_string(),
            body: "Payment pending.".to_string(),
        },
    ]
}

pub struct SearchMailTool;

#[async_trait]
impl Tool for SearchMailTool {
    fn name(&self) -> &str {
        "search_mail"
    }

    fn description(&self) -> &str {
        "Search emails by subject keyword."
    }

    fn input_spec(&self) -> Vec<(&'static str, ParamType)> {
        vec![("keyword", ParamType::String)]
    }

    async fn execute(&self, args: Value) -> ToolOutput {
        // 空关键词匹配全部邮件
        let keyword = primary_arg(&args, "keyword").unwrap_or("").to_lowercase();
        let matches: Vec<MailMessage> = mailbox()
            .into_iter()
            .filter(|m| m.subject.to_lowercase().contains(&keyword))
            .collect();
        ToolOutput::MailSearch {
            count: matches.len(),
            matches,
        }
    }
}
