//! draft_email 工具：生成邮件草稿（不发送）

use async_trait::async_trait;
use serde_json::Value;

use crate::tools::registry::{primary_arg, str_arg};
use crate::tools::{EmailDraft, ParamType, Tool, ToolOutput};

pub struct DraftEmailTool;

#[async_trait]
impl Tool for DraftEmailTool {
    fn name(&self) -> &str {
        "draft_email"
    }

    fn description(&self) -> &str {
        "Drafts an email for the user."
    }

    fn input_spec(&self) -> Vec<(&'static str, ParamType)> {
        vec![
            ("to", ParamType::String),
            ("subject", ParamType::String),
            ("message", ParamType::String),
        ]
    }

    async fn execute(&self, args: Value) -> ToolOutput {
        let Some(to) = str_arg(&args, "to") else {
            return ToolOutput::error("draft_email: 'to' is required");
        };
        ToolOutput::Draft(EmailDraft {
            to: to.to_string(),
            subject: str_arg(&args, "subject").unwrap_or("").to_string(),
            body: primary_arg(&args, "message").unwrap_or("").to_string(),
            status: "draft_created".to_string(),
        })
    }
}
