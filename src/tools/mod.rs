pub mod create_task;
pub mod draft_email;
pub mod executor;
pub mod output;
pub mod registry;
pub mod search_mail;
pub mod summarize_tasks;

pub use create_task::CreateTaskTool;
pub use draft_email::DraftEmailTool;
pub use executor::ToolExecutor;
pub use output::{EmailDraft, MailMessage, TaskRecord, ToolOutput};
pub use registry::{ParamType, Tool, ToolRegistry, QUERY_ARG};
pub use search_mail::SearchMailTool;
pub use summarize_tasks::SummarizeTasksTool;
