pub mod daily_summary;
pub mod email_triage;
pub mod registry;
pub mod types;

pub use daily_summary::DailySummaryWorkflow;
pub use email_triage::EmailTriageWorkflow;
pub use registry::WorkflowRegistry;
pub use types::*;
