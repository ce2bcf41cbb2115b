//! 核心编排层：错误类型、请求分类、响应结构、构建器、主控分发

pub mod builder;
pub mod error;
pub mod orchestrator;
pub mod request;
pub mod response;

pub use builder::AgentBuilder;
pub use error::{AgentError, DispatchError};
pub use orchestrator::Orchestrator;
pub use request::{parse_request, Request};
pub use response::{Outcome, Response};
