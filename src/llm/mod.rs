//! LLM 层：回复生成抽象与模拟实现

pub mod mock;
pub mod traits;

pub use mock::SimulatedLlm;
pub use traits::LlmClient;
