//! 记忆层：有界日志、对话记忆、快照持久化

pub mod bounded;
pub mod interaction;
pub mod persistence;

pub use bounded::BoundedLog;
pub use interaction::{InteractionMemory, InteractionRecord, DEFAULT_RECALL_LIMIT};
pub use persistence::MemorySnapshot;
