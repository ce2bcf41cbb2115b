//! LLM 客户端抽象
//!
//! 回复生成只依赖这一个方法，真实的网络客户端可以在不改动 Orchestrator 的前提下替换模拟实现。

use async_trait::async_trait;

#[async_trait]
pub trait LlmClient: Send + Sync {
    /// 由 prompt 生成回复文本；Err 由调用方降级为可见占位回复
    async fn complete(&self, prompt: &str) -> Result<String, String>;
}
