//! 模拟 LLM（无需 API）
//!
//! 截取 prompt 前 200 个字符并包装为 `[Simulated LLM Reply]: ...`。

use async_trait::async_trait;

use crate::llm::LlmClient;

const PREVIEW_CHARS: usize = 200;

#[derive(Debug, Default, Clone, Copy)]
pub struct SimulatedLlm;

impl SimulatedLlm {
    pub fn reply_for(prompt: &str) -> String {
        // 按字符截断，避免切在多字节字符中间
        let truncated: String = prompt.chars().take(PREVIEW_CHARS).collect();
        format!("[Simulated LLM Reply]: {}...", truncated)
    }
}

#[async_trait]
impl LlmClient for SimulatedLlm {
    async fn complete(&self, prompt: &str) -> Result<String, String> {
        Ok(Self::reply_for(prompt))
    }
}
