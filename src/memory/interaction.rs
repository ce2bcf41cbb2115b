//! 对话记忆：最近 N 轮 (user_input, agent_reply)
//!
//! 仅 Chat 路径写入；超出 max_entries 时按插入顺序淘汰最旧一条。
//! add 是「追加 + 条件淘汰」的读改写，故每个实例用一把 Mutex 串行化。

use std::sync::{Mutex, MutexGuard};

use serde::{Deserialize, Serialize};

use crate::core::AgentError;
use crate::memory::BoundedLog;

/// recent_history 默认回看轮数
pub const DEFAULT_RECALL_LIMIT: usize = 5;

/// 单轮对话，创建后不可变
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionRecord {
    #[serde(rename = "user")]
    pub user_input: String,
    #[serde(rename = "agent")]
    pub agent_reply: String,
}

impl InteractionRecord {
    pub fn new(user_input: impl Into<String>, agent_reply: impl Into<String>) -> Self {
        Self {
            user_input: user_input.into(),
            agent_reply: agent_reply.into(),
        }
    }

    /// 渲染为两行：`User: …` / `Agent: …`
    pub fn render(&self) -> String {
        format!("User: {}\nAgent: {}", self.user_input, self.agent_reply)
    }
}

#[derive(Debug)]
pub struct InteractionMemory {
    enabled: bool,
    log: Mutex<BoundedLog<InteractionRecord>>,
}

impl InteractionMemory {
    /// max_entries 为 0 时返回配置错误
    pub fn new(max_entries: usize, enabled: bool) -> Result<Self, AgentError> {
        if max_entries == 0 {
            return Err(AgentError::InvalidMemoryCapacity(max_entries));
        }
        Ok(Self {
            enabled,
            log: Mutex::new(BoundedLog::new(max_entries)),
        })
    }

    fn lock(&self) -> MutexGuard<'_, BoundedLog<InteractionRecord>> {
        // 持锁期间不会 panic，poison 时直接沿用内部数据
        self.log.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// 记录一轮对话；记忆关闭时为 no-op
    pub fn add(&self, user_input: &str, agent_reply: &str) {
        if !self.enabled {
            return;
        }
        let evicted = self
            .lock()
            .push(InteractionRecord::new(user_input, agent_reply));
        if let Some(old) = evicted {
            tracing::debug!(evicted_input = %old.user_input, "memory full, evicted oldest record");
        }
    }

    /// 最近 limit 轮，最新的在最后
    pub fn recent(&self, limit: usize) -> Vec<InteractionRecord> {
        self.lock().last_n(limit).cloned().collect()
    }

    /// 最近 limit 轮的文本形式，轮与轮之间空一行；空记忆返回空串
    pub fn recent_text(&self, limit: usize) -> String {
        self.lock()
            .last_n(limit)
            .map(InteractionRecord::render)
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    pub fn recent_history(&self) -> String {
        self.recent_text(DEFAULT_RECALL_LIMIT)
    }

    /// 完整导出（调试用，只读）
    pub fn export(&self) -> Vec<InteractionRecord> {
        self.lock().iter().cloned().collect()
    }

    /// 无条件清空，不看 enabled
    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn memory(cap: usize) -> InteractionMemory {
        InteractionMemory::new(cap, true).unwrap()
    }

    #[test]
    fn test_zero_capacity_is_config_error() {
        assert!(matches!(
            InteractionMemory::new(0, true),
            Err(AgentError::InvalidMemoryCapacity(0))
        ));
    }

    #[test]
    fn test_fifo_eviction_law() {
        let mem = memory(3);
        for i in 0..10usize {
            mem.add(&format!("q{i}"), &format!("a{i}"));
            assert!(mem.len() <= 3);
            // 保留的恰好是最近 min(i+1, 3) 次插入，顺序不变
            let start = (i + 1).saturating_sub(3);
            let expected: Vec<_> = (start..=i)
                .map(|j| InteractionRecord::new(format!("q{j}"), format!("a{j}")))
                .collect();
            assert_eq!(mem.export(), expected);
        }
    }

    #[test]
    fn test_concurrent_adds_stay_within_capacity() {
        let mem = Arc::new(memory(7));
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let mem = Arc::clone(&mem);
                std::thread::spawn(move || {
                    for i in 0..500 {
                        mem.add(&format!("t{t}-q{i}"), "r");
                        assert!(mem.len() <= 7);
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        assert_eq!(mem.len(), 7);
        assert_eq!(mem.export().len(), 7);
    }

    #[test]
    fn test_export_round_trip() {
        let mem = memory(5);
        mem.add("a", "1");
        mem.add("b", "2");
        mem.add("c", "3");
        let inputs: Vec<_> = mem.export().into_iter().map(|r| r.user_input).collect();
        assert_eq!(inputs, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_recent_is_idempotent() {
        let mem = memory(10);
        for i in 0..7 {
            mem.add(&format!("q{i}"), "r");
        }
        let first = mem.recent(3);
        let second = mem.recent(3);
        assert_eq!(first, second);
        assert_eq!(mem.len(), 7);
        assert_eq!(first.last().unwrap().user_input, "q6");
        assert_eq!(first[0].user_input, "q4");
    }

    #[test]
    fn test_recent_text_format() {
        let mem = memory(10);
        assert_eq!(mem.recent_history(), "");
        mem.add("hi", "hello");
        mem.add("how are you", "fine");
        assert_eq!(
            mem.recent_text(5),
            "User: hi\nAgent: hello\n\nUser: how are you\nAgent: fine"
        );
        assert_eq!(mem.recent_text(1), "User: how are you\nAgent: fine");
    }

    #[test]
    fn test_recent_history_defaults_to_five() {
        let mem = memory(20);
        for i in 0..8 {
            mem.add(&format!("q{i}"), "r");
        }
        let text = mem.recent_history();
        assert_eq!(text.matches("User: ").count(), DEFAULT_RECALL_LIMIT);
        assert!(text.starts_with("User: q3"));
    }

    #[test]
    fn test_disabled_memory_ignores_add_but_clear_works() {
        let mem = InteractionMemory::new(5, false).unwrap();
        mem.add("x", "y");
        assert!(mem.is_empty());

        let mem = memory(5);
        mem.add("x", "y");
        mem.clear();
        assert_eq!(mem.len(), 0);
    }
}
