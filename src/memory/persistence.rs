//! 对话记忆快照
//!
//! 将 InteractionMemory 的导出写入/从 JSON 文件加载，用于跨进程恢复（可选使用）。
//! 加载时逐条走 add，因此仍受容量约束，只保留最新的记录。

use std::path::{Path, PathBuf};

use crate::memory::{InteractionMemory, InteractionRecord};

/// 单文件 JSON 快照：`[{"user": ..., "agent": ...}, ...]`
#[derive(Debug)]
pub struct MemorySnapshot {
    path: PathBuf,
}

impl MemorySnapshot {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 读取快照；文件不存在时返回空 Vec
    pub fn load(&self) -> anyhow::Result<Vec<InteractionRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let data = std::fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&data)?)
    }

    /// 读取快照并回放进 memory，返回读到的条数
    pub fn restore_into(&self, memory: &InteractionMemory) -> anyhow::Result<usize> {
        let records = self.load()?;
        for r in &records {
            memory.add(&r.user_input, &r.agent_reply);
        }
        Ok(records.len())
    }

    /// 写入快照；父目录不存在时自动创建
    pub fn save(&self, memory: &InteractionMemory) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let records = memory.export();
        std::fs::write(&self.path, serde_json::to_string_pretty(&records)?)?;
        Ok(())
    }
}
