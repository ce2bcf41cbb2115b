//! 应用配置：从 config/default.toml 与环境变量加载
//!
//! 加载顺序：先读 TOML 文件，再用环境变量 `CONCIERGE__*` 覆盖（双下划线表示嵌套，如 `CONCIERGE__MEMORY__ENABLE_MEMORY=false`）。
//! 构造后只读：由 `Arc<AgentConfig>` 在各组件间共享。

use std::path::PathBuf;

use serde::Deserialize;

use crate::core::AgentError;

/// 配置根（对应 config/default.toml 的顶层）
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    pub name: String,
    pub version: String,
    pub model: ModelSection,
    pub memory: MemorySection,
    pub default_language: String,
    /// 关闭后 `tool:` 请求直接返回结构化错误
    pub allow_tools: bool,
    /// 关闭后 `workflow:` 请求直接返回结构化错误
    pub use_workflows: bool,
    pub max_output_chars: usize,
    pub safety_mode: bool,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            name: "Smart Concierge AI Agent".to_string(),
            version: "1.0.0".to_string(),
            model: ModelSection::default(),
            memory: MemorySection::default(),
            default_language: "English".to_string(),
            allow_tools: true,
            use_workflows: true,
            max_output_chars: 1500,
            safety_mode: true,
        }
    }
}

/// [model] 段：模拟回复路径不使用，但必须能被解析
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ModelSection {
    pub model_name: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub top_p: f32,
    pub frequency_penalty: f32,
    pub presence_penalty: f32,
}

impl Default for ModelSection {
    fn default() -> Self {
        Self {
            model_name: "gpt-4o-mini".to_string(),
            temperature: 0.2,
            max_tokens: 300,
            top_p: 0.9,
            frequency_penalty: 0.0,
            presence_penalty: 0.0,
        }
    }
}

/// [memory] 段：对话记忆开关、容量上限、快照路径
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MemorySection {
    pub enable_memory: bool,
    pub store_email_history: bool,
    /// 对话记忆容量（FIFO 淘汰）；也接受旧键名 max_entries
    #[serde(alias = "max_entries")]
    pub max_history_items: usize,
    pub long_term_memory_path: PathBuf,
}

impl Default for MemorySection {
    fn default() -> Self {
        Self {
            enable_memory: true,
            store_email_history: true,
            max_history_items: 50,
            long_term_memory_path: PathBuf::from("assistant_memory.json"),
        }
    }
}

impl AgentConfig {
    /// 构造期校验：容量为 0 视为配置错误（允许中止启动）
    pub fn validate(&self) -> Result<(), AgentError> {
        if self.memory.max_history_items == 0 {
            return Err(AgentError::InvalidMemoryCapacity(
                self.memory.max_history_items,
            ));
        }
        Ok(())
    }
}

/// 从 config 目录加载配置，环境变量 CONCIERGE__* 可覆盖
///
/// 1. 按顺序查找 config/default.toml、../config/default.toml、default.toml，找到则作为第一源
/// 2. 若传入 config_path 且文件存在，则追加该文件（可覆盖前面的键）
/// 3. 最后叠加环境变量 CONCIERGE__*（双下划线表示嵌套键）
pub fn load_config(config_path: Option<PathBuf>) -> Result<AgentConfig, config::ConfigError> {
    let mut builder = config::Config::builder();

    let default_names = ["config/default", "../config/default", "default"];
    for name in default_names {
        let path = format!("{}.toml", name);
        if std::path::Path::new(&path).exists() {
            builder = builder.add_source(config::File::with_name(name).required(false));
            break;
        }
    }

    if let Some(ref path) = config_path {
        if path.exists() {
            builder = builder.add_source(config::File::from(path.clone()).required(false));
        }
    }

    builder = builder.add_source(
        config::Environment::with_prefix("CONCIERGE")
            .separator("__")
            .try_parsing(true),
    );

    let c = builder.build()?;
    c.try_deserialize()
}

/// 加载并校验；配置文件错误与容量非法都属于启动期错误
pub fn load_validated(config_path: Option<PathBuf>) -> Result<AgentConfig, AgentError> {
    let cfg = load_config(config_path)?;
    cfg.validate()?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_match_reference_values() {
        let cfg = AgentConfig::default();
        assert_eq!(cfg.name, "Smart Concierge AI Agent");
        assert_eq!(cfg.model.model_name, "gpt-4o-mini");
        assert_eq!(cfg.model.max_tokens, 300);
        assert!(cfg.memory.enable_memory);
        assert_eq!(cfg.memory.max_history_items, 50);
        assert_eq!(cfg.default_language, "English");
        assert!(cfg.allow_tools && cfg.use_workflows && cfg.safety_mode);
        assert_eq!(cfg.max_output_chars, 1500);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let mut cfg = AgentConfig::default();
        cfg.memory.max_history_items = 0;
        assert!(matches!(
            cfg.validate(),
            Err(AgentError::InvalidMemoryCapacity(0))
        ));
    }

    #[test]
    fn test_max_entries_alias() {
        let cfg: AgentConfig = config::Config::builder()
            .add_source(config::File::from_str(
                "[memory]\nmax_entries = 7",
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(cfg.memory.max_history_items, 7);
        assert!(cfg.memory.enable_memory);
    }

    #[test]
    fn test_load_explicit_file_overrides() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "allow_tools = false\n[memory]\nenable_memory = false\nmax_history_items = 3\n[model]\ntemperature = 0.7"
        )
        .unwrap();

        let cfg = load_config(Some(file.path().to_path_buf())).unwrap();
        assert!(!cfg.allow_tools);
        assert!(!cfg.memory.enable_memory);
        assert_eq!(cfg.memory.max_history_items, 3);
        assert!((cfg.model.temperature - 0.7).abs() < f32::EPSILON);
        // 未写的键保持默认
        assert!(cfg.use_workflows);
    }

    #[test]
    fn test_load_validated_rejects_zero_capacity() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[memory]\nmax_history_items = 0").unwrap();
        assert!(matches!(
            load_validated(Some(file.path().to_path_buf())),
            Err(AgentError::InvalidMemoryCapacity(0))
        ));
    }
}
