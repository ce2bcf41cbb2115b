//! 工具注册表
//!
//! 所有工具实现 Tool trait（name / description / input_spec / execute），由 ToolRegistry 按名注册与查找。
//! 注册只发生在启动期；同名重复注册视为配置错误。

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::core::AgentError;
use crate::tools::ToolOutput;

/// Dispatcher 传入自由文本参数时使用的参数名
pub const QUERY_ARG: &str = "query";

/// 参数类型标记
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamType {
    String,
    OptionalString,
    List,
}

impl ParamType {
    /// 用法行里的后缀：可选参数带 `?`，列表带 `[]`
    fn suffix(&self) -> &'static str {
        match self {
            ParamType::String => "",
            ParamType::OptionalString => "?",
            ParamType::List => "[]",
        }
    }
}

/// 工具 trait：名称、描述、参数表、异步执行（args 为 JSON，失败体现在返回值里）
#[async_trait]
pub trait Tool: Send + Sync {
    fn name(&self) -> &str;

    fn description(&self) -> &str;

    /// 参数名 -> 类型标记
    fn input_spec(&self) -> Vec<(&'static str, ParamType)>;

    /// 由 input_spec 推出的用法行，如 `create_task(title, due_date?)`
    fn usage(&self) -> String {
        let params: Vec<String> = self
            .input_spec()
            .iter()
            .map(|(name, ty)| format!("{}{}", name, ty.suffix()))
            .collect();
        format!("{}({})", self.name(), params.join(", "))
    }

    async fn execute(&self, args: Value) -> ToolOutput;
}

/// 取字符串参数（trim 后为空视为缺失）
pub(crate) fn str_arg<'a>(args: &'a Value, key: &str) -> Option<&'a str> {
    args.get(key)
        .and_then(|v| v.as_str())
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

/// 取主参数，缺失时回退到 Dispatcher 传入的 `query`
pub(crate) fn primary_arg<'a>(args: &'a Value, key: &str) -> Option<&'a str> {
    str_arg(args, key).or_else(|| str_arg(args, QUERY_ARG))
}

/// 工具注册表：按名称存储 Arc<dyn Tool>
#[derive(Default)]
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, tool: impl Tool + 'static) -> Result<(), AgentError> {
        let name = tool.name().to_string();
        if self.tools.contains_key(&name) {
            return Err(AgentError::DuplicateTool(name));
        }
        self.tools.insert(name, Arc::new(tool));
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.get(name).cloned()
    }

    /// 名称列表（排序，便于展示与测试）
    pub fn tool_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.tools.keys().cloned().collect();
        names.sort();
        names
    }

    /// 返回 (用法行, description) 列表，按工具名排序
    pub fn tool_descriptions(&self) -> Vec<(String, String)> {
        self.tool_names()
            .iter()
            .filter_map(|name| self.tools.get(name))
            .map(|tool| (tool.usage(), tool.description().to_string()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}
