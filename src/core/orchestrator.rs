//! Orchestrator：请求分发与主处理流程
//!
//! process(user_input) 先由 parse_request 分类，再路由到工具 / 工作流 / 模拟回复；
//! 仅 Chat 路径写入对话记忆。任何错误都转为结构化结果返回，process 本身不会失败。

use std::sync::Arc;

use serde_json::Value;

use crate::config::AgentConfig;
use crate::core::{parse_request, AgentError, DispatchError, Request, Response};
use crate::llm::LlmClient;
use crate::memory::InteractionMemory;
use crate::tools::{ToolExecutor, ToolOutput, ToolRegistry, QUERY_ARG};
use crate::workflow::{WorkflowOutput, WorkflowRegistry};

pub struct Orchestrator {
    config: Arc<AgentConfig>,
    executor: ToolExecutor,
    workflows: Arc<WorkflowRegistry>,
    llm: Arc<dyn LlmClient>,
    memory: InteractionMemory,
}

impl Orchestrator {
    /// 注册表与配置由调用方构造后传入；记忆容量非法时返回配置错误
    pub fn new(
        config: Arc<AgentConfig>,
        tools: Arc<ToolRegistry>,
        workflows: Arc<WorkflowRegistry>,
        llm: Arc<dyn LlmClient>,
    ) -> Result<Self, AgentError> {
        config.validate()?;
        let memory = InteractionMemory::new(
            config.memory.max_history_items,
            config.memory.enable_memory,
        )?;
        Ok(Self {
            config,
            executor: ToolExecutor::new(tools),
            workflows,
            llm,
            memory,
        })
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    pub fn memory(&self) -> &InteractionMemory {
        &self.memory
    }

    pub fn tool_names(&self) -> Vec<String> {
        self.executor.tool_names()
    }

    /// (用法行, 描述)，供启动横幅展示
    pub fn tool_descriptions(&self) -> Vec<(String, String)> {
        self.executor.tool_descriptions()
    }

    pub fn workflow_names(&self) -> Vec<String> {
        self.workflows.workflow_names()
    }

    /// 主入口：分类 → 路由 → 响应
    pub async fn process(&self, user_input: &str) -> Response {
        match parse_request(user_input) {
            Request::Workflow { name } => {
                tracing::info!(workflow = %name, "route: workflow");
                let result = self.run_workflow(&name, Value::Object(Default::default())).await;
                Response::Workflow {
                    workflow: name,
                    result: result.into(),
                }
            }
            Request::Tool { name, arg } => {
                tracing::info!(tool = %name, "route: tool");
                let result = self
                    .call_tool(&name, serde_json::json!({ QUERY_ARG: arg }))
                    .await;
                Response::Tool {
                    tool: name,
                    result: result.into(),
                }
            }
            Request::Chat(input) => {
                tracing::info!("route: chat");
                let reply = self.generate_reply(&input).await;
                Response::Chat { reply }
            }
        }
    }

    /// 调用工具；不经过记忆
    pub async fn call_tool(&self, name: &str, args: Value) -> Result<ToolOutput, DispatchError> {
        if !self.config.allow_tools {
            tracing::warn!(tool = %name, "tool call rejected: tools disabled");
            return Err(DispatchError::ToolsDisabled);
        }
        self.executor.execute(name, args).await
    }

    /// 执行工作流；工作流拿到 self，可回调工具与记忆
    pub async fn run_workflow(&self, name: &str, args: Value) -> Result<WorkflowOutput, DispatchError> {
        if !self.config.use_workflows {
            tracing::warn!(workflow = %name, "workflow rejected: workflows disabled");
            return Err(DispatchError::WorkflowsDisabled);
        }
        let Some(workflow) = self.workflows.get(name) else {
            tracing::warn!(workflow = %name, "unknown workflow requested");
            return Err(DispatchError::UnknownWorkflow(name.to_string()));
        };
        Ok(workflow.run(self, args).await)
    }

    /// 生成回复并写入记忆；LLM 失败时返回占位回复且不写入记忆
    async fn generate_reply(&self, user_input: &str) -> String {
        match self.llm.complete(user_input).await {
            Ok(reply) => {
                self.store_memory(user_input, &reply);
                reply
            }
            Err(e) => {
                tracing::warn!("LLM reply failed: {}", e);
                format!("[LLM unavailable]: {}", e)
            }
        }
    }

    /// 记忆开关由 InteractionMemory 自己判断
    pub fn store_memory(&self, user_input: &str, agent_reply: &str) {
        self.memory.add(user_input, agent_reply);
    }

    pub fn recall_history(&self) -> String {
        self.memory.recent_history()
    }
}

/// 供单元测试复用的构造函数
#[cfg(test)]
pub(crate) fn test_orchestrator(config: AgentConfig) -> Orchestrator {
    crate::core::AgentBuilder::new(config)
        .build()
        .expect("default registries are valid")
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct FailingLlm;

    #[async_trait]
    impl LlmClient for FailingLlm {
        async fn complete(&self, _prompt: &str) -> Result<String, String> {
            Err("connection refused".to_string())
        }
    }

    #[tokio::test]
    async fn test_chat_path_persists_raw_input() {
        let agent = test_orchestrator(AgentConfig::default());
        let resp = agent.process("Hello there").await;
        assert_eq!(
            resp,
            Response::Chat {
                reply: "[Simulated LLM Reply]: Hello there...".to_string()
            }
        );
        let records = agent.memory().export();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].user_input, "Hello there");
    }

    #[tokio::test]
    async fn test_tool_path_has_no_memory_side_effect() {
        let agent = test_orchestrator(AgentConfig::default());
        let resp = agent.process("tool: create_task: Buy milk").await;
        match resp {
            Response::Tool { tool, result } => {
                assert_eq!(tool, "create_task");
                assert!(matches!(
                    result.success(),
                    Some(ToolOutput::TaskCreated { message, .. }) if message == "Task added: Buy milk"
                ));
            }
            other => panic!("expected tool response, got {other:?}"),
        }
        assert!(agent.memory().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_tool_and_empty_name() {
        let agent = test_orchestrator(AgentConfig::default());
        let resp = agent.process("tool: nonexistent_tool: x").await;
        assert_eq!(resp.kind(), "tool");
        assert!(resp.error().unwrap().contains("nonexistent_tool"));

        let resp = agent.process("tool:").await;
        assert_eq!(resp.error(), Some("Unknown tool: "));
    }

    #[tokio::test]
    async fn test_unknown_workflow() {
        let agent = test_orchestrator(AgentConfig::default());
        let resp = agent.process("workflow: nope").await;
        assert_eq!(resp.kind(), "workflow");
        assert_eq!(resp.error(), Some("Unknown workflow: nope"));
    }

    #[tokio::test]
    async fn test_capability_gates() {
        let mut cfg = AgentConfig::default();
        cfg.allow_tools = false;
        cfg.use_workflows = false;
        let agent = test_orchestrator(cfg);
        assert_eq!(
            agent.process("tool: create_task: x").await.error(),
            Some("Tools are disabled by configuration")
        );
        assert_eq!(
            agent.process("workflow: daily_summary").await.error(),
            Some("Workflows are disabled by configuration")
        );
    }

    #[tokio::test]
    async fn test_llm_failure_degrades_without_persisting() {
        let cfg = Arc::new(AgentConfig::default());
        let agent = Orchestrator::new(
            cfg,
            Arc::new(ToolRegistry::new()),
            Arc::new(WorkflowRegistry::new()),
            Arc::new(FailingLlm),
        )
        .unwrap();
        let resp = agent.process("hi").await;
        assert_eq!(
            resp,
            Response::Chat {
                reply: "[LLM unavailable]: connection refused".to_string()
            }
        );
        assert!(agent.memory().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_capacity_rejected_at_construction() {
        let mut cfg = AgentConfig::default();
        cfg.memory.max_history_items = 0;
        let result = Orchestrator::new(
            Arc::new(cfg),
            Arc::new(ToolRegistry::new()),
            Arc::new(WorkflowRegistry::new()),
            Arc::new(crate::llm::SimulatedLlm),
        );
        assert!(matches!(result, Err(AgentError::InvalidMemoryCapacity(0))));
    }
}
