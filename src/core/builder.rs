//! Agent 构建器：统一的初始化逻辑
//!
//! 组装默认工具、默认工作流与回复客户端；CLI 与测试共用同一套注册表构建方式。

use std::sync::Arc;

use crate::config::AgentConfig;
use crate::core::{AgentError, Orchestrator};
use crate::llm::{LlmClient, SimulatedLlm};
use crate::tools::{
    CreateTaskTool, DraftEmailTool, SearchMailTool, SummarizeTasksTool, ToolRegistry,
};
use crate::workflow::{DailySummaryWorkflow, EmailTriageWorkflow, WorkflowRegistry};

pub struct AgentBuilder {
    config: AgentConfig,
    llm: Option<Arc<dyn LlmClient>>,
}

impl AgentBuilder {
    pub fn new(config: AgentConfig) -> Self {
        Self { config, llm: None }
    }

    /// 替换回复客户端（默认 SimulatedLlm）
    pub fn with_llm(mut self, llm: Arc<dyn LlmClient>) -> Self {
        self.llm = Some(llm);
        self
    }

    /// 默认工具：create_task / search_mail / draft_email / summarize_tasks
    pub fn build_tool_registry(&self) -> Result<ToolRegistry, AgentError> {
        let mut tools = ToolRegistry::new();
        tools.register(CreateTaskTool)?;
        tools.register(SearchMailTool)?;
        tools.register(DraftEmailTool)?;
        tools.register(SummarizeTasksTool)?;
        Ok(tools)
    }

    /// 默认工作流：daily_summary / email_triage
    pub fn build_workflow_registry(&self) -> Result<WorkflowRegistry, AgentError> {
        let mut workflows = WorkflowRegistry::new();
        workflows.register(DailySummaryWorkflow)?;
        workflows.register(EmailTriageWorkflow)?;
        Ok(workflows)
    }

    pub fn build(self) -> Result<Orchestrator, AgentError> {
        let tools = self.build_tool_registry()?;
        let workflows = self.build_workflow_registry()?;
        let llm = self.llm.unwrap_or_else(|| Arc::new(SimulatedLlm));
        tracing::info!(
            agent = %self.config.name,
            version = %self.config.version,
            tools = tools.len(),
            workflows = workflows.len(),
            memory_enabled = self.config.memory.enable_memory,
            "building orchestrator"
        );
        Orchestrator::new(
            Arc::new(self.config),
            Arc::new(tools),
            Arc::new(workflows),
            llm,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registries() {
        let agent = AgentBuilder::new(AgentConfig::default()).build().unwrap();
        assert_eq!(
            agent.tool_names(),
            vec!["create_task", "draft_email", "search_mail", "summarize_tasks"]
        );
        assert_eq!(agent.workflow_names(), vec!["daily_summary", "email_triage"]);

        let usages: Vec<String> = agent
            .tool_descriptions()
            .into_iter()
            .map(|(usage, _)| usage)
            .collect();
        assert_eq!(
            usages,
            vec![
                "create_task(title, due_date?)",
                "draft_email(to, subject, message)",
                "search_mail(keyword)",
                "summarize_tasks(tasks[])",
            ]
        );
    }

    #[test]
    fn test_independent_instances() {
        let a = AgentBuilder::new(AgentConfig::default()).build().unwrap();
        let b = AgentBuilder::new(AgentConfig::default()).build().unwrap();
        a.store_memory("q", "r");
        assert_eq!(a.memory().len(), 1);
        assert!(b.memory().is_empty());
    }
}
