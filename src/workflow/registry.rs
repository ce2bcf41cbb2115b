//! 工作流注册表：启动期按名注册，之后只读

use std::collections::HashMap;
use std::sync::Arc;

use crate::core::AgentError;
use crate::workflow::Workflow;

#[derive(Default)]
pub struct WorkflowRegistry {
    workflows: HashMap<String, Arc<dyn Workflow>>,
}

impl WorkflowRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, workflow: impl Workflow + 'static) -> Result<(), AgentError> {
        let name = workflow.name().to_string();
        if self.workflows.contains_key(&name) {
            return Err(AgentError::DuplicateWorkflow(name));
        }
        self.workflows.insert(name, Arc::new(workflow));
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Workflow>> {
        self.workflows.get(name).cloned()
    }

    pub fn workflow_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.workflows.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.workflows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workflows.is_empty()
    }
}
