//! Concierge - Rust 个人助理编排器
//!
//! 模块划分：
//! - **config**: 应用配置加载（TOML + 环境变量）
//! - **core**: 请求分类、分发编排、响应结构、错误类型
//! - **llm**: 回复生成抽象与模拟实现
//! - **memory**: 有界对话记忆与快照
//! - **planner**: 基于规则的邮件动作规划
//! - **tasks**: 启动期任务清单加载
//! - **tools**: 工具注册表、执行器与内置工具（create_task / search_mail / draft_email / summarize_tasks）
//! - **workflow**: 工作流注册表与内置工作流（daily_summary / email_triage）

pub mod config;
pub mod core;
pub mod llm;
pub mod memory;
pub mod observability;
pub mod planner;
pub mod tasks;
pub mod tools;
pub mod workflow;

pub use crate::config::{load_config, AgentConfig};
pub use crate::core::{AgentBuilder, Orchestrator, Response};
