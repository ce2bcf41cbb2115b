//! Planner：基于规则的动作规划
//!
//! 输入为已解析的邮件（原文 + 已识别的动作提示），输出有序动作列表、每个动作的优先级与说明。
//! 纯函数：无 I/O、无随机性、不修改输入。优先级按整封邮件只算一次，所有动作共享同一值。

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// 已解析邮件；缺失字段按空处理
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParsedEmail {
    pub raw: String,
    /// 上游已识别的动作提示，如 "schedule_meeting"、"create_task"
    pub actions: Vec<String>,
}

impl ParsedEmail {
    pub fn new(raw: impl Into<String>, actions: Vec<String>) -> Self {
        Self {
            raw: raw.into(),
            actions,
        }
    }

    fn has_hint(&self, action: PlannedAction) -> bool {
        self.actions.iter().any(|a| a == action.as_str())
    }
}

/// 规划器能产出的动作
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlannedAction {
    ScheduleMeeting,
    CreateTask,
}

impl PlannedAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlannedAction::ScheduleMeeting => "schedule_meeting",
            PlannedAction::CreateTask => "create_task",
        }
    }
}

impl fmt::Display for PlannedAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// 规划结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Plan {
    pub actions: Vec<PlannedAction>,
    pub priorities: BTreeMap<PlannedAction, Priority>,
    pub notes: String,
}

/// 关键词优先级：urgent/asap/today → high；同时含 please 与 thanks → medium；否则 low
pub fn determine_priority(email: &ParsedEmail) -> Priority {
    let raw = email.raw.to_lowercase();
    if ["urgent", "asap", "today"].iter().any(|k| raw.contains(k)) {
        return Priority::High;
    }
    if raw.contains("please") && raw.contains("thanks") {
        return Priority::Medium;
    }
    Priority::Low
}

/// 生成规划；不会失败
pub fn plan(email: &ParsedEmail) -> Plan {
    let mut actions = Vec::new();
    if email.has_hint(PlannedAction::ScheduleMeeting) {
        actions.push(PlannedAction::ScheduleMeeting);
    }
    if email.has_hint(PlannedAction::CreateTask) {
        actions.push(PlannedAction::CreateTask);
    }

    // 没有显式提示时，礼貌请求视为待办
    if actions.is_empty() {
        let raw = email.raw.to_lowercase();
        if raw.contains("please") || raw.contains("could you") {
            actions.push(PlannedAction::CreateTask);
        }
    }

    let priority = determine_priority(email);
    let priorities = actions.iter().map(|a| (*a, priority)).collect();

    let notes = if actions.is_empty() {
        "No actions detected.".to_string()
    } else {
        let names: Vec<&str> = actions.iter().map(PlannedAction::as_str).collect();
        format!("Rule-based planner produced actions: {}", names.join(", "))
    };

    Plan {
        actions,
        priorities,
        notes,
    }
}
