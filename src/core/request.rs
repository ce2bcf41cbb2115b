//! 请求分类：纯词法规则，把原始输入解析为 Chat / Tool / Workflow
//!
//! 优先级固定：`workflow:` 先于 `tool:`，其余一律走 Chat。前缀比较忽略大小写，且在 trim 之后进行。

const WORKFLOW_PREFIX: &str = "workflow:";
const TOOL_PREFIX: &str = "tool:";

/// 分类结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// 普通对话，携带原始输入
    Chat(String),
    /// `tool: <name>[: <arg>]`
    Tool { name: String, arg: String },
    /// `workflow: <name>`
    Workflow { name: String },
}

fn has_prefix(input: &str, prefix: &str) -> bool {
    input
        .get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

/// 解析用户输入；不会失败。`tool:` 后没有名称时得到空名称，由查找环节报告 Unknown tool
pub fn parse_request(user_input: &str) -> Request {
    let trimmed = user_input.trim();

    if has_prefix(trimmed, WORKFLOW_PREFIX) {
        let name = trimmed[WORKFLOW_PREFIX.len()..].trim().to_string();
        return Request::Workflow { name };
    }

    if has_prefix(trimmed, TOOL_PREFIX) {
        // 最多三段：前缀 / 工具名 / 自由文本参数（参数中可以再含冒号）
        let mut parts = trimmed.splitn(3, ':').skip(1);
        let name = parts.next().unwrap_or("").trim().to_string();
        let arg = parts.next().unwrap_or("").trim().to_string();
        return Request::Tool { name, arg };
    }

    Request::Chat(user_input.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workflow_prefix() {
        assert_eq!(
            parse_request("workflow: daily_summary"),
            Request::Workflow {
                name: "daily_summary".to_string()
            }
        );
    }

    #[test]
    fn test_tool_with_argument() {
        assert_eq!(
            parse_request("tool: create_task: Buy milk"),
            Request::Tool {
                name: "create_task".to_string(),
                arg: "Buy milk".to_string()
            }
        );
    }

    #[test]
    fn test_tool_argument_keeps_inner_colons() {
        assert_eq!(
            parse_request("tool:search_mail: re: invoice"),
            Request::Tool {
                name: "search_mail".to_string(),
                arg: "re: invoice".to_string()
            }
        );
    }

    #[test]
    fn test_tool_without_argument() {
        assert_eq!(
            parse_request("  TOOL: search_mail  "),
            Request::Tool {
                name: "search_mail".to_string(),
                arg: String::new()
            }
        );
    }

    #[test]
    fn test_empty_tool_name() {
        assert_eq!(
            parse_request("tool:"),
            Request::Tool {
                name: String::new(),
                arg: String::new()
            }
        );
    }

    #[test]
    fn test_case_insensitive_and_trimmed() {
        assert!(matches!(
            parse_request("   WorkFlow:email_triage"),
            Request::Workflow { name } if name == "email_triage"
        ));
    }

    #[test]
    fn test_chat_keeps_raw_input() {
        assert_eq!(
            parse_request("Hello there"),
            Request::Chat("Hello there".to_string())
        );
        // 前缀出现在中间不算
        assert!(matches!(parse_request("run tool: x"), Request::Chat(_)));
        // 多字节输入不会因切片越界而 panic
        assert!(matches!(parse_request("工具：创建"), Request::Chat(_)));
    }
}
