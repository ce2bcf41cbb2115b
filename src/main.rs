//! Concierge - Rust 个人助理编排器
//!
//! 入口：初始化日志、加载配置与任务清单、恢复记忆快照、构建编排器，然后逐行处理标准输入。

use anyhow::Context;
use concierge::{
    config::load_validated, core::AgentBuilder, memory::MemorySnapshot, observability,
    tasks::{load_tasks, DEFAULT_TASKS_PATH},
};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

const EXIT_WORDS: [&str; 4] = ["exit", "quit", "q", "stop"];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    observability::init();

    let config_path = std::env::args().nth(1).map(std::path::PathBuf::from);
    let cfg = load_validated(config_path).context("Failed to load config")?;

    let snapshot = MemorySnapshot::new(&cfg.memory.long_term_memory_path);
    let persist_memory = cfg.memory.enable_memory;

    let agent = AgentBuilder::new(cfg)
        .build()
        .context("Failed to build orchestrator")?;

    if persist_memory {
        match snapshot.restore_into(agent.memory()) {
            Ok(n) => tracing::info!(records = n, path = %snapshot.path().display(), "memory restored"),
            Err(e) => tracing::warn!("memory snapshot ignored ({:#})", e),
        }
    }

    let mut stdout = tokio::io::stdout();
    let mut banner = String::from("Loaded tasks:\n");
    for entry in load_tasks(DEFAULT_TASKS_PATH) {
        banner.push_str(&format!(" - {}\n", entry));
    }
    if agent.config().allow_tools {
        banner.push_str("\nTools:\n");
        for (usage, description) in agent.tool_descriptions() {
            banner.push_str(&format!(" - {}: {}\n", usage, description));
        }
    }
    if agent.config().use_workflows {
        banner.push_str(&format!("Workflows: {}\n", agent.workflow_names().join(", ")));
    }
    banner.push_str("\nAgent is ready. Try `tool: search_mail: invoice`, `workflow: daily_summary` or just chat.\n");
    stdout.write_all(banner.as_bytes()).await?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        stdout.write_all(b"\nYou: ").await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if EXIT_WORDS.contains(&input.to_lowercase().as_str()) {
            break;
        }

        let response = agent.process(input).await;
        let rendered = serde_json::to_string_pretty(&response)?;
        stdout.write_all(format!("{}\n", rendered).as_bytes()).await?;
    }

    if persist_memory {
        snapshot
            .save(agent.memory())
            .with_context(|| format!("Failed to save memory to {}", snapshot.path().display()))?;
    }
    stdout.write_all(b"Goodbye!\n").await?;
    Ok(())
}
