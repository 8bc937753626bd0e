//! EduAssist 批处理入口
//!
//! 从 stdin 逐行读取工具调用（`{"tool": "...", "args": {...}}`），在同一个新会话上依次执行并输出结果，
//! 最后输出会话状态 JSON。可选参数为 agent 名（如 study_planner_agent），只开放该 agent 的工具。
//!
//! 启动: echo '{"tool": "track_progress", "args": {"task_id": "t1", "status": "completed"}}' | cargo run

use anyhow::Context;
use eduassist::agent::find_agent;
use eduassist::config::load_config;
use eduassist::core::{new_user_id, SessionStore};
use eduassist::observability;
use eduassist::tools::{all_tools, parse_tool_call, ToolExecutor};
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    observability::init();

    let cfg = load_config(None).context("Failed to load config")?;

    let executor = match std::env::args().nth(1) {
        Some(name) => find_agent(&name)
            .with_context(|| format!("Unknown agent: {name}"))?
            .executor(&cfg),
        None => ToolExecutor::new(all_tools(), cfg.tools.tool_timeout_secs),
    };
    tracing::info!(app = %cfg.app.name, tools = ?executor.tool_names(), "eduassist started");
    for (name, description) in executor.tool_descriptions() {
        tracing::debug!(tool = %name, %description, "tool available");
    }

    let store = SessionStore::new(cfg.session.preferences());
    let user_id = new_user_id();
    let session_id = store.create(&user_id).await;
    let session = store.get(&user_id, &session_id).await?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("Failed to read stdin")? {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let call = match parse_tool_call(line) {
            Ok(call) => call,
            Err(e) => {
                tracing::warn!(error = %e, "skipping malformed tool call");
                println!("{}", serde_json::json!({ "error": e.to_string() }));
                continue;
            }
        };

        let result = {
            let mut state = session.lock().await;
            executor
                .execute(&call.tool, call.args, Some(&mut *state))
                .await
        };
        store.record_interaction(&user_id, &session_id).await?;

        match result {
            Ok(output) => println!("{output}"),
            Err(e) => {
                tracing::error!(tool = %call.tool, error = %e, "tool call failed");
                println!("{}", serde_json::json!({ "tool": call.tool, "error": e.to_string() }));
            }
        }
    }

    let snapshot = store.snapshot(&user_id, &session_id).await?;
    println!(
        "{}",
        serde_json::to_string_pretty(&snapshot).context("Failed to serialize session")?
    );

    Ok(())
}
