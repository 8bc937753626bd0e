//! 工具执行器
//!
//! 持有 ToolRegistry 与全局超时，execute(tool_name, args, state) 在超时内调用 registry.execute，
//! 超时或失败时转为 AgentError（ToolTimeout / ToolExecutionFailed）；每次调用输出结构化审计日志（JSON）。
//!
//! 超时只在工具的 await 点生效：内置的四个工具是同步计算，执行中不会让出，超时对它们不起作用；
//! 需要 I/O 或外部调用的工具才会被截断。

use std::time::{Duration, Instant};

use tokio::time::timeout;

use crate::core::{AgentError, SessionState};
use crate::tools::ToolRegistry;

/// 工具执行器：对每次调用施加超时，并将结果映射为 AgentError
pub struct ToolExecutor {
    registry: ToolRegistry,
    timeout: Duration,
}

impl ToolExecutor {
    pub fn new(registry: ToolRegistry, timeout_secs: u64) -> Self {
        Self {
            registry,
            timeout: Duration::from_secs(timeout_secs),
        }
    }

    /// 执行指定工具；未注册返回 UnknownTool，args 非对象返回 InvalidArguments
    pub async fn execute(
        &self,
        tool_name: &str,
        args: serde_json::Value,
        state: Option<&mut SessionState>,
    ) -> Result<String, AgentError> {
        if !self.registry.contains(tool_name) {
            return Err(AgentError::UnknownTool(tool_name.to_string()));
        }
        if !args.is_object() {
            return Err(AgentError::InvalidArguments {
                tool: tool_name.to_string(),
                reason: "args must be a JSON object".to_string(),
            });
        }

        let start = Instant::now();
        let args_preview = args_preview(&args);
        let with_session = state.is_some();
        let result = timeout(self.timeout, self.registry.execute(tool_name, args, state)).await;

        let (ok, outcome): (bool, &str) = match &result {
            Ok(Ok(_)) => (true, "ok"),
            Ok(Err(_)) => (false, "error"),
            Err(_) => (false, "timeout"),
        };
        let duration_ms = start.elapsed().as_millis() as u64;
        let audit = serde_json::json!({
            "event": "tool_audit",
            "tool": tool_name,
            "ok": ok,
            "outcome": outcome,
            "with_session": with_session,
            "duration_ms": duration_ms,
            "args_preview": args_preview,
        });
        tracing::info!(audit = %audit.to_string(), "tool");

        match result {
            Ok(Ok(content)) => Ok(content),
            Ok(Err(e)) => Err(AgentError::ToolExecutionFailed(e)),
            Err(_) => Err(AgentError::ToolTimeout(tool_name.to_string())),
        }
    }

    /// 返回 (name, description) 列表，启动时写入日志
    pub fn tool_descriptions(&self) -> Vec<(String, String)> {
        self.registry.tool_descriptions()
    }

    pub fn tool_names(&self) -> Vec<String> {
        self.registry.tool_names()
    }
}

fn args_preview(args: &serde_json::Value) -> String {
    let s = args.to_string();
    if s.chars().count() > 200 {
        format!("{}...", s.chars().take(200).collect::<String>())
    } else {
        s
    }
}
