//! track_progress 工具：记录任务状态并重算整体完成度

use std::fmt;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use schemars::{schema_for, JsonSchema};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::SessionState;
use crate::tools::{parse_args, Tool};

/// 任务状态；无法识别的输入一律视为 InProgress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressStatus {
    NotStarted,
    InProgress,
    Completed,
    Blocked,
}

impl ProgressStatus {
    /// 精确匹配四个合法值，其余（含大小写不同）降级为 in_progress
    pub fn from_input(status: &str) -> Self {
        match status {
            "not_started" => Self::NotStarted,
            "in_progress" => Self::InProgress,
            "completed" => Self::Completed,
            "blocked" => Self::Blocked,
            _ => Self::InProgress,
        }
    }

    pub fn completion_percentage(self) -> u32 {
        match self {
            Self::NotStarted => 0,
            Self::InProgress => 50,
            Self::Completed => 100,
            Self::Blocked => 25,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::NotStarted => "not_started",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Blocked => "blocked",
        }
    }
}

impl fmt::Display for ProgressStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressEntry {
    pub task_id: String,
    pub status: ProgressStatus,
    pub notes: String,
    pub timestamp: DateTime<Utc>,
    pub completion_percentage: u32,
    /// 仅在传入会话时出现于返回值，不写入 progress_tracking
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overall_progress: Option<String>,
}

/// 工具参数
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct TrackProgressArgs {
    /// Identifier for the task/topic
    pub task_id: String,
    /// Progress status (not_started, in_progress, completed, blocked)
    pub status: String,
    /// Optional progress notes
    #[serde(default)]
    pub notes: Option<String>,
}

/// 记录进度；传入会话时按 task_id 覆盖写入，并在返回值上附加整体进度（如 "62.5%"）
pub fn track_progress(
    task_id: &str,
    status: &str,
    notes: Option<&str>,
    state: Option<&mut SessionState>,
) -> ProgressEntry {
    tracing::info!(task_id = %task_id, "tracking progress");

    let status = ProgressStatus::from_input(status);
    let mut entry = ProgressEntry {
        task_id: task_id.to_string(),
        status,
        notes: notes.unwrap_or_default().to_string(),
        timestamp: Utc::now(),
        completion_percentage: status.completion_percentage(),
        overall_progress: None,
    };

    if let Some(state) = state {
        state
            .progress_tracking
            .insert(task_id.to_string(), entry.clone());
        entry.overall_progress = state
            .overall_progress()
            .map(|avg| format!("{avg:.1}%"));
    }

    entry
}

/// track_progress 工具
pub struct ProgressTool;

#[async_trait]
impl Tool for ProgressTool {
    fn name(&self) -> &str {
        "track_progress"
    }

    fn description(&self) -> &str {
        "Track learning progress for a task. Args: {\"task_id\", \"status\": not_started|in_progress|completed|blocked, \"notes\"?}"
    }

    fn parameters_schema(&self) -> Value {
        serde_json::to_value(schema_for!(TrackProgressArgs)).unwrap_or(Value::Null)
    }

    async fn execute(&self, args: Value, state: Option<&mut SessionState>) -> Result<String, String> {
        let args: TrackProgressArgs = parse_args(self.name(), args)?;
        let entry = track_progress(&args.task_id, &args.status, args.notes.as_deref(), state);
        serde_json::to_string(&entry).map_err(|e| e.to_string())
    }
}
