//! 错误类型
//!
//! EduError 为四个学习工具的领域错误；AgentError 为工具调度层（注册表、执行器、会话存储）的错误。

use thiserror::Error;

/// 工具计算过程中的领域错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EduError {
    /// 周数必须为正（否则每周主题数的计算会除以零）
    #[error("Invalid duration: duration_weeks must be positive, got {0}")]
    InvalidDuration(i64),

    #[error("Duration too large: duration_weeks must be at most {max}, got {got}")]
    DurationTooLarge { got: i64, max: i64 },

    /// 超过每日上限，或总学时计算溢出
    #[error("Invalid hours: hours_per_day must be at most {max}, got {got}")]
    InvalidHours { got: i64, max: i64 },

    #[error("Unknown exercise frequency: {0} (expected daily, weekly, rarely or never)")]
    UnknownExerciseFrequency(String),
}

/// 工具调度过程中可能出现的错误
#[derive(Error, Debug)]
pub enum AgentError {
    #[error("JSON parse error: {0}")]
    JsonParseError(String),

    #[error("Invalid arguments for {tool}: {reason}")]
    InvalidArguments { tool: String, reason: String },

    #[error("Tool execution failed: {0}")]
    ToolExecutionFailed(String),

    #[error("Tool timeout: {0}")]
    ToolTimeout(String),

    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Session not found: {0}")]
    SessionNotFound(String),

    #[error("Config error: {0}")]
    ConfigError(String),
}
