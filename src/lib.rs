//! EduAssist - 学习助手工具箱
//!
//! 模块划分：
//! - **agent**: Agent 名册（coordinator + 四个专职 agent 及其可调用工具）
//! - **config**: 应用配置加载（TOML + 环境变量）
//! - **core**: 错误类型、会话状态、内存会话存储
//! - **observability**: 日志初始化
//! - **tools**: 学习计划 / 进度跟踪 / 健康评估 / 资源推荐 四个工具，注册表与执行器

pub mod agent;
pub mod config;
pub mod core;
pub mod observability;
pub mod tools;

pub use crate::core::{AgentError, EduError, SessionState, SessionStore};
pub use tools::{
    assess_wellness, create_study_schedule, recommend_resources, track_progress, ToolExecutor,
};
