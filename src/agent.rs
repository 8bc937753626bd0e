//! Agent 名册
//!
//! 一个 coordinator 加四个专职 agent；每个 agent 只能调用名册中列出的工具。
//! 路由由托管模型决定，这里只负责「谁能调用什么」的接线。

use crate::config::AppConfig;
use crate::tools::{ProgressTool, ResourcesTool, ScheduleTool, ToolExecutor, ToolRegistry, WellnessTool};

/// 单个 agent 的静态描述
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgentProfile {
    pub name: &'static str,
    pub description: &'static str,
    pub tools: &'static [&'static str],
    pub sub_agents: &'static [&'static str],
}

pub const LEARNING_ASSISTANT: AgentProfile = AgentProfile {
    name: "learning_assistant_agent",
    description: "Explains concepts, generates practice problems and gives step-by-step guidance.",
    tools: &[],
    sub_agents: &[],
};

pub const STUDY_PLANNER: AgentProfile = AgentProfile {
    name: "study_planner_agent",
    description: "Creates personalized study schedules and tracks learning progress.",
    tools: &["create_study_schedule", "track_progress"],
    sub_agents: &[],
};

pub const WELLNESS_COACH: AgentProfile = AgentProfile {
    name: "wellness_coach_agent",
    description: "Supports student wellbeing with stress, sleep and exercise guidance.",
    tools: &["assess_wellness"],
    sub_agents: &[],
};

pub const RESOURCE_FINDER: AgentProfile = AgentProfile {
    name: "resource_finder_agent",
    description: "Finds and curates educational resources by level and type.",
    tools: &["recommend_resources"],
    sub_agents: &[],
};

pub const COORDINATOR: AgentProfile = AgentProfile {
    name: "coordinator_agent",
    description: "Root agent that routes student requests to the specialist agents.",
    tools: &[],
    sub_agents: &[
        LEARNING_ASSISTANT.name,
        STUDY_PLANNER.name,
        WELLNESS_COACH.name,
        RESOURCE_FINDER.name,
    ],
};

/// 全部 agent，coordinator 在首位
pub fn roster() -> [AgentProfile; 5] {
    [COORDINATOR, LEARNING_ASSISTANT, STUDY_PLANNER, WELLNESS_COACH, RESOURCE_FINDER]
}

pub fn find_agent(name: &str) -> Option<AgentProfile> {
    roster().into_iter().find(|a| a.name == name)
}

impl AgentProfile {
    /// 只含该 agent 可调用工具的注册表
    pub fn registry(&self) -> ToolRegistry {
        let mut registry = ToolRegistry::new();
        for tool in self.tools {
            match *tool {
                "create_study_schedule" => registry.register(ScheduleTool),
                "track_progress" => registry.register(ProgressTool),
                "assess_wellness" => registry.register(WellnessTool),
                "recommend_resources" => registry.register(ResourcesTool),
                other => tracing::warn!(agent = %self.name, tool = %other, "unknown tool in roster"),
            }
        }
        registry
    }

    /// 按配置中的超时构建该 agent 的工具执行器
    pub fn executor(&self, cfg: &AppConfig) -> ToolExecutor {
        ToolExecutor::new(self.registry(), cfg.tools.tool_timeout_secs)
    }
}
