pub mod executor;
pub mod progress;
pub mod registry;
pub mod resources;
pub mod schedule;
pub mod schema;
pub mod wellness;

pub use executor::ToolExecutor;
pub use progress::{track_progress, ProgressEntry, ProgressStatus, ProgressTool, TrackProgressArgs};
pub use registry::{parse_args, Tool, ToolRegistry};
pub use resources::{
    recommend_resources, DifficultyLevel, RecommendResourcesArgs, ResourceRecommendation,
    ResourcesTool,
};
pub use schedule::{
    create_study_schedule, ScheduleTool, StudySchedule, StudyScheduleRequest, WeekPlan,
};
pub use schema::{parse_tool_call, tool_call_schema_json, ToolCall};
pub use wellness::{
    assess_wellness, AssessWellnessArgs, ExerciseFrequency, ExerciseStatus, OverallStatus,
    SleepStatus, StressStatus, WellnessAssessment, WellnessTool,
};

/// 注册全部四个学习工具
pub fn all_tools() -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    registry.register(ScheduleTool);
    registry.register(ProgressTool);
    registry.register(WellnessTool);
    registry.register(ResourcesTool);
    registry
}
