//! create_study_schedule 工具：根据每日时长与周数生成多周学习计划
//!
//! 前半程（week <= duration_weeks / 2）为核心概念，后半程为练习与复习；
//! 传入会话时把整份计划追加到 study_schedules。

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use schemars::{schema_for, JsonSchema};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::{EduError, SessionState};
use crate::tools::{parse_args, Tool};

pub const STUDY_TECHNIQUES: [&str; 3] = [
    "Pomodoro Technique: 25 min study + 5 min break",
    "Active Recall: Test yourself regularly",
    "Spaced Repetition: Review previous topics weekly",
];

pub const MAX_HOURS_PER_DAY: i64 = 24;

/// 十年
pub const MAX_DURATION_WEEKS: i64 = 520;

/// 学习计划请求（同时作为工具参数）
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct StudyScheduleRequest {
    /// Subject or topic to study
    pub subject: String,
    /// Available study hours per day
    pub hours_per_day: i64,
    /// Study plan duration in weeks
    pub duration_weeks: i64,
    /// Target completion date (YYYY-MM-DD), stored verbatim
    pub deadline: String,
}

impl StudyScheduleRequest {
    /// hours_per_day × duration_weeks × 7；溢出时为 None
    pub fn total_study_hours(&self) -> Option<i64> {
        self.hours_per_day
            .checked_mul(self.duration_weeks)?
            .checked_mul(7)
    }

    /// 周数须在 1..=MAX_DURATION_WEEKS，每日学时不超过 MAX_HOURS_PER_DAY；返回总学时
    fn validate(&self) -> Result<i64, EduError> {
        if self.duration_weeks <= 0 {
            return Err(EduError::InvalidDuration(self.duration_weeks));
        }
        if self.duration_weeks > MAX_DURATION_WEEKS {
            return Err(EduError::DurationTooLarge {
                got: self.duration_weeks,
                max: MAX_DURATION_WEEKS,
            });
        }
        let invalid_hours = EduError::InvalidHours {
            got: self.hours_per_day,
            max: MAX_HOURS_PER_DAY,
        };
        if self.hours_per_day > MAX_HOURS_PER_DAY {
            return Err(invalid_hours);
        }
        self.total_study_hours().ok_or(invalid_hours)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekPlan {
    pub week: i64,
    pub focus: String,
    pub daily_hours: i64,
    pub goals: Vec<String>,
    pub deliverables: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudySchedule {
    pub subject: String,
    pub total_weeks: i64,
    pub hours_per_day: i64,
    pub total_study_hours: i64,
    pub deadline: String,
    pub weekly_plan: Vec<WeekPlan>,
    pub study_techniques: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// 每周主题数：max(2, floor(total_hours / (duration_weeks * 5)))
fn topics_per_week(total_hours: i64, duration_weeks: i64) -> i64 {
    total_hours.div_euclid(duration_weeks * 5).max(2)
}

fn week_plan(week: i64, request: &StudyScheduleRequest, topics: i64) -> WeekPlan {
    let focus = if week <= request.duration_weeks / 2 {
        format!("Week {week} - Core Concepts")
    } else {
        format!("Week {week} - Practice & Review")
    };
    WeekPlan {
        week,
        focus,
        daily_hours: request.hours_per_day,
        goals: (1..=topics)
            .map(|i| format!("Master fundamental concept {i}"))
            .collect(),
        deliverables: format!("Complete {topics} topics with practice problems"),
    }
}

/// 生成学习计划；参数越界（含 duration_weeks <= 0）时返回错误，且不触碰会话
pub fn create_study_schedule(
    request: &StudyScheduleRequest,
    state: Option<&mut SessionState>,
) -> Result<StudySchedule, EduError> {
    tracing::info!(subject = %request.subject, "creating study schedule");

    let total_hours = request.validate()?;
    let topics = topics_per_week(total_hours, request.duration_weeks);
    let weekly_plan: Vec<WeekPlan> = (1..=request.duration_weeks)
        .map(|week| week_plan(week, request, topics))
        .collect();

    let schedule = StudySchedule {
        subject: request.subject.clone(),
        total_weeks: request.duration_weeks,
        hours_per_day: request.hours_per_day,
        total_study_hours: total_hours,
        deadline: request.deadline.clone(),
        weekly_plan,
        study_techniques: STUDY_TECHNIQUES.iter().map(|s| s.to_string()).collect(),
        created_at: Utc::now(),
    };

    if let Some(state) = state {
        state.study_schedules.push(schedule.clone());
        tracing::info!("study schedule saved to session state");
    }

    Ok(schedule)
}

/// create_study_schedule 工具
pub struct ScheduleTool;

#[async_trait]
impl Tool for ScheduleTool {
    fn name(&self) -> &str {
        "create_study_schedule"
    }

    fn description(&self) -> &str {
        "Generate a personalized multi-week study schedule. Args: {\"subject\", \"hours_per_day\", \"duration_weeks\", \"deadline\"}"
    }

    fn parameters_schema(&self) -> Value {
        serde_json::to_value(schema_for!(StudyScheduleRequest)).unwrap_or(Value::Null)
    }

    async fn execute(&self, args: Value, state: Option<&mut SessionState>) -> Result<String, String> {
        let request: StudyScheduleRequest = parse_args(self.name(), args)?;
        let schedule = create_study_schedule(&request, state).map_err(|e| e.to_string())?;
        serde_json::to_string(&schedule).map_err(|e| e.to_string())
    }
}
