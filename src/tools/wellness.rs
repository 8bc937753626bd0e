//! assess_wellness 工具：压力 / 睡眠 / 运动三项自评 → 加权健康分与建议
//!
//! 评分：0.4 × 压力分 + 0.3 × 睡眠分 + 0.3 × 运动分，保留一位小数。
//! 运动频率在入口处校验，未知值直接报错，不参与分类或评分。

use std::str::FromStr;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use schemars::{schema_for, JsonSchema};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::{EduError, SessionState};
use crate::tools::{parse_args, Tool};

const STRESS_ADVICE: [&str; 3] = [
    "Practice deep breathing: 4-7-8 technique (inhale 4s, hold 7s, exhale 8s)",
    "Take regular 5-minute breaks every hour",
    "Consider talking to a counselor or trusted friend",
];

const SLEEP_ADVICE: [&str; 3] = [
    "Establish consistent sleep schedule (same time daily)",
    "Avoid screens 1 hour before bed",
    "Create a relaxing bedtime routine",
];

const EXERCISE_ADVICE: [&str; 3] = [
    "Start with 10-minute daily walks",
    "Try desk stretches between study sessions",
    "Consider joining a sports club or yoga class",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseFrequency {
    Daily,
    Weekly,
    Rarely,
    Never,
}

impl ExerciseFrequency {
    fn score(self) -> f64 {
        match self {
            Self::Daily => 100.0,
            Self::Weekly => 75.0,
            Self::Rarely => 40.0,
            Self::Never => 0.0,
        }
    }

    fn status(self) -> ExerciseStatus {
        match self {
            Self::Daily | Self::Weekly => ExerciseStatus::Good,
            Self::Rarely | Self::Never => ExerciseStatus::NeedsImprovement,
        }
    }
}

impl FromStr for ExerciseFrequency {
    type Err = EduError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            "rarely" => Ok(Self::Rarely),
            "never" => Ok(Self::Never),
            _ => Err(EduError::UnknownExerciseFrequency(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StressStatus {
    Low,
    Moderate,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SleepStatus {
    Good,
    Moderate,
    Poor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseStatus {
    Good,
    NeedsImprovement,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverallStatus {
    Good,
    NeedsAttention,
    Critical,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WellnessAssessment {
    pub wellness_score: f64,
    pub stress_level: i64,
    pub stress_status: StressStatus,
    pub sleep_hours: f64,
    pub sleep_status: SleepStatus,
    pub exercise_frequency: ExerciseFrequency,
    pub exercise_status: ExerciseStatus,
    pub recommendations: Vec<String>,
    pub overall_status: OverallStatus,
    pub assessed_at: DateTime<Utc>,
}

/// 工具参数
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AssessWellnessArgs {
    /// Self-reported stress (1-10 scale)
    pub stress_level: i64,
    /// Average sleep per night in hours
    pub sleep_hours: f64,
    /// Exercise frequency (daily, weekly, rarely, never)
    pub exercise_frequency: String,
}

fn stress_status(stress_level: i64) -> StressStatus {
    if stress_level <= 3 {
        StressStatus::Low
    } else if stress_level <= 6 {
        StressStatus::Moderate
    } else {
        StressStatus::High
    }
}

fn sleep_status(sleep_hours: f64) -> SleepStatus {
    if sleep_hours >= 7.0 {
        SleepStatus::Good
    } else if sleep_hours >= 5.0 {
        SleepStatus::Moderate
    } else {
        SleepStatus::Poor
    }
}

fn overall_status(score: f64) -> OverallStatus {
    if score >= 70.0 {
        OverallStatus::Good
    } else if score >= 50.0 {
        OverallStatus::NeedsAttention
    } else {
        OverallStatus::Critical
    }
}

/// 未取整的加权分；overall_status 用它判断档位
fn raw_wellness_score(stress_level: i64, sleep_hours: f64, exercise: ExerciseFrequency) -> f64 {
    let stress = ((10 - stress_level) * 10) as f64 * 0.4;
    let sleep = (sleep_hours / 8.0 * 100.0) * 0.3;
    let exercise = exercise.score() * 0.3;
    stress + sleep + exercise
}

/// 保留一位小数，恰好落在 .x5 时取偶数
fn round_score(raw: f64) -> f64 {
    (raw * 10.0).round_ties_even() / 10.0
}

/// 按 压力 → 睡眠 → 运动 顺序拼接各自触发的建议块
fn recommendations(stress_level: i64, sleep_hours: f64, exercise: ExerciseFrequency) -> Vec<String> {
    let mut out = Vec::new();
    if stress_level > 6 {
        out.extend(STRESS_ADVICE.iter().map(|s| s.to_string()));
    }
    if sleep_hours < 7.0 {
        out.extend(SLEEP_ADVICE.iter().map(|s| s.to_string()));
    }
    if exercise.status() == ExerciseStatus::NeedsImprovement {
        out.extend(EXERCISE_ADVICE.iter().map(|s| s.to_string()));
    }
    out
}

/// 评估健康状况；先把 stress_level 夹到 [1,10]、sleep_hours 夹到 [0,12]，再分类与评分
pub fn assess_wellness(
    stress_level: i64,
    sleep_hours: f64,
    exercise_frequency: &str,
    state: Option<&mut SessionState>,
) -> Result<WellnessAssessment, EduError> {
    tracing::info!(stress = stress_level, sleep = sleep_hours, "assessing wellness");

    let exercise: ExerciseFrequency = exercise_frequency.parse()?;
    let stress_level = stress_level.clamp(1, 10);
    // f64::max 会吞掉 NaN，保证夹取后仍在 [0,12]
    let sleep_hours = sleep_hours.max(0.0).min(12.0);

    let raw_score = raw_wellness_score(stress_level, sleep_hours, exercise);
    let assessment = WellnessAssessment {
        wellness_score: round_score(raw_score),
        stress_level,
        stress_status: stress_status(stress_level),
        sleep_hours,
        sleep_status: sleep_status(sleep_hours),
        exercise_frequency: exercise,
        exercise_status: exercise.status(),
        recommendations: recommendations(stress_level, sleep_hours, exercise),
        overall_status: overall_status(raw_score),
        assessed_at: Utc::now(),
    };

    if let Some(state) = state {
        state.wellness_history.push(assessment.clone());
    }

    Ok(assessment)
}

/// assess_wellness 工具
pub struct WellnessTool;

#[async_trait]
impl Tool for WellnessTool {
    fn name(&self) -> &str {
        "assess_wellness"
    }

    fn description(&self) -> &str {
        "Assess student wellness and give recommendations. Args: {\"stress_level\": 1-10, \"sleep_hours\", \"exercise_frequency\": daily|weekly|rarely|never}"
    }

    fn parameters_schema(&self) -> Value {
        serde_json::to_value(schema_for!(AssessWellnessArgs)).unwrap_or(Value::Null)
    }

    async fn execute(&self, args: Value, state: Option<&mut SessionState>) -> Result<String, String> {
        let args: AssessWellnessArgs = parse_args(self.name(), args)?;
        let assessment = assess_wellness(
            args.stress_level,
            args.sleep_hours,
            &args.exercise_frequency,
            state,
        )
        .map_err(|e| e.to_string())?;
        serde_json::to_string(&assessment).map_err(|e| e.to_string())
    }
}
