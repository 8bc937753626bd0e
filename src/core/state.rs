//! 会话状态：学习计划、进度跟踪、健康记录
//!
//! SessionState 由调用方持有并以 `&mut` 传入各工具；工具只做条件追加/更新，从不创建或销毁它。

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::tools::{ProgressEntry, StudySchedule, WellnessAssessment};

/// 学生偏好（新会话的初始值来自配置 [session] 段）
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserPreferences {
    pub learning_style: String,
    pub difficulty_level: String,
    pub interests: Vec<String>,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            learning_style: "visual_and_textual".to_string(),
            difficulty_level: "intermediate".to_string(),
            interests: vec!["computer_science".to_string(), "mathematics".to_string()],
        }
    }
}

/// 单个会话累积的状态
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SessionState {
    pub user_preferences: UserPreferences,
    pub interaction_count: u64,
    /// 只追加
    pub study_schedules: Vec<StudySchedule>,
    /// 以 task_id 为键，同键覆盖，不保留历史
    pub progress_tracking: BTreeMap<String, ProgressEntry>,
    /// 只追加，不去重
    pub wellness_history: Vec<WellnessAssessment>,
}

impl SessionState {
    pub fn new(user_preferences: UserPreferences) -> Self {
        Self {
            user_preferences,
            ..Self::default()
        }
    }

    /// 所有已跟踪任务 completion_percentage 的算术平均；无任务时为 None
    pub fn overall_progress(&self) -> Option<f64> {
        if self.progress_tracking.is_empty() {
            return None;
        }
        let total: u32 = self
            .progress_tracking
            .values()
            .map(|e| e.completion_percentage)
            .sum();
        Some(f64::from(total) / self.progress_tracking.len() as f64)
    }

    pub fn record_interaction(&mut self) {
        self.interaction_count += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::track_progress;

    #[test]
    fn test_overall_progress_empty() {
        let state = SessionState::default();
        assert_eq!(state.overall_progress(), None);
    }

    #[test]
    fn test_overall_progress_mean() {
        let mut state = SessionState::default();
        track_progress("a", "completed", None, Some(&mut state));
        track_progress("b", "not_started", None, Some(&mut state));
        track_progress("c", "in_progress", None, Some(&mut state));
        assert_eq!(state.overall_progress(), Some(50.0));
    }

    #[test]
    fn test_new_session_defaults() {
        let mut state = SessionState::new(UserPreferences::default());
        assert_eq!(state.interaction_count, 0);
        assert!(state.study_schedules.is_empty());
        assert_eq!(state.user_preferences.difficulty_level, "intermediate");
        state.record_interaction();
        state.record_interaction();
        assert_eq!(state.interaction_count, 2);
    }
}
