//! 会话流程集成测试：会话存储 + agent 执行器 + 四个工具

use eduassist::agent::{RESOURCE_FINDER, STUDY_PLANNER, WELLNESS_COACH};
use eduassist::config::AppConfig;
use eduassist::core::{AgentError, SessionStore};
use eduassist::tools::{all_tools, parse_tool_call, ProgressStatus, ToolExecutor};
use serde_json::{json, Value};

#[tokio::test]
async fn test_planner_session_accumulates() {
    let cfg = AppConfig::default();
    let store = SessionStore::new(cfg.session.preferences());
    let sid = store.create("student_1").await;
    let session = store.get("student_1", &sid).await.unwrap();
    let planner = STUDY_PLANNER.executor(&cfg);

    {
        let mut state = session.lock().await;
        planner
            .execute(
                "create_study_schedule",
                json!({
                    "subject": "Data Structures",
                    "hours_per_day": 2,
                    "duration_weeks": 2,
                    "deadline": "2025-12-15"
                }),
                Some(&mut *state),
            )
            .await
            .unwrap();
        planner
            .execute(
                "track_progress",
                json!({"task_id": "t1", "status": "completed"}),
                Some(&mut *state),
            )
            .await
            .unwrap();
        let out = planner
            .execute(
                "track_progress",
                json!({"task_id": "t2", "status": "blocked", "notes": "waiting on lecture"}),
                Some(&mut *state),
            )
            .await
            .unwrap();
        let entry: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(entry["overall_progress"], "62.5%");
    }

    let snap = store.snapshot("student_1", &sid).await.unwrap();
    assert_eq!(snap.study_schedules.len(), 1);
    assert_eq!(snap.study_schedules[0].weekly_plan.len(), 2);
    assert_eq!(snap.progress_tracking.len(), 2);
    assert_eq!(snap.progress_tracking["t2"].status, ProgressStatus::Blocked);
    assert_eq!(snap.overall_progress(), Some(62.5));
}

#[tokio::test]
async fn test_failed_schedule_leaves_session_untouched() {
    let cfg = AppConfig::default();
    let mut state = eduassist::SessionState::new(cfg.session.preferences());
    let planner = STUDY_PLANNER.executor(&cfg);
    let err = planner
        .execute(
            "create_study_schedule",
            json!({"subject": "x", "hours_per_day": 1, "duration_weeks": 0, "deadline": "soon"}),
            Some(&mut state),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, AgentError::ToolExecutionFailed(_)));
    assert!(state.study_schedules.is_empty());
}

#[tokio::test]
async fn test_wellness_history_via_coach() {
    let cfg = AppConfig::default();
    let coach = WELLNESS_COACH.executor(&cfg);
    let mut state = eduassist::SessionState::default();

    let out = coach
        .execute(
            "assess_wellness",
            json!({"stress_level": 8, "sleep_hours": 4, "exercise_frequency": "never"}),
            Some(&mut state),
        )
        .await
        .unwrap();
    let value: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["wellness_score"], 23.0);
    assert_eq!(value["recommendations"].as_array().unwrap().len(), 9);

    let err = coach
        .execute(
            "assess_wellness",
            json!({"stress_level": 3, "sleep_hours": 8, "exercise_frequency": "sometimes"}),
            Some(&mut state),
        )
        .await
        .unwrap_err();
    assert!(err.to_string().contains("sometimes"));
    assert_eq!(state.wellness_history.len(), 1);
}

#[tokio::test]
async fn test_resource_finder_from_tool_call_text() {
    let finder = RESOURCE_FINDER.executor(&AppConfig::default());
    let call = parse_tool_call(
        "```json\n{\"tool\": \"recommend_resources\", \"args\": {\"topic\": \"graphs\", \"difficulty_level\": \"EXPERT\", \"resource_types\": [\"video\", \"quiz\"]}}\n```",
    )
    .unwrap();
    let out = finder.execute(&call.tool, call.args, None).await.unwrap();
    let value: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["difficulty_level"], "intermediate");
    let resources = value["resources"].as_object().unwrap();
    assert_eq!(resources.len(), 1);
    assert!(resources.contains_key("video"));
}

#[test]
fn test_registry_schema_lists_all_tools() {
    let registry = all_tools();
    let executor = ToolExecutor::new(all_tools(), 5);
    assert_eq!(executor.tool_names().len(), 4);

    let schema: Value = serde_json::from_str(&registry.to_schema_json()).unwrap();
    let names: Vec<&str> = schema
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        vec!["assess_wellness", "create_study_schedule", "recommend_resources", "track_progress"]
    );
    for tool in schema.as_array().unwrap() {
        assert!(tool["parameters"]["properties"].is_object());
    }
}
