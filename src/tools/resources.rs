//! recommend_resources 工具：按难度与资源类型从静态资源表中挑选推荐
//!
//! 纯函数，不读写会话。

use std::fmt;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use schemars::{schema_for, JsonSchema};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::core::SessionState;
use crate::tools::{parse_args, Tool};

type LevelTable = [(&'static str, [&'static str; 3]); 5];

static BEGINNER: LevelTable = [
    ("video", ["YouTube tutorials", "Khan Academy videos", "Coursera beginner courses"]),
    ("article", ["GeeksforGeeks basics", "TutorialsPoint introductions", "W3Schools guides"]),
    ("tutorial", ["freeCodeCamp", "Codecademy interactive lessons", "Udemy beginner tracks"]),
    ("book", ["Head First series", "For Dummies series", "Visual QuickStart guides"]),
    ("course", ["Coursera Specializations", "edX MicroMasters", "Udacity Nanodegrees"]),
];

static INTERMEDIATE: LevelTable = [
    ("video", ["MIT OpenCourseWare", "Stanford Online", "Pluralsight intermediate"]),
    ("article", ["Medium deep-dives", "Dev.to technical posts", "HackerNoon guides"]),
    ("tutorial", ["Real Python", "The Odin Project", "FullStackOpen"]),
    ("book", ["O'Reilly books", "Apress technical books", "Manning Publications"]),
    ("course", ["Advanced Coursera courses", "LinkedIn Learning paths", "Frontend Masters"]),
];

static ADVANCED: LevelTable = [
    ("video", ["Conference talks", "Research presentations", "Advanced Udemy courses"]),
    ("article", ["Research papers", "IEEE publications", "ACM Digital Library"]),
    ("tutorial", ["Official documentation", "GitHub advanced guides", "Awesome lists"]),
    ("book", ["Academic textbooks", "Domain-specific monographs", "Research compilations"]),
    ("course", ["Graduate-level MOOCs", "Specialized certifications", "Expert masterclasses"]),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DifficultyLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl DifficultyLevel {
    /// 大小写不敏感；无法识别时回落到 intermediate
    pub fn from_input(level: &str) -> Self {
        match level.to_lowercase().as_str() {
            "beginner" => Self::Beginner,
            "advanced" => Self::Advanced,
            _ => Self::Intermediate,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }

    fn table(self) -> &'static LevelTable {
        match self {
            Self::Beginner => &BEGINNER,
            Self::Intermediate => &INTERMEDIATE,
            Self::Advanced => &ADVANCED,
        }
    }

    /// 某难度下某资源类型的固定清单；类型不在表中时为 None
    pub fn canned(self, resource_type: &str) -> Option<&'static [&'static str; 3]> {
        self.table()
            .iter()
            .find(|(kind, _)| *kind == resource_type)
            .map(|(_, list)| list)
    }
}

impl fmt::Display for DifficultyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceRecommendation {
    pub topic: String,
    pub difficulty_level: DifficultyLevel,
    /// 按请求顺序排列；重复请求的类型保留首次出现的位置
    pub resources: Map<String, Value>,
    pub search_queries: Vec<String>,
    pub generated_at: DateTime<Utc>,
}

/// 工具参数
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct RecommendResourcesArgs {
    /// Learning topic
    pub topic: String,
    /// beginner, intermediate, advanced
    pub difficulty_level: String,
    /// Resource types (video, article, tutorial, book, course)
    #[serde(default)]
    pub resource_types: Vec<String>,
}

pub fn recommend_resources(
    topic: &str,
    difficulty_level: &str,
    resource_types: &[String],
) -> ResourceRecommendation {
    tracing::info!(topic = %topic, level = %difficulty_level, "recommending resources");

    let level = DifficultyLevel::from_input(difficulty_level);
    let mut resources = Map::new();
    for kind in resource_types {
        if let Some(list) = level.canned(kind) {
            resources.insert(kind.clone(), Value::from(list.to_vec()));
        }
    }

    ResourceRecommendation {
        topic: topic.to_string(),
        difficulty_level: level,
        resources,
        search_queries: vec![
            format!("{topic} {level} tutorial"),
            format!("best {topic} resources for {level}"),
            format!("{topic} {level} projects"),
        ],
        generated_at: Utc::now(),
    }
}

/// recommend_resources 工具
pub struct ResourcesTool;

#[async_trait]
impl Tool for ResourcesTool {
    fn name(&self) -> &str {
        "recommend_resources"
    }

    fn description(&self) -> &str {
        "Recommend curated learning resources. Args: {\"topic\", \"difficulty_level\": beginner|intermediate|advanced, \"resource_types\": [video, article, tutorial, book, course]}"
    }

    fn parameters_schema(&self) -> Value {
        serde_json::to_value(schema_for!(RecommendResourcesArgs)).unwrap_or(Value::Null)
    }

    async fn execute(&self, args: Value, _state: Option<&mut SessionState>) -> Result<String, String> {
        let args: RecommendResourcesArgs = parse_args(self.name(), args)?;
        let rec = recommend_resources(&args.topic, &args.difficulty_level, &args.resource_types);
        serde_json::to_string(&rec).map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn types(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_unknown_level_and_type() {
        let rec = recommend_resources("graphs", "EXPERT", &types(&["video", "quiz"]));
        assert_eq!(rec.difficulty_level, DifficultyLevel::Intermediate);
        assert_eq!(rec.resources.len(), 1);
        assert_eq!(
            rec.resources["video"],
            serde_json::json!(["MIT OpenCourseWare", "Stanford Online", "Pluralsight intermediate"])
        );
        assert_eq!(rec.search_queries.len(), 3);
        for q in &rec.search_queries {
            assert!(q.contains("graphs"));
            assert!(q.contains("intermediate"));
        }
    }

    #[test]
    fn test_level_case_insensitive() {
        let rec = recommend_resources("rust", "Advanced", &types(&["book"]));
        assert_eq!(rec.difficulty_level, DifficultyLevel::Advanced);
        assert_eq!(rec.resources["book"][0], "Academic textbooks");
        assert_eq!(rec.search_queries[1], "best rust resources for advanced");
    }

    #[test]
    fn test_empty_inputs_are_degenerate_not_errors() {
        let rec = recommend_resources("", "beginner", &[]);
        assert!(rec.resources.is_empty());
        assert_eq!(rec.search_queries[0], " beginner tutorial");
    }

    #[test]
    fn test_all_types() {
        let rec = recommend_resources(
            "python",
            "beginner",
            &types(&["video", "article", "tutorial", "book", "course"]),
        );
        assert_eq!(rec.resources.len(), 5);
        assert_eq!(rec.resources["tutorial"][0], "freeCodeCamp");
    }

    #[test]
    fn test_resources_keep_request_order() {
        let rec = recommend_resources(
            "python",
            "beginner",
            &types(&["video", "course", "quiz", "article", "course"]),
        );
        let keys: Vec<&str> = rec.resources.keys().map(|k| k.as_str()).collect();
        assert_eq!(keys, vec!["video", "course", "article"]);

        let json = serde_json::to_string(&rec).unwrap();
        let video = json.find("\"video\"").unwrap();
        let course = json.find("\"course\"").unwrap();
        let article = json.find("\"article\"").unwrap();
        assert!(video < course && course < article);
    }

    #[test]
    fn test_idempotent_except_timestamp() {
        let req = types(&["article", "course"]);
        let mut a = serde_json::to_value(recommend_resources("sql", "beginner", &req)).unwrap();
        let mut b = serde_json::to_value(recommend_resources("sql", "beginner", &req)).unwrap();
        a.as_object_mut().unwrap().remove("generated_at");
        b.as_object_mut().unwrap().remove("generated_at");
        assert_eq!(a.to_string(), b.to_string());
    }

    #[tokio::test]
    async fn test_tool_ignores_session() {
        let mut state = SessionState::default();
        let args = serde_json::json!({"topic": "graphs", "difficulty_level": "beginner", "resource_types": ["video"]});
        let out = ResourcesTool.execute(args, Some(&mut state)).await.unwrap();
        let value: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["difficulty_level"], "beginner");
        assert!(state.study_schedules.is_empty());
        assert!(state.progress_tracking.is_empty());
        assert!(state.wellness_history.is_empty());
    }
}
