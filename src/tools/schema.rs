//! 工具调用格式：`{"tool": "...", "args": {...}}`
//!
//! tool_call_schema_json 生成可拼入 agent 指令的 JSON Schema；parse_tool_call 从一段文本中提取并解析工具调用。

use schemars::{schema_for, JsonSchema};
use serde::{Deserialize, Serialize};

use crate::core::AgentError;

/// 单次工具调用
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ToolCall {
    /// 工具名，如 create_study_schedule、track_progress
    pub tool: String,
    /// 工具参数对象，依工具不同而不同
    #[serde(default = "empty_args")]
    pub args: serde_json::Value,
}

fn empty_args() -> serde_json::Value {
    serde_json::Value::Object(serde_json::Map::new())
}

/// 返回工具调用的 JSON Schema 字符串
pub fn tool_call_schema_json() -> String {
    let schema = schema_for!(ToolCall);
    serde_json::to_string_pretty(&schema).unwrap_or_else(|_| String::new())
}

/// 解析工具调用：支持 ```json ... ``` 代码块或裸 JSON；tool 为空视为解析失败
pub fn parse_tool_call(text: &str) -> Result<ToolCall, AgentError> {
    let trimmed = text.trim();

    let json_str = if let Some(start) = trimmed.find("```json") {
        let rest = &trimmed[start + 7..];
        rest.find("```")
            .map(|end| rest[..end].trim())
            .unwrap_or(rest.trim())
    } else if let (Some(start), Some(end)) = (trimmed.find('{'), trimmed.rfind('}')) {
        &trimmed[start..=end]
    } else {
        return Err(AgentError::JsonParseError(format!("no JSON object in: {trimmed}")));
    };

    let call: ToolCall = serde_json::from_str(json_str)
        .map_err(|e| AgentError::JsonParseError(format!("{}: {}", e, json_str)))?;

    if call.tool.trim().is_empty() {
        return Err(AgentError::JsonParseError("empty tool name".to_string()));
    }
    Ok(call)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_json() {
        let call = parse_tool_call(r#"{"tool": "track_progress", "args": {"task_id": "t1", "status": "completed"}}"#)
            .unwrap();
        assert_eq!(call.tool, "track_progress");
        assert_eq!(call.args["task_id"], "t1");
    }

    #[test]
    fn test_parse_fenced_block() {
        let text = "Calling the tool:\n```json\n{\"tool\": \"assess_wellness\", \"args\": {\"stress_level\": 3}}\n```";
        let call = parse_tool_call(text).unwrap();
        assert_eq!(call.tool, "assess_wellness");
        assert_eq!(call.args["stress_level"], 3);
    }

    #[test]
    fn test_missing_args_defaults_to_empty_object() {
        let call = parse_tool_call(r#"{"tool": "recommend_resources"}"#).unwrap();
        assert!(call.args.as_object().unwrap().is_empty());
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(parse_tool_call("hello"), Err(AgentError::JsonParseError(_))));
        assert!(matches!(parse_tool_call("{not json}"), Err(AgentError::JsonParseError(_))));
        assert!(matches!(parse_tool_call(r#"{"tool": ""}"#), Err(AgentError::JsonParseError(_))));
    }

    #[test]
    fn test_schema_mentions_fields() {
        let schema = tool_call_schema_json();
        assert!(schema.contains("\"tool\""));
        assert!(schema.contains("\"args\""));
    }
}
