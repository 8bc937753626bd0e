//! 应用配置：从 config/default.toml 与环境变量加载
//!
//! 加载顺序：先读 TOML 文件，再用环境变量 `EDUASSIST__*` 覆盖（双下划线表示嵌套，如 `EDUASSIST__TOOLS__TOOL_TIMEOUT_SECS=10`）。

use std::path::PathBuf;

use serde::Deserialize;

use crate::core::UserPreferences;

/// 应用配置根（对应 config/default.toml 的顶层）
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub app: AppSection,
    pub tools: ToolsSection,
    pub session: SessionSection,
}

/// [app] 段
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppSection {
    pub name: String,
}

impl Default for AppSection {
    fn default() -> Self {
        Self {
            name: "eduassist_ai".to_string(),
        }
    }
}

/// [tools] 段：单次工具调用超时（秒），只在工具的 await 点生效
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ToolsSection {
    pub tool_timeout_secs: u64,
}

impl Default for ToolsSection {
    fn default() -> Self {
        Self {
            tool_timeout_secs: 5,
        }
    }
}

/// [session] 段：新会话的默认学生偏好
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionSection {
    pub learning_style: String,
    pub difficulty_level: String,
    pub interests: Vec<String>,
}

impl Default for SessionSection {
    fn default() -> Self {
        let prefs = UserPreferences::default();
        Self {
            learning_style: prefs.learning_style,
            difficulty_level: prefs.difficulty_level,
            interests: prefs.interests,
        }
    }
}

impl SessionSection {
    pub fn preferences(&self) -> UserPreferences {
        UserPreferences {
            learning_style: self.learning_style.clone(),
            difficulty_level: self.difficulty_level.clone(),
            interests: self.interests.clone(),
        }
    }
}

/// 从 config 目录加载配置，环境变量 EDUASSIST__* 可覆盖
///
/// 1. 按顺序查找 config/default.toml、../config/default.toml，找到则作为第一源
/// 2. 若传入 config_path 且文件存在，则追加该文件（可覆盖前面的键）
/// 3. 最后叠加环境变量 EDUASSIST__*
pub fn load_config(config_path: Option<PathBuf>) -> Result<AppConfig, config::ConfigError> {
    let mut builder = config::Config::builder();

    for name in ["config/default", "../config/default"] {
        let path = format!("{}.toml", name);
        if std::path::Path::new(&path).exists() {
            builder = builder.add_source(config::File::with_name(name).required(false));
            break;
        }
    }

    if let Some(ref path) = config_path {
        if path.exists() {
            builder = builder.add_source(config::File::from(path.clone()).required(false));
        }
    }

    builder = builder.add_source(
        config::Environment::with_prefix("EDUASSIST")
            .separator("__")
            .try_parsing(true),
    );

    builder.build()?.try_deserialize()
}
