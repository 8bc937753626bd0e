//! 内存会话存储
//!
//! 按 (user_id, session_id) 保存 SessionState；每个会话包一层 Mutex，保证同一会话同时只有一个工具调用在写。

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};

use super::error::AgentError;
use super::state::{SessionState, UserPreferences};

/// 会话共享句柄
pub type SharedSession = Arc<Mutex<SessionState>>;

/// 生成 `student_xxxxxxxx` 形式的用户 ID
pub fn new_user_id() -> String {
    format!("student_{}", short_uuid())
}

/// 生成 `session_xxxxxxxx` 形式的会话 ID
pub fn new_session_id() -> String {
    format!("session_{}", short_uuid())
}

fn short_uuid() -> String {
    uuid::Uuid::new_v4().to_string().chars().take(8).collect()
}

/// 内存会话存储：create / get / snapshot / remove
pub struct SessionStore {
    sessions: RwLock<HashMap<(String, String), SharedSession>>,
    default_preferences: UserPreferences,
}

impl SessionStore {
    pub fn new(default_preferences: UserPreferences) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            default_preferences,
        }
    }

    /// 创建新会话（以默认偏好初始化），返回 session_id
    pub async fn create(&self, user_id: &str) -> String {
        let session_id = new_session_id();
        let state = SessionState::new(self.default_preferences.clone());
        self.sessions.write().await.insert(
            (user_id.to_string(), session_id.clone()),
            Arc::new(Mutex::new(state)),
        );
        tracing::info!(user_id = %user_id, session_id = %session_id, "session created");
        session_id
    }

    pub async fn get(&self, user_id: &str, session_id: &str) -> Result<SharedSession, AgentError> {
        self.sessions
            .read()
            .await
            .get(&(user_id.to_string(), session_id.to_string()))
            .cloned()
            .ok_or_else(|| AgentError::SessionNotFound(session_id.to_string()))
    }

    /// 当前状态的拷贝（用于展示或序列化）
    pub async fn snapshot(&self, user_id: &str, session_id: &str) -> Result<SessionState, AgentError> {
        let session = self.get(user_id, session_id).await?;
        let state = session.lock().await;
        Ok(state.clone())
    }

    pub async fn record_interaction(&self, user_id: &str, session_id: &str) -> Result<u64, AgentError> {
        let session = self.get(user_id, session_id).await?;
        let mut state = session.lock().await;
        state.record_interaction();
        Ok(state.interaction_count)
    }

    pub async fn remove(&self, user_id: &str, session_id: &str) -> bool {
        self.sessions
            .write()
            .await
            .remove(&(user_id.to_string(), session_id.to_string()))
            .is_some()
    }

    pub async fn active_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(UserPreferences::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_formats() {
        let user = new_user_id();
        let session = new_session_id();
        assert!(user.starts_with("student_"));
        assert_eq!(user.len(), "student_".len() + 8);
        assert!(session.starts_with("session_"));
        assert_eq!(session.len(), "session_".len() + 8);
    }

    #[tokio::test]
    async fn test_create_get_remove() {
        let store = SessionStore::default();
        let sid = store.create("student_a").await;
        assert_eq!(store.active_count().await, 1);

        let session = store.get("student_a", &sid).await.unwrap();
        assert_eq!(session.lock().await.interaction_count, 0);

        assert!(store.get("student_b", &sid).await.is_err());
        assert!(store.remove("student_a", &sid).await);
        assert!(!store.remove("student_a", &sid).await);
        assert_eq!(store.active_count().await, 0);
    }

    #[tokio::test]
    async fn test_record_interaction() {
        let store = SessionStore::default();
        let sid = store.create("u").await;
        store.record_interaction("u", &sid).await.unwrap();
        let count = store.record_interaction("u", &sid).await.unwrap();
        assert_eq!(count, 2);
        let snap = store.snapshot("u", &sid).await.unwrap();
        assert_eq!(snap.interaction_count, 2);
    }

    #[tokio::test]
    async fn test_missing_session() {
        let store = SessionStore::default();
        let err = store.record_interaction("u", "session_nope").await.unwrap_err();
        assert!(matches!(err, AgentError::SessionNotFound(_)));
    }
}
