//! 核心层：错误类型、会话状态、会话存储

pub mod error;
pub mod session_store;
pub mod state;

pub use error::{AgentError, EduError};
pub use session_store::{new_session_id, new_user_id, SessionStore, SharedSession};
pub use state::{SessionState, UserPreferences};
