//! Error types for Herald
//!
//! 모든 에러를 중앙에서 관리

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Herald 에러 타입
#[derive(Error, Debug)]
pub enum Error {
    // ========================================================================
    // 이벤트 관련
    // ========================================================================
    /// No constructor is registered for the event name.
    #[error("Event type not found: {0}")]
    EventNotFound(String),

    #[error("Invalid event argument #{index}: {message}")]
    InvalidArgument { index: usize, message: String },

    /// A listener returned an error; `source` is that error unchanged.
    #[error("Listener {listener} failed on '{event}': {source}")]
    Listener {
        event: String,
        listener: String,
        #[source]
        source: Box<Error>,
    },

    // ========================================================================
    // 전역 브로커
    // ========================================================================
    #[error("Global broker already initialized")]
    AlreadyInitialized,

    #[error("Global broker not initialized")]
    NotInitialized,

    // ========================================================================
    // 설정 관련
    // ========================================================================
    #[error("Configuration error: {0}")]
    Config(String),

    // ========================================================================
    // 일반
    // ========================================================================
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // ========================================================================
    // 외부 에러 변환
    // ========================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ========================================================================
    // 기타
    // ========================================================================
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// 팩토리가 이벤트 타입을 찾지 못한 경우
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::EventNotFound(_))
    }

    /// 사용자에게 보여줄 수 있는 에러인지 확인
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            Error::InvalidInput(_)
                | Error::InvalidArgument { .. }
                | Error::Listener { .. }
                | Error::Config(_)
        )
    }

    /// Listener 실패 에러 생성 헬퍼
    pub fn listener(event: impl Into<String>, listener: impl Into<String>, source: Error) -> Self {
        Error::Listener {
            event: event.into(),
            listener: listener.into(),
            source: Box::new(source),
        }
    }

    /// 이벤트 인자 에러 생성 헬퍼
    pub fn invalid_argument(index: usize, message: impl Into<String>) -> Self {
        Error::InvalidArgument {
            index,
            message: message.into(),
        }
    }
}

// ============================================================================
// From 구현 (추가 변환)
// ============================================================================

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Internal(s)
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Error::Internal(s.to_string())
    }
}
