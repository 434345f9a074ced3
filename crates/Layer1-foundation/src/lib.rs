//! # herald-foundation
//!
//! Foundation layer for Herald:
//! - Error: 공통 에러 타입
//! - Config: 브로커 설정 (사용자 + 프로젝트 병합)
//! - Event: 취소 가능한 이벤트 계약과 생성자 인자

pub mod config;
pub mod error;
pub mod event;

#[doc(hidden)]
pub use serde_json;

// ============================================================================
// Error
// ============================================================================
pub use error::{Error, Result};

// ============================================================================
// Config (설정)
// ============================================================================
pub use config::{
    BrokerConfig, ConfigLayer, ConfigStore, BROKER_CONFIG_FILE, CONFIG_DIR_NAME,
    DEFAULT_HISTORY_SIZE,
};

// ============================================================================
// Event (이벤트)
// ============================================================================
pub use event::{Event, EventArgs, EventState};
