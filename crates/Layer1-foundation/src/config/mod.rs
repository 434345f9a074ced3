//! Config - 설정 관리
//!
//! - `store.rs` - JSON 설정 파일 저장소
//! - `broker.rs` - BrokerConfig

mod broker;
mod store;

pub use broker::{BrokerConfig, ConfigLayer, BROKER_CONFIG_FILE, DEFAULT_HISTORY_SIZE};
pub use store::{ConfigStore, CONFIG_DIR_NAME};
