//! Broker Config - 브로커 설정
//!
//! ## 검색 우선순위
//!
//! 1. User-level: `~/.herald/broker.json`
//! 2. Project-level: `<working_dir>/.herald/broker.json`
//!
//! 뒤의 파일에 있는 필드가 앞의 값을 오버라이드합니다.

use super::store::{load_json, ConfigStore};
use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

/// 설정 파일명
pub const BROKER_CONFIG_FILE: &str = "broker.json";

/// Default number of dispatch records kept in memory.
pub const DEFAULT_HISTORY_SIZE: usize = 100;

// ============================================================================
// BrokerConfig
// ============================================================================

/// 브로커 설정
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrokerConfig {
    /// 디버그 모드 (모든 전달을 trace 로깅)
    #[serde(default)]
    pub debug_mode: bool,

    /// 디스패치 히스토리 보관 개수 (0이면 비활성화)
    #[serde(default = "default_history_size")]
    pub history_size: usize,
}

impl Default for BrokerConfig {
    fn default() -> Self {
        Self {
            debug_mode: false,
            history_size: DEFAULT_HISTORY_SIZE,
        }
    }
}

impl BrokerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Load
    // ========================================================================

    /// 사용자 + 프로젝트 설정 병합 로드
    pub fn load(working_dir: &Path) -> Result<Self> {
        let user = ConfigStore::user().ok();
        if user.is_none() {
            warn!("No home directory, skipping user broker config");
        }
        let stores: Vec<ConfigStore> = user
            .into_iter()
            .chain(std::iter::once(ConfigStore::project(working_dir)))
            .collect();
        Self::load_layers(&stores)
    }

    /// `stores` 순서대로 broker.json 병합 (뒤의 저장소가 우선)
    pub fn load_layers(stores: &[ConfigStore]) -> Result<Self> {
        let mut config = Self::new();
        for store in stores {
            if let Some(layer) = store.load_optional::<ConfigLayer>(BROKER_CONFIG_FILE)? {
                debug!("Loaded broker config from {}", store.base_dir().display());
                config.merge(layer);
            }
        }
        Ok(config)
    }

    /// 특정 파일에서만 로드 (기본값 위에 병합)
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let layer: ConfigLayer = load_json(path)?;
        let mut config = Self::new();
        config.merge(layer);
        Ok(config)
    }

    /// 프로젝트 설정 저장
    pub fn save_project(&self, working_dir: &Path) -> Result<()> {
        ConfigStore::project(working_dir).save(BROKER_CONFIG_FILE, self)
    }

    // ========================================================================
    // Merge
    // ========================================================================

    /// 파일 레이어 병합 (layer에 있는 필드만 덮어씀)
    pub fn merge(&mut self, layer: ConfigLayer) {
        if let Some(debug_mode) = layer.debug_mode {
            self.debug_mode = debug_mode;
        }
        if let Some(history_size) = layer.history_size {
            self.history_size = history_size;
        }
    }

    // ========================================================================
    // Builder
    // ========================================================================

    pub fn debug_mode(mut self, enabled: bool) -> Self {
        self.debug_mode = enabled;
        self
    }

    pub fn history_size(mut self, size: usize) -> Self {
        self.history_size = size;
        self
    }
}

/// One config file as written on disk; absent fields keep the earlier value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigLayer {
    pub debug_mode: Option<bool>,
    pub history_size: Option<usize>,
}

fn default_history_size() -> usize {
    DEFAULT_HISTORY_SIZE
}

// ============================================================================
// 테스트
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CONFIG_DIR_NAME;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = BrokerConfig::default();
        assert!(!config.debug_mode);
        assert_eq!(config.history_size, DEFAULT_HISTORY_SIZE);
    }

    #[test]
    fn test_load_from_file_partial() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(BROKER_CONFIG_FILE);
        fs::write(&path, r#"{ "debugMode": true }"#).unwrap();

        let config = BrokerConfig::load_from_file(&path).unwrap();
        assert!(config.debug_mode);
        // historySize가 없으므로 기본값 유지
        assert_eq!(config.history_size, DEFAULT_HISTORY_SIZE);
    }

    #[test]
    fn test_merge_later_wins() {
        let mut config = BrokerConfig::new().history_size(10);
        config.merge(ConfigLayer {
            debug_mode: Some(true),
            history_size: None,
        });
        assert!(config.debug_mode);
        assert_eq!(config.history_size, 10);

        config.merge(ConfigLayer {
            debug_mode: None,
            history_size: Some(0),
        });
        assert!(config.debug_mode);
        assert_eq!(config.history_size, 0);
    }

    #[test]
    fn test_load_project_overrides_user() {
        let home = tempdir().unwrap();
        let project = tempdir().unwrap();

        let user = ConfigStore::new(home.path().join(CONFIG_DIR_NAME));
        fs::create_dir_all(user.base_dir()).unwrap();
        fs::write(
            user.file_path(BROKER_CONFIG_FILE),
            r#"{ "debugMode": true, "historySize": 3 }"#,
        )
        .unwrap();
        BrokerConfig::new()
            .history_size(7)
            .save_project(project.path())
            .unwrap();

        let config =
            BrokerConfig::load_layers(&[user, ConfigStore::project(project.path())]).unwrap();
        // save_project writes every field, so debugMode false wins too
        assert!(!config.debug_mode);
        assert_eq!(config.history_size, 7);
    }

    #[test]
    fn test_load_layers_missing_files_keep_defaults() {
        let dir = tempdir().unwrap();
        let config = BrokerConfig::load_layers(&[ConfigStore::new(dir.path())]).unwrap();
        assert_eq!(config, BrokerConfig::default());
    }
}
