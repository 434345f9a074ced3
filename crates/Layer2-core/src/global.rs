//! 전역 EventBroker
//!
//! 프로세스 기본 브로커는 시작 시 `init_global_broker`로 한 번만 설치합니다.
//! 암묵적인 지연 생성은 없습니다. 가능하면 `Arc<EventBroker>`를 직접
//! 전달하세요.

use crate::broker::EventBroker;
use herald_foundation::{Error, EventArgs, Result};
use std::sync::{Arc, OnceLock};
use tracing::info;

static GLOBAL_BROKER: OnceLock<Arc<EventBroker>> = OnceLock::new();

/// 전역 브로커 설치 (두 번째 호출은 `AlreadyInitialized`)
pub fn init_global_broker(broker: EventBroker) -> Result<Arc<EventBroker>> {
    let broker = Arc::new(broker);
    GLOBAL_BROKER
        .set(Arc::clone(&broker))
        .map_err(|_| Error::AlreadyInitialized)?;
    info!("Global event broker initialized");
    Ok(broker)
}

/// 전역 브로커 가져오기
pub fn global_broker() -> Option<Arc<EventBroker>> {
    GLOBAL_BROKER.get().cloned()
}

/// 전역 브로커로 이벤트 발행 (편의 함수)
pub fn fire(event_name: &str, args: impl Into<EventArgs>) -> Result<()> {
    let broker = GLOBAL_BROKER.get().ok_or(Error::NotInitialized)?;
    broker.fire(event_name, args)?;
    Ok(())
}
