//! Emitter - 브로커에 위임하는 이벤트 발행 핸들
//!
//! 이벤트를 발행해야 하는 컴포넌트는 `Emitter`를 필드로 들고 있습니다.

use crate::broker::EventBroker;
use herald_foundation::{EventArgs, Result};
use std::sync::Arc;
use tracing::trace;

/// Fires events through a shared broker on behalf of a component.
#[derive(Debug, Clone)]
pub struct Emitter {
    broker: Arc<EventBroker>,
    source: String,
}

impl Emitter {
    pub fn new(broker: Arc<EventBroker>, source: impl Into<String>) -> Self {
        Self {
            broker,
            source: source.into(),
        }
    }

    pub fn broker(&self) -> &Arc<EventBroker> {
        &self.broker
    }

    /// 발행 주체 이름 (로그용)
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Creates and fires the event; see [`EventBroker::fire`].
    pub fn fire(&self, event_name: &str, args: impl Into<EventArgs>) -> Result<&Self> {
        trace!(source = %self.source, event = event_name, "Emitting event");
        self.broker.fire(event_name, args)?;
        Ok(self)
    }
}
