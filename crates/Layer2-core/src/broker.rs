//! Event Broker - 동기 이벤트 디스패치
//!
//! 구독 관리와 `fire` 디스패치를 담당합니다.
//!
//! ## 사용법
//!
//! ```ignore
//! use herald_core::{EventBroker, EventRegistry, Listener};
//! use herald_foundation::args;
//!
//! let events = Arc::new(EventRegistry::new());
//! events.register("message", Message::from_args)?;
//!
//! let broker = EventBroker::new(events);
//! let printer = Listener::named("printer", |event| { /* ... */ Ok(()) });
//!
//! broker
//!     .subscribe(&printer, "message")?
//!     .fire("message", args!["hello"])?;
//! ```
//!
//! ## 디스패치 중 구독 변경
//!
//! `fire`는 리스너 목록의 스냅샷을 떠서 락을 놓은 뒤 리스너를 호출합니다.
//! 리스너 안에서 구독을 바꿔도 데드락이 없고, 변경은 다음 `fire`부터
//! 반영됩니다.

use crate::factory::EventFactory;
use crate::history::{DispatchHistory, DispatchOutcome, DispatchRecord};
use crate::listener::Listener;
use crate::registry::{ListenerList, SubscriptionRegistry};
use herald_foundation::{BrokerConfig, Error, EventArgs, Result};
use parking_lot::{Mutex, RwLock};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// 이벤트 브로커
pub struct EventBroker {
    /// 설정
    config: BrokerConfig,

    /// 이벤트 생성
    factory: Arc<dyn EventFactory>,

    /// 이름별 구독 목록
    subscriptions: RwLock<SubscriptionRegistry>,

    /// 최근 디스패치 기록
    history: Mutex<DispatchHistory>,

    /// 이벤트가 생성된 fire 호출 수
    fired_count: AtomicU64,
}

impl EventBroker {
    /// 기본 설정으로 브로커 생성
    pub fn new(factory: Arc<dyn EventFactory>) -> Self {
        Self::with_config(factory, BrokerConfig::default())
    }

    /// 커스텀 설정으로 브로커 생성
    pub fn with_config(factory: Arc<dyn EventFactory>, config: BrokerConfig) -> Self {
        let history = DispatchHistory::new(config.history_size);
        Self {
            config,
            factory,
            subscriptions: RwLock::new(SubscriptionRegistry::new()),
            history: Mutex::new(history),
            fired_count: AtomicU64::new(0),
        }
    }

    pub fn config(&self) -> &BrokerConfig {
        &self.config
    }

    pub fn factory(&self) -> &Arc<dyn EventFactory> {
        &self.factory
    }

    // ========================================================================
    // 구독 / 해제
    // ========================================================================

    /// Appends `listener` to the subscribers of `event_name`.
    ///
    /// Any previous subscription of the same listener to that name is removed
    /// first, so subscribing twice leaves exactly one entry, at the end.
    pub fn subscribe(&self, listener: &Listener, event_name: &str) -> Result<&Self> {
        validate_name(event_name)?;
        {
            let mut subscriptions = self.subscriptions.write();
            remove_from(&mut subscriptions, listener, event_name);
            subscriptions.get_or_init(event_name).push(listener.clone());
        }
        debug!(listener = %listener, event = event_name, "Subscribed listener");
        Ok(self)
    }

    /// Like [`subscribe`](Self::subscribe) but inserts at the front.
    pub fn subscribe_first(&self, listener: &Listener, event_name: &str) -> Result<&Self> {
        validate_name(event_name)?;
        {
            let mut subscriptions = self.subscriptions.write();
            remove_from(&mut subscriptions, listener, event_name);
            subscriptions.get_or_init(event_name).unshift(listener.clone());
        }
        debug!(listener = %listener, event = event_name, "Subscribed listener first");
        Ok(self)
    }

    /// Removes `listener` from one event, or from every event when
    /// `event_name` is `None`.
    pub fn unsubscribe(&self, listener: &Listener, event_name: Option<&str>) -> Result<&Self> {
        if let Some(name) = event_name {
            validate_name(name)?;
        }

        let mut subscriptions = self.subscriptions.write();
        match event_name {
            Some(name) => {
                if remove_from(&mut subscriptions, listener, name) {
                    debug!(listener = %listener, event = name, "Unsubscribed listener");
                }
            }
            None => {
                for (name, list) in subscriptions.iter_mut() {
                    if let Some(index) = list.position(listener) {
                        list.remove(index);
                        debug!(listener = %listener, event = name, "Unsubscribed listener");
                    }
                }
            }
        }
        Ok(self)
    }

    /// 이벤트의 모든 구독 삭제
    pub fn unsubscribe_all(&self, event_name: &str) -> Result<&Self> {
        validate_name(event_name)?;
        if let Some(list) = self.subscriptions.write().delete(event_name) {
            debug!(event = event_name, removed = list.len(), "Removed all subscriptions");
        }
        Ok(self)
    }

    // ========================================================================
    // 조회
    // ========================================================================

    pub fn has_subscribers(&self, event_name: &str) -> bool {
        self.subscriptions
            .read()
            .get(event_name)
            .map_or(false, |list| !list.is_empty())
    }

    pub fn is_subscribed(&self, listener: &Listener, event_name: &str) -> bool {
        if !self.has_subscribers(event_name) {
            return false;
        }
        self.subscriptions
            .read()
            .get(event_name)
            .map_or(false, |list| list.contains(listener))
    }

    /// Ordered subscribers of `event_name`, creating an empty entry if absent.
    ///
    /// The returned list is a copy; changing it does not touch the broker.
    pub fn subscribers(&self, event_name: &str) -> Result<ListenerList> {
        validate_name(event_name)?;
        Ok(self.subscriptions.write().get_or_init(event_name).clone())
    }

    /// (이벤트 이름, 리스너 수) - 이름이 처음 등록된 순서
    pub fn subscriptions(&self) -> Vec<(String, usize)> {
        self.subscriptions
            .read()
            .iter()
            .map(|(name, list)| (name.to_string(), list.len()))
            .collect()
    }

    pub fn event_names(&self) -> Vec<String> {
        self.subscriptions.read().names()
    }

    /// 전체 구독 수 (이름별 합계)
    pub fn listener_count(&self) -> usize {
        self.subscriptions.read().iter().map(|(_, list)| list.len()).sum()
    }

    // ========================================================================
    // 디스패치
    // ========================================================================

    /// Creates an event for `event_name` and notifies its subscribers in order.
    ///
    /// An unknown event name (including an empty one) is a silent no-op. Dispatch stops after the
    /// listener that cancels the event. A listener error aborts the
    /// remaining dispatch and is returned as [`Error::Listener`].
    pub fn fire(&self, event_name: &str, args: impl Into<EventArgs>) -> Result<&Self> {
        let args = args.into();

        let mut event = match self.factory.create(event_name, &args) {
            Ok(event) => event,
            Err(Error::EventNotFound(_)) => {
                debug!(event = event_name, "No such event type, skipping");
                return Ok(self);
            }
            Err(e) => return Err(e),
        };

        let count = self.fired_count.fetch_add(1, Ordering::SeqCst) + 1;
        let listeners = self.snapshot(event_name);

        if self.config.debug_mode {
            trace!(
                event = event_name,
                listeners = listeners.len(),
                "Firing event #{}",
                count
            );
        }

        let mut notified = 0;
        let mut outcome = DispatchOutcome::Delivered;

        for listener in &listeners {
            if self.config.debug_mode {
                trace!(listener = %listener, event = event_name, "Delivering event to listener");
            }

            notified += 1;
            if let Err(e) = listener.call(&mut *event) {
                warn!(listener = %listener, event = event_name, error = %e, "Listener failed");
                self.record(event_name, notified, DispatchOutcome::Failed);
                return Err(Error::listener(event_name, listener.to_string(), e));
            }

            if event.is_canceled() {
                debug!(listener = %listener, event = event_name, "Event canceled");
                outcome = DispatchOutcome::Canceled;
                break;
            }
        }

        self.record(event_name, notified, outcome);
        Ok(self)
    }

    /// 현재 구독 목록 복사 (락은 반환 전에 해제)
    fn snapshot(&self, event_name: &str) -> ListenerList {
        self.subscriptions
            .read()
            .get(event_name)
            .cloned()
            .unwrap_or_default()
    }

    // ========================================================================
    // 히스토리
    // ========================================================================

    fn record(&self, event_name: &str, notified: usize, outcome: DispatchOutcome) {
        self.history
            .lock()
            .push(DispatchRecord::new(event_name, notified, outcome));
    }

    /// 최근 디스패치 기록 (최신 순)
    pub fn history(&self, limit: Option<usize>) -> Vec<DispatchRecord> {
        self.history.lock().recent(limit)
    }

    pub fn clear_history(&self) {
        self.history.lock().clear();
    }

    /// 이벤트가 실제로 생성된 fire 호출 수
    pub fn fired_count(&self) -> u64 {
        self.fired_count.load(Ordering::SeqCst)
    }
}

impl std::fmt::Debug for EventBroker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBroker")
            .field("config", &self.config)
            .field("subscriptions", &self.subscriptions())
            .field("fired_count", &self.fired_count())
            .finish()
    }
}

/// Removes `listener` from `event_name`'s list; true if it was there.
fn remove_from(registry: &mut SubscriptionRegistry, listener: &Listener, event_name: &str) -> bool {
    match registry.get_mut(event_name) {
        Some(list) => match list.position(listener) {
            Some(index) => list.remove(index).is_some(),
            None => false,
        },
        None => false,
    }
}

fn validate_name(event_name: &str) -> Result<()> {
    if event_name.trim().is_empty() {
        return Err(Error::InvalidInput("event name must not be empty".to_string()));
    }
    Ok(())
}

// ============================================================================
// 테스트
// ============================================================================
