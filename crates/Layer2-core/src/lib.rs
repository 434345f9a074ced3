//! # herald-core
//!
//! In-process event dispatch for Herald:
//! - Broker: 구독 관리 + 동기 디스패치 + 취소
//! - Registry: 이벤트 이름별 리스너 목록
//! - Factory: 이벤트 이름 -> 이벤트 인스턴스
//! - Emitter / Global: 브로커 위임 핸들과 명시적 전역 인스턴스
//!
//! ## 아키텍처
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                       EventBroker                          │
//! │  fire(name, args)                                          │
//! │     │                                                      │
//! │     ▼                                                      │
//! │  EventFactory ──(NotFound)──▶ no-op                        │
//! │     │                                                      │
//! │     ▼                                                      │
//! │  SubscriptionRegistry[name] (snapshot)                     │
//! │     │                                                      │
//! │     ▼                                                      │
//! │  Listener 1 ─▶ Listener 2 ─▶ ... (stop when canceled)     │
//! └───────────────────────────────────────────────────────────┘
//! ```

pub mod broker;
pub mod emitter;
pub mod factory;
pub mod global;
pub mod history;
pub mod listener;
pub mod registry;

// ============================================================================
// Broker
// ============================================================================
pub use broker::EventBroker;
pub use emitter::Emitter;
pub use global::{global_broker, init_global_broker};

// ============================================================================
// Subscriptions
// ============================================================================
pub use listener::{Listener, ListenerFn, ListenerId};
pub use registry::{ListenerList, SubscriptionRegistry};

// ============================================================================
// Factory
// ============================================================================
pub use factory::{EventConstructor, EventFactory, EventRegistry};

// ============================================================================
// History
// ============================================================================
pub use history::{DispatchHistory, DispatchId, DispatchOutcome, DispatchRecord};
