//! Event Types - 취소 가능한 이벤트의 기본 계약
//!
//! 모든 이벤트는 하나의 `canceled` 플래그를 가집니다. 리스너가 이벤트를
//! 취소하면 같은 디스패치의 나머지 리스너는 호출되지 않습니다.

use std::any::Any;
use std::fmt::Debug;

// ============================================================================
// EventState
// ============================================================================

/// Per-instance state shared by every event type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventState {
    canceled: bool,
}

impl EventState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_canceled(&self) -> bool {
        self.canceled
    }

    pub fn set_canceled(&mut self, canceled: bool) {
        self.canceled = canceled;
    }
}

// ============================================================================
// Event Trait
// ============================================================================

/// Upcast helper so `dyn Event` can be downcast to its concrete type.
pub trait AsAny: Any {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// 취소 가능한 이벤트
///
/// 구현체는 `EventState`를 보관하고 `state()`/`state_mut()`로 노출합니다.
/// 나머지 메서드는 기본 구현을 사용합니다.
///
/// ```ignore
/// #[derive(Debug)]
/// struct Saved { state: EventState, path: String }
///
/// impl_event!(Saved);
/// ```
pub trait Event: AsAny + Send + Debug {
    fn state(&self) -> &EventState;

    fn state_mut(&mut self) -> &mut EventState;

    /// 취소 여부
    fn is_canceled(&self) -> bool {
        self.state().is_canceled()
    }

    /// 취소 플래그 설정
    fn set_canceled(&mut self, canceled: bool) {
        self.state_mut().set_canceled(canceled);
    }

    /// 이벤트 취소 (이후 리스너 호출 중단)
    fn cancel(&mut self) {
        self.set_canceled(true);
    }
}

impl dyn Event {
    /// Returns the concrete event if it is of type `T`.
    pub fn downcast_ref<T: Event>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    pub fn downcast_mut<T: Event>(&mut self) -> Option<&mut T> {
        self.as_any_mut().downcast_mut::<T>()
    }

    pub fn is<T: Event>(&self) -> bool {
        self.as_any().is::<T>()
    }
}

/// Implements [`Event`] for a struct holding its [`EventState`] in a field
/// named `state`.
#[macro_export]
macro_rules! impl_event {
    ($ty:ty) => {
        impl $crate::event::Event for $ty {
            fn state(&self) -> &$crate::event::EventState {
                &self.state
            }

            fn state_mut(&mut self) -> &mut $crate::event::EventState {
                &mut self.state
            }
        }
    };
}

// ============================================================================
// 테스트
// ============================================================================
