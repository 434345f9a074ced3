//! Listener - 리스너 핸들
//!
//! 클로저를 `Arc`로 감싼 핸들입니다. 동등성은 핸들 identity로 판단하므로
//! 같은 핸들의 clone끼리는 같고, 따로 만든 핸들은 같은 함수라도 다릅니다.

use herald_foundation::{Event, Result};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Callback signature shared by every listener.
pub type ListenerFn = dyn Fn(&mut dyn Event) -> Result<()> + Send + Sync;

static NEXT_LISTENER_ID: AtomicU64 = AtomicU64::new(1);

/// 리스너 ID (프로세스 내 고유)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

impl ListenerId {
    fn next() -> Self {
        Self(NEXT_LISTENER_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "listener-{}", self.0)
    }
}

struct ListenerInner {
    id: ListenerId,
    name: Option<String>,
    callback: Box<ListenerFn>,
}

/// Cloneable handle to a registered callback.
#[derive(Clone)]
pub struct Listener {
    inner: Arc<ListenerInner>,
}

impl Listener {
    /// 익명 리스너 생성
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(&mut dyn Event) -> Result<()> + Send + Sync + 'static,
    {
        Self::build(None, callback)
    }

    /// 이름 있는 리스너 생성 (로그 출력용)
    pub fn named<F>(name: impl Into<String>, callback: F) -> Self
    where
        F: Fn(&mut dyn Event) -> Result<()> + Send + Sync + 'static,
    {
        Self::build(Some(name.into()), callback)
    }

    fn build<F>(name: Option<String>, callback: F) -> Self
    where
        F: Fn(&mut dyn Event) -> Result<()> + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(ListenerInner {
                id: ListenerId::next(),
                name,
                callback: Box::new(callback),
            }),
        }
    }

    pub fn id(&self) -> ListenerId {
        self.inner.id
    }

    pub fn name(&self) -> Option<&str> {
        self.inner.name.as_deref()
    }

    /// Invoke the callback with the event as its only argument.
    pub fn call(&self, event: &mut dyn Event) -> Result<()> {
        (self.inner.callback)(event)
    }
}

impl PartialEq for Listener {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for Listener {}

impl std::hash::Hash for Listener {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.inner.id.hash(state);
    }
}

impl fmt::Display for Listener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner.name {
            Some(name) => write!(f, "{}", name),
            None => write!(f, "{}", self.inner.id),
        }
    }
}

impl fmt::Debug for Listener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listener")
            .field("id", &self.inner.id)
            .field("name", &self.inner.name)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use herald_foundation::{impl_event, EventState};
    use std::sync::atomic::AtomicUsize;

    #[derive(Debug, Default)]
    struct Ping {
        state: EventState,
    }

    impl_event!(Ping);

    fn noop(_: &mut dyn Event) -> Result<()> {
        Ok(())
    }

    #[test]
    fn test_clone_is_equal() {
        let listener = Listener::new(noop);
        assert_eq!(listener, listener.clone());
    }

    #[test]
    fn test_same_function_distinct_handles() {
        let a = Listener::new(noop);
        let b = Listener::new(noop);
        assert_ne!(a, b);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_display() {
        let named = Listener::named("audit", noop);
        assert_eq!(named.to_string(), "audit");

        let anon = Listener::new(noop);
        assert_eq!(anon.to_string(), format!("listener-{}", anon.id().as_u64()));
    }

    #[test]
    fn test_call_passes_event() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let listener = Listener::new(move |event| {
            counter.fetch_add(1, Ordering::SeqCst);
            event.cancel();
            Ok(())
        });

        let mut event = Ping::default();
        listener.call(&mut event).unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(event.is_canceled());
    }
}
