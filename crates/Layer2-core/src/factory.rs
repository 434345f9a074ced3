//! Event Factory - 이벤트 이름으로 이벤트 인스턴스 생성
//!
//! 시작 시 이름 -> 생성자 매핑을 명시적으로 등록합니다.
//!
//! ```ignore
//! let events = EventRegistry::new();
//! events.register("message", |args| Message::from_args(args))?;
//! events.register_default::<Shutdown>("shutdown")?;
//! events.register_alias("app.message", "message")?;
//! ```

use herald_foundation::{Error, Event, EventArgs, Result};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Produces a fresh event for a name, or `Error::EventNotFound`.
pub trait EventFactory: Send + Sync {
    fn create(&self, name: &str, args: &EventArgs) -> Result<Box<dyn Event>>;
}

/// Boxed constructor stored per event name.
pub type EventConstructor = dyn Fn(&EventArgs) -> Result<Box<dyn Event>> + Send + Sync;

// ============================================================================
// EventRegistry
// ============================================================================

/// 생성자 레지스트리 (기본 EventFactory 구현)
#[derive(Default)]
pub struct EventRegistry {
    constructors: RwLock<HashMap<String, Arc<EventConstructor>>>,
    aliases: RwLock<HashMap<String, String>>,
}

impl EventRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 생성자 등록 (같은 이름이 있으면 교체)
    pub fn register<E, F>(&self, name: impl Into<String>, constructor: F) -> Result<()>
    where
        E: Event,
        F: Fn(&EventArgs) -> Result<E> + Send + Sync + 'static,
    {
        let name = non_empty(name.into(), "event name")?;
        let boxed: Arc<EventConstructor> =
            Arc::new(move |args: &EventArgs| -> Result<Box<dyn Event>> {
                let event: Box<dyn Event> = Box::new(constructor(args)?);
                Ok(event)
            });

        let replaced = self.constructors.write().insert(name.clone(), boxed);
        debug!(event = %name, replaced = replaced.is_some(), "Registered event type");
        Ok(())
    }

    /// 인자 없는 이벤트 등록 (`Default`로 생성)
    pub fn register_default<E>(&self, name: impl Into<String>) -> Result<()>
    where
        E: Event + Default,
    {
        self.register(name, |_| Ok(E::default()))
    }

    /// 다른 이름으로도 같은 생성자를 찾도록 별칭 등록
    pub fn register_alias(
        &self,
        alias: impl Into<String>,
        target: impl Into<String>,
    ) -> Result<()> {
        let alias = non_empty(alias.into(), "alias")?;
        let target = non_empty(target.into(), "alias target")?;
        self.aliases.write().insert(alias, target);
        Ok(())
    }

    /// 등록 해제 (별칭은 유지되지만 더 이상 해석되지 않음)
    pub fn unregister(&self, name: &str) -> bool {
        self.constructors.write().remove(name).is_some()
    }

    /// 이름 또는 별칭으로 해석 가능한지
    pub fn contains(&self, name: &str) -> bool {
        self.resolve(name).is_some()
    }

    /// 등록된 이벤트 이름 (정렬)
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.constructors.read().keys().cloned().collect();
        names.sort();
        names
    }

    /// Exact name first, then alias.
    fn resolve(&self, name: &str) -> Option<Arc<EventConstructor>> {
        let constructors = self.constructors.read();
        if let Some(ctor) = constructors.get(name) {
            return Some(Arc::clone(ctor));
        }
        let aliases = self.aliases.read();
        aliases
            .get(name)
            .and_then(|target| constructors.get(target))
            .map(Arc::clone)
    }
}

impl EventFactory for EventRegistry {
    fn create(&self, name: &str, args: &EventArgs) -> Result<Box<dyn Event>> {
        let constructor = self
            .resolve(name)
            .ok_or_else(|| Error::EventNotFound(name.to_string()))?;
        // Lock is released before running user code.
        constructor(args)
    }
}

impl std::fmt::Debug for EventRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventRegistry")
            .field("events", &self.names())
            .field("aliases", &self.aliases.read().len())
            .finish()
    }
}

fn non_empty(value: String, what: &str) -> Result<String> {
    if value.trim().is_empty() {
        return Err(Error::InvalidInput(format!("{} must not be empty", what)));
    }
    Ok(value)
}

// ============================================================================
// 테스트
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use herald_foundation::{args, impl_event, EventState};

    #[derive(Debug)]
    struct EventA {
        state: EventState,
        content: String,
    }

    impl_event!(EventA);

    #[derive(Debug, Default)]
    struct Tick {
        state: EventState,
    }

    impl_event!(Tick);

    fn registry() -> EventRegistry {
        let registry = EventRegistry::new();
        registry
            .register("EventA", |args| {
                Ok(EventA {
                    state: EventState::new(),
                    content: args.required(0)?,
                })
            })
            .unwrap();
        registry.register_default::<Tick>("Tick").unwrap();
        registry
    }

    #[test]
    fn test_create_with_args() {
        let registry = registry();
        let event = registry.create("EventA", &args!["foo"]).unwrap();

        assert!(!event.is_canceled());
        assert_eq!(event.downcast_ref::<EventA>().unwrap().content, "foo");
    }

    #[test]
    fn test_create_default() {
        let event = registry().create("Tick", &EventArgs::new()).unwrap();
        assert!(event.is::<Tick>());
    }

    #[test]
    fn test_unknown_is_not_found() {
        let err = registry().create("NoSuchEvent", &args![]).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_bad_args_is_not_not_found() {
        let err = registry().create("EventA", &args![]).unwrap_err();
        assert!(!err.is_not_found());
        assert!(matches!(err, Error::InvalidArgument { index: 0, .. }));
    }

    #[test]
    fn test_alias_resolution() {
        let registry = registry();
        registry.register_alias("app.tick", "Tick").unwrap();

        assert!(registry.contains("app.tick"));
        assert!(registry.create("app.tick", &args![]).unwrap().is::<Tick>());

        registry.unregister("Tick");
        assert!(!registry.contains("app.tick"));
    }

    #[test]
    fn test_empty_names_rejected() {
        let registry = EventRegistry::new();
        assert!(matches!(
            registry.register_default::<Tick>(""),
            Err(Error::InvalidInput(_))
        ));
        assert!(registry.register_alias(" ", "Tick").is_err());
        assert!(registry.names().is_empty());
    }
}
