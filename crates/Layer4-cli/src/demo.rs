//! Built-in demo events and listeners

use herald_core::{EventBroker, EventRegistry, Listener};
use herald_foundation::{impl_event, BrokerConfig, Event, EventArgs, EventState, Result};
use serde_json::Value;
use std::sync::Arc;

/// `message <content>`
#[derive(Debug)]
pub struct Message {
    state: EventState,
    pub content: String,
}

impl_event!(Message);

impl Message {
    pub fn from_args(args: &EventArgs) -> Result<Self> {
        Ok(Self {
            state: EventState::new(),
            content: args.required(0)?,
        })
    }
}

/// `shutdown [reason]`
#[derive(Debug)]
pub struct Shutdown {
    state: EventState,
    pub reason: Option<String>,
}

impl_event!(Shutdown);

impl Shutdown {
    pub fn from_args(args: &EventArgs) -> Result<Self> {
        Ok(Self {
            state: EventState::new(),
            reason: args.optional(0)?,
        })
    }
}

/// Event registry with the demo events (`message`, `shutdown`).
pub fn registry() -> Result<EventRegistry> {
    let events = EventRegistry::new();
    events.register("message", Message::from_args)?;
    events.register("shutdown", Shutdown::from_args)?;
    events.register_alias("demo.message", "message")?;
    Ok(events)
}

pub fn broker(config: BrokerConfig) -> Result<EventBroker> {
    Ok(EventBroker::with_config(Arc::new(registry()?), config))
}

/// Human readable line for a demo event
pub fn describe(event: &dyn Event) -> String {
    if let Some(message) = event.downcast_ref::<Message>() {
        return format!("message: {}", message.content);
    }
    if let Some(shutdown) = event.downcast_ref::<Shutdown>() {
        return match &shutdown.reason {
            Some(reason) => format!("shutdown: {}", reason),
            None => "shutdown".to_string(),
        };
    }
    format!("{:?}", event)
}

pub fn printer() -> Listener {
    Listener::named("printer", |event| {
        println!("  [printer] {}", describe(event));
        Ok(())
    })
}

pub fn canceler() -> Listener {
    Listener::named("canceler", |event| {
        println!("  [canceler] {} (canceling)", describe(event));
        event.cancel();
        Ok(())
    })
}

/// CLI arguments are JSON when they parse, plain strings otherwise.
pub fn parse_args(raw: &[String]) -> EventArgs {
    raw.iter()
        .map(|s| serde_json::from_str(s).unwrap_or_else(|_| Value::String(s.clone())))
        .collect()
}
