//! Event constructor arguments
//!
//! `fire(name, args)` passes its arguments through to the event constructor
//! in the given order. They travel as JSON values so a single broker can
//! serve event types with unrelated payloads.

use crate::{Error, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Ordered positional arguments for an event constructor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventArgs {
    values: Vec<Value>,
}

impl EventArgs {
    /// No arguments
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a value (builder style)
    pub fn with<T: Serialize>(mut self, value: T) -> Result<Self> {
        self.values.push(serde_json::to_value(value)?);
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Value> {
        self.values.iter()
    }

    /// Decode the argument at `index`; missing or mistyped is an error.
    pub fn required<T: DeserializeOwned>(&self, index: usize) -> Result<T> {
        let value = self
            .values
            .get(index)
            .ok_or_else(|| Error::invalid_argument(index, "missing"))?;
        serde_json::from_value(value.clone())
            .map_err(|e| Error::invalid_argument(index, e.to_string()))
    }

    /// Decode the argument at `index` if present and non-null.
    pub fn optional<T: DeserializeOwned>(&self, index: usize) -> Result<Option<T>> {
        match self.values.get(index) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => serde_json::from_value(value.clone())
                .map(Some)
                .map_err(|e| Error::invalid_argument(index, e.to_string())),
        }
    }

    /// Borrow a string argument
    pub fn str(&self, index: usize) -> Result<&str> {
        match self.values.get(index) {
            Some(Value::String(s)) => Ok(s),
            Some(other) => Err(Error::invalid_argument(
                index,
                format!("expected string, got {}", other),
            )),
            None => Err(Error::invalid_argument(index, "missing")),
        }
    }

    pub fn into_values(self) -> Vec<Value> {
        self.values
    }
}

impl From<Vec<Value>> for EventArgs {
    fn from(values: Vec<Value>) -> Self {
        Self { values }
    }
}

impl FromIterator<Value> for EventArgs {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

/// Build [`EventArgs`] from a list of JSON-convertible expressions.
///
/// ```ignore
/// broker.fire("message", args!["hello", 3])?;
/// ```
#[macro_export]
macro_rules! args {
    () => {
        $crate::event::EventArgs::new()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::event::EventArgs::from(vec![$($crate::serde_json::json!($value)),+])
    };
}
