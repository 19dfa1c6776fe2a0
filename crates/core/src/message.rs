//! Messages dispatched into a store.

use crate::value::Value;
use serde::{Deserialize, Serialize};

/// A (key, value) pair submitted to a store.
///
/// Messages are the only way state changes: a dispatch hands the message to
/// every registered reducer, and reducers decide what the named cell holds
/// next.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    key: String,
    value: Value,
}

impl Message {
    /// Create a message for the given cell key.
    pub fn new(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// The cell key this message targets.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The carried value.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Consume the message, yielding its parts.
    pub fn into_parts(self) -> (String, Value) {
        (self.key, self.value)
    }
}
