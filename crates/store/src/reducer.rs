//! Reducers compute the next value for a cell.

use cellstore_core::{Message, Value};

/// Computes the next value for a cell given a dispatched message.
///
/// A dispatch folds the message through every registered reducer in
/// registration order: each reducer receives the running state for the
/// message's cell and returns what the cell should hold next. Returning
/// `current` unchanged means "not my message".
pub trait Reducer: Send + Sync {
    /// Produce the next value for the message's cell.
    ///
    /// `current` is `None` when the cell has never been assigned.
    fn reduce(&self, current: Option<Value>, message: &Message) -> Option<Value>;
}

/// Reducer scoped to a single cell key.
///
/// Stores the message's value verbatim when the message targets its key and
/// leaves every other cell untouched. This is the plain last-write-wins
/// reducer a keyed store needs.
#[derive(Debug, Clone)]
pub struct KeyedReducer {
    key: String,
}

impl KeyedReducer {
    /// Create a reducer that owns the given cell key.
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    /// The cell key this reducer responds to.
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl Reducer for KeyedReducer {
    fn reduce(&self, current: Option<Value>, message: &Message) -> Option<Value> {
        if message.key() == self.key {
            Some(message.value().clone())
        } else {
            current
        }
    }
}
