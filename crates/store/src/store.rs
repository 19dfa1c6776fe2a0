//! The keyed cell store.
//!
//! A [`Store`] maps cell keys to current values and is updated only through
//! [`Store::dispatch`]. Reads hand out a snapshot of a single cell, so
//! presence and type can be observed atomically even while other threads
//! dispatch.

use cellstore_core::{Message, Value};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::trace;

use crate::reducer::Reducer;

type Subscriber = Box<dyn Fn(&str, &Value) + Send + Sync>;

/// Keyed state container updated via dispatched messages.
///
/// # Example
///
/// ```ignore
/// let store = Store::builder()
///     .reducer(KeyedReducer::new("counter"))
///     .build();
///
/// store.dispatch(Message::new("counter", 1_i64));
/// assert_eq!(store.value("counter"), Some(Value::Int(1)));
/// ```
pub struct Store {
    cells: RwLock<HashMap<String, Value>>,
    reducers: Vec<Arc<dyn Reducer>>,
    subscribers: RwLock<Vec<Subscriber>>,
}

impl Store {
    /// Create a store with the given reducer set.
    pub fn new(reducers: Vec<Arc<dyn Reducer>>) -> Self {
        Self {
            cells: RwLock::new(HashMap::new()),
            reducers,
            subscribers: RwLock::new(Vec::new()),
        }
    }

    /// Start building a store.
    pub fn builder() -> StoreBuilder {
        StoreBuilder::default()
    }

    /// Apply a message through every registered reducer.
    ///
    /// Reducers run in registration order; each receives the running state
    /// for the message's cell. If no reducer claims the message the cell is
    /// left untouched (an unassigned cell stays unassigned).
    pub fn dispatch(&self, message: Message) {
        let next = {
            let mut cells = self.cells.write();
            let mut state = cells.get(message.key()).cloned();
            for reducer in &self.reducers {
                state = reducer.reduce(state, &message);
            }
            match state {
                Some(next) => {
                    cells.insert(message.key().to_string(), next.clone());
                    Some(next)
                }
                None => None,
            }
        };

        if let Some(next) = next {
            trace!(key = message.key(), value_type = next.type_name(), "cell updated");
            for subscriber in self.subscribers.read().iter() {
                subscriber(message.key(), &next);
            }
        }
    }

    /// Snapshot the current value of a cell.
    ///
    /// One read under the lock: presence and type are observed on the same
    /// snapshot, never on two separate reads.
    pub fn value(&self, key: &str) -> Option<Value> {
        self.cells.read().get(key).cloned()
    }

    /// Check whether a cell currently holds a value.
    pub fn contains(&self, key: &str) -> bool {
        self.cells.read().contains_key(key)
    }

    /// Number of assigned cells.
    pub fn len(&self) -> usize {
        self.cells.read().len()
    }

    /// Check if no cell has been assigned yet.
    pub fn is_empty(&self) -> bool {
        self.cells.read().is_empty()
    }

    /// Subscribe to cell updates.
    ///
    /// The callback receives the cell key and its new value after every
    /// dispatch that changed state.
    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn(&str, &Value) + Send + Sync + 'static,
    {
        self.subscribers.write().push(Box::new(callback));
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("cells", &*self.cells.read())
            .field("reducers", &self.reducers.len())
            .finish()
    }
}

/// Builder for [`Store`].
#[derive(Default)]
pub struct StoreBuilder {
    reducers: Vec<Arc<dyn Reducer>>,
}

impl StoreBuilder {
    /// Register a reducer.
    pub fn reducer(mut self, reducer: impl Reducer + 'static) -> Self {
        self.reducers.push(Arc::new(reducer));
        self
    }

    /// Build the store.
    pub fn build(self) -> Store {
        Store::new(self.reducers)
    }
}
