//! Convenient imports for cellstore.
//!
//! ```ignore
//! use cellstore::prelude::*;
//!
//! let store = Store::builder().reducer(KeyedReducer::new("key")).build();
//! store.dispatch(Message::new("key", 1_i64));
//! ```

// Value model
pub use cellstore_core::{Message, StoreValue, Value, ValueType};

// Error handling
pub use cellstore_core::{Error, Result};

// Store machinery
pub use cellstore_store::{KeyedReducer, Reducer, Store, StoreBuilder};

// Provider and its capability traits
pub use cellstore_store::{
    KeyConsumer, StoreConsumer, StoreValueProvider, StoreValueProviderImpl,
};
