//! # cellstore
//!
//! Minimal unidirectional state container: a [`Store`] holds keyed values,
//! [`Reducer`]s mutate state in response to dispatched [`Message`]s, and a
//! [`StoreValueProvider`] reads typed values back out by key, failing
//! descriptively when a value is absent or of the wrong type.
//!
//! ## Quick Start
//!
//! ```ignore
//! use cellstore::prelude::*;
//! use std::sync::Arc;
//!
//! let store = Arc::new(
//!     Store::builder()
//!         .reducer(KeyedReducer::new("greeting"))
//!         .build(),
//! );
//! store.dispatch(Message::new("greeting", "hello"));
//!
//! let mut provider = StoreValueProviderImpl::new();
//! provider.set_store(store);
//! provider.set_key("greeting");
//!
//! let greeting: String = provider.get()?;
//! assert_eq!(greeting, "hello");
//! ```
//!
//! ## Type checking
//!
//! Matching is exact: a stored `Int` never satisfies a `Bool` request, and
//! nothing is ever coerced. The provider's two accessor spellings — generic
//! `get::<T>()` and token-based `get_by_type(ValueType)` — share one
//! validation routine and are observably identical.

#![warn(missing_docs)]

pub mod prelude;

// Value model and errors
pub use cellstore_core::{Error, Message, Result, StoreValue, Value, ValueType};

// Store machinery and the provider
pub use cellstore_store::{
    KeyConsumer, KeyedReducer, Reducer, Store, StoreBuilder, StoreConsumer, StoreValueProvider,
    StoreValueProviderImpl,
};
