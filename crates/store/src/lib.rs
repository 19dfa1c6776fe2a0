//! Store machinery and the typed value provider.
//!
//! This crate implements the mutable half of the system and the read facade
//! over it:
//! - [`Store`]: keyed cell map updated only through dispatched messages
//! - [`Reducer`]: computes the next value for a cell from a message
//! - [`StoreValueProvider`]: binds a store and a key, exposes type-checked
//!   reads with exact-match semantics

pub mod provider;
pub mod reducer;
pub mod store;

pub use provider::{KeyConsumer, StoreConsumer, StoreValueProvider, StoreValueProviderImpl};
pub use reducer::{KeyedReducer, Reducer};
pub use store::{Store, StoreBuilder};
