//! Typed read access to a single store cell.
//!
//! [`StoreValueProviderImpl`] binds a store and a key, then answers typed
//! `get` requests in two spellings: a generic one (`get::<i64>()`) and a
//! type-token one (`get_by_type(ValueType::Int)`). Both route through one
//! validation routine, so they cannot drift: same value on success, same
//! error variant and message text on failure.

use cellstore_core::{Error, Result, StoreValue, Value, ValueType};
use std::sync::Arc;

use crate::store::Store;

/// Anything that can accept a store reference to scope later operations.
pub trait StoreConsumer {
    /// Set the store to read from. Last write wins.
    fn set_store(&mut self, store: Arc<Store>);
}

/// Anything that can accept a cell key to scope later operations.
pub trait KeyConsumer {
    /// Set the cell key. Last write wins; the empty string is a legal key.
    fn set_key(&mut self, key: &str);
}

/// Type-checked read access to the configured cell.
///
/// The two accessors are two spellings of the same operation. For every
/// requested type and store state they succeed or fail identically; the
/// generic spelling merely unwraps the variant the token spelling already
/// validated.
pub trait StoreValueProvider: StoreConsumer + KeyConsumer {
    /// Get the cell's value, requested type as a generic parameter.
    fn get<T: StoreValue>(&self) -> Result<T>
    where
        Self: Sized;

    /// Get the cell's value, requested type as a runtime token.
    fn get_by_type(&self, requested: ValueType) -> Result<Value>;
}

/// Default [`StoreValueProvider`] implementation.
///
/// Constructed empty; configure with [`StoreConsumer::set_store`] and
/// [`KeyConsumer::set_key`] in either order before querying. Queries never
/// mutate the store or the provider, and nothing is cached: every call
/// re-reads the store.
#[derive(Default)]
pub struct StoreValueProviderImpl {
    store: Option<Arc<Store>>,
    key: Option<String>,
}

impl StoreValueProviderImpl {
    /// Create an unconfigured provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// The shared validation routine behind both accessor spellings.
    ///
    /// Reads the cell once (a single snapshot under the store's lock), then
    /// checks presence and type on that snapshot. A concurrent dispatch can
    /// therefore never make the value vanish between the two checks.
    fn lookup(&self, requested: ValueType) -> Result<Value> {
        let store = self
            .store
            .as_ref()
            .ok_or(Error::NotConfigured("store"))?;
        let key = self.key.as_deref().ok_or(Error::NotConfigured("key"))?;

        let value = store.value(key).ok_or_else(|| Error::ValueNotFound {
            requested: requested.qualified_name(),
            key: key.to_string(),
        })?;

        let actual = value.value_type();
        if actual != requested {
            return Err(Error::TypeMismatch {
                key: key.to_string(),
                expected: requested.qualified_name(),
                actual: actual.qualified_name(),
            });
        }

        Ok(value)
    }
}

impl StoreConsumer for StoreValueProviderImpl {
    fn set_store(&mut self, store: Arc<Store>) {
        self.store = Some(store);
    }
}

impl KeyConsumer for StoreValueProviderImpl {
    fn set_key(&mut self, key: &str) {
        self.key = Some(key.to_string());
    }
}

impl StoreValueProvider for StoreValueProviderImpl {
    fn get<T: StoreValue>(&self) -> Result<T>
    where
        Self: Sized,
    {
        let value = self.lookup(T::TYPE)?;
        // lookup already validated the tag; the mismatch arm is unreachable
        let actual = value.value_type();
        T::from_value(value).ok_or(Error::TypeMismatch {
            key: self.key.clone().unwrap_or_default(),
            expected: T::TYPE.qualified_name(),
            actual: actual.qualified_name(),
        })
    }

    fn get_by_type(&self, requested: ValueType) -> Result<Value> {
        self.lookup(requested)
    }
}

impl std::fmt::Debug for StoreValueProviderImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreValueProviderImpl")
            .field("store", &self.store.is_some())
            .field("key", &self.key)
            .finish()
    }
}
