//! Core types for the cellstore state container.
//!
//! This crate defines the value model shared by every layer of the system:
//! - [`Value`]: tagged container for heterogeneous stored values
//! - [`ValueType`]: runtime type token, one per `Value` variant
//! - [`StoreValue`]: compile-time link between Rust types and their tokens
//! - [`Message`]: a (key, value) pair dispatched into a store
//! - [`Error`]: the canonical error type for all cellstore operations

pub mod error;
pub mod message;
pub mod value;

pub use error::{Error, Result};
pub use message::Message;
pub use value::{StoreValue, Value, ValueType};
