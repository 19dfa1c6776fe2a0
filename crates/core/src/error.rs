//! Unified error types for cellstore.
//!
//! All failures surface synchronously through [`Result`]; nothing in the
//! system retries or recovers internally. The `ValueNotFound` display text
//! is a compatibility contract: callers assert on it verbatim.

use thiserror::Error;

/// All cellstore errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// No value of the requested type exists in the named cell.
    ///
    /// `requested` is the qualified name of the type the caller asked for,
    /// not of anything actually stored. The message text is frozen.
    #[error("There is no value of {requested} type found in cell with {key} key!")]
    ValueNotFound {
        /// Qualified name of the requested type
        requested: &'static str,
        /// The configured cell key
        key: String,
    },

    /// A value exists in the cell but its type differs from the request.
    #[error("wrong type in cell with {key} key: expected {expected}, got {actual}")]
    TypeMismatch {
        /// The configured cell key
        key: String,
        /// Qualified name of the requested type
        expected: &'static str,
        /// Qualified name of the stored value's type
        actual: &'static str,
    },

    /// The provider was queried before its configuration was complete.
    #[error("provider is not configured: no {0} set")]
    NotConfigured(&'static str),
}

/// Result type for cellstore operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this is a value-not-found error.
    pub fn is_value_not_found(&self) -> bool {
        matches!(self, Error::ValueNotFound { .. })
    }

    /// Check if this is a type-mismatch error.
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, Error::TypeMismatch { .. })
    }

    /// Check if this is a caller-misuse error.
    pub fn is_not_configured(&self) -> bool {
        matches!(self, Error::NotConfigured(_))
    }
}
