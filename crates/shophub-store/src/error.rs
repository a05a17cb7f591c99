//! # Storage Error Types
//!
//! Error types for persistence and the flows built on it.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  I/O failure (std::io::Error) or undecodable JSON                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds the storage key and categorization    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Storefront displays a user-friendly message and lets the user retry   │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Persistence problems are always surfaced as typed errors — never
//! swallowed into a silent default on the write path.

use thiserror::Error;

use shophub_core::AuthError;

/// Persistence and checkout-flow errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing store could not be read or written.
    ///
    /// ## When This Occurs
    /// - Data directory missing or unwritable
    /// - Disk full
    /// - File locked by another process
    #[error("Persistence unavailable for '{key}': {reason}")]
    Unavailable { key: String, reason: String },

    /// A stored document exists but cannot be decoded.
    ///
    /// ## When This Occurs
    /// - Truncated write from a crashed process
    /// - Hand-edited document
    /// - Schema drift between releases
    #[error("Stored value for '{key}' is corrupt: {reason}")]
    Corrupt { key: String, reason: String },

    /// A value could not be serialized for storage.
    #[error("Serialization failed: {0}")]
    Serialize(String),

    /// Checkout was submitted with an empty cart.
    #[error("Cannot place an order with an empty cart")]
    EmptyCart,

    /// A checkout is already in flight for this session.
    ///
    /// Protects against double-order creation from duplicate submit
    /// events; at most one checkout runs at a time.
    #[error("A checkout is already in progress")]
    CheckoutInProgress,

    /// Account/sign-in failure (wraps AuthError).
    #[error(transparent)]
    Auth(#[from] AuthError),
}

impl StoreError {
    /// Creates an Unavailable error for a storage key.
    pub fn unavailable(key: impl Into<String>, reason: impl ToString) -> Self {
        StoreError::Unavailable {
            key: key.into(),
            reason: reason.to_string(),
        }
    }

    /// Creates a Corrupt error for a storage key.
    pub fn corrupt(key: impl Into<String>, reason: impl ToString) -> Self {
        StoreError::Corrupt {
            key: key.into(),
            reason: reason.to_string(),
        }
    }

    /// Creates a Serialize error.
    pub fn serialize(reason: impl ToString) -> Self {
        StoreError::Serialize(reason.to_string())
    }
}

/// Result type for storage operations.
pub type StoreResult<T> = Result<T, StoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = StoreError::unavailable("shophub_cart", "permission denied");
        assert_eq!(
            err.to_string(),
            "Persistence unavailable for 'shophub_cart': permission denied"
        );
    }

    #[test]
    fn test_auth_error_passes_through_transparently() {
        let err: StoreError = AuthError::InvalidCredentials.into();
        assert_eq!(err.to_string(), "Invalid email or password");
        assert!(matches!(err, StoreError::Auth(_)));
    }
}
