//! # Error Types
//!
//! Domain-specific error types for shophub-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  shophub-core errors (this file)                                       │
//! │  ├── AuthError        - Sign-in/registration failures                  │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  shophub-store errors (separate crate)                                 │
//! │  └── StoreError       - Persistence and checkout-flow failures         │
//! │                                                                         │
//! │  Flow: ValidationError → AuthError → StoreError → storefront message   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All of these are locally recoverable: the storefront shows the message
//! and lets the user retry. Nothing here is fatal to the process, and the
//! core never retries anything itself.

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when user input doesn't meet requirements. Used for early
/// validation before the credential store touches the user list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too short.
    #[error("{field} must be at least {min} characters")]
    TooShort { field: String, min: usize },

    /// Invalid format (e.g. malformed email, non-numeric phone).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Auth Error
// =============================================================================

/// Account and sign-in failures.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Registration with an email that already has an account.
    #[error("An account with email '{email}' already exists")]
    DuplicateEmail { email: String },

    /// No account matches the email/password pair.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Credentials matched, but the account is deactivated.
    ///
    /// Distinct from [`AuthError::InvalidCredentials`]: the user typed
    /// the right password and gets told the real reason.
    #[error("Account is deactivated")]
    AccountDeactivated,

    /// Password change rejected: the current password didn't match.
    #[error("Current password is incorrect")]
    WrongCurrentPassword,

    /// Registration rejected: password and confirmation differ.
    #[error("Passwords do not match")]
    PasswordMismatch,

    /// No account with the given id.
    #[error("User not found: {id}")]
    UserNotFound { id: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for auth results.
pub type AuthResult<T> = Result<T, AuthError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = AuthError::DuplicateEmail {
            email: "priya@example.com".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "An account with email 'priya@example.com' already exists"
        );

        let err = ValidationError::TooShort {
            field: "password".to_string(),
            min: 6,
        };
        assert_eq!(err.to_string(), "password must be at least 6 characters");
    }

    #[test]
    fn test_validation_converts_to_auth_error() {
        let validation_err = ValidationError::Required {
            field: "email".to_string(),
        };
        let auth_err: AuthError = validation_err.into();
        assert!(matches!(auth_err, AuthError::Validation(_)));
    }
}
