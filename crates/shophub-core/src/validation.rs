//! # Validation Module
//!
//! Field validators backing registration and profile flows.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Storefront forms (TypeScript)                                │
//! │  ├── Inline format checks, immediate feedback                          │
//! │  └── Card number / CVV / expiry live ONLY here (form-layer concern)    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE (Rust)                                           │
//! │  └── The same field rules, enforced before the credential store        │
//! │      or the draft profile accept a value                               │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Account Fields
// =============================================================================

/// Validates an email address shape.
///
/// ## Rules
/// - Exactly one `@`, non-empty on both sides
/// - No whitespace anywhere
/// - Domain contains an interior dot
///
/// ## Example
/// ```rust
/// use shophub_core::validation::validate_email;
///
/// assert!(validate_email("priya@example.com").is_ok());
/// assert!(validate_email("not-an-email").is_err());
/// assert!(validate_email("a b@example.com").is_err());
/// ```
pub fn validate_email(email: &str) -> ValidationResult<()> {
    let email = email.trim();

    if email.is_empty() {
        return Err(ValidationError::Required {
            field: "email".to_string(),
        });
    }

    if !is_email_shaped(email) {
        return Err(ValidationError::InvalidFormat {
            field: "email".to_string(),
            reason: "must be a valid email address".to_string(),
        });
    }

    Ok(())
}

fn is_email_shaped(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let mut parts = email.split('@');
    let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => (local, domain),
        _ => return false,
    };

    if local.is_empty() || domain.is_empty() {
        return false;
    }

    // Interior dot: at least one character on each side of it
    let chars: Vec<char> = domain.chars().collect();
    chars
        .iter()
        .enumerate()
        .any(|(i, &c)| c == '.' && i > 0 && i + 1 < chars.len())
}

/// Validates a password.
///
/// ## Rules
/// - Must not be empty
/// - Minimum 6 characters
pub fn validate_password(password: &str) -> ValidationResult<()> {
    if password.is_empty() {
        return Err(ValidationError::Required {
            field: "password".to_string(),
        });
    }

    if password.chars().count() < 6 {
        return Err(ValidationError::TooShort {
            field: "password".to_string(),
            min: 6,
        });
    }

    Ok(())
}

/// Validates a person-name field (first name, last name, city).
///
/// ## Rules
/// - Must not be empty
/// - Minimum 2 characters
/// - Letters and spaces only
pub fn validate_name(field: &str, value: &str) -> ValidationResult<()> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.chars().count() < 2 {
        return Err(ValidationError::TooShort {
            field: field.to_string(),
            min: 2,
        });
    }

    if !value.chars().all(|c| c.is_alphabetic() || c == ' ') {
        return Err(ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: "can only contain letters and spaces".to_string(),
        });
    }

    Ok(())
}

/// Validates an Indian mobile number.
///
/// ## Rules
/// - Exactly 10 digits
/// - Leading digit 6-9
///
/// ## Example
/// ```rust
/// use shophub_core::validation::validate_phone;
///
/// assert!(validate_phone("9876543210").is_ok());
/// assert!(validate_phone("1234567890").is_err()); // bad leading digit
/// assert!(validate_phone("98765").is_err());
/// ```
pub fn validate_phone(phone: &str) -> ValidationResult<()> {
    let phone = phone.trim();

    if phone.is_empty() {
        return Err(ValidationError::Required {
            field: "phone".to_string(),
        });
    }

    let valid = phone.len() == 10
        && phone.chars().all(|c| c.is_ascii_digit())
        && matches!(phone.chars().next(), Some('6'..='9'));

    if !valid {
        return Err(ValidationError::InvalidFormat {
            field: "phone".to_string(),
            reason: "must be a valid 10-digit Indian mobile number".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Shipping Fields
// =============================================================================

/// Validates a street address.
///
/// ## Rules
/// - Must not be empty
/// - Minimum 10 characters (house number + street at least)
pub fn validate_address(address: &str) -> ValidationResult<()> {
    let address = address.trim();

    if address.is_empty() {
        return Err(ValidationError::Required {
            field: "address".to_string(),
        });
    }

    if address.chars().count() < 10 {
        return Err(ValidationError::TooShort {
            field: "address".to_string(),
            min: 10,
        });
    }

    Ok(())
}

/// Validates a state name.
///
/// ## Rules
/// - Must not be empty
/// - Minimum 2 characters
pub fn validate_state(state: &str) -> ValidationResult<()> {
    let state = state.trim();

    if state.is_empty() {
        return Err(ValidationError::Required {
            field: "state".to_string(),
        });
    }

    if state.chars().count() < 2 {
        return Err(ValidationError::TooShort {
            field: "state".to_string(),
            min: 2,
        });
    }

    Ok(())
}

/// Validates an Indian PIN code.
///
/// ## Rules
/// - Exactly 6 digits
/// - Leading digit 1-9
pub fn validate_zip_code(zip: &str) -> ValidationResult<()> {
    let zip = zip.trim();

    if zip.is_empty() {
        return Err(ValidationError::Required {
            field: "zipCode".to_string(),
        });
    }

    let valid = zip.len() == 6
        && zip.chars().all(|c| c.is_ascii_digit())
        && !zip.starts_with('0');

    if !valid {
        return Err(ValidationError::InvalidFormat {
            field: "zipCode".to_string(),
            reason: "must be a valid 6-digit PIN code".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email() {
        assert!(validate_email("priya@example.com").is_ok());
        assert!(validate_email("a@b.co").is_ok());

        assert!(validate_email("").is_err());
        assert!(validate_email("plainaddress").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("priya@").is_err());
        assert!(validate_email("priya@example").is_err());
        assert!(validate_email("pri ya@example.com").is_err());
        assert!(validate_email("a@@b.co").is_err());
    }

    #[test]
    fn test_validate_password() {
        assert!(validate_password("secret1").is_ok());
        assert!(validate_password("123456").is_ok());

        assert!(validate_password("").is_err());
        assert!(validate_password("12345").is_err());
    }

    #[test]
    fn test_validate_name() {
        assert!(validate_name("firstName", "Priya").is_ok());
        assert!(validate_name("lastName", "Nair Kumar").is_ok());

        assert!(validate_name("firstName", "").is_err());
        assert!(validate_name("firstName", "P").is_err());
        assert!(validate_name("firstName", "Priya2").is_err());
    }

    #[test]
    fn test_validate_phone() {
        assert!(validate_phone("9876543210").is_ok());
        assert!(validate_phone("6123456789").is_ok());

        assert!(validate_phone("").is_err());
        assert!(validate_phone("1234567890").is_err());
        assert!(validate_phone("98765").is_err());
        assert!(validate_phone("98765432101").is_err());
        assert!(validate_phone("98765abc10").is_err());
    }

    #[test]
    fn test_validate_address() {
        assert!(validate_address("42 MG Road, Indiranagar").is_ok());
        assert!(validate_address("").is_err());
        assert!(validate_address("short").is_err());
    }

    #[test]
    fn test_validate_zip_code() {
        assert!(validate_zip_code("560038").is_ok());

        assert!(validate_zip_code("").is_err());
        assert!(validate_zip_code("056003").is_err());
        assert!(validate_zip_code("5600").is_err());
        assert!(validate_zip_code("56003x").is_err());
    }
}
