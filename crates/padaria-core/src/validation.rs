//! # Validation Module
//!
//! Input validation utilities for Padaria SA.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend forms                                                │
//! │  ├── THIS MODULE: required/format/range checks                         │
//! │  └── Immediate user feedback                                            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Entity store                                                  │
//! │  └── Trusts its inputs - performs NO independent validation             │
//! │                                                                         │
//! │  The store-trusts-validated-input contract means these functions are   │
//! │  the only gate between a form field and persisted data.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use padaria_core::validation::{validate_cnpj, validate_quantity};
//!
//! assert!(validate_cnpj("12.345.678/0001-90").is_ok());
//! assert!(validate_quantity(5).is_ok());
//! ```

use crate::error::{ValidationError, ValidationResult};

// =============================================================================
// String Validators
// =============================================================================

/// Validates an entity display name.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - Must be at most 200 characters
pub fn validate_entity_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > 200 {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: 200,
        });
    }

    Ok(())
}

/// Validates a CNPJ string format: `##.###.###/####-##`.
///
/// Format only - no check-digit arithmetic, matching the original
/// system's behavior.
///
/// ## Example
/// ```rust
/// use padaria_core::validation::validate_cnpj;
///
/// assert!(validate_cnpj("12.345.678/0001-90").is_ok());
/// assert!(validate_cnpj("12345678000190").is_err());
/// ```
pub fn validate_cnpj(cnpj: &str) -> ValidationResult<()> {
    let cnpj = cnpj.trim();

    if cnpj.is_empty() {
        return Err(ValidationError::Required {
            field: "cnpj".to_string(),
        });
    }

    // Positions of the punctuation in ##.###.###/####-##
    let well_formed = cnpj.len() == 18
        && cnpj.chars().enumerate().all(|(i, c)| match i {
            2 | 6 => c == '.',
            10 => c == '/',
            15 => c == '-',
            _ => c.is_ascii_digit(),
        });

    if !well_formed {
        return Err(ValidationError::InvalidFormat {
            field: "cnpj".to_string(),
            reason: "expected ##.###.###/####-##".to_string(),
        });
    }

    Ok(())
}

/// Validates an email address.
///
/// ## Rules
/// - Must contain exactly one `@` with text on both sides
/// - The domain part must contain a dot
pub fn validate_email(email: &str) -> ValidationResult<()> {
    let email = email.trim();

    if email.is_empty() {
        return Err(ValidationError::Required {
            field: "email".to_string(),
        });
    }

    let mut parts = email.splitn(2, '@');
    let local = parts.next().unwrap_or("");
    let domain = parts.next().unwrap_or("");

    if local.is_empty() || domain.is_empty() || !domain.contains('.') || domain.contains('@') {
        return Err(ValidationError::InvalidFormat {
            field: "email".to_string(),
            reason: "expected local@domain.tld".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a price in centavos.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (promotional items)
///
/// ## Example
/// ```rust
/// use padaria_core::validation::validate_price_cents;
///
/// assert!(validate_price_cents(35).is_ok());   // R$ 0.35
/// assert!(validate_price_cents(0).is_ok());    // Free item
/// assert!(validate_price_cents(-100).is_err()); // Invalid
/// ```
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates an expense amount in centavos.
///
/// ## Rules
/// - Must be positive (> 0); zero-value expenses are meaningless
pub fn validate_amount_cents(cents: i64) -> ValidationResult<()> {
    if cents <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "amount".to_string(),
        });
    }

    Ok(())
}

/// Validates a sale line quantity.
///
/// ## Rules
/// - Must be positive (> 0)
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates a stock level.
///
/// ## Rules
/// - Must be non-negative (>= 0); the derived status relies on this
pub fn validate_stock(stock: i64) -> ValidationResult<()> {
    if stock < 0 {
        return Err(ValidationError::OutOfRange {
            field: "stock".to_string(),
            min: 0,
            max: i64::MAX,
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
    fn test_validate_entity_name() {
        assert!(validate_entity_name("Pão Francês").is_ok());
        assert!(validate_entity_name("").is_err());
        assert!(validate_entity_name("   ").is_err());
        assert!(validate_entity_name(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_cnpj() {
        assert!(validate_cnpj("12.345.678/0001-90").is_ok());
        assert!(validate_cnpj("98.765.432/0001-10").is_ok());

        assert!(validate_cnpj("").is_err());
        assert!(validate_cnpj("12345678000190").is_err());
        assert!(validate_cnpj("12.345.678/0001-9").is_err());
        assert!(validate_cnpj("12.345.678-0001/90").is_err());
        assert!(validate_cnpj("ab.cde.fgh/ijkl-mn").is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("vendas@moinhosp.com.br").is_ok());
        assert!(validate_email("").is_err());
        assert!(validate_email("no-at-sign").is_err());
        assert!(validate_email("@domain.com").is_err());
        assert!(validate_email("user@nodot").is_err());
    }

    #[test]
    fn test_validate_price_cents() {
        assert!(validate_price_cents(0).is_ok());
        assert!(validate_price_cents(890).is_ok());
        assert!(validate_price_cents(-100).is_err());
    }

    #[test]
    fn test_validate_amount_cents() {
        assert!(validate_amount_cents(1).is_ok());
        assert!(validate_amount_cents(0).is_err());
        assert!(validate_amount_cents(-1).is_err());
    }

    #[test]
    fn test_validate_quantity_and_stock() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(0).is_err());

        assert!(validate_stock(0).is_ok());
        assert!(validate_stock(150).is_ok());
        assert!(validate_stock(-1).is_err());
    }
}
