//! # Validation Module
//!
//! Input validation for budget data.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Input document (JSON)                                         │
//! │  └── Type validation (deserialization)                                  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                   │
//! │  ├── Material names present and bounded                                 │
//! │  ├── Quantities positive, prices within 0..=MAX_UNIT_PRICE_CENTS        │
//! │  └── Labor percentage finite and non-negative                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Speller range guard (spell.rs)                                │
//! │  └── Final total in 0..10^12 whole units                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use presupuesto_core::validation::{validate_material_name, validate_quantity};
//!
//! validate_material_name("Tablero MDF 18mm").unwrap();
//! validate_quantity(4).unwrap();
//! ```

use crate::error::ValidationError;
use crate::{
    MAX_BUDGET_LINES, MAX_LABOR_PERCENTAGE, MAX_LINE_QUANTITY, MAX_MATERIAL_NAME_LEN,
    MAX_UNIT_PRICE_CENTS,
};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a material description.
///
/// ## Rules
/// - Must not be empty after trimming
/// - At most `MAX_MATERIAL_NAME_LEN` characters (not bytes; names carry accents)
///
/// ## Example
/// ```rust
/// use presupuesto_core::validation::validate_material_name;
///
/// assert!(validate_material_name("Pegamento de contacto").is_ok());
/// assert!(validate_material_name("").is_err());
/// assert!(validate_material_name(&"ñ".repeat(300)).is_err());
/// ```
pub fn validate_material_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "material".to_string(),
        });
    }

    if name.chars().count() > MAX_MATERIAL_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "material".to_string(),
            max: MAX_MATERIAL_NAME_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a line quantity.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed `MAX_LINE_QUANTITY`
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_LINE_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_LINE_QUANTITY,
        });
    }

    Ok(())
}

/// Validates a unit price in cents.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Must not exceed `MAX_UNIT_PRICE_CENTS`
/// - Zero is allowed (samples, leftovers)
///
/// ## Example
/// ```rust
/// use presupuesto_core::validation::validate_unit_price_cents;
///
/// assert!(validate_unit_price_cents(1099).is_ok());
/// assert!(validate_unit_price_cents(0).is_ok());
/// assert!(validate_unit_price_cents(-100).is_err());
/// assert!(validate_unit_price_cents(i64::MAX).is_err());
/// ```
pub fn validate_unit_price_cents(cents: i64) -> ValidationResult<()> {
    if !(0..=MAX_UNIT_PRICE_CENTS).contains(&cents) {
        return Err(ValidationError::OutOfRange {
            field: "unit_price".to_string(),
            min: 0,
            max: MAX_UNIT_PRICE_CENTS,
        });
    }

    Ok(())
}

/// Validates a labor percentage as typed by the user.
///
/// ## Rules
/// - Must be a finite number
/// - Must be between 0 and `MAX_LABOR_PERCENTAGE`
///
/// ## User Workflow
/// ```text
/// User enters labor percentage: 25
///      │
///      ▼
/// validate_labor_percentage(25.0) ← THIS FUNCTION
///      │
///      ├── NaN / infinite? → "Porcentaje inválido"
///      ├── negative?       → "Porcentaje inválido"
///      │
///      └── OK → LaborRate(2500)
/// ```
pub fn validate_labor_percentage(pct: f64) -> ValidationResult<()> {
    if !pct.is_finite() {
        return Err(ValidationError::InvalidFormat {
            field: "labor_percentage".to_string(),
            reason: "must be a number".to_string(),
        });
    }

    if !(0.0..=MAX_LABOR_PERCENTAGE).contains(&pct) {
        return Err(ValidationError::OutOfRange {
            field: "labor_percentage".to_string(),
            min: 0,
            max: MAX_LABOR_PERCENTAGE as i64,
        });
    }

    Ok(())
}

// =============================================================================
// Collection Validators
// =============================================================================

/// Validates that one more line fits in a budget.
///
/// ## Rules
/// - Current line count must be below `MAX_BUDGET_LINES`
pub fn validate_line_count(current_lines: usize) -> ValidationResult<()> {
    if current_lines >= MAX_BUDGET_LINES {
        return Err(ValidationError::OutOfRange {
            field: "budget lines".to_string(),
            min: 0,
            max: MAX_BUDGET_LINES as i64,
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
    fn test_validate_material_name() {
        assert!(validate_material_name("Tablero MDF").is_ok());
        assert!(validate_material_name("Barniz poliuretánico").is_ok());

        assert!(validate_material_name("").is_err());
        assert!(validate_material_name("   ").is_err());
        assert!(validate_material_name(&"A".repeat(MAX_MATERIAL_NAME_LEN + 1)).is_err());
        assert!(validate_material_name(&"é".repeat(MAX_MATERIAL_NAME_LEN)).is_ok());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(MAX_LINE_QUANTITY).is_ok());

        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
        assert!(validate_quantity(MAX_LINE_QUANTITY + 1).is_err());
    }

    #[test]
    fn test_validate_unit_price_cents() {
        assert!(validate_unit_price_cents(0).is_ok());
        assert!(validate_unit_price_cents(1099).is_ok());
        assert!(validate_unit_price_cents(MAX_UNIT_PRICE_CENTS).is_ok());

        assert!(validate_unit_price_cents(-1).is_err());
        assert!(validate_unit_price_cents(MAX_UNIT_PRICE_CENTS + 1).is_err());
        assert!(validate_unit_price_cents(i64::MAX / 2 + 1).is_err());
        assert!(validate_unit_price_cents(i64::MAX).is_err());
    }

    #[test]
    fn test_validate_labor_percentage() {
        assert!(validate_labor_percentage(0.0).is_ok());
        assert!(validate_labor_percentage(35.5).is_ok());
        assert!(validate_labor_percentage(MAX_LABOR_PERCENTAGE).is_ok());

        assert!(validate_labor_percentage(-0.01).is_err());
        assert!(validate_labor_percentage(MAX_LABOR_PERCENTAGE + 1.0).is_err());
        assert!(matches!(
            validate_labor_percentage(f64::NAN),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_validate_line_count() {
        assert!(validate_line_count(0).is_ok());
        assert!(validate_line_count(MAX_BUDGET_LINES - 1).is_ok());
        assert!(validate_line_count(MAX_BUDGET_LINES).is_err());
    }
}
