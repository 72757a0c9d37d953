//! # Domain Types
//!
//! Value types a budget is built from.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────────┐          ┌─────────────────────┐              │
//! │  │   MaterialLine      │          │     LaborRate       │              │
//! │  │  ─────────────────  │          │  ─────────────────  │              │
//! │  │  material           │          │  bps (u32)          │              │
//! │  │  quantity           │          │  2500 = 25%         │              │
//! │  │  unit_price_cents   │          └─────────────────────┘              │
//! │  └─────────────────────┘                                                │
//! │                                                                         │
//! │  Both are validated on construction; a Budget only ever holds valid     │
//! │  lines and a valid rate.                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::validation::{
    validate_labor_percentage, validate_material_name, validate_quantity,
    validate_unit_price_cents, ValidationResult,
};

// =============================================================================
// Labor Rate
// =============================================================================

/// Labor charge as a share of the materials total, in basis points.
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 2500 bps = 25% labor on top of materials
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LaborRate(u32);

impl LaborRate {
    /// Creates a labor rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        LaborRate(bps)
    }

    /// Creates a labor rate from a user-entered percentage.
    ///
    /// ## Example
    /// ```rust
    /// use presupuesto_core::types::LaborRate;
    ///
    /// assert_eq!(LaborRate::from_percentage(25.0).unwrap().bps(), 2500);
    /// assert_eq!(LaborRate::from_percentage(8.25).unwrap().bps(), 825);
    /// assert!(LaborRate::from_percentage(-1.0).is_err());
    /// assert!(LaborRate::from_percentage(f64::NAN).is_err());
    /// ```
    pub fn from_percentage(pct: f64) -> ValidationResult<Self> {
        validate_labor_percentage(pct)?;
        Ok(LaborRate((pct * 100.0).round() as u32))
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero labor rate.
    #[inline]
    pub const fn zero() -> Self {
        LaborRate(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for LaborRate {
    fn default() -> Self {
        LaborRate::zero()
    }
}

// =============================================================================
// Material Line
// =============================================================================

/// One row of the materials table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MaterialLine {
    /// Material description as typed by the user (trimmed).
    pub material: String,

    /// Number of units.
    pub quantity: i64,

    /// Price of one unit in cents.
    pub unit_price_cents: i64,
}

impl MaterialLine {
    /// Creates a validated line.
    ///
    /// ## Rules
    /// - `material` must not be blank
    /// - `quantity` must be positive and at most `MAX_LINE_QUANTITY`
    /// - `unit_price` must not be negative (zero is allowed)
    ///
    /// ## Example
    /// ```rust
    /// use presupuesto_core::money::Money;
    /// use presupuesto_core::types::MaterialLine;
    ///
    /// let line = MaterialLine::new(" Tablero MDF ", 3, Money::from_cents(15_000)).unwrap();
    /// assert_eq!(line.material, "Tablero MDF");
    /// assert_eq!(line.line_total().cents(), 45_000);
    ///
    /// assert!(MaterialLine::new("", 3, Money::from_cents(100)).is_err());
    /// ```
    pub fn new(
        material: impl Into<String>,
        quantity: i64,
        unit_price: Money,
    ) -> ValidationResult<Self> {
        let material = material.into();
        validate_material_name(&material)?;
        validate_quantity(quantity)?;
        validate_unit_price_cents(unit_price.cents())?;

        Ok(MaterialLine {
            material: material.trim().to_string(),
            quantity,
            unit_price_cents: unit_price.cents(),
        })
    }

    /// Returns unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    /// Returns unit price × quantity.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price().multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    #[test]
    fn test_labor_rate_from_percentage() {
        assert_eq!(LaborRate::from_percentage(0.0).unwrap(), LaborRate::zero());
        assert_eq!(LaborRate::from_percentage(30.0).unwrap().bps(), 3000);
        assert_eq!(LaborRate::from_percentage(12.5).unwrap().bps(), 1250);
        assert!(LaborRate::from_percentage(-0.5).is_err());
        assert!(LaborRate::from_percentage(f64::INFINITY).is_err());
    }

    #[test]
    fn test_labor_rate_percentage_display_value() {
        let rate = LaborRate::from_bps(1250);
        assert_eq!(rate.percentage(), 12.5);
        assert!(!rate.is_zero());
        assert!(LaborRate::default().is_zero());
    }

    #[test]
    fn test_material_line_totals() {
        let line = MaterialLine::new("Bisagra", 12, Money::from_cents(350)).unwrap();
        assert_eq!(line.unit_price(), Money::from_cents(350));
        assert_eq!(line.line_total(), Money::from_cents(4_200));
    }

    #[test]
    fn test_material_line_rejects_bad_input() {
        assert!(matches!(
            MaterialLine::new("   ", 1, Money::zero()),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            MaterialLine::new("Tornillo", 0, Money::from_cents(10)),
            Err(ValidationError::MustBePositive { .. })
        ));
        assert!(matches!(
            MaterialLine::new("Tornillo", 5, Money::from_cents(-10)),
            Err(ValidationError::OutOfRange { .. })
        ));
        assert!(matches!(
            MaterialLine::new("Lote", 2, Money::from_cents(i64::MAX / 2 + 1)),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_material_line_free_item_allowed() {
        let line = MaterialLine::new("Muestra", 1, Money::zero()).unwrap();
        assert!(line.line_total().is_zero());
    }

    #[test]
    fn test_material_line_json_shape() {
        let line = MaterialLine::new("Cola blanca", 2, Money::from_cents(899)).unwrap();
        let json = serde_json::to_value(&line).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "material": "Cola blanca",
                "quantity": 2,
                "unit_price_cents": 899
            })
        );
    }
}
