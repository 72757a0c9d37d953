//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Summing line items as floats:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004                                      │
//! │                                                                         │
//! │  Spelling that total in words would index a word table with a           │
//! │  fractional number and produce garbage.                                 │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    Every amount is an i64 count of cents. The spelled total is the      │
//! │    final amount rounded half-up to whole units, so the speller only     │
//! │    ever sees integers.                                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use presupuesto_core::money::Money;
//!
//! let price = Money::from_cents(123_456);
//! assert_eq!(price.to_string(), "$1,234.56");
//! assert_eq!(price.round_to_units(), 1235);
//! assert_eq!(price.in_words().unwrap(), "mil doscientos treinta y cinco");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};
use ts_rs::TS;

use crate::error::SpellError;
use crate::spell::spell;
use crate::types::LaborRate;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in cents.
///
/// ## Design Decisions
/// - **i64 (signed)**: Differences between totals may go negative
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support, serialized as the plain cent count
///
/// ## Where Money Flows
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  MaterialLine.unit_price × quantity ──► MaterialLine.line_total         │
/// │                                                │                        │
/// │                              Σ line_total ◄────┘                        │
/// │                                   │                                     │
/// │  Budget.materials_total ──► × LaborRate ──► Budget.labor_cost           │
/// │           │                                        │                    │
/// │           └──────────────► + ◄─────────────────────┘                    │
/// │                            │                                            │
/// │                  Budget.final_total ──► round_to_units ──► spell        │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use presupuesto_core::money::Money;
    ///
    /// let price = Money::from_cents(1099);
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from whole units and cents.
    ///
    /// ## Note
    /// For negative amounts, only the major unit should be negative.
    /// `from_major_minor(-5, 50)` = -5.50, not -4.50
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-unit portion, truncated toward zero.
    #[inline]
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the cents portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use presupuesto_core::money::Money;
    ///
    /// let board = Money::from_cents(4_550);
    /// assert_eq!(board.multiply_quantity(4).cents(), 18_200);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }

    /// Returns this amount scaled by a rate, rounded half-up to the cent.
    ///
    /// ## Implementation
    /// Integer math: `(amount * bps + 5000) / 10000`, with an i128
    /// intermediate so large totals do not overflow.
    ///
    /// ## Example
    /// ```rust
    /// use presupuesto_core::money::Money;
    /// use presupuesto_core::types::LaborRate;
    ///
    /// let materials = Money::from_cents(1_000);
    /// let labor = materials.apply_rate(LaborRate::from_bps(825)); // 8.25%
    /// // 10.00 × 8.25% = 0.825 → 0.83
    /// assert_eq!(labor.cents(), 83);
    /// ```
    pub fn apply_rate(&self, rate: LaborRate) -> Money {
        let scaled = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        Money::from_cents(scaled as i64)
    }

    /// Rounds to whole currency units, half away from zero.
    ///
    /// ## Example
    /// ```rust
    /// use presupuesto_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1_049).round_to_units(), 10);
    /// assert_eq!(Money::from_cents(1_050).round_to_units(), 11);
    /// assert_eq!(Money::from_cents(-1_050).round_to_units(), -11);
    /// ```
    pub const fn round_to_units(&self) -> i64 {
        let (units, rest) = (self.0 / 100, self.0 % 100);
        if rest >= 50 {
            units + 1
        } else if rest <= -50 {
            units - 1
        } else {
            units
        }
    }

    /// Spells the amount in words after rounding to whole units.
    ///
    /// ## User Workflow
    /// ```text
    /// Total Final: $2,021.40
    ///      │
    ///      ▼
    /// round_to_units() → 2021
    ///      │
    ///      ▼
    /// spell(2021) → "dos mil veinte y uno"
    ///      │
    ///      ▼
    /// Total en Letras: dos mil veinte y uno
    /// ```
    pub fn in_words(&self) -> Result<String, SpellError> {
        spell(self.round_to_units())
    }

    /// Formats the absolute amount with thousands separators and two decimals,
    /// e.g. `1,234.56`. The sign is left to the caller.
    pub fn format_amount(&self) -> String {
        let abs = self.0.unsigned_abs();
        let digits = (abs / 100).to_string();

        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }

        format!("{}.{:02}", grouped, abs % 100)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows money the way the budget document prints it: `$1,234.56`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}${}", sign, self.format_amount())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Multiplication by i64 (for quantity calculations).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
