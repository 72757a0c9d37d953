//! # presupuesto-core: Pure Budget Logic and Amount Spelling
//!
//! This crate holds everything a carpentry budget computes: line totals, the
//! labor charge, the final total and the "Total en Letras" spelling of that
//! total. It has zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Presupuesto Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    presupuesto-cli                              │   │
//! │  │    env config ──► read budget JSON ──► print summary            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ presupuesto-core (THIS CRATE) ★                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   spell   │  │   money   │  │  budget   │  │ validation│  │   │
//! │  │   │ Magnitude │  │   Money   │  │  Budget   │  │   rules   │  │   │
//! │  │   │   Tier    │  │ LaborRate │  │  Summary  │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FILES • NO NETWORK • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`spell`] - Spanish cardinal spelling of whole amounts
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`types`] - Labor rate and material lines
//! - [`budget`] - Totals aggregation and document summary
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: File system and network access are FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64)
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use presupuesto_core::{spell, Money};
//!
//! assert_eq!(spell(2_500_000).unwrap(), "dos millones quinientos mil");
//!
//! let total = Money::from_cents(202_140); // $2,021.40
//! assert_eq!(total.in_words().unwrap(), "dos mil veinte y uno");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod budget;
pub mod error;
pub mod money;
pub mod spell;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use budget::{Budget, BudgetSummary, SummaryLine};
pub use error::{CoreError, CoreResult, SpellError, ValidationError};
pub use money::Money;
pub use spell::{
    spell, spell_or_placeholder, MagnitudeTier, OUT_OF_RANGE_PLACEHOLDER, SPELL_UPPER_BOUND,
};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum lines allowed in a single budget
///
/// ## Business Reason
/// Keeps the printed materials table within a few pages.
pub const MAX_BUDGET_LINES: usize = 200;

/// Maximum quantity on a single line
///
/// ## Business Reason
/// Catches slips such as typing a price into the quantity field.
pub const MAX_LINE_QUANTITY: i64 = 99_999;

/// Maximum length of a material description, in characters.
pub const MAX_MATERIAL_NAME_LEN: usize = 200;

/// Maximum labor percentage accepted (labor at ten times the materials).
pub const MAX_LABOR_PERCENTAGE: f64 = 1000.0;

/// Maximum unit price, in cents (100,000,000.00).
///
/// ## Business Reason
/// Bounds every budget total: a full budget of maximum lines at maximum
/// quantity and price, plus maximum labor, still fits in an i64 of cents.
pub const MAX_UNIT_PRICE_CENTS: i64 = 10_000_000_000;

// Largest final total is materials × (1 + MAX_LABOR_PERCENTAGE / 100) = × 11.
const _: () = assert!(
    (MAX_BUDGET_LINES as i128)
        * (MAX_LINE_QUANTITY as i128)
        * (MAX_UNIT_PRICE_CENTS as i128)
        * 11
        < i64::MAX as i128
);
