//! # Error Types
//!
//! Domain-specific error types for presupuesto-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  presupuesto-core errors (this file)                                    │
//! │  ├── SpellError       - Amount cannot be spelled in words               │
//! │  ├── ValidationError  - Input validation failures                       │
//! │  └── CoreError        - Budget-level failures (wraps both above)        │
//! │                                                                         │
//! │  presupuesto-cli errors (separate crate)                                │
//! │  └── CliError         - I/O, JSON and configuration failures            │
//! │                                                                         │
//! │  Flow: SpellError / ValidationError → CoreError → CliError → stderr     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field, amount, limit)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Spell Error
// =============================================================================

/// Reasons an amount cannot be spelled.
///
/// Both are recoverable: the caller picks a placeholder, clamps, or asks
/// again. A partial phrase is never produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SpellError {
    /// Amount is below zero.
    #[error("Cannot spell negative amount {amount}")]
    NegativeInput { amount: i64 },

    /// Amount is at or above one trillion.
    #[error("Amount {amount} is too large to spell (limit is 999999999999)")]
    TooLarge { amount: i64 },
}

// =============================================================================
// Core Error
// =============================================================================

/// Budget-level errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A summary was requested for a budget with no lines.
    ///
    /// ## User Workflow
    /// ```text
    /// Generate document
    ///      │
    ///      ▼
    /// budget.summary()
    ///      │
    ///      ▼
    /// EmptyBudget
    ///      │
    ///      ▼
    /// UI shows: "No hay datos para generar el PDF"
    /// ```
    #[error("Budget has no material lines")]
    EmptyBudget,

    /// Budget has reached its line limit.
    #[error("Budget cannot have more than {max} lines")]
    TooManyLines { max: usize },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Spelling error (wraps SpellError).
    #[error("Spelling error: {0}")]
    Spell(#[from] SpellError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// Used for early validation before any totals are computed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., not a number).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
