//! # Budget Module
//!
//! Aggregates material lines into the totals printed on a carpentry budget.
//!
//! ## Totals Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Budget Totals                                    │
//! │                                                                         │
//! │  add_line() ──► lines ──► Σ line_total ──► materials_total              │
//! │                                                 │                       │
//! │  set_labor_rate() ──► labor_rate ──► × ─────────┤                       │
//! │                                      │          │                       │
//! │                                      ▼          ▼                       │
//! │                                 labor_cost + materials_total            │
//! │                                      │                                  │
//! │                                      ▼                                  │
//! │                                 final_total ──► total_in_words          │
//! │                                                                         │
//! │  summary() freezes all of the above into a serialisable snapshot.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use presupuesto_core::{Budget, LaborRate, MaterialLine, Money};
//!
//! let mut budget = Budget::new("Ana Pérez");
//! budget.add_line(MaterialLine::new("Tablero MDF", 2, Money::from_cents(80_000)).unwrap()).unwrap();
//! budget.set_labor_rate(LaborRate::from_percentage(25.0).unwrap());
//!
//! assert_eq!(budget.materials_total().cents(), 160_000);
//! assert_eq!(budget.labor_cost().cents(), 40_000);
//! assert_eq!(budget.final_total().cents(), 200_000);
//! assert_eq!(budget.total_in_words().unwrap(), "dos mil");
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::spell::OUT_OF_RANGE_PLACEHOLDER;
use crate::types::{LaborRate, MaterialLine};
use crate::validation::validate_line_count;
use crate::MAX_BUDGET_LINES;

// =============================================================================
// Budget
// =============================================================================

/// A carpentry budget: client, material lines and labor rate.
///
/// ## Invariants
/// - Every line was validated by [`MaterialLine::new`]
/// - At most `MAX_BUDGET_LINES` lines
/// - Lines keep insertion order (the document lists them as entered)
#[derive(Debug, Clone, Default, Serialize, TS)]
#[ts(export)]
pub struct Budget {
    client_name: String,
    lines: Vec<MaterialLine>,
    labor_rate: LaborRate,
}

impl Budget {
    /// Creates an empty budget with no labor charge.
    pub fn new(client_name: impl Into<String>) -> Self {
        Budget {
            client_name: client_name.into().trim().to_string(),
            lines: Vec::new(),
            labor_rate: LaborRate::zero(),
        }
    }

    /// Appends a line.
    ///
    /// ## Errors
    /// `CoreError::TooManyLines` once `MAX_BUDGET_LINES` is reached.
    pub fn add_line(&mut self, line: MaterialLine) -> CoreResult<()> {
        validate_line_count(self.lines.len()).map_err(|_| CoreError::TooManyLines {
            max: MAX_BUDGET_LINES,
        })?;
        self.lines.push(line);
        Ok(())
    }

    /// Replaces the labor rate; totals are recomputed on the next read.
    pub fn set_labor_rate(&mut self, rate: LaborRate) {
        self.labor_rate = rate;
    }

    pub fn client_name(&self) -> &str {
        &self.client_name
    }

    pub fn lines(&self) -> &[MaterialLine] {
        &self.lines
    }

    pub fn labor_rate(&self) -> LaborRate {
        self.labor_rate
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of all line totals.
    pub fn materials_total(&self) -> Money {
        self.lines.iter().map(MaterialLine::line_total).sum()
    }

    /// Materials total scaled by the labor rate, rounded half-up to the cent.
    pub fn labor_cost(&self) -> Money {
        self.materials_total().apply_rate(self.labor_rate)
    }

    /// Materials plus labor.
    pub fn final_total(&self) -> Money {
        let materials = self.materials_total();
        materials + materials.apply_rate(self.labor_rate)
    }

    /// The final total in words, rounded to whole units first.
    ///
    /// ## Errors
    /// `CoreError::Spell` when the rounded total is outside the speller's range.
    pub fn total_in_words(&self) -> CoreResult<String> {
        Ok(self.final_total().in_words()?)
    }

    /// Freezes the budget into a document-ready snapshot.
    ///
    /// A total too large to spell does not fail the summary; the words are
    /// replaced by [`OUT_OF_RANGE_PLACEHOLDER`] and `words_in_range` is false.
    ///
    /// ## Errors
    /// `CoreError::EmptyBudget` when there are no lines.
    pub fn summary(&self) -> CoreResult<BudgetSummary> {
        if self.is_empty() {
            return Err(CoreError::EmptyBudget);
        }

        let materials_total = self.materials_total();
        let labor_cost = materials_total.apply_rate(self.labor_rate);
        let final_total = materials_total + labor_cost;

        let (total_in_words, words_in_range) = match final_total.in_words() {
            Ok(words) => (words, true),
            Err(_) => (OUT_OF_RANGE_PLACEHOLDER.to_string(), false),
        };

        Ok(BudgetSummary {
            client_name: self.client_name.clone(),
            lines: self.lines.iter().map(SummaryLine::from).collect(),
            labor_rate_bps: self.labor_rate.bps(),
            materials_total,
            labor_cost,
            final_total,
            total_in_words,
            words_in_range,
        })
    }
}

// =============================================================================
// Summary
// =============================================================================

/// One priced row of a [`BudgetSummary`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SummaryLine {
    pub material: String,
    pub quantity: i64,
    pub unit_price: Money,
    pub line_total: Money,
}

impl From<&MaterialLine> for SummaryLine {
    fn from(line: &MaterialLine) -> Self {
        SummaryLine {
            material: line.material.clone(),
            quantity: line.quantity,
            unit_price: line.unit_price(),
            line_total: line.line_total(),
        }
    }
}

/// Everything the printed budget shows, computed once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BudgetSummary {
    pub client_name: String,
    pub lines: Vec<SummaryLine>,
    pub labor_rate_bps: u32,
    pub materials_total: Money,
    pub labor_cost: Money,
    pub final_total: Money,
    /// "Total en Letras"
    pub total_in_words: String,
    pub words_in_range: bool,
}

// =============================================================================
// Unit Tests
// =============================================================================
