//! Budget input document.
//!
//! ```json
//! {
//!   "client_name": "Ana Pérez",
//!   "labor_percentage": 25,
//!   "lines": [
//!     { "material": "Tablero MDF 18mm", "quantity": 3, "unit_price_cents": 45050 }
//!   ]
//! }
//! ```

use serde::Deserialize;
use tracing::debug;

use presupuesto_core::{Budget, LaborRate, MaterialLine, Money};

use crate::error::CliError;

/// Budget as written by the user, before validation.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BudgetDocument {
    #[serde(default)]
    pub client_name: String,

    #[serde(default)]
    pub labor_percentage: Option<f64>,

    pub lines: Vec<LineDocument>,
}

/// One unvalidated material line.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LineDocument {
    pub material: String,
    pub quantity: i64,
    pub unit_price_cents: i64,
}

impl BudgetDocument {
    pub fn parse(text: &str) -> Result<Self, CliError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Validates every line and builds the budget.
    ///
    /// Labor percentage precedence: `labor_override`, then the document's
    /// own value, then `default_labor`.
    pub fn into_budget(
        self,
        labor_override: Option<f64>,
        default_labor: f64,
    ) -> Result<Budget, CliError> {
        let pct = labor_override
            .or(self.labor_percentage)
            .unwrap_or(default_labor);
        let rate = LaborRate::from_percentage(pct).map_err(CliError::InvalidLabor)?;

        let mut budget = Budget::new(self.client_name);
        budget.set_labor_rate(rate);

        for (index, line) in self.lines.into_iter().enumerate() {
            let line = MaterialLine::new(
                line.material,
                line.quantity,
                Money::from_cents(line.unit_price_cents),
            )
            .map_err(|source| CliError::InvalidLine {
                index: index + 1,
                source,
            })?;
            debug!(
                material = %line.material,
                quantity = line.quantity,
                line_total = %line.line_total(),
                "Line added"
            );
            budget.add_line(line)?;
        }

        Ok(budget)
    }
}
