//! Plain-text rendering of a budget summary.
//!
//! Mirrors the lines of the printed budget; layout beyond column padding is
//! left to whatever consumes the text.

use std::fmt;

use presupuesto_core::BudgetSummary;

const TITLE: &str = "Presupuesto de Carpintería";

/// Text view of a summary, laid out as the lines of the printed budget.
pub struct TextReport<'a>(pub &'a BudgetSummary);

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary = self.0;

        writeln!(f, "{TITLE}")?;
        writeln!(f, "Nombre del Cliente: {}", summary.client_name)?;
        writeln!(f)?;
        writeln!(
            f,
            "{:<32} {:>9} {:>16} {:>16}",
            "Material", "Cantidad", "Precio Unitario", "Precio Total"
        )?;
        for line in &summary.lines {
            // Money's Display ignores width, so pad the rendered strings.
            writeln!(
                f,
                "{:<32} {:>9} {:>16} {:>16}",
                line.material,
                line.quantity,
                line.unit_price.to_string(),
                line.line_total.to_string()
            )?;
        }
        writeln!(f)?;
        writeln!(f, "Valor de Materiales: {}", summary.materials_total)?;
        writeln!(f, "Valor de la Mano de Obra: {}", summary.labor_cost)?;
        writeln!(f, "Total Final: {}", summary.final_total)?;
        writeln!(f, "Total en Letras: {}", summary.total_in_words)
    }
}

/// Renders the summary as the lines of the printed budget.
pub fn render_text(summary: &BudgetSummary) -> String {
    TextReport(summary).to_string()
}
