//! Share message rendering.

use crate::models::{ZakatMode, ZakatResult};

/// Placeholder replaced with the computed amount.
pub const AMOUNT_PLACEHOLDER: &str = "{amount}";

/// Localized message templates, one per mode.
///
/// The texts belong to the host UI's string resources and are injected
/// here; the core never hard-codes message wording.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareTemplates {
    /// Template for monetary amounts.
    pub monetary: String,
    /// Template for staple-food amounts.
    pub staple_food: String,
}

impl ShareTemplates {
    pub fn new(monetary: impl Into<String>, staple_food: impl Into<String>) -> Self {
        Self {
            monetary: monetary.into(),
            staple_food: staple_food.into(),
        }
    }

    /// Render the message for a mode and amount.
    ///
    /// Pure mapping: the same `(mode, amount)` always yields the same
    /// string. A template without the placeholder passes through unchanged.
    pub fn render(&self, mode: ZakatMode, total_amount: f64) -> String {
        let template = match mode {
            ZakatMode::Monetary => &self.monetary,
            ZakatMode::StapleFood => &self.staple_food,
        };
        template.replace(AMOUNT_PLACEHOLDER, &format_amount(total_amount))
    }

    /// Render the message for a finished calculation.
    pub fn render_result(&self, result: &ZakatResult) -> String {
        self.render(result.mode, result.total_amount)
    }
}

/// Amounts print as plain decimals: whole values without a fraction part,
/// fractional values as-is.
fn format_amount(amount: f64) -> String {
    format!("{}", amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn templates() -> ShareTemplates {
        ShareTemplates::new(
            "Zakat yang harus dibayar: Rp{amount}",
            "Zakat yang harus dibayar: {amount} gram beras",
        )
    }

    #[test]
    fn test_monetary_substitution() {
        let message = templates().render(ZakatMode::Monetary, 2700.0);
        assert_eq!(message, "Zakat yang harus dibayar: Rp2700");
    }

    #[test]
    fn test_staple_food_substitution() {
        let message = templates().render(ZakatMode::StapleFood, 120_000.0);
        assert_eq!(message, "Zakat yang harus dibayar: 120000 gram beras");
    }

    #[test]
    fn test_fractional_amounts_keep_fraction() {
        let message = templates().render(ZakatMode::Monetary, 2.7);
        assert_eq!(message, "Zakat yang harus dibayar: Rp2.7");
    }

    #[test]
    fn test_template_without_placeholder_passes_through() {
        let templates = ShareTemplates::new("no placeholder here", "none here either");
        assert_eq!(
            templates.render(ZakatMode::Monetary, 27.0),
            "no placeholder here"
        );
    }

    #[test]
    fn test_render_result_uses_result_mode() {
        let result = ZakatResult {
            mode: ZakatMode::StapleFood,
            total_amount: 40_000.0,
        };
        assert_eq!(
            templates().render_result(&result),
            "Zakat yang harus dibayar: 40000 gram beras"
        );
    }

    proptest! {
        #[test]
        fn render_is_idempotent(amount in 0.0f64..1e12) {
            let t = templates();
            let first = t.render(ZakatMode::Monetary, amount);
            let second = t.render(ZakatMode::Monetary, amount);
            prop_assert_eq!(first, second);
        }
    }
}
