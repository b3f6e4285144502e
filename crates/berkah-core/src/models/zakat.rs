//! Zakat calculation models.

use serde::{Deserialize, Serialize};

/// Which conversion applies to a calculation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ZakatMode {
    /// Zakat paid out as a currency amount.
    Monetary,
    /// Zakat paid out as staple food, valued per person.
    StapleFood,
}

/// Outcome of one successful calculation.
///
/// Never persisted: the session replaces it on the next calculation and
/// drops it on reset.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ZakatResult {
    /// Mode the calculation ran under.
    pub mode: ZakatMode,
    /// Amount owed, in the unit implied by the mode.
    pub total_amount: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_carries_mode() {
        let result = ZakatResult {
            mode: ZakatMode::StapleFood,
            total_amount: 120_000.0,
        };
        assert_eq!(result.mode, ZakatMode::StapleFood);
        assert_eq!(result.total_amount, 120_000.0);
    }
}
