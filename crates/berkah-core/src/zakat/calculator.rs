//! Zakat amount computation.
//!
//! Amounts are carried as `f64` end to end; the host renders them without
//! further rounding.

use crate::models::ZakatMode;

/// Rupiah of staple food owed per person.
pub const STAPLE_FOOD_RATE: f64 = 40_000.0;

/// Rupiah owed per thousand persons in monetary mode.
pub const MONETARY_RATE_PER_THOUSAND: f64 = 2_700.0;

/// Compute the amount owed for a headcount.
///
/// Callers are expected to have screened the headcount already; a zero
/// count comes back as zero rather than an error.
pub fn compute(count: f64, mode: ZakatMode) -> f64 {
    match mode {
        ZakatMode::StapleFood => count * STAPLE_FOOD_RATE,
        ZakatMode::Monetary => count / 1_000.0 * MONETARY_RATE_PER_THOUSAND,
    }
}
