//! Zakat calculation pipeline.
//!
//! Flow: headcount text → [`parse_count`] → [`compute`] → [`ShareTemplates::render`],
//! with the finished message handed to a [`crate::share::ShareTarget`].

mod calculator;
mod formatter;
mod validator;

pub use calculator::*;
pub use formatter::*;
pub use validator::*;

use crate::models::{ZakatMode, ZakatResult};

/// One screen's worth of calculator state.
///
/// Holds the latest result between a calculation and a share or reset.
/// Nothing here is ever persisted, and each screen gets its own session.
#[derive(Debug, Default)]
pub struct ZakatSession {
    result: Option<ZakatResult>,
}

impl ZakatSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the headcount text and compute the amount owed.
    ///
    /// On success the new result replaces whatever was held. On a
    /// validation error the previous result is kept, so the screen can
    /// keep showing it next to the inline warning.
    pub fn calculate(&mut self, count_text: &str, mode: ZakatMode) -> Result<f64, CountError> {
        let count = parse_count(count_text)?;
        let total_amount = compute(count, mode);
        self.result = Some(ZakatResult { mode, total_amount });
        Ok(total_amount)
    }

    /// Drop the held result.
    pub fn reset(&mut self) {
        self.result = None;
    }

    /// Latest computed total, or `0.0` when there is none.
    pub fn total(&self) -> f64 {
        self.result.map(|r| r.total_amount).unwrap_or(0.0)
    }

    /// The held result, if a calculation has succeeded since the last reset.
    pub fn result(&self) -> Option<&ZakatResult> {
        self.result.as_ref()
    }

    /// Render the share message for the held result, if any.
    pub fn share_message(&self, templates: &ShareTemplates) -> Option<String> {
        self.result.as_ref().map(|r| templates.render_result(r))
    }
}
