//! Outbound share boundary.
//!
//! The host platform owns the actual "send text to another app" facility;
//! the core's responsibility ends at handing over a finished message.

/// Platform share hook, implemented by the embedding application.
#[uniffi::export(with_foreign)]
pub trait ShareTarget: Send + Sync {
    /// Deliver a plain-text message to the platform's share facility.
    ///
    /// Must be a silent no-op, never a failure, when no application can
    /// receive the text.
    fn share_text(&self, message: String);
}

/// Hand a finished message to the platform.
pub fn dispatch(target: &dyn ShareTarget, message: &str) {
    target.share_text(message.to_string());
}
