//! Platform-native sharing with fallback classification.

use std::future::Future;

use crate::i18n::Labels;
use crate::payload::SharePayload;

/// Rejection reported by the native share capability.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{name}: {message}")]
pub struct NativeShareError {
    pub name: String,
    pub message: String,
}

impl NativeShareError {
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Whether the user dismissed the share sheet.
    ///
    /// `AbortError` is the reliable signal. Some browsers only mention
    /// "cancel" in the message, which is matched as a best effort.
    pub fn is_cancellation(&self) -> bool {
        self.name == "AbortError" || self.message.contains("cancel")
    }
}

/// The platform share capability.
pub trait NativeShare {
    /// Whether the capability exists at all.
    fn is_supported(&self) -> bool;

    /// Pre-flight check. `None` when the platform has no such check.
    fn can_share(&self, payload: &SharePayload) -> Option<bool>;

    fn share(&self, payload: &SharePayload) -> impl Future<Output = Result<(), NativeShareError>>;
}

/// Why the fallback menu must be shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackReason {
    /// No native share capability.
    Unsupported,
    /// The pre-flight check rejected the payload.
    Refused,
    /// Native share failed for a reason other than cancellation.
    Failed(NativeShareError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareOutcome {
    Shared,
    /// The user cancelled. Terminal, nothing else happens.
    Cancelled,
    Fallback(FallbackReason),
}

impl ShareOutcome {
    pub fn needs_fallback(&self) -> bool {
        matches!(self, ShareOutcome::Fallback(_))
    }
}

/// Try the native share sheet and report what the host should do next.
///
/// Failures other than cancellation are logged here, once.
pub async fn share_or_fallback<S>(sharer: &S, payload: &SharePayload, labels: &Labels) -> ShareOutcome
where
    S: NativeShare,
{
    if !sharer.is_supported() {
        return ShareOutcome::Fallback(FallbackReason::Unsupported);
    }
    if sharer.can_share(payload) == Some(false) {
        return ShareOutcome::Fallback(FallbackReason::Refused);
    }

    match sharer.share(payload).await {
        Ok(()) => ShareOutcome::Shared,
        Err(e) if e.is_cancellation() => {
            tracing::debug!(error = %e, "native share cancelled");
            ShareOutcome::Cancelled
        }
        Err(e) => {
            tracing::error!(error = %e, "{}", labels.error_share);
            ShareOutcome::Fallback(FallbackReason::Failed(e))
        }
    }
}
