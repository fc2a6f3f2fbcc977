//! Copy-link control.

use std::future::Future;

use crate::i18n::Labels;

/// How long the confirmation replaces the preview.
pub const COPIED_FEEDBACK_MS: u32 = 2000;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("clipboard write failed: {0}")]
pub struct ClipboardError(pub String);

/// The system clipboard.
pub trait Clipboard {
    fn write_text(&self, text: &str) -> impl Future<Output = Result<(), ClipboardError>>;
}

/// Write the share URL, logging a failure before returning it.
pub async fn write_share_url<C>(clipboard: &C, url: &str, labels: &Labels) -> Result<(), ClipboardError>
where
    C: Clipboard,
{
    clipboard.write_text(url).await.inspect_err(|e| {
        tracing::error!(error = %e, "{}", labels.error_copy);
    })
}

/// Resting content of the control: site icon, title and URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyPreview {
    pub icon_url: String,
    pub title: String,
    pub url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyDisplay<'a> {
    Preview(&'a CopyPreview),
    Confirmation(&'static str),
}

/// Copy control state. Each successful copy bumps a generation so a revert
/// scheduled by an earlier copy can't cut a later confirmation short.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyLink {
    preview: CopyPreview,
    generation: u32,
    confirming: bool,
}

impl CopyLink {
    pub fn new(preview: CopyPreview) -> Self {
        Self {
            preview,
            generation: 0,
            confirming: false,
        }
    }

    pub fn preview(&self) -> &CopyPreview {
        &self.preview
    }

    /// Number of successful copies so far.
    pub fn generation(&self) -> u32 {
        self.generation
    }

    pub fn is_confirming(&self) -> bool {
        self.confirming
    }

    pub fn display(&self, labels: &Labels) -> CopyDisplay<'_> {
        if self.confirming {
            CopyDisplay::Confirmation(labels.copied)
        } else {
            CopyDisplay::Preview(&self.preview)
        }
    }

    /// Record a successful copy. Returns the generation to pass to
    /// [`CopyLink::revert`] after [`COPIED_FEEDBACK_MS`].
    pub fn copied(&mut self) -> u32 {
        self.generation = self.generation.wrapping_add(1);
        self.confirming = true;
        self.generation
    }

    pub fn revert(&mut self, generation: u32) -> bool {
        if !self.confirming || generation != self.generation {
            return false;
        }
        self.confirming = false;
        true
    }
}
