//! Share payload.

/// The `{title, text, url}` bundle handed to every share mechanism.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
    pub url: String,
}

impl SharePayload {
    pub fn new(title: impl Into<String>, text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
            url: url.into(),
        }
    }
}
