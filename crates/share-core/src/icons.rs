//! Icon tables and site icon discovery.

use crate::platform::PlatformKey;

/// Keys of the hosted icon table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKey {
    Platform(PlatformKey),
    Copy,
    Website,
}

impl From<PlatformKey> for IconKey {
    fn from(platform: PlatformKey) -> Self {
        IconKey::Platform(platform)
    }
}

/// Hosted icon URL for a platform or UI element.
pub fn share_icon(key: impl Into<IconKey>) -> &'static str {
    match key.into() {
        IconKey::Platform(PlatformKey::X) => "https://browserux.com/commons/logos/x.png",
        IconKey::Platform(PlatformKey::Facebook) => {
            "https://browserux.com/commons/logos/facebook.png"
        }
        IconKey::Platform(PlatformKey::WhatsApp) => {
            "https://browserux.com/commons/logos/whatsapp.png"
        }
        IconKey::Platform(PlatformKey::Email) => "https://browserux.com/commons/logos/mail.png",
        IconKey::Platform(PlatformKey::Sms) => "https://browserux.com/commons/logos/sms.png",
        IconKey::Platform(PlatformKey::LinkedIn) => {
            "https://browserux.com/commons/logos/linkedin.png"
        }
        IconKey::Platform(PlatformKey::Telegram) => {
            "https://browserux.com/commons/logos/telegram.png"
        }
        IconKey::Platform(PlatformKey::Reddit) => "https://browserux.com/commons/logos/reddit.png",
        IconKey::Copy => "https://browserux.com/commons/logos/copy.png",
        IconKey::Website => "https://browserux.com/commons/logos/website.png",
    }
}

/// A `<link rel=...>` element as seen by icon discovery.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkTag {
    pub rel: String,
    pub mime_type: String,
    pub href: String,
}

impl LinkTag {
    fn has_icon_rel(&self) -> bool {
        self.rel.contains("icon")
    }
}

/// Best available site icon: SVG icon, then Apple touch icon, then any
/// other favicon, then `fallback`. Links without an `href` never match.
pub fn best_icon_url(links: &[LinkTag], fallback: &str) -> String {
    let candidates = || links.iter().filter(|link| !link.href.is_empty());

    candidates()
        .find(|link| link.has_icon_rel() && link.mime_type == "image/svg+xml")
        .or_else(|| candidates().find(|link| link.rel == "apple-touch-icon"))
        .or_else(|| candidates().find(|link| link.has_icon_rel()))
        .map_or_else(|| fallback.to_string(), |link| link.href.clone())
}
