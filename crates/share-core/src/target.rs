//! Outbound share links per platform.

use urlencoding::encode;

use crate::payload::SharePayload;
use crate::platform::PlatformKey;

/// Build the share/compose link for `platform`.
pub fn share_href(platform: PlatformKey, payload: &SharePayload) -> String {
    let SharePayload { title, text, url } = payload;
    match platform {
        PlatformKey::Email => format!(
            "mailto:?subject={}&body={}",
            encode(title),
            encode(&format!("{text}\n{url}"))
        ),
        PlatformKey::Sms => format!("sms:?body={}", encode(&format!("{text} {url}"))),
        PlatformKey::X => format!(
            "https://x.com/intent/tweet?text={}",
            encode(&format!("{text} {url}"))
        ),
        PlatformKey::Facebook => {
            format!("https://www.facebook.com/sharer/sharer.php?u={}", encode(url))
        }
        PlatformKey::WhatsApp => format!(
            "https://api.whatsapp.com/send?text={}",
            encode(&format!("{text} - {url}"))
        ),
        PlatformKey::LinkedIn => format!(
            "https://www.linkedin.com/sharing/share-offsite/?url={}",
            encode(url)
        ),
        PlatformKey::Telegram => format!(
            "https://t.me/share/url?url={}&text={}",
            encode(url),
            encode(text)
        ),
        PlatformKey::Reddit => format!(
            "https://www.reddit.com/submit?url={}&title={}",
            encode(url),
            encode(title)
        ),
    }
}

/// Like [`share_href`] for a raw identifier; unknown identifiers have no link.
pub fn share_href_for_key(key: &str, payload: &SharePayload) -> Option<String> {
    PlatformKey::parse(key).map(|platform| share_href(platform, payload))
}
