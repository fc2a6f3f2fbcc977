//! Platform entries of the fallback menu.

use crate::config::ShareConfig;
use crate::i18n::Labels;
use crate::icons::share_icon;
use crate::payload::SharePayload;
use crate::platform::PlatformKey;
use crate::target::share_href;

/// One rendered platform entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformLink {
    pub platform: PlatformKey,
    pub href: String,
    pub label: &'static str,
    pub icon: &'static str,
}

impl PlatformLink {
    pub fn new(platform: PlatformKey, payload: &SharePayload, labels: &Labels) -> Self {
        let label = match platform {
            PlatformKey::Email => labels.email,
            PlatformKey::Sms => labels.sms,
            PlatformKey::X => "X",
            PlatformKey::Facebook => "Facebook",
            PlatformKey::WhatsApp => "WhatsApp",
            PlatformKey::LinkedIn => "LinkedIn",
            PlatformKey::Telegram => "Telegram",
            PlatformKey::Reddit => "Reddit",
        };
        Self {
            platform,
            href: share_href(platform, payload),
            label,
            icon: share_icon(platform),
        }
    }
}

/// Entries to render, in declared platform order.
pub fn platform_links(
    config: &ShareConfig,
    payload: &SharePayload,
    labels: &Labels,
    is_mobile: bool,
) -> Vec<PlatformLink> {
    PlatformKey::ALL
        .into_iter()
        .filter(|&platform| config.is_enabled(platform))
        .filter(|platform| is_mobile || !platform.mobile_only())
        .map(|platform| PlatformLink::new(platform, payload, labels))
        .collect()
}
