//! Supported share platforms.

use std::fmt;

/// A share destination offered by the fallback menu.
///
/// The set is closed; [`PlatformKey::ALL`] is also the display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PlatformKey {
    Email,
    X,
    Facebook,
    WhatsApp,
    Sms,
    LinkedIn,
    Telegram,
    Reddit,
}

impl PlatformKey {
    /// All platforms in menu order.
    pub const ALL: [PlatformKey; 8] = [
        PlatformKey::Email,
        PlatformKey::X,
        PlatformKey::Facebook,
        PlatformKey::WhatsApp,
        PlatformKey::Sms,
        PlatformKey::LinkedIn,
        PlatformKey::Telegram,
        PlatformKey::Reddit,
    ];

    /// Attribute name and wire identifier of this platform.
    pub fn as_str(self) -> &'static str {
        match self {
            PlatformKey::Email => "email",
            PlatformKey::X => "x",
            PlatformKey::Facebook => "facebook",
            PlatformKey::WhatsApp => "whatsapp",
            PlatformKey::Sms => "sms",
            PlatformKey::LinkedIn => "linkedin",
            PlatformKey::Telegram => "telegram",
            PlatformKey::Reddit => "reddit",
        }
    }

    /// Parse an identifier. Unknown identifiers yield `None`.
    pub fn parse(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|platform| platform.as_str() == key)
    }

    /// Whether this platform is only offered on mobile devices.
    pub fn mobile_only(self) -> bool {
        matches!(self, PlatformKey::Sms)
    }
}

impl fmt::Display for PlatformKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a user agent string self-reports as a mobile device.
pub fn is_mobile_user_agent(user_agent: &str) -> bool {
    let ua = user_agent.to_ascii_lowercase();
    ua.contains("mobi") || ua.contains("android")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_keys() {
        for platform in PlatformKey::ALL {
            assert_eq!(PlatformKey::parse(platform.as_str()), Some(platform));
        }
    }

    #[test]
    fn test_parse_unknown_key() {
        assert_eq!(PlatformKey::parse("myspace"), None);
        assert_eq!(PlatformKey::parse("Email"), None);
        assert_eq!(PlatformKey::parse(""), None);
    }

    #[test]
    fn test_declared_order() {
        let names: Vec<_> = PlatformKey::ALL.iter().map(|p| p.as_str()).collect();
        assert_eq!(
            names,
            ["email", "x", "facebook", "whatsapp", "sms", "linkedin", "telegram", "reddit"]
        );
    }

    #[test]
    fn test_mobile_user_agent() {
        assert!(is_mobile_user_agent(
            "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) Mobile/15E148"
        ));
        assert!(is_mobile_user_agent("Mozilla/5.0 (Linux; ANDROID 14; Pixel 8)"));
        assert!(!is_mobile_user_agent(
            "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 Chrome/126.0"
        ));
    }
}
