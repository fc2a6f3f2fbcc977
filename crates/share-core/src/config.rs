//! Host configuration read from element attributes.

use std::collections::BTreeSet;

use crate::i18n::Lang;
use crate::platform::PlatformKey;

/// Explicit payload sources supplied by the page author.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShareOverrides {
    pub title: Option<String>,
    pub text: Option<String>,
    pub url: Option<String>,
    /// Manifest location used instead of `<link rel="manifest">`.
    pub manifest_src: Option<String>,
}

impl ShareOverrides {
    /// Whether resolving the payload may need the web manifest.
    pub fn needs_manifest(&self) -> bool {
        self.title.is_none() || self.text.is_none()
    }
}

/// Configuration of one share button, read once when the host activates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShareConfig {
    /// Raw `lang` attribute.
    pub lang: Option<String>,
    pub overrides: ShareOverrides,
    /// Render into the host element instead of a shadow root.
    pub no_shadow: bool,
    pub disabled: BTreeSet<PlatformKey>,
    /// Custom properties (`--name`, value) declared inline on the host.
    pub style_vars: Vec<(String, String)>,
}

impl ShareConfig {
    /// Build a configuration from an attribute getter.
    ///
    /// A platform is disabled only by the literal value `"false"`.
    pub fn from_attributes<F>(attr: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let disabled = PlatformKey::ALL
            .into_iter()
            .filter(|platform| attr(platform.as_str()).as_deref() == Some("false"))
            .collect();

        Self {
            lang: attr("lang"),
            overrides: ShareOverrides {
                title: attr("title"),
                text: attr("text"),
                url: attr("url"),
                manifest_src: attr("manifest-src"),
            },
            no_shadow: attr("no-shadow").is_some(),
            disabled,
            style_vars: Vec::new(),
        }
    }

    /// Attach the host's inline declarations, keeping custom properties only.
    ///
    /// `declarations` are the (name, value) pairs the browser parsed from the
    /// host's `style`; isolated render roots don't inherit them, so they are
    /// re-applied by hand.
    #[must_use]
    pub fn with_style_vars<I>(mut self, declarations: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        self.style_vars = custom_properties(declarations);
        self
    }

    pub fn is_enabled(&self, platform: PlatformKey) -> bool {
        !self.disabled.contains(&platform)
    }

    pub fn resolve_lang(&self, document_lang: Option<&str>) -> Lang {
        Lang::resolve(self.lang.as_deref(), document_lang)
    }
}

/// Keep the `--custom-property` declarations that carry a value.
pub fn custom_properties<I>(declarations: I) -> Vec<(String, String)>
where
    I: IntoIterator<Item = (String, String)>,
{
    declarations
        .into_iter()
        .filter_map(|(name, value)| {
            let value = value.trim();
            (name.starts_with("--") && !value.is_empty()).then(|| (name, value.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn attrs(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_from_attributes() {
        let map = attrs(&[
            ("lang", "fr"),
            ("title", "A"),
            ("url", "https://e.x"),
            ("manifest-src", "/app.webmanifest"),
            ("no-shadow", ""),
            ("whatsapp", "false"),
            ("sms", "false"),
            ("facebook", "true"),
        ]);
        let config = ShareConfig::from_attributes(|name| map.get(name).cloned());

        assert_eq!(config.lang.as_deref(), Some("fr"));
        assert_eq!(config.overrides.title.as_deref(), Some("A"));
        assert_eq!(config.overrides.text, None);
        assert_eq!(config.overrides.url.as_deref(), Some("https://e.x"));
        assert_eq!(
            config.overrides.manifest_src.as_deref(),
            Some("/app.webmanifest")
        );
        assert!(config.no_shadow);
        assert!(!config.is_enabled(PlatformKey::WhatsApp));
        assert!(!config.is_enabled(PlatformKey::Sms));
        assert!(config.is_enabled(PlatformKey::Facebook));
        assert!(config.is_enabled(PlatformKey::Email));
    }

    #[test]
    fn test_only_literal_false_disables() {
        let map = attrs(&[("x", "False"), ("reddit", "0"), ("email", "false")]);
        let config = ShareConfig::from_attributes(|name| map.get(name).cloned());

        assert!(config.is_enabled(PlatformKey::X));
        assert!(config.is_enabled(PlatformKey::Reddit));
        assert!(!config.is_enabled(PlatformKey::Email));
    }

    #[test]
    fn test_needs_manifest() {
        let mut overrides = ShareOverrides {
            title: Some("A".into()),
            text: Some(String::new()),
            ..Default::default()
        };
        assert!(!overrides.needs_manifest());
        overrides.text = None;
        assert!(overrides.needs_manifest());
    }

    fn declarations(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_custom_properties_filter() {
        let vars = custom_properties(declarations(&[
            ("color", "red"),
            ("--bux-share-btn-bg", " #000 "),
            ("--empty", " "),
            ("--bux-share-fallback-bg", "#111"),
        ]));
        assert_eq!(
            vars,
            declarations(&[
                ("--bux-share-btn-bg", "#000"),
                ("--bux-share-fallback-bg", "#111"),
            ])
        );
    }

    #[test]
    fn test_style_var_values_kept_whole() {
        let map = attrs(&[("style", "--ignored: 1")]);
        let config = ShareConfig::from_attributes(|name| map.get(name).cloned());
        assert!(config.style_vars.is_empty());

        let config = config.with_style_vars(declarations(&[
            ("--bux-share-btn-bg", r#"url("data:image/svg+xml;utf8,<svg/>")"#),
            ("--bux-share-btn-color", "red"),
        ]));
        assert_eq!(
            config.style_vars,
            declarations(&[
                ("--bux-share-btn-bg", r#"url("data:image/svg+xml;utf8,<svg/>")"#),
                ("--bux-share-btn-color", "red"),
            ])
        );
    }
}
