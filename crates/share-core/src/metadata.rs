//! Best-effort resolution of the share payload.
//!
//! Sources are consulted in order: explicit overrides, document metadata,
//! then the web app manifest. The manifest is fetched at most once and any
//! failure to obtain it is logged and otherwise ignored.

use std::future::Future;

use serde::Deserialize;

use crate::config::ShareOverrides;
use crate::i18n::Labels;
use crate::payload::SharePayload;

/// Title used when no source provides one.
pub const UNTITLED: &str = "Untitled";

/// Errors while obtaining the web manifest.
#[derive(Debug, thiserror::Error)]
pub enum MetadataError {
    #[error("manifest request failed: {0}")]
    Network(String),
    #[error("manifest request returned HTTP {0}")]
    Status(u16),
    #[error("manifest is not valid JSON: {0}")]
    Parse(String),
}

/// The subset of a web app manifest used for sharing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct WebManifest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl WebManifest {
    pub fn from_json(json: &str) -> Result<Self, MetadataError> {
        serde_json::from_str(json).map_err(|e| MetadataError::Parse(e.to_string()))
    }
}

/// Read access to the current document.
pub trait DocumentMetadata {
    /// Current document location.
    fn location(&self) -> String;
    /// Document title, as set.
    fn title(&self) -> Option<String>;
    /// Content of `<meta name="description">`.
    fn meta_description(&self) -> Option<String>;
    /// `href` of `<link rel="manifest">`.
    fn manifest_href(&self) -> Option<String>;
}

/// Fetches a manifest document.
pub trait ManifestSource {
    fn fetch_manifest(&self, href: &str) -> impl Future<Output = Result<WebManifest, MetadataError>>;
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn trimmed(value: Option<String>) -> Option<String> {
    non_empty(value.map(|v| v.trim().to_string()))
}

async fn load_manifest<D, M>(
    overrides: &ShareOverrides,
    document: &D,
    manifests: &M,
    labels: &Labels,
) -> WebManifest
where
    D: DocumentMetadata,
    M: ManifestSource,
{
    if !overrides.needs_manifest() {
        return WebManifest::default();
    }

    let href = non_empty(overrides.manifest_src.clone()).or_else(|| non_empty(document.manifest_href()));
    let Some(href) = href else {
        return WebManifest::default();
    };

    match manifests.fetch_manifest(&href).await {
        Ok(manifest) => manifest,
        Err(e) => {
            tracing::warn!(%href, error = %e, "{}", labels.error_init);
            WebManifest::default()
        }
    }
}

/// Resolve the payload to share. Never fails: every missing source falls
/// through to the next one.
pub async fn resolve_payload<D, M>(
    overrides: &ShareOverrides,
    document: &D,
    manifests: &M,
    labels: &Labels,
) -> SharePayload
where
    D: DocumentMetadata,
    M: ManifestSource,
{
    let manifest = load_manifest(overrides, document, manifests, labels).await;

    let title = non_empty(overrides.title.clone())
        .or_else(|| trimmed(document.title()))
        .or_else(|| non_empty(manifest.name.clone()))
        .unwrap_or_else(|| UNTITLED.to_string());

    let text = non_empty(overrides.text.clone())
        .or_else(|| trimmed(document.meta_description()))
        .or_else(|| non_empty(manifest.description.clone()))
        .unwrap_or_default();

    let url = non_empty(overrides.url.clone()).unwrap_or_else(|| document.location());

    tracing::debug!(%title, %url, "share payload resolved");

    SharePayload { title, text, url }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Lang;
    use futures::executor::block_on;
    use std::cell::RefCell;

    #[derive(Default)]
    struct FakeDocument {
        title: Option<String>,
        description: Option<String>,
        manifest: Option<String>,
    }

    impl DocumentMetadata for FakeDocument {
        fn location(&self) -> String {
            "https://page.test/article".to_string()
        }

        fn title(&self) -> Option<String> {
            self.title.clone()
        }

        fn meta_description(&self) -> Option<String> {
            self.description.clone()
        }

        fn manifest_href(&self) -> Option<String> {
            self.manifest.clone()
        }
    }

    enum Reply {
        Manifest(WebManifest),
        Status(u16),
        Body(&'static str),
    }

    struct FakeManifests {
        reply: Reply,
        requests: RefCell<Vec<String>>,
    }

    impl FakeManifests {
        fn new(reply: Reply) -> Self {
            Self {
                reply,
                requests: RefCell::new(Vec::new()),
            }
        }
    }

    impl ManifestSource for FakeManifests {
        async fn fetch_manifest(&self, href: &str) -> Result<WebManifest, MetadataError> {
            self.requests.borrow_mut().push(href.to_string());
            match &self.reply {
                Reply::Manifest(manifest) => Ok(manifest.clone()),
                Reply::Status(code) => Err(MetadataError::Status(*code)),
                Reply::Body(body) => WebManifest::from_json(body),
            }
        }
    }

    fn labels() -> &'static Labels {
        Lang::En.labels()
    }

    fn app_manifest() -> WebManifest {
        WebManifest {
            name: Some("App".into()),
            description: Some("App description".into()),
        }
    }

    #[test]
    fn test_failing_manifest_keeps_overrides() {
        let overrides = ShareOverrides {
            title: Some("A".into()),
            url: Some("https://e.x".into()),
            ..Default::default()
        };
        let document = FakeDocument {
            description: Some("  Page summary ".into()),
            manifest: Some("/site.webmanifest".into()),
            ..Default::default()
        };
        let manifests = FakeManifests::new(Reply::Status(404));

        let payload = block_on(resolve_payload(&overrides, &document, &manifests, labels()));

        assert_eq!(payload, SharePayload::new("A", "Page summary", "https://e.x"));
        assert_eq!(*manifests.requests.borrow(), vec!["/site.webmanifest"]);
    }

    #[test]
    fn test_failing_manifest_without_description() {
        let overrides = ShareOverrides {
            title: Some("A".into()),
            url: Some("https://e.x".into()),
            ..Default::default()
        };
        let document = FakeDocument {
            manifest: Some("/site.webmanifest".into()),
            ..Default::default()
        };
        let manifests = FakeManifests::new(Reply::Body("{not json"));

        let payload = block_on(resolve_payload(&overrides, &document, &manifests, labels()));

        assert_eq!(payload, SharePayload::new("A", "", "https://e.x"));
    }

    #[test]
    fn test_document_metadata_before_manifest() {
        let document = FakeDocument {
            title: Some(" Article ".into()),
            description: Some("Summary".into()),
            manifest: Some("/m.json".into()),
        };
        let manifests = FakeManifests::new(Reply::Manifest(app_manifest()));

        let payload = block_on(resolve_payload(
            &ShareOverrides::default(),
            &document,
            &manifests,
            labels(),
        ));

        assert_eq!(
            payload,
            SharePayload::new("Article", "Summary", "https://page.test/article")
        );
    }

    #[test]
    fn test_manifest_fills_missing_fields() {
        let document = FakeDocument {
            title: Some("   ".into()),
            manifest: Some("/m.json".into()),
            ..Default::default()
        };
        let manifests = FakeManifests::new(Reply::Manifest(app_manifest()));

        let payload = block_on(resolve_payload(
            &ShareOverrides::default(),
            &document,
            &manifests,
            labels(),
        ));

        assert_eq!(payload.title, "App");
        assert_eq!(payload.text, "App description");
    }

    #[test]
    fn test_placeholder_title() {
        let manifests = FakeManifests::new(Reply::Manifest(WebManifest::default()));

        let payload = block_on(resolve_payload(
            &ShareOverrides::default(),
            &FakeDocument::default(),
            &manifests,
            labels(),
        ));

        assert_eq!(payload.title, UNTITLED);
        assert_eq!(payload.text, "");
        // No manifest link in the document, so nothing is fetched.
        assert!(manifests.requests.borrow().is_empty());
    }

    #[test]
    fn test_manifest_src_override_wins() {
        let overrides = ShareOverrides {
            manifest_src: Some("/custom.json".into()),
            ..Default::default()
        };
        let document = FakeDocument {
            manifest: Some("/m.json".into()),
            ..Default::default()
        };
        let manifests = FakeManifests::new(Reply::Manifest(app_manifest()));

        block_on(resolve_payload(&overrides, &document, &manifests, labels()));

        assert_eq!(*manifests.requests.borrow(), vec!["/custom.json"]);
    }

    #[test]
    fn test_no_fetch_when_title_and_text_overridden() {
        let overrides = ShareOverrides {
            title: Some("T".into()),
            text: Some(String::new()),
            ..Default::default()
        };
        let document = FakeDocument {
            description: Some("From meta".into()),
            manifest: Some("/m.json".into()),
            ..Default::default()
        };
        let manifests = FakeManifests::new(Reply::Manifest(app_manifest()));

        let payload = block_on(resolve_payload(&overrides, &document, &manifests, labels()));

        assert!(manifests.requests.borrow().is_empty());
        // An empty override still falls through for the value itself.
        assert_eq!(payload.text, "From meta");
    }

    #[test]
    fn test_manifest_from_json() {
        let manifest =
            WebManifest::from_json(r#"{"name":"N","short_name":"S","icons":[]}"#).unwrap();
        assert_eq!(manifest.name.as_deref(), Some("N"));
        assert_eq!(manifest.description, None);
        assert!(matches!(
            WebManifest::from_json("42"),
            Err(MetadataError::Parse(_))
        ));
    }
}
