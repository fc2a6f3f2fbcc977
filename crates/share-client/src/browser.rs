//! Browser implementations of the core collaborator traits.

use gloo::net::http::Request;
use js_sys::{Function, Object, Promise, Reflect};
use share_core::{
    Clipboard, ClipboardError, DocumentMetadata, LinkTag, ManifestSource, MetadataError,
    NativeShare, NativeShareError, SharePayload, WebManifest, is_mobile_user_agent,
};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlLinkElement, HtmlMetaElement};

/// Reads share metadata from `document`.
pub struct BrowserDocument;

impl DocumentMetadata for BrowserDocument {
    fn location(&self) -> String {
        gloo::utils::window()
            .location()
            .href()
            .unwrap_or_default()
    }

    fn title(&self) -> Option<String> {
        Some(gloo::utils::document().title())
    }

    fn meta_description(&self) -> Option<String> {
        gloo::utils::document()
            .query_selector(r#"meta[name="description"]"#)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlMetaElement>().ok())
            .map(|meta| meta.content())
    }

    fn manifest_href(&self) -> Option<String> {
        gloo::utils::document()
            .query_selector(r#"link[rel="manifest"]"#)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlLinkElement>().ok())
            .map(|link| link.href())
    }
}

/// Fetches the manifest over HTTP.
pub struct HttpManifestSource;

impl ManifestSource for HttpManifestSource {
    async fn fetch_manifest(&self, href: &str) -> Result<WebManifest, MetadataError> {
        let response = Request::get(href)
            .send()
            .await
            .map_err(|e| MetadataError::Network(e.to_string()))?;
        if !response.ok() {
            return Err(MetadataError::Status(response.status()));
        }
        let body = response
            .text()
            .await
            .map_err(|e| MetadataError::Network(e.to_string()))?;
        WebManifest::from_json(&body)
    }
}

/// `navigator.share` / `navigator.canShare`, looked up at call time so
/// browsers without them are detected rather than assumed.
pub struct BrowserShare;

impl BrowserShare {
    fn navigator_method(name: &str) -> Option<(JsValue, Function)> {
        let navigator: JsValue = gloo::utils::window().navigator().into();
        let method = Reflect::get(&navigator, &JsValue::from_str(name)).ok()?;
        let method = method.dyn_into::<Function>().ok()?;
        Some((navigator, method))
    }

    fn share_data(payload: &SharePayload) -> Object {
        let data = Object::new();
        for (key, value) in [
            ("title", &payload.title),
            ("text", &payload.text),
            ("url", &payload.url),
        ] {
            let _ = Reflect::set(&data, &JsValue::from_str(key), &JsValue::from_str(value));
        }
        data
    }
}

/// `name` and `message` of a rejected DOM promise.
fn js_error_fields(value: &JsValue) -> (String, String) {
    let field = |name: &str| {
        Reflect::get(value, &JsValue::from_str(name))
            .ok()
            .and_then(|v| v.as_string())
            .unwrap_or_default()
    };
    let message = field("message");
    let message = if message.is_empty() {
        value.as_string().unwrap_or_default()
    } else {
        message
    };
    (field("name"), message)
}

fn native_share_error(value: &JsValue) -> NativeShareError {
    let (name, message) = js_error_fields(value);
    NativeShareError::new(name, message)
}

fn clipboard_error(value: &JsValue) -> ClipboardError {
    let (name, message) = js_error_fields(value);
    ClipboardError(format!("{name}: {message}"))
}

impl NativeShare for BrowserShare {
    fn is_supported(&self) -> bool {
        Self::navigator_method("share").is_some()
    }

    fn can_share(&self, payload: &SharePayload) -> Option<bool> {
        let (navigator, can_share) = Self::navigator_method("canShare")?;
        let verdict = can_share
            .call1(&navigator, &Self::share_data(payload))
            .ok()?;
        Some(verdict.is_truthy())
    }

    async fn share(&self, payload: &SharePayload) -> Result<(), NativeShareError> {
        let (navigator, share) = Self::navigator_method("share")
            .ok_or_else(|| NativeShareError::new("NotSupportedError", "navigator.share is missing"))?;
        let promise = share
            .call1(&navigator, &Self::share_data(payload))
            .map_err(|e| native_share_error(&e))?
            .dyn_into::<Promise>()
            .map_err(|e| native_share_error(&e))?;
        JsFuture::from(promise)
            .await
            .map(|_| ())
            .map_err(|e| native_share_error(&e))
    }
}

/// `navigator.clipboard`.
pub struct BrowserClipboard;

impl Clipboard for BrowserClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let clipboard = gloo::utils::window().navigator().clipboard();
        JsFuture::from(clipboard.write_text(text))
            .await
            .map(|_| ())
            .map_err(|e| clipboard_error(&e))
    }
}

/// `<html lang>`, if set.
pub fn document_lang() -> Option<String> {
    gloo::utils::document()
        .document_element()
        .and_then(|html| html.get_attribute("lang"))
}

pub fn is_mobile_device() -> bool {
    gloo::utils::window()
        .navigator()
        .user_agent()
        .is_ok_and(|ua| is_mobile_user_agent(&ua))
}

pub fn viewport_width() -> f64 {
    gloo::utils::window()
        .inner_width()
        .ok()
        .and_then(|width| width.as_f64())
        .unwrap_or(f64::INFINITY)
}

/// All `<link rel>` elements, for site icon discovery.
pub fn icon_links() -> Vec<LinkTag> {
    let Ok(nodes) = gloo::utils::document().query_selector_all("link[rel]") else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<HtmlLinkElement>().ok())
        .map(|link| LinkTag {
            rel: link.rel(),
            mime_type: link.type_(),
            href: link.href(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::wasm_bindgen_test;

    #[wasm_bindgen_test]
    fn test_native_share_error_fields() {
        let err = js_sys::Error::new("Share canceled");
        err.set_name("AbortError");
        let parsed = native_share_error(&err.into());
        assert_eq!(parsed.name, "AbortError");
        assert_eq!(parsed.message, "Share canceled");
        assert!(parsed.is_cancellation());
    }

    #[wasm_bindgen_test]
    fn test_clipboard_error_from_dom_exception() {
        let err = js_sys::Error::new("Document is not focused.");
        err.set_name("NotAllowedError");
        assert_eq!(
            clipboard_error(&err.into()),
            ClipboardError("NotAllowedError: Document is not focused.".into())
        );
    }

    #[wasm_bindgen_test]
    fn test_icon_links_reads_head() {
        let document = gloo::utils::document();
        let link = document.create_element("link").unwrap();
        link.set_attribute("rel", "icon").unwrap();
        link.set_attribute("type", "image/svg+xml").unwrap();
        link.set_attribute("href", "/test-icon.svg").unwrap();
        gloo::utils::head().append_child(&link).unwrap();

        let links = icon_links();
        let best = share_core::best_icon_url(&links, "fallback");
        assert!(best.ends_with("/test-icon.svg"));

        link.remove();
    }
}
