//! `<browserux-share-button>` host elements.
//!
//! Each host element gets its own Yew app. Hosts are activated when
//! [`define_share_buttons`] runs and whenever matching elements are added to
//! the page later; a host whose element leaves the document is deactivated,
//! which also tears down its fallback overlay.

use std::cell::RefCell;
use std::rc::Rc;

use share_core::ShareConfig;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{
    Element, HtmlElement, MutationObserver, MutationObserverInit, ShadowRootInit, ShadowRootMode,
};
use yew::AppHandle;

use crate::browser;
use crate::components::{ShareButton, ShareButtonProps};

/// Tag name of the host element.
pub const TAG_NAME: &str = "browserux-share-button";

/// Set on host elements that already run an app.
const ACTIVE_MARKER: &str = "data-bux-share-active";

#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("could not attach shadow root: {0}")]
    ShadowRoot(String),
    #[error("could not create render root: {0}")]
    RenderRoot(String),
}

fn js_error(value: &wasm_bindgen::JsValue) -> String {
    format!("{value:?}")
}

/// One activated host element.
pub struct ShareHost {
    element: Element,
    app: AppHandle<ShareButton>,
}

impl ShareHost {
    /// Read the configuration from `element` and start rendering.
    pub fn activate(element: Element) -> Result<Self, HostError> {
        let config = ShareConfig::from_attributes(|name| element.get_attribute(name))
            .with_style_vars(inline_declarations(&element));
        let lang = config.resolve_lang(browser::document_lang().as_deref());
        let root = render_root(&element, config.no_shadow)?;
        apply_style_vars(&root, &config.style_vars);

        let app = yew::Renderer::<ShareButton>::with_root_and_props(
            root,
            ShareButtonProps {
                config: Rc::new(config),
                lang,
            },
        )
        .render();
        let _ = element.set_attribute(ACTIVE_MARKER, "");

        Ok(Self { element, app })
    }

    pub fn element(&self) -> &Element {
        &self.element
    }

    /// Stop the app; its overlay and listeners go with it.
    pub fn deactivate(self) {
        self.app.destroy();
        let _ = self.element.remove_attribute(ACTIVE_MARKER);
        tracing::debug!("share button deactivated");
    }
}

/// Element the app renders into: inside an open shadow root, or directly in
/// the host when `no-shadow` is set.
fn render_root(element: &Element, no_shadow: bool) -> Result<Element, HostError> {
    let root = gloo::utils::document()
        .create_element("span")
        .map_err(|e| HostError::RenderRoot(js_error(&e)))?;
    let _ = root.set_attribute("part", "root");

    if no_shadow {
        element.set_inner_html("");
        element
            .append_child(&root)
            .map_err(|e| HostError::RenderRoot(js_error(&e)))?;
    } else {
        let shadow = match element.shadow_root() {
            // Left behind by an app destroyed when the element was detached.
            Some(shadow) => {
                shadow.set_inner_html("");
                shadow
            }
            None => element
                .attach_shadow(&ShadowRootInit::new(ShadowRootMode::Open))
                .map_err(|e| HostError::ShadowRoot(js_error(&e)))?,
        };
        shadow
            .append_child(&root)
            .map_err(|e| HostError::RenderRoot(js_error(&e)))?;
    }
    Ok(root)
}

/// Declarations of the host's inline style, as parsed by the browser.
fn inline_declarations(element: &Element) -> Vec<(String, String)> {
    let Some(element) = element.dyn_ref::<HtmlElement>() else {
        return Vec::new();
    };
    let style = element.style();
    (0..style.length())
        .map(|i| style.item(i))
        .filter_map(|name| {
            let value = style.get_property_value(&name).ok()?;
            Some((name, value))
        })
        .collect()
}

/// Shadow roots don't see variables set inline on the host, so copy them.
fn apply_style_vars(root: &Element, style_vars: &[(String, String)]) {
    let Some(root) = root.dyn_ref::<HtmlElement>() else {
        return;
    };
    let style = root.style();
    for (name, value) in style_vars {
        let _ = style.set_property(name, value);
    }
}

#[derive(Default)]
struct Registry {
    hosts: Vec<ShareHost>,
    observer: Option<(MutationObserver, Closure<dyn FnMut()>)>,
}

impl Registry {
    /// Deactivate detached hosts and activate new host elements.
    fn sync(&mut self) -> usize {
        let (live, gone): (Vec<_>, Vec<_>) = std::mem::take(&mut self.hosts)
            .into_iter()
            .partition(|host| host.element().is_connected());
        self.hosts = live;
        gone.into_iter().for_each(ShareHost::deactivate);

        let selector = format!("{TAG_NAME}:not([{ACTIVE_MARKER}])");
        let Ok(nodes) = gloo::utils::document().query_selector_all(&selector) else {
            return 0;
        };
        let mut activated = 0;
        for element in (0..nodes.length())
            .filter_map(|i| nodes.get(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
        {
            match ShareHost::activate(element) {
                Ok(host) => {
                    self.hosts.push(host);
                    activated += 1;
                }
                Err(e) => tracing::error!(error = %e, "could not activate share button"),
            }
        }
        activated
    }

    fn observe(&mut self) {
        if self.observer.is_some() {
            return;
        }
        let Some(body) = gloo::utils::document().body() else {
            tracing::warn!("document has no body, share buttons added later won't activate");
            return;
        };

        let callback = Closure::<dyn FnMut()>::new(|| {
            REGISTRY.with(|registry| {
                if let Ok(mut registry) = registry.try_borrow_mut() {
                    registry.sync();
                }
            });
        });
        let observer = match MutationObserver::new(callback.as_ref().unchecked_ref()) {
            Ok(observer) => observer,
            Err(e) => {
                tracing::warn!(error = ?e, "MutationObserver unavailable");
                return;
            }
        };
        let init = MutationObserverInit::new();
        init.set_child_list(true);
        init.set_subtree(true);
        if let Err(e) = observer.observe_with_options(&body, &init) {
            tracing::warn!(error = ?e, "could not observe document body");
            return;
        }
        self.observer = Some((observer, callback));
    }
}

thread_local! {
    static REGISTRY: RefCell<Registry> = RefCell::new(Registry::default());
}

/// Activate every host element on the page and keep watching for new ones.
/// Safe to call repeatedly. Returns how many hosts were activated.
pub fn define_share_buttons() -> usize {
    REGISTRY.with(|registry| {
        let mut registry = registry.borrow_mut();
        let activated = registry.sync();
        registry.observe();
        activated
    })
}
