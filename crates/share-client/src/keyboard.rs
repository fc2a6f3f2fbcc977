//! Keyboard handling while the fallback menu is visible.

use gloo::events::{EventListener, EventListenerOptions};
use share_core::{DismissalEvent, FOCUSABLE_SELECTOR, FocusRing, TabAction};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, KeyboardEvent};
use yew::Callback;

/// Focusable descendants of `container`, in document order.
pub fn focusable_elements(container: &Element) -> Vec<Element> {
    let Ok(nodes) = container.query_selector_all(FOCUSABLE_SELECTOR) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Escape-to-close and Tab containment listeners on `document`.
///
/// Both are removed together when this value is dropped.
pub struct KeyboardListeners {
    _escape: EventListener,
    _focus_trap: EventListener,
}

impl KeyboardListeners {
    /// Move focus into `panel` and start trapping Tab inside it.
    pub fn attach(panel: &HtmlElement, on_dismiss: Callback<DismissalEvent>) -> Self {
        if let Err(e) = panel.focus() {
            tracing::debug!(error = ?e, "fallback panel refused focus");
        }

        let document = gloo::utils::document();
        let ring = FocusRing::new(focusable_elements(panel));

        let escape = EventListener::new(&document, "keydown", move |event| {
            let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            if event.key() == "Escape" {
                on_dismiss.emit(DismissalEvent::EscapeKey);
            }
        });

        let focus_trap = EventListener::new_with_options(
            &document,
            "keydown",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                    return;
                };
                if event.key() != "Tab" {
                    return;
                }
                let active = gloo::utils::document().active_element();
                if let TabAction::WrapTo(target) = ring.on_tab(active.as_ref(), event.shift_key()) {
                    event.prevent_default();
                    if let Some(target) = target.dyn_ref::<HtmlElement>() {
                        let _ = target.focus();
                    }
                }
            },
        );

        Self {
            _escape: escape,
            _focus_trap: focus_trap,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen_test::wasm_bindgen_test;
    use web_sys::KeyboardEventInit;

    fn key_down(key: &str, shift: bool) {
        let init = KeyboardEventInit::new();
        init.set_key(key);
        init.set_shift_key(shift);
        init.set_cancelable(true);
        let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
        gloo::utils::document().dispatch_event(&event).unwrap();
    }

    fn active_id() -> Option<String> {
        gloo::utils::document().active_element().map(|el| el.id())
    }

    #[wasm_bindgen_test]
    fn test_focusable_elements_order_and_filter() {
        let document = gloo::utils::document();
        let panel = document.create_element("div").unwrap();
        panel.set_inner_html(
            r##"<button id="a">copy</button>
                <button id="b" disabled>off</button>
                <a id="c" href="#x">link</a>
                <a id="d">no href</a>
                <span id="e" tabindex="0">span</span>
                <span id="f" tabindex="-1">skip</span>"##,
        );

        let ids: Vec<String> = focusable_elements(&panel).iter().map(Element::id).collect();
        assert_eq!(ids, ["a", "c", "e"]);
    }

    #[wasm_bindgen_test]
    fn test_tab_wraps_and_escape_dismisses_until_dropped() {
        let document = gloo::utils::document();
        let panel = document
            .create_element("div")
            .unwrap()
            .dyn_into::<HtmlElement>()
            .unwrap();
        panel.set_attribute("tabindex", "0").unwrap();
        panel.set_inner_html(
            r##"<button id="kb-first">copy</button>
                <a id="kb-middle" href="#x">link</a>
                <a id="kb-last" href="#y">link</a>"##,
        );
        gloo::utils::body().append_child(&panel).unwrap();
        let focus = |id: &str| {
            document
                .get_element_by_id(id)
                .unwrap()
                .dyn_into::<HtmlElement>()
                .unwrap()
                .focus()
                .unwrap();
        };

        let dismissals = Rc::new(RefCell::new(Vec::new()));
        let listeners = {
            let dismissals = dismissals.clone();
            KeyboardListeners::attach(
                &panel,
                Callback::from(move |event| dismissals.borrow_mut().push(event)),
            )
        };

        focus("kb-last");
        key_down("Tab", false);
        assert_eq!(active_id().as_deref(), Some("kb-first"));

        key_down("Tab", true);
        assert_eq!(active_id().as_deref(), Some("kb-last"));

        key_down("Escape", false);
        assert_eq!(*dismissals.borrow(), vec![DismissalEvent::EscapeKey]);

        drop(listeners);
        key_down("Escape", false);
        focus("kb-last");
        key_down("Tab", false);
        assert_eq!(dismissals.borrow().len(), 1);
        assert_eq!(active_id().as_deref(), Some("kb-last"));

        panel.remove();
    }
}
