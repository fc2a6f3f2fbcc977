//! Fallback share menu, rendered into `document.body` above all content.

use std::rc::Rc;

use share_core::{DismissalEvent, Lang, ShareConfig, SharePayload, SwipeDismiss};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, Node};
use yew::prelude::*;

use crate::browser;
use crate::components::{CopyLinkButton, PlatformList};
use crate::style::ensure_fallback_style;

#[derive(Properties, PartialEq)]
pub struct FallbackMenuProps {
    pub config: Rc<ShareConfig>,
    pub lang: Lang,
    pub payload: Rc<SharePayload>,
    pub visible: bool,
    pub overlay_ref: NodeRef,
    pub panel_ref: NodeRef,
    pub on_dismiss: Callback<DismissalEvent>,
}

/// Create the body-level container the overlay is portaled into.
///
/// The container sits outside the host, so the host's custom properties are
/// copied onto it.
fn create_portal_host(style_vars: &[(String, String)]) -> Option<Element> {
    let document = gloo::utils::document();
    let body = document.body()?;
    let host = document.create_element("div").ok()?;
    let _ = host.set_attribute("data-bux-share-fallback", "");
    if let Some(host) = host.dyn_ref::<HtmlElement>() {
        let style = host.style();
        for (name, value) in style_vars {
            let _ = style.set_property(name, value);
        }
    }
    body.append_child(&host).ok()?;
    Some(host)
}

fn first_touch_y(e: &TouchEvent) -> Option<f64> {
    e.touches().get(0).map(|touch| f64::from(touch.client_y()))
}

/// Overlay with the copy control and platform links.
///
/// Built once when first shown and kept in the DOM afterwards; `visible`
/// only toggles the styling class.
#[function_component(FallbackMenu)]
pub fn fallback_menu(props: &FallbackMenuProps) -> Html {
    let labels = props.lang.labels();
    let portal_host: UseStateHandle<Option<Element>> = use_state(|| None);
    let swipe = use_mut_ref(|| SwipeDismiss::for_viewport(browser::viewport_width()));
    let is_mobile = use_memo((), |_| browser::is_mobile_device());

    {
        let portal_host = portal_host.clone();
        let style_vars = props.config.style_vars.clone();
        use_effect_with((), move |_| {
            ensure_fallback_style();
            let host = create_portal_host(&style_vars);
            if host.is_none() {
                tracing::warn!("document has no body, fallback menu not mounted");
            }
            portal_host.set(host.clone());
            move || {
                if let Some(host) = host {
                    host.remove();
                }
            }
        });
    }

    let on_overlay_click = {
        let panel_ref = props.panel_ref.clone();
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |e: MouseEvent| {
            let Some(panel) = panel_ref.get() else {
                return;
            };
            let target = e.target().and_then(|t| t.dyn_into::<Node>().ok());
            if !panel.contains(target.as_ref()) {
                on_dismiss.emit(DismissalEvent::BackdropClick);
            }
        })
    };

    let on_touch_start = {
        let swipe = swipe.clone();
        Callback::from(move |e: TouchEvent| {
            if let Some(y) = first_touch_y(&e) {
                swipe.borrow_mut().touch_start(y);
            }
        })
    };

    let on_touch_move = {
        let swipe = swipe.clone();
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |e: TouchEvent| {
            let Some(y) = first_touch_y(&e) else {
                return;
            };
            let passed = swipe.borrow_mut().touch_move(y);
            if passed {
                on_dismiss.emit(DismissalEvent::SwipeDown);
            }
        })
    };

    let on_touch_end = Callback::from(move |_: TouchEvent| {
        swipe.borrow_mut().touch_end();
    });

    let Some(host) = (*portal_host).clone() else {
        return html! {};
    };

    create_portal(
        html! {
            <div
                ref={props.overlay_ref.clone()}
                class={classes!("bux-share-fallback", props.visible.then_some("visible"))}
                onclick={on_overlay_click}
            >
                <div class="bux-share-fallback-menu">
                    <div
                        ref={props.panel_ref.clone()}
                        class="bux-share-fallback-inner"
                        role="dialog"
                        aria-modal="true"
                        aria-label={labels.share}
                        aria-hidden={(!props.visible).to_string()}
                        tabindex="0"
                        ontouchstart={on_touch_start}
                        ontouchmove={on_touch_move}
                        ontouchend={on_touch_end}
                    >
                        <h2 class="bux-share-fallback-title">{ labels.share }</h2>
                        <div class="bux-copy-box">
                            <CopyLinkButton payload={props.payload.clone()} lang={props.lang} />
                        </div>
                        <PlatformList
                            config={props.config.clone()}
                            payload={props.payload.clone()}
                            lang={props.lang}
                            is_mobile={*is_mobile}
                        />
                    </div>
                </div>
            </div>
        },
        host,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::time::Duration;
    use wasm_bindgen_test::wasm_bindgen_test;
    use yew::platform::time::sleep;

    type Dismissals = Rc<RefCell<Vec<DismissalEvent>>>;

    struct Fixture {
        dismissals: Dismissals,
        overlay_ref: NodeRef,
        panel_ref: NodeRef,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                dismissals: Rc::default(),
                overlay_ref: NodeRef::default(),
                panel_ref: NodeRef::default(),
            }
        }

        fn props(&self, visible: bool) -> FallbackMenuProps {
            let dismissals = self.dismissals.clone();
            FallbackMenuProps {
                config: Rc::new(ShareConfig::default()),
                lang: Lang::En,
                payload: Rc::new(SharePayload::new("T", "x", "https://e.x")),
                visible,
                overlay_ref: self.overlay_ref.clone(),
                panel_ref: self.panel_ref.clone(),
                on_dismiss: Callback::from(move |event| dismissals.borrow_mut().push(event)),
            }
        }
    }

    fn mount_root() -> Element {
        let root = gloo::utils::document().create_element("div").unwrap();
        gloo::utils::body().append_child(&root).unwrap();
        root
    }

    fn portal_hosts() -> u32 {
        gloo::utils::document()
            .query_selector_all("[data-bux-share-fallback]")
            .unwrap()
            .length()
    }

    async fn settle() {
        sleep(Duration::from_millis(30)).await;
    }

    #[wasm_bindgen_test]
    async fn test_backdrop_click_outside_panel_only() {
        let fixture = Fixture::new();
        let root = mount_root();
        let app =
            yew::Renderer::<FallbackMenu>::with_root_and_props(root.clone(), fixture.props(true))
                .render();
        settle().await;

        let overlay = fixture.overlay_ref.cast::<HtmlElement>().unwrap();
        let panel = fixture.panel_ref.cast::<HtmlElement>().unwrap();
        assert!(overlay.class_list().contains("visible"));

        panel.click();
        assert!(fixture.dismissals.borrow().is_empty());

        overlay.click();
        assert_eq!(
            *fixture.dismissals.borrow(),
            vec![DismissalEvent::BackdropClick]
        );

        app.destroy();
        root.remove();
    }

    #[wasm_bindgen_test]
    async fn test_repeated_shows_keep_one_overlay() {
        let fixture = Fixture::new();
        let root = mount_root();
        let before = portal_hosts();
        let mut app =
            yew::Renderer::<FallbackMenu>::with_root_and_props(root.clone(), fixture.props(true))
                .render();
        settle().await;

        for visible in [false, true, false, true] {
            app.update(fixture.props(visible));
            settle().await;
            assert_eq!(portal_hosts(), before + 1);
            let overlay = fixture.overlay_ref.cast::<HtmlElement>().unwrap();
            assert_eq!(overlay.class_list().contains("visible"), visible);
        }

        app.destroy();
        settle().await;
        assert_eq!(portal_hosts(), before);
        root.remove();
    }
}
