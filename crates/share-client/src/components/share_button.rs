//! The share trigger and the orchestration of native share and fallback.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::render::{AnimationFrame, request_animation_frame};
use gloo::timers::callback::Timeout;
use share_core::{
    DismissalEvent, FallbackMenu as MenuState, Lang, REVEAL_DELAY_MS, ShareConfig, SharePayload,
    ShowRequest, resolve_payload, share_or_fallback,
};
use web_sys::HtmlElement;
use yew::prelude::*;
use yew_icons::{Icon, IconData};

use crate::browser::{BrowserDocument, BrowserShare, HttpManifestSource};
use crate::components::FallbackMenu;
use crate::keyboard::KeyboardListeners;
use crate::style::TRIGGER_CSS;
use crate::util::async_callback;

#[derive(Properties, PartialEq)]
pub struct ShareButtonProps {
    pub config: Rc<ShareConfig>,
    pub lang: Lang,
}

/// Share button element body.
///
/// The payload is resolved once on mount and the trigger stays disabled
/// until then. A click tries the native share sheet; when that is missing,
/// refused or fails, the fallback menu is shown.
#[function_component(ShareButton)]
pub fn share_button(props: &ShareButtonProps) -> Html {
    let labels = props.lang.labels();
    let payload = use_state(|| None::<Rc<SharePayload>>);
    let menu = use_mut_ref(MenuState::<KeyboardListeners>::new);
    let pending_frame = use_mut_ref(|| None::<AnimationFrame>);
    let redraw = use_force_update();
    let overlay_ref = use_node_ref();
    let panel_ref = use_node_ref();

    {
        let payload = payload.clone();
        let config = props.config.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                let resolved = resolve_payload(
                    &config.overrides,
                    &BrowserDocument,
                    &HttpManifestSource,
                    labels,
                )
                .await;
                payload.set(Some(Rc::new(resolved)));
            });
        });
    }

    let on_dismiss = {
        let menu = menu.clone();
        let pending_frame = pending_frame.clone();
        let redraw = redraw.clone();
        Callback::from(move |event: DismissalEvent| {
            let dismissed = menu.borrow_mut().dismiss(event);
            if dismissed {
                pending_frame.borrow_mut().take();
                redraw.force_update();
            }
        })
    };

    let show_fallback = {
        let menu = menu.clone();
        let pending_frame = pending_frame.clone();
        let redraw = redraw.clone();
        let overlay_ref = overlay_ref.clone();
        let panel_ref = panel_ref.clone();
        let on_dismiss = on_dismiss.clone();
        Callback::from(move |()| {
            let request = menu.borrow_mut().request_show();
            if !request.needs_reveal() {
                return;
            }
            if request == ShowRequest::Construct {
                tracing::debug!("building fallback menu");
            }
            redraw.force_update();

            let frame = schedule_reveal(
                menu.clone(),
                overlay_ref.clone(),
                panel_ref.clone(),
                on_dismiss.clone(),
                redraw.clone(),
            );
            *pending_frame.borrow_mut() = Some(frame);
        })
    };

    let on_trigger = async_callback(
        (payload.clone(), show_fallback),
        move |(payload, show_fallback)| async move {
            let Some(payload) = (*payload).clone() else {
                return;
            };
            let outcome = share_or_fallback(&BrowserShare, &payload, labels).await;
            if outcome.needs_fallback() {
                show_fallback.emit(());
            }
        },
    );

    let menu_state = menu.borrow().state();
    let fallback = match (*payload).clone() {
        Some(payload) if menu_state.mounted => html! {
            <FallbackMenu
                config={props.config.clone()}
                lang={props.lang}
                payload={payload}
                visible={menu_state.visible}
                overlay_ref={overlay_ref}
                panel_ref={panel_ref}
                on_dismiss={on_dismiss}
            />
        },
        _ => html! {},
    };

    html! {
        <>
            <style>{ TRIGGER_CSS }</style>
            <button
                id="bux-share-btn"
                type="button"
                aria-haspopup="dialog"
                disabled={payload.is_none()}
                onclick={on_trigger}
            >
                <slot name="icon">
                    <Icon data={IconData::LUCIDE_LINK} width="1em" height="1em" />
                </slot>
                <span id="label-placeholder">{ labels.share }</span>
            </button>
            { fallback }
        </>
    }
}

/// Wait one frame (forcing layout so the hidden state is committed), then
/// `REVEAL_DELAY_MS`, then make the menu visible and hand it the keyboard.
fn schedule_reveal(
    menu: Rc<RefCell<MenuState<KeyboardListeners>>>,
    overlay_ref: NodeRef,
    panel_ref: NodeRef,
    on_dismiss: Callback<DismissalEvent>,
    redraw: UseForceUpdateHandle,
) -> AnimationFrame {
    request_animation_frame(move |_| {
        if let Some(overlay) = overlay_ref.cast::<HtmlElement>() {
            let _ = overlay.offset_height();
        }

        Timeout::new(REVEAL_DELAY_MS, move || {
            let Some(panel) = panel_ref.cast::<HtmlElement>() else {
                tracing::warn!("fallback panel not rendered, skipping reveal");
                menu.borrow_mut().cancel_reveal();
                return;
            };
            let revealed = menu
                .borrow_mut()
                .reveal(|| KeyboardListeners::attach(&panel, on_dismiss));
            if revealed {
                redraw.force_update();
            }
        })
        .forget();
    })
}
