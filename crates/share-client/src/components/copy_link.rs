//! Copy-link control of the fallback menu.

use std::rc::Rc;

use gloo::timers::callback::Timeout;
use share_core::{
    COPIED_FEEDBACK_MS, CopyDisplay, CopyLink, CopyPreview, IconKey, Lang, SharePayload,
    best_icon_url, share_icon, write_share_url,
};
use yew::prelude::*;
use yew_icons::{Icon, IconData};

use crate::browser::{BrowserClipboard, icon_links};
use crate::util::async_callback;

#[derive(Debug, Clone, PartialEq)]
struct CopyLinkState(CopyLink);

enum CopyAction {
    Copied,
    Revert(u32),
}

impl Reducible for CopyLinkState {
    type Action = CopyAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        let changed = match action {
            CopyAction::Copied => {
                next.0.copied();
                true
            }
            CopyAction::Revert(generation) => next.0.revert(generation),
        };
        if changed { Rc::new(next) } else { self }
    }
}

#[derive(Properties, PartialEq)]
pub struct CopyLinkButtonProps {
    pub payload: Rc<SharePayload>,
    pub lang: Lang,
}

/// Button showing the site icon, title and URL; copies the URL on click.
///
/// A successful copy shows the localized confirmation for
/// `COPIED_FEEDBACK_MS`. A failed copy is logged and changes nothing.
#[function_component(CopyLinkButton)]
pub fn copy_link_button(props: &CopyLinkButtonProps) -> Html {
    let labels = props.lang.labels();
    let state = {
        let payload = props.payload.clone();
        use_reducer(move || {
            CopyLinkState(CopyLink::new(CopyPreview {
                icon_url: best_icon_url(&icon_links(), share_icon(IconKey::Website)),
                title: payload.title.clone(),
                url: payload.url.clone(),
            }))
        })
    };

    {
        let state = state.clone();
        let deps = (state.0.generation(), state.0.is_confirming());
        use_effect_with(deps, move |&(generation, confirming)| {
            let revert = confirming.then(|| {
                Timeout::new(COPIED_FEEDBACK_MS, move || {
                    state.dispatch(CopyAction::Revert(generation));
                })
            });
            move || drop(revert)
        });
    }

    let on_click = async_callback(
        (state.clone(), props.payload.clone()),
        move |(state, payload)| async move {
            if write_share_url(&BrowserClipboard, &payload.url, labels).await.is_ok() {
                state.dispatch(CopyAction::Copied);
            }
        },
    );

    let content = match state.0.display(labels) {
        CopyDisplay::Preview(preview) => html! {
            <span class="bux-copy-wrapper">
                <span class="bux-copy-logo">
                    <img src={preview.icon_url.clone()} alt="App icon" width="48" height="48" />
                </span>
                <span class="bux-copy-text">
                    <strong>{ preview.title.clone() }</strong>
                    { preview.url.clone() }
                </span>
                <span class="bux-copy-icon">
                    <Icon data={IconData::LUCIDE_LINK} width="1em" height="1em" />
                </span>
            </span>
        },
        CopyDisplay::Confirmation(message) => html! { { message } },
    };

    html! {
        <button type="button" class="bux-copy-link" onclick={on_click}>
            { content }
        </button>
    }
}
