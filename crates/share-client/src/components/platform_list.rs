//! Platform links of the fallback menu.

use std::rc::Rc;

use share_core::{Lang, ShareConfig, SharePayload, platform_links};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PlatformListProps {
    pub config: Rc<ShareConfig>,
    pub payload: Rc<SharePayload>,
    pub lang: Lang,
    pub is_mobile: bool,
}

#[function_component(PlatformList)]
pub fn platform_list(props: &PlatformListProps) -> Html {
    let links = platform_links(
        &props.config,
        &props.payload,
        props.lang.labels(),
        props.is_mobile,
    );

    html! {
        <ul class="bux-platforms-list">
            { for links.into_iter().map(|link| html! {
                <li key={link.platform.as_str()}>
                    <a href={link.href} target="_blank" rel="noopener noreferrer">
                        <img src={link.icon} alt={link.label} width="48" height="48" />
                        <span>{ link.label }</span>
                    </a>
                </li>
            }) }
        </ul>
    }
}
