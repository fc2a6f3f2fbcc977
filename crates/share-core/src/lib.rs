//! Share Button Core Library
//!
//! Everything the share button decides without touching the DOM:
//! - payload resolution from overrides, document metadata and the web manifest
//! - native share outcome classification
//! - share target links, icons and localized labels
//! - the fallback menu state machine, focus containment and swipe dismissal
//!
//! The wasm frontend (`share-client`) implements the collaborator traits
//! declared here with `web-sys`.

#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod copy;
pub mod focus;
pub mod gesture;
pub mod i18n;
pub mod icons;
pub mod links;
pub mod menu;
pub mod metadata;
pub mod native;
pub mod payload;
pub mod platform;
pub mod target;

pub use config::{ShareConfig, ShareOverrides};
pub use copy::{
    COPIED_FEEDBACK_MS, Clipboard, ClipboardError, CopyDisplay, CopyLink, CopyPreview,
    write_share_url,
};
pub use focus::{FOCUSABLE_SELECTOR, FocusRing, TabAction};
pub use gesture::{SWIPE_DISMISS_THRESHOLD, SWIPE_MAX_VIEWPORT_WIDTH, SwipeDismiss};
pub use i18n::{Labels, Lang};
pub use icons::{IconKey, LinkTag, best_icon_url, share_icon};
pub use links::{PlatformLink, platform_links};
pub use menu::{
    DismissalEvent, FallbackMenu, FallbackMenuState, MenuPhase, REVEAL_DELAY_MS, ShowRequest,
};
pub use metadata::{
    DocumentMetadata, ManifestSource, MetadataError, UNTITLED, WebManifest, resolve_payload,
};
pub use native::{FallbackReason, NativeShare, NativeShareError, ShareOutcome, share_or_fallback};
pub use payload::SharePayload;
pub use platform::{PlatformKey, is_mobile_user_agent};
pub use target::{share_href, share_href_for_key};
