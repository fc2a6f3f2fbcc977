//! UI components of the share button element.

mod copy_link;
mod fallback_menu;
mod platform_list;
mod share_button;

pub use copy_link::CopyLinkButton;
pub use fallback_menu::FallbackMenu;
pub use platform_list::PlatformList;
pub use share_button::{ShareButton, ShareButtonProps};
