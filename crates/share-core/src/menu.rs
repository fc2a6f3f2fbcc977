//! Fallback menu lifecycle.
//!
//! ```text
//! Unmounted --show--> Revealing --reveal--> Visible
//!                        ^    \                |
//!                        |     `--dismiss--.   | dismiss
//!                      show                v   v
//!                        `--------------- Hidden
//! ```
//!
//! `Revealing` covers the frame + delay the host waits so the entrance
//! transition animates. The keyboard listeners live in a guard `G` that only
//! exists while `Visible`; every dismissal drops it.

/// Delay after the next animation frame before the menu turns visible.
pub const REVEAL_DELAY_MS: u32 = 20;

/// What ended a visible menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissalEvent {
    /// Click outside the inner panel.
    BackdropClick,
    /// Downward drag past the swipe threshold.
    SwipeDown,
    EscapeKey,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuPhase {
    #[default]
    Unmounted,
    Hidden,
    Revealing,
    Visible,
}

/// Snapshot of the menu flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FallbackMenuState {
    pub mounted: bool,
    pub visible: bool,
    pub focus_trap_active: bool,
}

/// Result of a show request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowRequest {
    /// First show: the overlay must be built, then revealed.
    Construct,
    /// Overlay exists and is hidden: schedule the reveal.
    Reuse,
    /// Already revealing or visible.
    AlreadyShowing,
}

impl ShowRequest {
    pub fn needs_reveal(self) -> bool {
        !matches!(self, ShowRequest::AlreadyShowing)
    }
}

#[derive(Debug)]
pub struct FallbackMenu<G> {
    phase: MenuPhase,
    focus_trap: Option<G>,
}

impl<G> Default for FallbackMenu<G> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G> FallbackMenu<G> {
    pub fn new() -> Self {
        Self {
            phase: MenuPhase::Unmounted,
            focus_trap: None,
        }
    }

    pub fn phase(&self) -> MenuPhase {
        self.phase
    }

    pub fn is_mounted(&self) -> bool {
        self.phase != MenuPhase::Unmounted
    }

    pub fn is_visible(&self) -> bool {
        self.phase == MenuPhase::Visible
    }

    pub fn state(&self) -> FallbackMenuState {
        FallbackMenuState {
            mounted: self.is_mounted(),
            visible: self.is_visible(),
            focus_trap_active: self.focus_trap.is_some(),
        }
    }

    pub fn request_show(&mut self) -> ShowRequest {
        match self.phase {
            MenuPhase::Unmounted => {
                self.phase = MenuPhase::Revealing;
                ShowRequest::Construct
            }
            MenuPhase::Hidden => {
                self.phase = MenuPhase::Revealing;
                ShowRequest::Reuse
            }
            MenuPhase::Revealing | MenuPhase::Visible => ShowRequest::AlreadyShowing,
        }
    }

    /// Complete a pending reveal. `activate` builds the keyboard guard and
    /// only runs when a reveal is actually pending.
    pub fn reveal<F>(&mut self, activate: F) -> bool
    where
        F: FnOnce() -> G,
    {
        if self.phase != MenuPhase::Revealing {
            return false;
        }
        self.phase = MenuPhase::Visible;
        self.focus_trap = Some(activate());
        true
    }

    /// Abandon a pending reveal, e.g. when the overlay never rendered.
    pub fn cancel_reveal(&mut self) -> bool {
        if self.phase != MenuPhase::Revealing {
            return false;
        }
        self.phase = MenuPhase::Hidden;
        true
    }

    /// Hide the menu. Shared by every dismissal path; a no-op when nothing
    /// is showing.
    pub fn dismiss(&mut self, event: DismissalEvent) -> bool {
        match self.phase {
            MenuPhase::Revealing | MenuPhase::Visible => {
                tracing::debug!(?event, "fallback menu dismissed");
                self.phase = MenuPhase::Hidden;
                self.focus_trap = None;
                true
            }
            MenuPhase::Unmounted | MenuPhase::Hidden => false,
        }
    }
}
