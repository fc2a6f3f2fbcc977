//! Swipe-down dismissal of the bottom sheet.

/// Vertical distance a touch must travel downwards to dismiss.
pub const SWIPE_DISMISS_THRESHOLD: f64 = 60.0;

/// Widest viewport where the menu is laid out as a bottom sheet.
pub const SWIPE_MAX_VIEWPORT_WIDTH: f64 = 768.0;

/// Tracks one touch drag on the menu panel.
#[derive(Debug, Clone, Default)]
pub struct SwipeDismiss {
    enabled: bool,
    start_y: Option<f64>,
}

impl SwipeDismiss {
    /// Swipe dismissal only applies to bottom-sheet layouts.
    pub fn for_viewport(width: f64) -> Self {
        Self {
            enabled: width <= SWIPE_MAX_VIEWPORT_WIDTH,
            start_y: None,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn touch_start(&mut self, y: f64) {
        if self.enabled {
            self.start_y = Some(y);
        }
    }

    /// Returns `true` once the drag passes the threshold; the drag is then
    /// forgotten so it fires only once.
    pub fn touch_move(&mut self, y: f64) -> bool {
        let Some(start) = self.start_y else {
            return false;
        };
        if y - start > SWIPE_DISMISS_THRESHOLD {
            self.start_y = None;
            true
        } else {
            false
        }
    }

    pub fn touch_end(&mut self) {
        self.start_y = None;
    }
}
