//! Tab-key focus containment.

/// Elements that take part in the focus ring.
pub const FOCUSABLE_SELECTOR: &str =
    r#"a[href], button:not([disabled]), [tabindex]:not([tabindex="-1"])"#;

/// What to do with a Tab key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabAction<T> {
    /// Let the browser move focus.
    PassThrough,
    /// Prevent the default and focus this element instead.
    WrapTo(T),
}

/// Ordered focusable elements of a container, captured when it opens.
#[derive(Debug, Clone)]
pub struct FocusRing<T> {
    items: Vec<T>,
}

impl<T: PartialEq> FocusRing<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    /// Wrap Tab from the last element to the first and Shift+Tab from the
    /// first to the last.
    pub fn on_tab(&self, active: Option<&T>, shift: bool) -> TabAction<&T> {
        let (Some(first), Some(last)) = (self.items.first(), self.items.last()) else {
            return TabAction::PassThrough;
        };
        let Some(active) = active else {
            return TabAction::PassThrough;
        };

        if shift && active == first {
            TabAction::WrapTo(last)
        } else if !shift && active == last {
            TabAction::WrapTo(first)
        } else {
            TabAction::PassThrough
        }
    }
}
