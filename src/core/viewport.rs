//! Viewport intersection model
//!
//! Sections reveal themselves when they scroll into view. This module holds
//! the browser-independent half of that: the trigger geometry and the
//! "in view" state with its two modes. `ui::viewport` wires it to an
//! `IntersectionObserver`.

/// How an "in view" signal reacts to later intersection changes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ObserveMode {
    /// Latches on the first qualifying intersection and never resets
    #[default]
    Once,
    /// Follows the current intersection state
    Continuous,
}

/// Observer configuration for one element
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportOptions {
    pub mode: ObserveMode,
    /// Added to the top and bottom of the viewport before testing overlap.
    /// Negative values shrink the trigger area so elements reveal later.
    pub margin_px: f64,
}

impl ViewportOptions {
    /// Fire-once with no margin
    pub const ONCE: ViewportOptions = ViewportOptions {
        mode: ObserveMode::Once,
        margin_px: 0.0,
    };

    /// Fire-once, triggering 100px after the element enters
    pub const SECTION: ViewportOptions = ViewportOptions {
        mode: ObserveMode::Once,
        margin_px: -100.0,
    };

    pub const CONTINUOUS: ViewportOptions = ViewportOptions {
        mode: ObserveMode::Continuous,
        margin_px: 0.0,
    };

    /// `rootMargin` string for an IntersectionObserver
    pub fn root_margin(&self) -> String {
        format!("{}px 0px {}px 0px", self.margin_px, self.margin_px)
    }

    /// Whether an element spanning `top..bottom` (viewport coordinates, px)
    /// qualifies as in view for a viewport `viewport_height` tall.
    ///
    /// The trigger window is the viewport grown by the margin on both ends.
    /// An element taller than the viewport qualifies once its top edge passes
    /// the bottom anchor, which is the same answer an observer with the
    /// equivalent `rootMargin` gives.
    pub fn qualifies(&self, top: f64, bottom: f64, viewport_height: f64) -> bool {
        let window_top = -self.margin_px;
        let window_bottom = viewport_height + self.margin_px;
        if window_bottom <= window_top {
            return false;
        }
        top < window_bottom && bottom > window_top
    }
}

impl Default for ViewportOptions {
    fn default() -> Self {
        Self::ONCE
    }
}

/// Monotonic one-way boolean
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Latch(bool);

impl Latch {
    pub fn new() -> Self {
        Self(false)
    }

    /// Sets the latch; returns true only on the transition
    pub fn trip(&mut self) -> bool {
        let tripped = !self.0;
        self.0 = true;
        tripped
    }

    pub fn is_set(&self) -> bool {
        self.0
    }
}

/// "In view" state for one observed element
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InView {
    Once(Latch),
    Continuous(bool),
}

impl InView {
    pub fn new(mode: ObserveMode) -> Self {
        match mode {
            ObserveMode::Once => InView::Once(Latch::new()),
            ObserveMode::Continuous => InView::Continuous(false),
        }
    }

    /// Feed one intersection sample; returns true when the value changed
    pub fn record(&mut self, intersecting: bool) -> bool {
        match self {
            InView::Once(latch) => intersecting && latch.trip(),
            InView::Continuous(current) => {
                let changed = *current != intersecting;
                *current = intersecting;
                changed
            }
        }
    }

    pub fn get(&self) -> bool {
        match self {
            InView::Once(latch) => latch.is_set(),
            InView::Continuous(current) => *current,
        }
    }

    /// A fire-once signal that has latched needs no further samples
    pub fn is_settled(&self) -> bool {
        matches!(self, InView::Once(latch) if latch.is_set())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latch_trips_once() {
        let mut latch = Latch::new();
        assert!(!latch.is_set());
        assert!(latch.trip());
        assert!(!latch.trip());
        assert!(latch.is_set());
    }

    #[test]
    fn test_once_never_resets() {
        let mut in_view = InView::new(ObserveMode::Once);
        assert!(!in_view.record(false));
        assert!(!in_view.get());

        assert!(in_view.record(true));
        assert!(in_view.get());
        assert!(in_view.is_settled());

        // Scrolled out and back in
        assert!(!in_view.record(false));
        assert!(in_view.get());
        assert!(!in_view.record(true));
        assert!(in_view.get());
    }

    #[test]
    fn test_continuous_follows_samples() {
        let mut in_view = InView::new(ObserveMode::Continuous);
        assert!(in_view.record(true));
        assert!(in_view.get());
        assert!(!in_view.record(true));
        assert!(in_view.record(false));
        assert!(!in_view.get());
        assert!(!in_view.is_settled());
    }

    #[test]
    fn test_root_margin_string() {
        assert_eq!(ViewportOptions::SECTION.root_margin(), "-100px 0px -100px 0px");
        assert_eq!(ViewportOptions::ONCE.root_margin(), "0px 0px 0px 0px");
    }

    #[test]
    fn test_qualifies_with_negative_margin() {
        let opts = ViewportOptions::SECTION;
        // Top edge 50px above the bottom of an 800px viewport: not yet
        assert!(!opts.qualifies(750.0, 1200.0, 800.0));
        // 150px in: past the -100px anchor
        assert!(opts.qualifies(650.0, 1100.0, 800.0));
        // Entirely above the shrunk window
        assert!(!opts.qualifies(-400.0, 90.0, 800.0));
    }

    #[test]
    fn test_tall_section_entered_mid_scroll() {
        // Section taller than the viewport, spanning past both edges
        let opts = ViewportOptions::SECTION;
        assert!(opts.qualifies(-2000.0, 3000.0, 800.0));
    }

    #[test]
    fn test_zero_margin_touching_edge_does_not_qualify() {
        let opts = ViewportOptions::ONCE;
        assert!(!opts.qualifies(800.0, 900.0, 800.0));
        assert!(opts.qualifies(799.0, 900.0, 800.0));
    }

    #[test]
    fn test_margin_larger_than_viewport_never_qualifies() {
        let opts = ViewportOptions {
            mode: ObserveMode::Once,
            margin_px: -500.0,
        };
        assert!(!opts.qualifies(0.0, 800.0, 800.0));
    }
}
