//! Scroll sampling
//!
//! Scroll events arrive far more often than the page can repaint. The header
//! and hero sample the scroll position at most once per animation frame; the
//! [`FrameGate`] decides whether an incoming event needs a new frame request.

/// Offset past which the header switches to its compact style, in px
pub const HEADER_SCROLL_THRESHOLD: f64 = 20.0;

/// Whether the header should render in its scrolled style
pub fn is_scrolled(offset: f64) -> bool {
    offset > HEADER_SCROLL_THRESHOLD
}

/// Coalesces bursts of scroll events into one sample per frame
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameGate {
    pending: bool,
}

impl FrameGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Called on every event. Returns true when the caller must request a
    /// frame; false when a frame is already queued.
    pub fn request(&mut self) -> bool {
        if self.pending {
            false
        } else {
            self.pending = true;
            true
        }
    }

    /// Called from the frame callback before sampling
    pub fn complete(&mut self) {
        self.pending = false;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

/// Page progress in `0.0..=1.0` for `offset` within a document of
/// `scroll_height` shown through a `viewport_height` window
pub fn scroll_progress(offset: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let range = scroll_height - viewport_height;
    if range <= 0.0 {
        return 0.0;
    }
    (offset / range).clamp(0.0, 1.0)
}

/// Scroll position read inside a frame callback
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollSample {
    /// Vertical scroll offset, px
    pub offset: f64,
    /// Total document height, px
    pub scroll_height: f64,
    /// Window inner height, px
    pub viewport_height: f64,
}

impl ScrollSample {
    pub fn progress(&self) -> f64 {
        scroll_progress(self.offset, self.scroll_height, self.viewport_height)
    }

    pub fn is_scrolled(&self) -> bool {
        is_scrolled(self.offset)
    }
}

/// Hero content drift: moves down up to 300px over the whole page
pub const PARALLAX_DISTANCE: f64 = 300.0;

/// Fraction of page progress over which the hero fades out
pub const PARALLAX_FADE_END: f64 = 0.3;

/// Hero content offset and opacity for a page progress value
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Parallax {
    pub y: f64,
    pub opacity: f64,
}

impl Parallax {
    pub fn at(progress: f64) -> Self {
        let progress = progress.clamp(0.0, 1.0);
        Self {
            y: progress * PARALLAX_DISTANCE,
            opacity: (1.0 - progress / PARALLAX_FADE_END).clamp(0.0, 1.0),
        }
    }

    pub fn to_css(&self) -> String {
        format!(
            "transform: translate3d(0px, {:.1}px, 0px); opacity: {:.3};",
            self.y, self.opacity
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scrolled_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(20.0));
        assert!(is_scrolled(21.0));
        assert!(is_scrolled(20.5));
        assert!(is_scrolled(4000.0));
    }

    #[test]
    fn test_frame_gate_coalesces() {
        let mut gate = FrameGate::new();
        assert!(gate.request());
        assert!(!gate.request());
        assert!(!gate.request());
        assert!(gate.is_pending());

        gate.complete();
        assert!(!gate.is_pending());
        assert!(gate.request());
    }

    #[test]
    fn test_scroll_progress_bounds() {
        assert_eq!(scroll_progress(0.0, 5000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(2000.0, 5000.0, 1000.0), 0.5);
        assert_eq!(scroll_progress(9000.0, 5000.0, 1000.0), 1.0);
        assert_eq!(scroll_progress(-30.0, 5000.0, 1000.0), 0.0);
        // Page shorter than the viewport
        assert_eq!(scroll_progress(10.0, 600.0, 1000.0), 0.0);
    }

    #[test]
    fn test_default_sample_is_top_of_page() {
        let sample = ScrollSample::default();
        assert!(!sample.is_scrolled());
        assert_eq!(sample.progress(), 0.0);

        let sample = ScrollSample {
            offset: 1500.0,
            scroll_height: 4000.0,
            viewport_height: 1000.0,
        };
        assert!(sample.is_scrolled());
        assert_eq!(sample.progress(), 0.5);
    }

    #[test]
    fn test_parallax_curve() {
        let top = Parallax::at(0.0);
        assert_eq!(top.y, 0.0);
        assert_eq!(top.opacity, 1.0);

        let faded = Parallax::at(0.3);
        assert!((faded.y - 90.0).abs() < 1e-9);
        assert!(faded.opacity.abs() < 1e-9);

        let bottom = Parallax::at(1.0);
        assert_eq!(bottom.y, 300.0);
        assert_eq!(bottom.opacity, 0.0);
    }

    #[test]
    fn test_parallax_css() {
        assert_eq!(
            Parallax::at(0.15).to_css(),
            "transform: translate3d(0px, 45.0px, 0px); opacity: 0.500;"
        );
    }
}
