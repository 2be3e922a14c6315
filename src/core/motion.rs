//! Animation variant table
//!
//! Every animated element on the page is described by a [`Motion`]: a style
//! patch for the `hidden` state, one for the `visible` state, and the
//! [`Transition`] timing used to move between them. The named presets in
//! [`Variant`] are shared by all sections; one-off motions (header drop-in,
//! roadmap step swap, collapsible panels) are declared as constants here so
//! their timing lives next to the presets.
//!
//! Styles are emitted as inline CSS so the browser runs the tween itself.
//! The reactive side only flips states and picks delays.

use std::fmt::Write;

use super::presence::SwapPhase;

/// Abstract state label a motion can be in
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MotionState {
    Hidden,
    Visible,
}

impl MotionState {
    pub fn from_visible(visible: bool) -> Self {
        if visible {
            MotionState::Visible
        } else {
            MotionState::Hidden
        }
    }
}

/// Timing curve for a transition
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    /// Decelerating curve used for entrances
    EaseOut,
    EaseInOut,
    Linear,
    /// Slight overshoot, stands in for spring-driven entrances
    Spring,
}

impl Easing {
    pub fn css(&self) -> &'static str {
        match self {
            Easing::EaseOut => "cubic-bezier(0.16, 1, 0.3, 1)",
            Easing::EaseInOut => "cubic-bezier(0.45, 0, 0.55, 1)",
            Easing::Linear => "linear",
            Easing::Spring => "cubic-bezier(0.34, 1.56, 0.64, 1)",
        }
    }
}

/// Visual properties an animation can touch
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StylePatch {
    pub opacity: f64,
    /// Horizontal offset in px
    pub x: f64,
    /// Vertical offset in px
    pub y: f64,
    pub scale: f64,
    /// Rotation in degrees
    pub rotate: f64,
}

impl StylePatch {
    /// Fully visible, untransformed
    pub const REST: StylePatch = StylePatch {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
        rotate: 0.0,
    };

    pub const fn faded() -> Self {
        StylePatch {
            opacity: 0.0,
            ..Self::REST
        }
    }

    pub const fn with_x(self, x: f64) -> Self {
        StylePatch { x, ..self }
    }

    pub const fn with_y(self, y: f64) -> Self {
        StylePatch { y, ..self }
    }

    pub const fn with_scale(self, scale: f64) -> Self {
        StylePatch { scale, ..self }
    }

    pub const fn with_rotate(self, rotate: f64) -> Self {
        StylePatch { rotate, ..self }
    }

    /// CSS `transform` value, `none` when untransformed
    pub fn transform_css(&self) -> String {
        if self.x == 0.0 && self.y == 0.0 && self.scale == 1.0 && self.rotate == 0.0 {
            return "none".to_string();
        }
        let mut out = format!("translate3d({}px, {}px, 0px)", self.x, self.y);
        if self.scale != 1.0 {
            let _ = write!(out, " scale({})", self.scale);
        }
        if self.rotate != 0.0 {
            let _ = write!(out, " rotate({}deg)", self.rotate);
        }
        out
    }

    /// Inline declarations for this patch
    pub fn to_css(&self) -> String {
        format!("opacity: {}; transform: {};", self.opacity, self.transform_css())
    }
}

/// Stagger settings a container imposes on its children
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Orchestration {
    /// Delay before the first child starts, in seconds
    pub delay_children: f64,
    /// Added per child index, in seconds
    pub stagger_children: f64,
}

impl Orchestration {
    /// Start offset for the child at `index`
    pub fn child_delay(&self, index: usize) -> f64 {
        self.delay_children + index as f64 * self.stagger_children
    }
}

/// Timing for a motion
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    /// Seconds
    pub duration: f64,
    /// Seconds
    pub delay: f64,
    pub easing: Easing,
    pub orchestration: Option<Orchestration>,
}

impl Transition {
    pub const fn new(duration: f64) -> Self {
        Self {
            duration,
            delay: 0.0,
            easing: Easing::EaseOut,
            orchestration: None,
        }
    }

    pub const fn delayed(self, delay: f64) -> Self {
        Transition { delay, ..self }
    }

    pub const fn eased(self, easing: Easing) -> Self {
        Transition { easing, ..self }
    }

    pub const fn staggered(self, orchestration: Orchestration) -> Self {
        Transition {
            orchestration: Some(orchestration),
            ..self
        }
    }

    /// CSS `transition` declaration with `extra_delay` added to the own delay
    pub fn to_css(&self, extra_delay: f64) -> String {
        let delay = self.delay + extra_delay;
        let timing = format!(
            "{} {} {}",
            format_seconds(self.duration),
            self.easing.css(),
            format_seconds(delay)
        );
        format!("transition: opacity {timing}, transform {timing};")
    }
}

/// Seconds rendered with at most three decimals, trailing zeros trimmed
pub fn format_seconds(secs: f64) -> String {
    let rounded = (secs * 1000.0).round() / 1000.0;
    format!("{rounded}s")
}

/// A pair of style states plus timing
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Motion {
    pub hidden: StylePatch,
    pub visible: StylePatch,
    pub transition: Transition,
}

impl Motion {
    pub const fn new(hidden: StylePatch, visible: StylePatch, transition: Transition) -> Self {
        Self {
            hidden,
            visible,
            transition,
        }
    }

    pub fn patch(&self, state: MotionState) -> StylePatch {
        match state {
            MotionState::Hidden => self.hidden,
            MotionState::Visible => self.visible,
        }
    }

    /// Full inline style for `state`, delayed by `extra_delay` seconds
    pub fn style(&self, state: MotionState, extra_delay: f64) -> String {
        format!(
            "{} {}",
            self.patch(state).to_css(),
            self.transition.to_css(extra_delay)
        )
    }

    /// Seconds until the motion settles when started with `extra_delay`
    pub fn settle_time(&self, extra_delay: f64) -> f64 {
        self.transition.delay + extra_delay + self.transition.duration
    }
}

/// Named presets shared by every section
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Variant {
    FadeUp,
    FadeDown,
    FadeLeft,
    FadeRight,
    ScaleIn,
    StaggerContainer,
    StaggerItem,
}

/// Stagger used by every container on the page
pub const STAGGER: Orchestration = Orchestration {
    delay_children: 0.1,
    stagger_children: 0.12,
};

impl Variant {
    pub const ALL: [Variant; 7] = [
        Variant::FadeUp,
        Variant::FadeDown,
        Variant::FadeLeft,
        Variant::FadeRight,
        Variant::ScaleIn,
        Variant::StaggerContainer,
        Variant::StaggerItem,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Variant::FadeUp => "fade-up",
            Variant::FadeDown => "fade-down",
            Variant::FadeLeft => "fade-left",
            Variant::FadeRight => "fade-right",
            Variant::ScaleIn => "scale-in",
            Variant::StaggerContainer => "stagger-container",
            Variant::StaggerItem => "stagger-item",
        }
    }

    pub fn motion(&self) -> Motion {
        let faded = StylePatch::faded();
        let rest = StylePatch::REST;
        match self {
            Variant::FadeUp => Motion::new(faded.with_y(40.0), rest, Transition::new(0.7)),
            Variant::FadeDown => Motion::new(faded.with_y(-40.0), rest, Transition::new(0.7)),
            Variant::FadeLeft => Motion::new(faded.with_x(-60.0), rest, Transition::new(0.7)),
            Variant::FadeRight => Motion::new(faded.with_x(60.0), rest, Transition::new(0.7)),
            Variant::ScaleIn => Motion::new(faded.with_scale(0.8), rest, Transition::new(0.6)),
            Variant::StaggerContainer => {
                Motion::new(faded, rest, Transition::new(0.3).staggered(STAGGER))
            }
            Variant::StaggerItem => Motion::new(faded.with_y(30.0), rest, Transition::new(0.5)),
        }
    }

    pub fn style(&self, state: MotionState, extra_delay: f64) -> String {
        self.motion().style(state, extra_delay)
    }
}

/// Header drop-in on first paint
pub const HEADER_DROP: Motion = Motion::new(
    StylePatch::faded().with_y(-100.0),
    StylePatch::REST,
    Transition::new(0.8),
);

/// Roadmap tab buttons row
pub const TAB_ROW: Motion = Motion::new(
    StylePatch::faded().with_y(20.0),
    StylePatch::REST,
    Transition::new(0.6).delayed(0.2),
);

/// Trust profile card
pub const PROFILE_CARD: Motion = Motion::new(
    StylePatch {
        opacity: 0.0,
        x: 0.0,
        y: 50.0,
        scale: 0.9,
        rotate: 0.0,
    },
    StylePatch::REST,
    Transition::new(0.7).delayed(0.2).eased(Easing::Spring),
);

/// Closing call-to-action card
pub const CTA_CARD: Motion = Motion::new(
    StylePatch {
        opacity: 0.0,
        x: 0.0,
        y: 50.0,
        scale: 0.95,
        rotate: 0.0,
    },
    StylePatch::REST,
    Transition::new(0.7).eased(Easing::Spring),
);

/// Short rise used by lines inside the CTA and the roadmap footer
pub const RISE: Motion = Motion::new(
    StylePatch::faded().with_y(20.0),
    StylePatch::REST,
    Transition::new(0.6),
);

/// Plain fade, used where only opacity changes
pub const FADE: Motion = Motion::new(StylePatch::faded(), StylePatch::REST, Transition::new(0.6));

/// Footer blocks slide in from the side they sit on
pub const FOOTER_LEFT: Motion = Motion::new(
    StylePatch::faded().with_x(-20.0),
    StylePatch::REST,
    Transition::new(0.5),
);

pub const FOOTER_RIGHT: Motion = Motion::new(
    StylePatch::faded().with_x(20.0),
    StylePatch::REST,
    Transition::new(0.5).delayed(0.1),
);

pub const FOOTER_BOTTOM: Motion = Motion::new(
    StylePatch::faded().with_y(20.0),
    StylePatch::REST,
    Transition::new(0.5).delayed(0.2),
);

/// Bullet icons popping in after their list item
pub const ICON_POP: Motion = Motion::new(
    StylePatch::REST.with_scale(0.0),
    StylePatch::REST,
    Transition::new(0.4),
);

/// Check icons spinning into place
pub const ICON_SPIN: Motion = Motion::new(
    StylePatch::REST.with_scale(0.0).with_rotate(-180.0),
    StylePatch::REST,
    Transition::new(0.5).eased(Easing::Spring),
);

/// Delays for list icons, counted from the section reveal
pub const ICON_STAGGER: Orchestration = Orchestration {
    delay_children: 0.5,
    stagger_children: 0.1,
};

/// Number badge on a roadmap step, after its card has entered
pub const STEP_BADGE: Motion = Motion::new(
    StylePatch::REST.with_scale(0.0),
    StylePatch::REST,
    Transition::new(0.4).delayed(0.3).eased(Easing::Spring),
);

/// Three-phase motion for content that enters and later leaves
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwapMotion {
    pub initial: StylePatch,
    pub animate: StylePatch,
    pub exit: StylePatch,
    pub transition: Transition,
    /// Extra delay per item index, in seconds
    pub per_index: f64,
}

impl SwapMotion {
    /// Style patch for content in `phase`
    pub fn patch(&self, phase: SwapPhase) -> StylePatch {
        match phase {
            SwapPhase::Entering => self.initial,
            SwapPhase::Shown => self.animate,
            SwapPhase::Exiting => self.exit,
        }
    }

    pub fn style(&self, patch: StylePatch, index: usize) -> String {
        format!(
            "{} {}",
            patch.to_css(),
            self.transition.to_css(index as f64 * self.per_index)
        )
    }

    /// Seconds until the last of `count` items has finished
    pub fn total_time(&self, count: usize) -> f64 {
        let last = count.saturating_sub(1) as f64;
        self.transition.delay + last * self.per_index + self.transition.duration
    }
}

/// Roadmap step cards: in from the left, out to the right
pub const STEP_SWAP: SwapMotion = SwapMotion {
    initial: StylePatch::faded().with_x(-30.0),
    animate: StylePatch::REST,
    exit: StylePatch::faded().with_x(30.0),
    transition: Transition::new(0.4),
    per_index: 0.1,
};

/// Roadmap tagline above the steps
pub const TAGLINE_SWAP: SwapMotion = SwapMotion {
    initial: StylePatch::faded().with_y(20.0),
    animate: StylePatch::REST,
    exit: StylePatch::faded().with_y(-20.0),
    transition: Transition::new(0.3),
    per_index: 0.0,
};

/// Collapsible panel timing: height plus fade plus optional drop
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CollapseMotion {
    /// Seconds
    pub duration: f64,
    /// Vertical offset while collapsed, in px
    pub offset_y: f64,
    pub easing: Easing,
}

impl CollapseMotion {
    /// Inline style for the grid wrapper. `grid-template-rows` moving between
    /// `0fr` and `1fr` animates to the natural content height.
    pub fn style(&self, expanded: bool) -> String {
        let patch = if expanded {
            StylePatch::REST
        } else {
            StylePatch::faded().with_y(self.offset_y)
        };
        let timing = format!("{} {}", format_seconds(self.duration), self.easing.css());
        format!(
            "display: grid; grid-template-rows: {}; {} transition: grid-template-rows {timing}, opacity {timing}, transform {timing};",
            if expanded { "1fr" } else { "0fr" },
            patch.to_css(),
        )
    }
}

pub const MENU_COLLAPSE: CollapseMotion = CollapseMotion {
    duration: 0.3,
    offset_y: -20.0,
    easing: Easing::EaseInOut,
};

pub const ANSWER_COLLAPSE: CollapseMotion = CollapseMotion {
    duration: 0.3,
    offset_y: 0.0,
    easing: Easing::EaseOut,
};

/// Rotation for a disclosure icon
pub fn icon_rotation(open: bool) -> String {
    let patch = StylePatch::REST.with_rotate(if open { 180.0 } else { 0.0 });
    format!(
        "transform: {}; transition: transform {} {};",
        patch.transform_css(),
        format_seconds(0.3),
        Easing::EaseInOut.css()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_table_parameters() {
        let up = Variant::FadeUp.motion();
        assert_eq!(up.hidden.opacity, 0.0);
        assert_eq!(up.hidden.y, 40.0);
        assert_eq!(up.visible, StylePatch::REST);
        assert_eq!(up.transition.duration, 0.7);

        assert_eq!(Variant::FadeDown.motion().hidden.y, -40.0);
        assert_eq!(Variant::FadeLeft.motion().hidden.x, -60.0);
        assert_eq!(Variant::FadeRight.motion().hidden.x, 60.0);

        let scale = Variant::ScaleIn.motion();
        assert_eq!(scale.hidden.scale, 0.8);
        assert_eq!(scale.visible.scale, 1.0);
        assert_eq!(scale.transition.duration, 0.6);

        let item = Variant::StaggerItem.motion();
        assert_eq!(item.hidden.y, 30.0);
        assert_eq!(item.transition.duration, 0.5);
    }

    #[test]
    fn test_every_variant_ends_at_rest() {
        for variant in Variant::ALL {
            let motion = variant.motion();
            assert_eq!(motion.visible, StylePatch::REST, "{}", variant.name());
            assert_eq!(motion.hidden.opacity, 0.0, "{}", variant.name());
        }
    }

    #[test]
    fn test_stagger_container_orchestration() {
        let container = Variant::StaggerContainer.motion();
        let orchestration = container.transition.orchestration.unwrap();
        assert_eq!(orchestration.delay_children, 0.1);
        assert_eq!(orchestration.stagger_children, 0.12);
        assert!(Variant::FadeUp.motion().transition.orchestration.is_none());
    }

    #[test]
    fn test_child_delays_increase_by_fixed_step() {
        let delays: Vec<f64> = (0..6).map(|i| STAGGER.child_delay(i)).collect();
        assert!((delays[0] - 0.1).abs() < 1e-9);
        for pair in delays.windows(2) {
            assert!(pair[1] >= pair[0]);
            assert!((pair[1] - pair[0] - 0.12).abs() < 1e-9);
        }
    }

    #[test]
    fn test_hidden_style_css() {
        assert_eq!(
            Variant::FadeUp.style(MotionState::Hidden, 0.0),
            "opacity: 0; transform: translate3d(0px, 40px, 0px); \
             transition: opacity 0.7s cubic-bezier(0.16, 1, 0.3, 1) 0s, \
             transform 0.7s cubic-bezier(0.16, 1, 0.3, 1) 0s;"
        );
    }

    #[test]
    fn test_visible_style_has_no_transform() {
        let css = Variant::ScaleIn.style(MotionState::Visible, 0.22);
        assert!(css.starts_with("opacity: 1; transform: none;"));
        assert!(css.contains("0.6s"));
        assert!(css.contains(" 0.22s"));
    }

    #[test]
    fn test_format_seconds_rounds_float_noise() {
        assert_eq!(format_seconds(0.1 + 2.0 * 0.12), "0.34s");
        assert_eq!(format_seconds(0.0), "0s");
        assert_eq!(format_seconds(1.5), "1.5s");
    }

    #[test]
    fn test_transform_with_scale_and_rotate() {
        let patch = StylePatch::faded().with_scale(0.9).with_rotate(-180.0);
        assert_eq!(
            patch.transform_css(),
            "translate3d(0px, 0px, 0px) scale(0.9) rotate(-180deg)"
        );
    }

    #[test]
    fn test_step_swap_total_time_covers_last_item() {
        assert!((STEP_SWAP.total_time(4) - 0.7).abs() < 1e-9);
        assert!((STEP_SWAP.total_time(1) - 0.4).abs() < 1e-9);
        assert!((TAGLINE_SWAP.total_time(1) - 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_swap_patch_per_phase() {
        assert_eq!(STEP_SWAP.patch(SwapPhase::Entering).x, -30.0);
        assert_eq!(STEP_SWAP.patch(SwapPhase::Shown), StylePatch::REST);
        assert_eq!(STEP_SWAP.patch(SwapPhase::Exiting).x, 30.0);
        assert_eq!(TAGLINE_SWAP.patch(SwapPhase::Exiting).y, -20.0);
        assert_eq!(STEP_SWAP.patch(SwapPhase::Exiting).opacity, 0.0);
    }

    #[test]
    fn test_icon_pop_keeps_opacity() {
        assert_eq!(ICON_POP.hidden.opacity, 1.0);
        assert!(ICON_POP.hidden.transform_css().ends_with("scale(0)"));
        assert!(ICON_SPIN.hidden.transform_css().contains("rotate(-180deg)"));
        assert!((ICON_STAGGER.child_delay(3) - 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_collapse_style() {
        let open = MENU_COLLAPSE.style(true);
        assert!(open.contains("grid-template-rows: 1fr;"));
        assert!(open.contains("opacity: 1;"));

        let closed = MENU_COLLAPSE.style(false);
        assert!(closed.contains("grid-template-rows: 0fr;"));
        assert!(closed.contains("translate3d(0px, -20px, 0px)"));

        let answer = ANSWER_COLLAPSE.style(false);
        assert!(answer.contains("transform: none;"));
    }

    #[test]
    fn test_icon_rotation() {
        assert!(icon_rotation(true).contains("rotate(180deg)"));
        assert!(icon_rotation(false).starts_with("transform: none;"));
    }

    #[test]
    fn test_settle_time() {
        assert!((PROFILE_CARD.settle_time(0.0) - 0.9).abs() < 1e-9);
        assert!((Variant::StaggerItem.motion().settle_time(0.34) - 0.84).abs() < 1e-9);
    }
}
