//! Reactive glue between signals and the motion table
//!
//! Sections hold an in-view signal and ask these helpers for `style`
//! closures. Nothing here animates by itself; it only switches inline styles
//! and lets CSS transitions run.

use std::time::Duration;

use leptos::prelude::*;

use crate::core::motion::{CollapseMotion, Motion, Orchestration, STAGGER, Variant};
use crate::core::presence::Presence;
use crate::core::MotionState;

/// Style closure for `motion`, hidden until `visible` turns true
pub fn motion_style(
    motion: Motion,
    visible: Signal<bool>,
    extra_delay: f64,
) -> impl Fn() -> String + Copy + Send + Sync + 'static + use<> {
    move || motion.style(MotionState::from_visible(visible.get()), extra_delay)
}

/// Style closure for a named preset
pub fn variant_style(
    variant: Variant,
    visible: Signal<bool>,
    extra_delay: f64,
) -> impl Fn() -> String + Copy + Send + Sync + 'static + use<> {
    motion_style(variant.motion(), visible, extra_delay)
}

/// A stagger container and the delays it hands to its children
#[derive(Clone, Copy)]
pub struct Stagger {
    visible: Signal<bool>,
    orchestration: Orchestration,
    /// Added to every child, for containers that start late themselves
    offset: f64,
}

impl Stagger {
    pub fn new(visible: Signal<bool>) -> Self {
        let container = Variant::StaggerContainer.motion();
        Self {
            visible,
            orchestration: container
                .transition
                .orchestration
                .unwrap_or(STAGGER),
            offset: 0.0,
        }
    }

    pub fn offset(self, offset: f64) -> Self {
        Self { offset, ..self }
    }

    /// Style for the container element itself
    pub fn container(&self) -> impl Fn() -> String + Copy + Send + Sync + 'static + use<> {
        variant_style(Variant::StaggerContainer, self.visible, self.offset)
    }

    /// Start offset of child `index`, in seconds
    pub fn delay(&self, index: usize) -> f64 {
        self.offset + self.orchestration.child_delay(index)
    }

    /// Style for child `index` using the stagger-item preset
    pub fn item(&self, index: usize) -> impl Fn() -> String + Copy + Send + Sync + 'static + use<> {
        self.child(Variant::StaggerItem.motion(), index)
    }

    /// Style for child `index` with a custom motion
    pub fn child(
        &self,
        motion: Motion,
        index: usize,
    ) -> impl Fn() -> String + Copy + Send + Sync + 'static + use<> {
        motion_style(motion, self.visible, self.delay(index))
    }
}

/// Turns true once the component has mounted and painted.
///
/// Server markup and the hydrating client both start hidden, then the
/// entrance plays once the page is interactive.
pub fn use_mount_reveal() -> Signal<bool> {
    let (mounted, set_mounted) = signal(false);

    Effect::new(move |_| {
        // Two frames: the hidden style has to be painted before it can animate
        request_animation_frame(move || {
            request_animation_frame(move || {
                let _ = set_mounted.try_set(true);
            });
        });
    });

    mounted.into()
}

/// Collapsible panel that animates to its natural height.
///
/// Content is mounted only while open or closing. Opening mounts it
/// collapsed and expands it two frames later; closing collapses it and
/// unmounts it after the transition.
#[component]
pub fn Collapse(
    /// Whether the panel should be open
    #[prop(into)]
    open: Signal<bool>,
    /// Timing and offset of the height transition
    motion: CollapseMotion,
    /// Classes for the inner content wrapper
    #[prop(optional)]
    class: &'static str,
    children: ChildrenFn,
) -> impl IntoView {
    let presence = RwSignal::new(Presence::new(open.get_untracked()));

    Effect::new(move |_| {
        let open = open.get();
        if open {
            let ticket = presence.try_update(Presence::show).flatten();
            if let Some(ticket) = ticket {
                request_animation_frame(move || {
                    request_animation_frame(move || {
                        presence.try_update(|p| p.entered(ticket));
                    });
                });
            }
        } else {
            let ticket = presence.try_update(Presence::hide).flatten();
            if let Some(ticket) = ticket {
                set_timeout(
                    move || {
                        presence.try_update(|p| p.exited(ticket));
                    },
                    Duration::from_secs_f64(motion.duration),
                );
            }
        }
    });

    let expanded = move || presence.with(Presence::is_expanded);

    view! {
        <Show when=move || presence.with(Presence::is_mounted)>
            <div style=move || motion.style(expanded())>
                <div class="overflow-hidden min-h-0">
                    <div class=class>{children()}</div>
                </div>
            </div>
        </Show>
    }
}
