//! Tabbed roadmap with exit-then-enter step swaps

use std::time::Duration;

use leptos::html;
use leptos::prelude::*;

use super::SectionHeading;
use crate::core::motion::{FADE, RISE, STEP_BADGE, STEP_SWAP, SwapMotion, TAB_ROW, TAGLINE_SWAP};
use crate::core::presence::{SwapPhase, Ticket};
use crate::core::roadmap::Roadmap as RoadmapState;
use crate::core::viewport::ViewportOptions;
use crate::core::{MotionState, NavTarget, PageSection, RoadmapTab, SwapChange};
use crate::ui::common::tabs::{TabItem, Tabs};
use crate::ui::icon::{Icon, icons};
use crate::ui::motion::{Stagger, motion_style};
use crate::ui::viewport::use_in_view;

/// Seconds the outgoing content needs before the replacement mounts
fn exit_time() -> f64 {
    let steps = STEP_SWAP.total_time(RoadmapTab::default().steps().len());
    steps.max(TAGLINE_SWAP.total_time(1))
}

#[component]
pub fn Roadmap() -> impl IntoView {
    let section = NodeRef::<html::Section>::new();
    let in_view = use_in_view(section, ViewportOptions::SECTION);
    let heading = Stagger::new(in_view);

    let state = RwSignal::new(RoadmapState::default());
    let active = Signal::derive(move || state.with(|roadmap| roadmap.active()));
    let phase = Signal::derive(move || state.with(|roadmap| roadmap.swap().phase()));

    let on_select = Callback::new(move |tab: RoadmapTab| {
        let change = state.try_update(|roadmap| roadmap.select(tab));
        if let Some(SwapChange::Exit(ticket)) = change {
            set_timeout(
                move || finish_exit(state, ticket),
                Duration::from_secs_f64(exit_time()),
            );
        }
    });

    let tabs = RoadmapTab::ALL
        .iter()
        .map(|tab| TabItem::new(*tab, tab.to_string()).with_icon(tab.icon()))
        .collect::<Vec<_>>();

    view! {
        <section
            node_ref=section
            id=PageSection::Roadmap.anchor()
            class="py-24 relative overflow-hidden"
        >
            // Background glow
            <div class="roadmap-glow" aria-hidden="true"></div>

            <div class="max-w-7xl mx-auto px-6 relative">
                <SectionHeading
                    stagger=heading
                    badge="Roadmap"
                    title="What Does the Process Look Like?"
                    subtitle="Choose where you're starting:"
                />

                // Tabs
                <div style=motion_style(TAB_ROW, in_view, 0.0)>
                    <Tabs
                        tabs=tabs
                        active=active
                        on_change=on_select
                        class="flex justify-center gap-4 mb-12"
                    />
                </div>

                // Tab content
                <div class="max-w-3xl mx-auto">
                    <div class="mb-8" style=move || swap_style(&TAGLINE_SWAP, phase.get(), 0)>
                        <p class="text-center text-zinc-400 text-lg mb-8" data-role="tagline">
                            {move || state.with(|roadmap| roadmap.displayed().tagline())}
                        </p>
                    </div>

                    // Steps
                    <div class="space-y-4 relative">
                        <div class="roadmap-line" aria-hidden="true"></div>
                        <For
                            each=move || state.with(|roadmap| roadmap.displayed().keyed_steps())
                            key=|(key, _)| *key
                            children=move |(key, step)| {
                                let index = key.index;
                                let badge = move || {
                                    let shown = phase.get() == SwapPhase::Shown;
                                    STEP_BADGE.style(
                                        MotionState::from_visible(shown),
                                        index as f64 * STEP_SWAP.per_index,
                                    )
                                };
                                view! {
                                    <div
                                        style=move || swap_style(&STEP_SWAP, phase.get(), index)
                                        data-step=index.to_string()
                                    >
                                        <div class="feature-card rounded-xl p-6 flex items-start gap-4 relative hover-slide">
                                            <div class="flex items-center gap-4">
                                                <span class="step-number" style=badge>
                                                    {index + 1}
                                                </span>
                                                <div class="w-12 h-12 rounded-xl bg-brand/20 flex items-center justify-center hover-tilt">
                                                    <Icon name=step.icon class="w-6 h-6 text-brand-soft" />
                                                </div>
                                            </div>
                                            <div>
                                                <h3 class="text-lg font-semibold mb-1">{step.title}</h3>
                                                <p class="text-zinc-400 text-sm">{step.description}</p>
                                            </div>
                                        </div>
                                    </div>
                                }
                            }
                        />
                    </div>

                    // CTA
                    <div class="text-center mt-10" style=motion_style(RISE, in_view, 0.7)>
                        <a
                            href=NavTarget::BookCall.href()
                            class="inline-flex items-center gap-2 btn-primary px-8 py-4 rounded-xl text-lg font-medium"
                        >
                            {move || active.get().cta_label()}
                            <Icon name=icons::ARROW_RIGHT />
                        </a>
                    </div>

                    // Bottom text
                    <div class="text-center mt-12" style=motion_style(FADE, in_view, 0.8)>
                        <p class="text-zinc-500 text-sm">"Both paths lead to the same thing"</p>
                        <p class="text-brand-soft font-semibold text-lg text-glow">"A confident closing"</p>
                    </div>
                </div>
            </div>
        </section>
    }
}

fn swap_style(motion: &SwapMotion, phase: SwapPhase, index: usize) -> String {
    motion.style(motion.patch(phase), index)
}

/// Exit timer: mount the new tab's content, then start its entrance
fn finish_exit(state: RwSignal<RoadmapState>, ticket: Ticket) {
    let Some(enter) = state.try_update(|roadmap| roadmap.exit_finished(ticket)).flatten() else {
        return;
    };
    // Two frames so the initial style is painted before the entrance starts
    request_animation_frame(move || {
        request_animation_frame(move || {
            state.try_update(|roadmap| roadmap.enter_started(enter));
        });
    });
}
