use leptos::html;
use leptos::prelude::*;

use crate::core::Variant;
use crate::core::content::{BETTER_WAY_POINTS, OLD_WAY_POINTS};
use crate::core::motion::{ICON_POP, ICON_SPIN, ICON_STAGGER};
use crate::core::viewport::ViewportOptions;
use crate::ui::icon::{Icon, icons};
use crate::ui::motion::{Stagger, motion_style, variant_style};
use crate::ui::viewport::use_in_view;

/// "Why This Approach": the old way against a better way
#[component]
pub fn Comparison() -> impl IntoView {
    let section = NodeRef::<html::Section>::new();
    let in_view = use_in_view(section, ViewportOptions::SECTION);
    let heading = Stagger::new(in_view);
    let fade_up = Variant::FadeUp.motion();

    view! {
        <section node_ref=section class="py-24 relative overflow-hidden">
            <div class="max-w-7xl mx-auto px-6">
                // Section header
                <div class="text-center mb-16" style=heading.container()>
                    <span class="section-badge" style=heading.child(Variant::ScaleIn.motion(), 0)>
                        "Why This Approach"
                    </span>
                    <h2
                        class="text-3xl sm:text-4xl md:text-5xl font-bold mb-4"
                        style=heading.child(fade_up, 1)
                    >
                        "Stop guessing. Stop Googling. Stop stressing."
                    </h2>
                    <p class="text-zinc-400 max-w-2xl mx-auto text-lg" style=heading.child(fade_up, 2)>
                        "You don't need 100 loan options."
                        <br />
                        "You need the "
                        <span class="text-white font-medium">"right loan"</span>
                        " — explained clearly — for your situation."
                    </p>
                    <p class="text-zinc-500 max-w-2xl mx-auto mt-4" style=heading.child(fade_up, 3)>
                        "Most people don't struggle because mortgages are \"too complicated.\" "
                        "They struggle because no one slows down and explains them properly."
                    </p>
                </div>

                // Comparison cards
                <div class="grid md:grid-cols-2 gap-8">
                    <div style=variant_style(Variant::FadeLeft, in_view, 0.0)>
                        <div class="old-way-card rounded-2xl p-8 h-full hover-rise">
                            <div class="flex items-center gap-3 mb-6">
                                <span class="text-red-400 text-sm font-medium uppercase tracking-wider breathe">
                                    "The Old Way"
                                </span>
                            </div>
                            <h3 class="text-2xl font-bold mb-4 text-red-400">"The Mortgage Confusion Trap"</h3>
                            <p class="text-zinc-400 mb-6">
                                "Buyers scrolling rate sites, comparing lenders they don't trust, and getting different answers from everyone. Pre-approvals feel rushed. Decisions feel unclear."
                            </p>
                            <PointList
                                points=&OLD_WAY_POINTS
                                in_view=in_view
                                icon=icons::X_CIRCLE
                                icon_class="w-5 h-5 text-red-400"
                                item_class="text-zinc-400"
                                spin=false
                            />
                        </div>
                    </div>

                    <div style=variant_style(Variant::FadeRight, in_view, 0.0)>
                        <div class="better-way-card rounded-2xl p-8 h-full relative overflow-hidden hover-rise">
                            <div class="absolute inset-0 shimmer pointer-events-none" aria-hidden="true"></div>
                            <div class="relative">
                                <div class="flex items-center gap-3 mb-6">
                                    <span class="text-brand-soft text-sm font-medium uppercase tracking-wider breathe">
                                        "A Better Way"
                                    </span>
                                </div>
                                <h3 class="text-2xl font-bold mb-4 text-brand-soft">
                                    "A Clear, Guided Mortgage Strategy"
                                </h3>
                                <p class="text-zinc-400 mb-6">
                                    "This is a strategy-first mortgage process designed to help you understand your options before you choose one — so you move forward with confidence."
                                </p>
                                <PointList
                                    points=&BETTER_WAY_POINTS
                                    in_view=in_view
                                    icon=icons::CHECK_CIRCLE
                                    icon_class="w-5 h-5 text-brand-soft"
                                    item_class="text-zinc-300"
                                    spin=true
                                />
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

/// Staggered bullet list whose icons pop in after the items
#[component]
fn PointList(
    points: &'static [&'static str],
    in_view: Signal<bool>,
    icon: &'static str,
    icon_class: &'static str,
    item_class: &'static str,
    spin: bool,
) -> impl IntoView {
    let stagger = Stagger::new(in_view);
    let icon_motion = if spin { ICON_SPIN } else { ICON_POP };

    view! {
        <ul class="space-y-3" style=stagger.container()>
            {points
                .iter()
                .enumerate()
                .map(|(index, point)| {
                    view! {
                        <li class=format!("flex items-start gap-3 {}", item_class) style=stagger.item(index)>
                            <span
                                class="inline-flex shrink-0 mt-0.5"
                                style=motion_style(icon_motion, in_view, ICON_STAGGER.child_delay(index))
                            >
                                <Icon name=icon class=icon_class />
                            </span>
                            <span>{*point}</span>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}
