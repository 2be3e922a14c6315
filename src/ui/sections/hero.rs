use leptos::html;
use leptos::prelude::*;

use crate::core::particles::particles;
use crate::core::scroll::Parallax;
use crate::core::viewport::ViewportOptions;
use crate::core::{NavTarget, Variant};
use crate::ui::icon::{Icon, icons};
use crate::ui::motion::Stagger;
use crate::ui::scroll::use_scroll_sample;
use crate::ui::viewport::use_in_view;

#[component]
pub fn Hero() -> impl IntoView {
    let section = NodeRef::<html::Section>::new();
    let in_view = use_in_view(section, ViewportOptions::ONCE);
    let stagger = Stagger::new(in_view);

    // Content drifts down and fades as the page scrolls
    let scroll = use_scroll_sample();
    let parallax = move || Parallax::at(scroll.get().progress()).to_css();

    let fade_down = Variant::FadeDown.motion();
    let fade_up = Variant::FadeUp.motion();

    view! {
        <section node_ref=section class="relative min-h-screen pt-32 pb-20 overflow-hidden">
            // Animated background orbs
            <div class="orb orb-1" aria-hidden="true"></div>
            <div class="orb orb-2" aria-hidden="true"></div>
            <div class="orb orb-3" aria-hidden="true"></div>

            // Background effects
            <div class="absolute inset-0 grid-pattern opacity-40" aria-hidden="true"></div>
            <div class="absolute inset-0 radial-gradient" aria-hidden="true"></div>
            <FloatingParticles />

            <div class="relative max-w-7xl mx-auto px-6 will-change-transform" style=parallax>
                <div class="text-center max-w-4xl mx-auto" style=stagger.container()>
                    // Badge
                    <div class="mb-8 inline-flex items-center gap-2" style=stagger.child(fade_down, 0)>
                        <span class="badge-glow inline-flex items-center gap-2 px-4 py-2 rounded-full border border-brand-soft/30 bg-brand/10 text-sm">
                            <Icon name=icons::SPARKLES class="w-4 h-4 text-brand-soft" />
                            <span class="text-brand-soft">"Clarity-First Mortgage Process"</span>
                        </span>
                    </div>

                    // Main heading
                    <h1
                        class="text-4xl sm:text-5xl md:text-6xl lg:text-7xl font-bold leading-tight mb-6"
                        style=stagger.child(fade_up, 1)
                    >
                        "The Mortgage System That Helps You "
                        <span class="gradient-text">"Buy Smarter"</span>
                        " — Without Confusion or Pressure"
                    </h1>

                    <p
                        class="text-lg sm:text-xl text-zinc-400 mb-4 max-w-2xl mx-auto"
                        style=stagger.child(fade_up, 2)
                    >
                        "Buying or refinancing a home shouldn't feel overwhelming. "
                        "Get a clear mortgage plan, honest guidance, and a process that actually makes sense — before you commit."
                    </p>

                    <p
                        class="text-base text-zinc-500 mb-10 max-w-xl mx-auto"
                        style=stagger.child(fade_up, 3)
                    >
                        "Talk with a real expert. Make confident decisions. Close with clarity."
                    </p>

                    // CTA Buttons
                    <div
                        class="flex flex-col sm:flex-row items-center justify-center gap-4"
                        style=stagger.child(fade_up, 4)
                    >
                        <a
                            href=NavTarget::BookCall.href()
                            class="inline-flex items-center gap-2 btn-primary px-8 py-4 rounded-xl text-lg font-medium"
                        >
                            "Start Here"
                            <span class="nudge-x inline-flex">
                                <Icon name=icons::ARROW_RIGHT />
                            </span>
                        </a>
                        <a
                            href=NavTarget::BookCall.href()
                            class="inline-flex items-center gap-2 btn-secondary px-8 py-4 rounded-xl text-lg font-medium"
                        >
                            <Icon name=icons::PHONE />
                            "Book a Call"
                        </a>
                    </div>

                    // How It Works link
                    <div class="mt-12" style=stagger.child(fade_up, 5)>
                        <a
                            href=NavTarget::HowItWorks.href()
                            class="inline-flex flex-col items-center gap-2 text-brand-soft hover:text-brand-light transition-colors"
                        >
                            <span class="text-sm">"How It Works"</span>
                            <span class="bob-y inline-flex">
                                <Icon name=icons::CHEVRON_DOWN class="w-6 h-6" />
                            </span>
                        </a>
                    </div>
                </div>
            </div>
        </section>
    }
}

/// Dots drifting up behind the hero content
#[component]
fn FloatingParticles() -> impl IntoView {
    view! {
        <div class="absolute inset-0 overflow-hidden pointer-events-none" aria-hidden="true">
            {particles()
                .map(|particle| view! { <div class="particle" style=particle.style()></div> })
                .collect_view()}
        </div>
    }
}
