//! Home page sections, top to bottom
//!
//! Each section owns its in-view signal and local state. Nothing is shared
//! between sections except the motion table.

mod comparison;
mod cta;
mod faq;
mod features;
mod footer;
mod header;
mod hero;
mod roadmap;
mod trust;

pub use comparison::Comparison;
pub use cta::CallToAction;
pub use faq::Faq;
pub use features::Features;
pub use footer::Footer;
pub use header::Header;
pub use hero::Hero;
pub use roadmap::Roadmap;
pub use trust::Trust;

use leptos::prelude::*;

use crate::core::Variant;
use crate::core::content::{BRAND, BRAND_SUFFIX};
use crate::ui::icon::{Icon, icons};
use crate::ui::motion::Stagger;

/// Badge, heading and optional lead paragraph opening a section
#[component]
fn SectionHeading(
    stagger: Stagger,
    badge: &'static str,
    title: &'static str,
    #[prop(optional)] subtitle: Option<&'static str>,
    #[prop(default = "mb-16")] spacing: &'static str,
) -> impl IntoView {
    view! {
        <div class=format!("text-center {}", spacing) style=stagger.container()>
            <span
                class="section-badge"
                style=stagger.child(Variant::ScaleIn.motion(), 0)
            >
                {badge}
            </span>
            <h2
                class="text-3xl sm:text-4xl md:text-5xl font-bold mb-4"
                style=stagger.child(Variant::FadeUp.motion(), 1)
            >
                {title}
            </h2>
            {subtitle.map(|text| view! {
                <p
                    class="text-zinc-400 max-w-2xl mx-auto"
                    style=stagger.child(Variant::FadeUp.motion(), 2)
                >
                    {text}
                </p>
            })}
        </div>
    }
}

/// House icon in a gradient tile
#[component]
fn LogoTile(#[prop(optional)] glow: bool) -> impl IntoView {
    view! {
        <div
            class="w-10 h-10 rounded-xl bg-gradient-to-br from-brand to-brand-soft flex items-center justify-center"
            class:glow-pulse=glow
        >
            <Icon name=icons::HOME class="w-5 h-5 text-white" />
        </div>
    }
}

/// Two-tone brand name
#[component]
fn Wordmark() -> impl IntoView {
    view! {
        <span class="font-semibold text-lg">{BRAND}</span>
        <span class="text-brand-soft font-medium ml-1">{BRAND_SUFFIX}</span>
    }
}
