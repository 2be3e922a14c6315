//! Not found page component
//!
//! Shown for every path other than the home page.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::core::content::{BRAND_FULL, COPYRIGHT};
use crate::ui::icon::{Icon, icons};
use crate::ui::styles::LandingStyles;

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <Title text=format!("Page Not Found | {}", BRAND_FULL) />
        <LandingStyles />

        <div class="min-h-screen flex flex-col items-center justify-center p-4 relative overflow-hidden">
            <div class="absolute inset-0 grid-pattern opacity-30" aria-hidden="true"></div>

            <div class="relative text-center">
                <div class="w-24 h-24 mx-auto mb-6 rounded-full bg-brand/20 flex items-center justify-center">
                    <Icon name=icons::FILE_TEXT class="w-12 h-12 text-brand-soft" />
                </div>

                <h1 class="text-6xl font-bold gradient-text mb-4">"404"</h1>
                <h2 class="text-2xl font-semibold mb-2">"Page Not Found"</h2>
                <p class="text-zinc-400 mb-8 max-w-md mx-auto">
                    "The page you're looking for doesn't exist or has been moved."
                </p>

                <A
                    href="/"
                    attr:class="inline-flex items-center gap-2 btn-primary px-6 py-3 rounded-xl font-medium"
                >
                    "Back to Home"
                    <Icon name=icons::ARROW_RIGHT class="w-4 h-4" />
                </A>
            </div>

            <div class="absolute bottom-8 text-center">
                <p class="text-sm text-zinc-500">{COPYRIGHT}</p>
            </div>
        </div>
    }
}
