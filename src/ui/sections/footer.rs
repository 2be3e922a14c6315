use leptos::html;
use leptos::prelude::*;

use super::{LogoTile, Wordmark};
use crate::core::content::{ADVISOR, COPYRIGHT, FOOTER_TAGLINE};
use crate::core::motion::{FOOTER_BOTTOM, FOOTER_LEFT, FOOTER_RIGHT};
use crate::core::viewport::ViewportOptions;
use crate::ui::motion::motion_style;
use crate::ui::viewport::use_in_view;

/// Footer blocks replay their entrance every time they scroll into view
#[component]
pub fn Footer() -> impl IntoView {
    let left = NodeRef::<html::Div>::new();
    let right = NodeRef::<html::Div>::new();
    let bottom = NodeRef::<html::Div>::new();

    let left_in_view = use_in_view(left, ViewportOptions::CONTINUOUS);
    let right_in_view = use_in_view(right, ViewportOptions::CONTINUOUS);
    let bottom_in_view = use_in_view(bottom, ViewportOptions::CONTINUOUS);

    view! {
        <footer class="py-12 border-t border-zinc-800/50 relative overflow-hidden">
            <div class="footer-glow" aria-hidden="true"></div>
            <div class="relative max-w-7xl mx-auto px-6">
                <div class="flex flex-col md:flex-row items-center justify-between gap-8 mb-8">
                    <div
                        node_ref=left
                        class="flex flex-col items-center md:items-start gap-4"
                        style=motion_style(FOOTER_LEFT, left_in_view, 0.0)
                    >
                        <div class="flex items-center gap-3 hover-lift">
                            <LogoTile />
                            <Wordmark />
                        </div>
                        <div class="text-sm text-zinc-500 text-center md:text-left">
                            <p>{format!("{} | NMLS {}", ADVISOR.name, ADVISOR.nmls)}</p>
                            <p class="mt-1">"Equal Housing Lender"</p>
                        </div>
                    </div>

                    <div
                        node_ref=right
                        class="text-center md:text-right"
                        style=motion_style(FOOTER_RIGHT, right_in_view, 0.0)
                    >
                        <p class="text-zinc-400 max-w-sm">{FOOTER_TAGLINE}</p>
                    </div>
                </div>

                <div
                    node_ref=bottom
                    class="pt-8 border-t border-zinc-800/50 flex flex-col sm:flex-row items-center justify-between gap-4 text-sm text-zinc-500"
                    style=motion_style(FOOTER_BOTTOM, bottom_in_view, 0.0)
                >
                    <p>{COPYRIGHT}</p>
                    <div class="flex items-center gap-6">
                        <a href="#" class="hover:text-white transition-colors animated-underline">
                            "Privacy Policy"
                        </a>
                        <a href="#" class="hover:text-white transition-colors animated-underline">
                            "NMLS Consumer Access"
                        </a>
                    </div>
                </div>
            </div>
        </footer>
    }
}
