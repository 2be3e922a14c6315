use leptos::html;
use leptos::prelude::*;

use super::SectionHeading;
use crate::core::Variant;
use crate::core::content::{ADVISOR, BRAND_FULL};
use crate::core::motion::{FADE, PROFILE_CARD};
use crate::core::viewport::ViewportOptions;
use crate::ui::icon::{Icon, icons};
use crate::ui::motion::{Stagger, motion_style, variant_style};
use crate::ui::viewport::use_in_view;

/// Loan officer profile
#[component]
pub fn Trust() -> impl IntoView {
    let section = NodeRef::<html::Section>::new();
    let in_view = use_in_view(section, ViewportOptions::SECTION);
    let heading = Stagger::new(in_view);

    view! {
        <section node_ref=section class="py-24 relative overflow-hidden">
            <div class="max-w-4xl mx-auto px-6">
                <SectionHeading
                    stagger=heading
                    badge="Trust & Expertise"
                    title="Guided by Experience — Not Guesswork"
                    spacing="mb-12"
                />

                // Profile card
                <div style=motion_style(PROFILE_CARD, in_view, 0.0)>
                    <div class="feature-card gradient-border rounded-3xl p-8 md:p-12 text-center relative overflow-hidden hover-rise-sm">
                        <div class="profile-glow" aria-hidden="true"></div>

                        <div class="relative">
                            // Avatar
                            <div class="avatar-pulse w-28 h-28 rounded-full bg-gradient-to-br from-brand to-brand-soft mx-auto mb-6 flex items-center justify-center relative">
                                <Icon name=icons::USER class="w-14 h-14 text-white" />
                                <div class="avatar-ripple" aria-hidden="true"></div>
                            </div>

                            <h3 class="text-2xl font-bold mb-2" style=motion_style(FADE, in_view, 0.4)>
                                {ADVISOR.name}
                            </h3>
                            <p class="text-brand-soft font-medium mb-1" style=motion_style(FADE, in_view, 0.5)>
                                {ADVISOR.role}
                            </p>
                            <p class="text-zinc-500 text-sm mb-4" style=motion_style(FADE, in_view, 0.6)>
                                {format!("NMLS {}", ADVISOR.nmls)}
                            </p>

                            <div
                                class="inline-flex items-center gap-2 px-4 py-2 rounded-full bg-zinc-800/50 border border-brand-soft/30"
                                style=variant_style(Variant::ScaleIn, in_view, 0.7)
                            >
                                <Icon name=icons::HOME class="w-4 h-4 text-brand-soft" />
                                <span class="text-zinc-300 text-sm font-medium">{BRAND_FULL}</span>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
