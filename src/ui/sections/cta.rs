use leptos::html;
use leptos::prelude::*;

use crate::core::motion::{CTA_CARD, RISE};
use crate::core::viewport::ViewportOptions;
use crate::core::{NavTarget, PageSection};
use crate::ui::icon::{Icon, icons};
use crate::ui::motion::motion_style;
use crate::ui::viewport::use_in_view;

/// Closing call to action, target of every "Book a Call" link
#[component]
pub fn CallToAction() -> impl IntoView {
    let section = NodeRef::<html::Section>::new();
    let in_view = use_in_view(section, ViewportOptions::SECTION);

    view! {
        <section node_ref=section id=PageSection::Cta.anchor() class="py-24 relative">
            <div class="max-w-4xl mx-auto px-6">
                <div style=motion_style(CTA_CARD, in_view, 0.0)>
                    <div class="better-way-card rounded-3xl p-8 md:p-16 text-center relative overflow-hidden">
                        <div class="cta-glow" aria-hidden="true"></div>

                        <div class="relative">
                            <h2
                                class="text-3xl sm:text-4xl md:text-5xl font-bold mb-6"
                                style=motion_style(RISE, in_view, 0.2)
                            >
                                "Ready to Feel Confident About Your Mortgage?"
                            </h2>
                            <p
                                class="text-xl text-zinc-400 mb-10 max-w-2xl mx-auto"
                                style=motion_style(RISE, in_view, 0.3)
                            >
                                "Let's replace uncertainty with clarity."
                            </p>

                            <div
                                class="flex flex-col sm:flex-row items-center justify-center gap-4"
                                style=motion_style(RISE, in_view, 0.4)
                            >
                                <a
                                    href=NavTarget::BookCall.href()
                                    class="inline-flex items-center gap-2 btn-primary px-8 py-4 rounded-xl text-lg font-medium hover-lift press"
                                >
                                    "Start Here"
                                    <span class="nudge-x inline-flex">
                                        <Icon name=icons::ARROW_RIGHT />
                                    </span>
                                </a>
                                <a
                                    href=NavTarget::BookCall.href()
                                    class="inline-flex items-center gap-2 btn-secondary px-8 py-4 rounded-xl text-lg font-medium hover-lift press"
                                >
                                    <Icon name=icons::PHONE />
                                    "Book a Call"
                                </a>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
