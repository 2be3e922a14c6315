use leptos::html;
use leptos::prelude::*;

use super::SectionHeading;
use crate::core::content::FEATURES;
use crate::core::viewport::ViewportOptions;
use crate::ui::icon::Icon;
use crate::ui::motion::Stagger;
use crate::ui::viewport::use_in_view;

/// "The Complete Experience" feature grid
#[component]
pub fn Features() -> impl IntoView {
    let section = NodeRef::<html::Section>::new();
    let in_view = use_in_view(section, ViewportOptions::SECTION);
    let heading = Stagger::new(in_view);
    let grid = Stagger::new(in_view);

    view! {
        <section node_ref=section class="py-24 relative overflow-hidden">
            <div class="max-w-7xl mx-auto px-6">
                <SectionHeading
                    stagger=heading
                    badge="The Complete Experience"
                    title="Everything You Need — Nothing You Don't"
                    subtitle="It's a guided mortgage experience built around education and trust."
                />

                <div class="grid sm:grid-cols-2 lg:grid-cols-3 gap-6" style=grid.container()>
                    {FEATURES
                        .iter()
                        .enumerate()
                        .map(|(index, feature)| {
                            view! {
                                <div style=grid.item(index)>
                                    <div class="feature-card rounded-2xl p-6 h-full card-hover group">
                                        <div class="feature-icon">
                                            <Icon name=feature.icon class="w-6 h-6 text-brand-soft" />
                                        </div>
                                        <h3 class="text-lg font-semibold mb-2">{feature.title}</h3>
                                        <p class="text-zinc-400 text-sm">{feature.description}</p>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
