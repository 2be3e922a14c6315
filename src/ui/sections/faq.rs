use leptos::html;
use leptos::prelude::*;

use super::SectionHeading;
use crate::core::motion::{ANSWER_COLLAPSE, icon_rotation};
use crate::core::viewport::ViewportOptions;
use crate::core::{FAQS, FaqAccordion, FaqEntry};
use crate::ui::icon::{Icon, icons};
use crate::ui::motion::{Collapse, Stagger};
use crate::ui::viewport::use_in_view;

/// FAQ accordion, at most one answer open
#[component]
pub fn Faq() -> impl IntoView {
    let section = NodeRef::<html::Section>::new();
    let in_view = use_in_view(section, ViewportOptions::SECTION);
    let heading = Stagger::new(in_view);
    let list = Stagger::new(in_view);

    let accordion = RwSignal::new(FaqAccordion::new());

    view! {
        <section node_ref=section class="py-24 relative">
            <div class="max-w-3xl mx-auto px-6">
                <SectionHeading
                    stagger=heading
                    badge="Common Questions"
                    title="Answers Homebuyers Actually Ask"
                    subtitle="Still unsure? That's normal. Let's talk it through."
                />

                <div class="space-y-4" style=list.container()>
                    {FAQS
                        .iter()
                        .enumerate()
                        .map(|(index, entry)| {
                            view! {
                                <div style=list.item(index)>
                                    <FaqItem entry=*entry index=index accordion=accordion />
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

/// FAQ accordion item component
#[component]
fn FaqItem(entry: FaqEntry, index: usize, accordion: RwSignal<FaqAccordion>) -> impl IntoView {
    let is_open = Signal::derive(move || accordion.with(|a| a.is_open(index)));

    view! {
        <div class="feature-card rounded-xl overflow-hidden" data-open=move || is_open.get().to_string()>
            <button
                type="button"
                class="faq-question w-full px-6 py-5 flex items-center justify-between text-left group"
                on:click=move |_| accordion.update(|a| a.toggle(index))
                aria-expanded=move || is_open.get().to_string()
            >
                <span class="font-medium group-hover:text-brand-soft transition-colors">
                    {entry.question}
                </span>
                <span class="ml-4 shrink-0 inline-flex" style=move || icon_rotation(is_open.get())>
                    {move || {
                        if is_open.get() {
                            view! { <Icon name=icons::MINUS class="w-5 h-5 text-brand-soft" /> }.into_any()
                        } else {
                            view! {
                                <Icon
                                    name=icons::PLUS
                                    class="w-5 h-5 text-zinc-400 group-hover:text-brand-soft transition-colors"
                                />
                            }
                            .into_any()
                        }
                    }}
                </span>
            </button>
            <Collapse open=is_open motion=ANSWER_COLLAPSE>
                <div class="px-6 pb-5 text-zinc-400 leading-relaxed border-t border-brand-soft/10 pt-4">
                    {entry.answer}
                </div>
            </Collapse>
        </div>
    }
}
