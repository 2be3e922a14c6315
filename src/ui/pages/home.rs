//! Home page: every section in [`PAGE_ORDER`] below the fixed header

use leptos::prelude::*;

use crate::core::{PAGE_ORDER, PageSection};
use crate::ui::sections::{
    CallToAction, Comparison, Faq, Features, Footer, Header, Hero, Roadmap, Trust,
};
use crate::ui::seo::SeoMeta;
use crate::ui::styles::LandingStyles;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <SeoMeta />
        <LandingStyles />

        <main class="min-h-screen relative overflow-x-hidden">
            <Header />
            {PAGE_ORDER
                .iter()
                .map(|section| {
                    view! {
                        {render_section(*section)}
                        {section
                            .divider_after()
                            .then(|| view! { <div class="section-divider" aria-hidden="true"></div> })}
                    }
                })
                .collect_view()}
        </main>
    }
}

fn render_section(section: PageSection) -> AnyView {
    match section {
        PageSection::Hero => view! { <Hero /> }.into_any(),
        PageSection::Comparison => view! { <Comparison /> }.into_any(),
        PageSection::Roadmap => view! { <Roadmap /> }.into_any(),
        PageSection::Features => view! { <Features /> }.into_any(),
        PageSection::Trust => view! { <Trust /> }.into_any(),
        PageSection::Faq => view! { <Faq /> }.into_any(),
        PageSection::Cta => view! { <CallToAction /> }.into_any(),
        PageSection::Footer => view! { <Footer /> }.into_any(),
    }
}
