//! Server-rendered markup checks for the home page sections

use std::path::Path;

use leptos::prelude::*;
use leptos_router::location::RequestUrl;

use crate::app::App;
use crate::core::content::FEATURES;
use crate::core::{FAQS, RoadmapTab};
use crate::ui::icon::icons;
use crate::ui::sections::{Faq, Footer, Header, Roadmap};

fn render<V: IntoView + 'static>(view: impl FnOnce() -> V) -> String {
    let owner = Owner::new();
    owner.with(|| view().into_view().to_html())
}

#[test]
fn test_header_renders_unscrolled_with_menu_closed() {
    let html = render(|| view! { <Header /> });

    assert!(html.contains(r#"data-scrolled="false""#));
    assert!(html.contains(r#"aria-expanded="false""#));
    assert!(html.contains("href=\"#how-it-works\""));
    assert!(html.contains("href=\"#demo\""));
    // Mobile menu links are not mounted while closed
    assert_eq!(html.matches("Book a Call").count(), 1);
}

#[test]
fn test_roadmap_renders_buying_steps_in_order() {
    let html = render(|| view! { <Roadmap /> });

    assert!(html.contains(r#"id="how-it-works""#));
    assert!(html.contains(RoadmapTab::Buying.tagline()));
    assert!(html.contains(RoadmapTab::Buying.cta_label()));
    assert!(!html.contains(RoadmapTab::Refinancing.tagline()));

    let positions: Vec<usize> = RoadmapTab::Buying
        .steps()
        .iter()
        .map(|step| html.find(step.title).expect("step title rendered"))
        .collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn test_roadmap_marks_first_tab_selected() {
    let html = render(|| view! { <Roadmap /> });

    assert_eq!(html.matches(r#"aria-selected="true""#).count(), 1);
    assert_eq!(html.matches(r#"aria-selected="false""#).count(), 1);
}

#[test]
fn test_faq_renders_all_questions_closed() {
    let html = render(|| view! { <Faq /> });

    for entry in FAQS.iter() {
        assert!(html.contains(entry.question));
        assert!(!html.contains(entry.answer));
    }
    assert_eq!(html.matches(r#"aria-expanded="false""#).count(), FAQS.len());
    assert_eq!(html.matches(r#"data-open="true""#).count(), 0);
}

#[test]
fn test_sections_render_hidden_before_hydration() {
    let html = render(|| view! { <Footer /> });

    assert!(html.contains("opacity: 0"));
    assert!(!html.contains("opacity: 1"));
}

#[test]
fn test_unknown_path_renders_not_found() {
    let html = render(|| {
        provide_context(RequestUrl::new("/no-such-page"));
        view! { <App /> }
    });

    assert!(html.contains(">404<"));
    assert!(html.contains("Page Not Found"));
    assert!(html.contains(r#"href="/""#));
    assert!(!html.contains(r#"id="how-it-works""#));
}

#[test]
fn test_root_path_renders_home() {
    let html = render(|| {
        provide_context(RequestUrl::new("/"));
        view! { <App /> }
    });

    assert!(html.contains(r#"id="how-it-works""#));
    assert!(html.contains(r#"id="demo""#));
    assert!(!html.contains("Page Not Found"));
}

#[test]
fn test_referenced_icons_are_known() {
    let referenced = FEATURES
        .iter()
        .map(|feature| feature.icon)
        .chain(RoadmapTab::ALL.iter().map(|tab| tab.icon()))
        .chain(
            RoadmapTab::ALL
                .iter()
                .flat_map(|tab| tab.steps().iter().map(|step| step.icon)),
        );

    for name in referenced {
        assert!(icons::ALL.contains(&name), "unknown icon {name}");
    }
}

#[test]
fn test_icon_assets_exist() {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("public/icons");
    for name in icons::ALL {
        let path = dir.join(format!("{name}.svg"));
        assert!(path.is_file(), "missing {}", path.display());
    }
}
