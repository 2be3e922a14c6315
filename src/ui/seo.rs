use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::core::content::{OG_DESCRIPTION, OG_TITLE, SITE_DESCRIPTION, SITE_TITLE, StructuredData};

/// Document title, description, Open Graph tags and JSON-LD for the home page
#[component]
pub fn SeoMeta() -> impl IntoView {
    let structured_data = StructuredData::build().to_json();

    view! {
        <Title text=SITE_TITLE />
        <Meta name="description" content=SITE_DESCRIPTION />

        // Open Graph
        <Meta property="og:type" content="website" />
        <Meta property="og:title" content=OG_TITLE />
        <Meta property="og:description" content=OG_DESCRIPTION />

        <script type="application/ld+json" inner_html=structured_data></script>
    }
}
