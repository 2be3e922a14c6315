//! Page composition: section order, anchors and dividers

/// Top-level sections of the home page, in the order they render
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageSection {
    Hero,
    Comparison,
    Roadmap,
    Features,
    Trust,
    Faq,
    Cta,
    Footer,
}

/// Render order below the fixed header
pub const PAGE_ORDER: [PageSection; 8] = [
    PageSection::Hero,
    PageSection::Comparison,
    PageSection::Roadmap,
    PageSection::Features,
    PageSection::Trust,
    PageSection::Faq,
    PageSection::Cta,
    PageSection::Footer,
];

impl PageSection {
    /// `id` attribute for sections that are link targets
    pub fn anchor(&self) -> Option<&'static str> {
        match self {
            PageSection::Roadmap => Some(NavTarget::HowItWorks.anchor()),
            PageSection::Cta => Some(NavTarget::BookCall.anchor()),
            _ => None,
        }
    }

    /// Whether a divider line follows this section
    pub fn divider_after(&self) -> bool {
        matches!(
            self,
            PageSection::Hero
                | PageSection::Comparison
                | PageSection::Roadmap
                | PageSection::Features
                | PageSection::Trust
        )
    }
}

/// In-page navigation targets used by links and buttons
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavTarget {
    HowItWorks,
    BookCall,
}

impl NavTarget {
    pub fn section(&self) -> PageSection {
        match self {
            NavTarget::HowItWorks => PageSection::Roadmap,
            NavTarget::BookCall => PageSection::Cta,
        }
    }

    pub fn anchor(&self) -> &'static str {
        match self {
            NavTarget::HowItWorks => "how-it-works",
            NavTarget::BookCall => "demo",
        }
    }

    /// Fragment link, e.g. `#demo`
    pub fn href(&self) -> String {
        format!("#{}", self.anchor())
    }
}
