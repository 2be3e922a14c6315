//! Static site copy and metadata

use serde::Serialize;

use super::faq::FAQS;
use super::roadmap::RoadmapTab;

pub const BRAND: &str = "Real Consultants";
pub const BRAND_SUFFIX: &str = "Mortgage";
pub const BRAND_FULL: &str = "Real Consultants Mortgage";

/// Page `<title>`
pub const SITE_TITLE: &str =
    "Real Consultants Mortgage | Chris Crocker - Buy Smarter Without Confusion";

pub const SITE_DESCRIPTION: &str = "Get a clear mortgage plan, honest guidance, and a process that actually makes sense. Talk with a real expert, make confident decisions, and close with clarity.";

pub const OG_TITLE: &str = "Real Consultants Mortgage | Buy Smarter Without Confusion";

pub const OG_DESCRIPTION: &str =
    "The mortgage system that helps you buy smarter — without confusion or pressure.";

/// The loan officer presented in the trust section and footer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Advisor {
    pub name: &'static str,
    pub role: &'static str,
    pub nmls: &'static str,
}

pub const ADVISOR: Advisor = Advisor {
    name: "Chris Crocker",
    role: "Mortgage Loan Officer",
    nmls: "2264202",
};

pub const OLD_WAY_POINTS: [&str; 5] = [
    "Comparing rates without understanding the tradeoffs",
    "Getting pre-approved but not truly prepared",
    "Conflicting advice from Google, friends, and lenders",
    "Surprises late in the process",
    "Stress instead of confidence",
];

pub const BETTER_WAY_POINTS: [&str; 4] = [
    "Clear loan options tailored to you",
    "A plan before paperwork",
    "Fewer surprises, smoother closings",
    "A lender who actually advises you",
];

/// Card in the "Complete Experience" grid
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: [Feature; 6] = [
    Feature {
        icon: "target",
        title: "Personalized Mortgage Planning",
        description: "Understand what you qualify for and what actually makes sense.",
    },
    Feature {
        icon: "message-square",
        title: "Clear, Human Communication",
        description: "No jargon, no pressure — just honest answers.",
    },
    Feature {
        icon: "file-text",
        title: "Organized, Simple Process",
        description: "From first call to closing — everything explained step by step.",
    },
    Feature {
        icon: "clock",
        title: "Proactive Updates",
        description: "You're never wondering \"what's next?\"",
    },
    Feature {
        icon: "book-open",
        title: "Education-First Approach",
        description: "So you're not signing paperwork you don't understand.",
    },
    Feature {
        icon: "lock",
        title: "Secure, Modern Systems",
        description: "Your information stays organized and protected.",
    },
];

pub const FOOTER_TAGLINE: &str = "Mortgage guidance built on clarity, education, and trust.";
pub const COPYRIGHT: &str = "© 2026 Real Consultants Mortgage";

/// schema.org graph embedded in the page as JSON-LD: the business, its FAQ
/// page and the buying roadmap as a how-to
#[derive(Debug, Serialize)]
pub struct StructuredData {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@graph")]
    graph: Vec<SchemaNode>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "@type")]
enum SchemaNode {
    FinancialService {
        name: &'static str,
        description: &'static str,
        employee: Person,
    },
    #[serde(rename = "FAQPage")]
    FaqPage {
        #[serde(rename = "mainEntity")]
        main_entity: Vec<Question>,
    },
    HowTo {
        name: &'static str,
        step: Vec<HowToStep>,
    },
}

#[derive(Debug, Serialize)]
struct Person {
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'static str,
    #[serde(rename = "jobTitle")]
    job_title: &'static str,
    identifier: String,
}

#[derive(Debug, Serialize)]
struct Question {
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'static str,
    #[serde(rename = "acceptedAnswer")]
    accepted_answer: Answer,
}

#[derive(Debug, Serialize)]
struct Answer {
    #[serde(rename = "@type")]
    kind: &'static str,
    text: &'static str,
}

#[derive(Debug, Serialize)]
struct HowToStep {
    #[serde(rename = "@type")]
    kind: &'static str,
    position: usize,
    name: &'static str,
    text: &'static str,
}

impl StructuredData {
    pub fn build() -> Self {
        let questions = FAQS
            .iter()
            .map(|entry| Question {
                kind: "Question",
                name: entry.question,
                accepted_answer: Answer {
                    kind: "Answer",
                    text: entry.answer,
                },
            })
            .collect();

        let steps = RoadmapTab::Buying
            .steps()
            .iter()
            .enumerate()
            .map(|(index, step)| HowToStep {
                kind: "HowToStep",
                position: index + 1,
                name: step.title,
                text: step.description,
            })
            .collect();

        Self {
            context: "https://schema.org",
            graph: vec![
                SchemaNode::FinancialService {
                    name: BRAND_FULL,
                    description: SITE_DESCRIPTION,
                    employee: Person {
                        kind: "Person",
                        name: ADVISOR.name,
                        job_title: ADVISOR.role,
                        identifier: format!("NMLS {}", ADVISOR.nmls),
                    },
                },
                SchemaNode::FaqPage {
                    main_entity: questions,
                },
                SchemaNode::HowTo {
                    name: "What Does the Process Look Like?",
                    step: steps,
                },
            ],
        }
    }

    /// Serialized graph, escaped for embedding in a `<script>` element
    pub fn to_json(&self) -> String {
        serde_json::to_string(self)
            .unwrap_or_default()
            .replace("</", "<\\/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn parsed() -> Value {
        serde_json::from_str(&StructuredData::build().to_json()).unwrap()
    }

    #[test]
    fn test_structured_data_shape() {
        let data = parsed();
        assert_eq!(data["@context"], "https://schema.org");
        let graph = data["@graph"].as_array().unwrap();
        assert_eq!(graph.len(), 3);
        assert_eq!(graph[0]["@type"], "FinancialService");
        assert_eq!(graph[0]["employee"]["identifier"], "NMLS 2264202");
        assert_eq!(graph[1]["@type"], "FAQPage");
        assert_eq!(graph[1]["mainEntity"].as_array().unwrap().len(), FAQS.len());
        assert_eq!(graph[1]["mainEntity"][0]["acceptedAnswer"]["@type"], "Answer");
        assert_eq!(graph[2]["step"][0]["name"], "Understand Your Buying Power");
        assert_eq!(graph[2]["step"][3]["position"], 4);
    }

    #[test]
    fn test_structured_data_is_script_safe() {
        // Embedded inside <script>; a closing tag in the copy would end it early
        assert!(!StructuredData::build().to_json().contains("</"));
    }

    #[test]
    fn test_feature_titles_unique() {
        for (i, a) in FEATURES.iter().enumerate() {
            for b in &FEATURES[i + 1..] {
                assert_ne!(a.title, b.title);
            }
        }
    }
}
