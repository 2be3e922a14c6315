//! Roadmap tabs: the two paths a client can start from

use derive_more::Display;

use super::presence::{Swap, SwapChange, Ticket};

/// Which path the roadmap is showing
#[derive(Clone, Copy, Debug, Default, Display, PartialEq, Eq, Hash)]
pub enum RoadmapTab {
    #[default]
    #[display("Buying a property")]
    Buying,
    #[display("Refinancing")]
    Refinancing,
}

/// One step card
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoadmapStep {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// Identity of a rendered step. Steps from different tabs never share a key,
/// so switching tabs replaces cards instead of morphing them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct StepKey {
    pub tab: RoadmapTab,
    pub index: usize,
}

const BUYING_STEPS: [RoadmapStep; 4] = [
    RoadmapStep {
        icon: "target",
        title: "Understand Your Buying Power",
        description: "Income, credit, cash, and comfort level",
    },
    RoadmapStep {
        icon: "lightbulb",
        title: "Explore Loan Options",
        description: "FHA, Conventional, VA, Jumbo — explained simply",
    },
    RoadmapStep {
        icon: "file-text",
        title: "Build a Smart Purchase Strategy",
        description: "Monthly payment, cash to close, long-term impact",
    },
    RoadmapStep {
        icon: "check-circle",
        title: "Move Forward Confidently",
        description: "With a real plan, not assumptions",
    },
];

const REFINANCING_STEPS: [RoadmapStep; 4] = [
    RoadmapStep {
        icon: "target",
        title: "Review Your Current Situation",
        description: "Loan, equity, goals, and timing",
    },
    RoadmapStep {
        icon: "trending-up",
        title: "Compare Real Scenarios",
        description: "Not just rate — total cost and outcome",
    },
    RoadmapStep {
        icon: "file-text",
        title: "Streamline the Process",
        description: "Clear steps, proactive communication",
    },
    RoadmapStep {
        icon: "check-circle",
        title: "Close with Confidence",
        description: "No last-minute surprises",
    },
];

impl RoadmapTab {
    pub const ALL: [RoadmapTab; 2] = [RoadmapTab::Buying, RoadmapTab::Refinancing];

    pub fn steps(&self) -> &'static [RoadmapStep; 4] {
        match self {
            RoadmapTab::Buying => &BUYING_STEPS,
            RoadmapTab::Refinancing => &REFINANCING_STEPS,
        }
    }

    /// Steps paired with their render keys, in display order
    pub fn keyed_steps(&self) -> Vec<(StepKey, &'static RoadmapStep)> {
        let tab = *self;
        self.steps()
            .iter()
            .enumerate()
            .map(|(index, step)| (StepKey { tab, index }, step))
            .collect()
    }

    pub fn tagline(&self) -> &'static str {
        match self {
            RoadmapTab::Buying => "Start with clarity, not guesswork",
            RoadmapTab::Refinancing => {
                "Access Cash or Lower Payment — Optimize what you already have"
            }
        }
    }

    pub fn cta_label(&self) -> &'static str {
        match self {
            RoadmapTab::Buying => "Get Started",
            RoadmapTab::Refinancing => "Review My Options",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            RoadmapTab::Buying => "home",
            RoadmapTab::Refinancing => "dollar-sign",
        }
    }
}

/// Roadmap state: the selected tab plus the exit-then-enter swap of its steps
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Roadmap {
    swap: Swap<RoadmapTab>,
}

impl Default for Roadmap {
    fn default() -> Self {
        Self::new(RoadmapTab::default())
    }
}

impl Roadmap {
    pub fn new(tab: RoadmapTab) -> Self {
        Self {
            swap: Swap::new(tab),
        }
    }

    /// Tab the buttons show as selected
    pub fn active(&self) -> RoadmapTab {
        self.swap.target()
    }

    /// Tab whose steps are on screen
    pub fn displayed(&self) -> RoadmapTab {
        self.swap.displayed()
    }

    pub fn swap(&self) -> &Swap<RoadmapTab> {
        &self.swap
    }

    /// Tab button click
    pub fn select(&mut self, tab: RoadmapTab) -> SwapChange {
        self.swap.select(tab)
    }

    pub fn exit_finished(&mut self, ticket: Ticket) -> Option<Ticket> {
        self.swap.exit_finished(ticket)
    }

    pub fn enter_started(&mut self, ticket: Ticket) -> bool {
        self.swap.enter_started(ticket)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::presence::SwapPhase;

    #[test]
    fn test_default_is_buying() {
        let roadmap = Roadmap::default();
        assert_eq!(roadmap.active(), RoadmapTab::Buying);
        assert_eq!(roadmap.displayed(), RoadmapTab::Buying);
    }

    #[test]
    fn test_buying_steps_in_order() {
        let titles: Vec<_> = RoadmapTab::Buying.steps().iter().map(|s| s.title).collect();
        assert_eq!(
            titles,
            vec![
                "Understand Your Buying Power",
                "Explore Loan Options",
                "Build a Smart Purchase Strategy",
                "Move Forward Confidently",
            ]
        );
    }

    #[test]
    fn test_tabs_share_no_content() {
        let buying = RoadmapTab::Buying.steps();
        let refinancing = RoadmapTab::Refinancing.steps();
        for step in buying {
            assert!(refinancing.iter().all(|r| r.title != step.title));
            assert!(refinancing.iter().all(|r| r.description != step.description));
        }
    }

    #[test]
    fn test_keys_are_distinct_across_tabs() {
        let buying = RoadmapTab::Buying.keyed_steps();
        let refinancing = RoadmapTab::Refinancing.keyed_steps();
        assert_eq!(buying.len(), 4);
        for (key, _) in &buying {
            assert!(refinancing.iter().all(|(other, _)| other != key));
        }
        assert_eq!(buying[2].0.index, 2);
    }

    #[test]
    fn test_select_same_tab_is_noop() {
        let mut roadmap = Roadmap::new(RoadmapTab::Refinancing);
        assert_eq!(roadmap.select(RoadmapTab::Refinancing), SwapChange::Unchanged);
        assert_eq!(roadmap.swap().phase(), SwapPhase::Shown);
    }

    #[test]
    fn test_switch_replaces_displayed_after_exit() {
        let mut roadmap = Roadmap::default();
        let SwapChange::Exit(ticket) = roadmap.select(RoadmapTab::Refinancing) else {
            panic!("expected exit");
        };
        assert_eq!(roadmap.active(), RoadmapTab::Refinancing);
        assert_eq!(roadmap.displayed(), RoadmapTab::Buying);

        let ticket = roadmap.exit_finished(ticket).unwrap();
        assert_eq!(roadmap.displayed(), RoadmapTab::Refinancing);
        assert!(roadmap.enter_started(ticket));
    }

    #[test]
    fn test_labels() {
        assert_eq!(RoadmapTab::Buying.to_string(), "Buying a property");
        assert_eq!(RoadmapTab::Refinancing.to_string(), "Refinancing");
        assert_eq!(RoadmapTab::Buying.cta_label(), "Get Started");
        assert_eq!(RoadmapTab::Refinancing.cta_label(), "Review My Options");
    }
}
