//! Scenario tests across the page model

use crate::core::motion::{STAGGER, STEP_SWAP};
use crate::core::scroll::{FrameGate, is_scrolled};
use crate::core::viewport::ViewportOptions;
use crate::core::{
    FAQS, FaqAccordion, InView, MotionState, ObserveMode, PAGE_ORDER, PageSection, Roadmap,
    RoadmapTab, SwapChange, SwapPhase, Variant,
};

// ========================================================================
// Initial page state
// ========================================================================

#[test]
fn test_initial_page_state() {
    assert!(!is_scrolled(0.0));

    let roadmap = Roadmap::default();
    assert_eq!(roadmap.active(), RoadmapTab::Buying);
    let titles: Vec<_> = roadmap
        .displayed()
        .keyed_steps()
        .into_iter()
        .map(|(_, step)| step.title)
        .collect();
    assert_eq!(
        titles,
        [
            "Understand Your Buying Power",
            "Explore Loan Options",
            "Build a Smart Purchase Strategy",
            "Move Forward Confidently",
        ]
    );

    let accordion = FaqAccordion::new();
    assert_eq!(accordion.open_index(), None);
}

#[test]
fn test_sections_start_hidden_until_observed() {
    for section in PAGE_ORDER {
        let mode = if section == PageSection::Footer {
            ObserveMode::Continuous
        } else {
            ObserveMode::Once
        };
        let in_view = InView::new(mode);
        assert_eq!(MotionState::from_visible(in_view.get()), MotionState::Hidden);
    }
}

// ========================================================================
// Scrolling through a section
// ========================================================================

#[test]
fn test_section_reveal_survives_scrolling_away() {
    let opts = ViewportOptions::SECTION;
    let mut in_view = InView::new(opts.mode);
    let viewport = 900.0;

    // Section 1200px below the fold, scrolled in 100px at a time
    let section_height = 700.0;
    let mut revealed_at = None;
    for step in 0..30 {
        let top = 1200.0 - step as f64 * 100.0;
        let intersecting = opts.qualifies(top, top + section_height, viewport);
        if in_view.record(intersecting) {
            revealed_at = Some(top);
        }
    }

    // Revealed once its top passed 100px above the viewport bottom
    let revealed_at = revealed_at.unwrap();
    assert!(revealed_at < viewport - 100.0);
    // Scrolled entirely past it by now, still visible
    assert!(in_view.get());
}

#[test]
fn test_footer_blocks_follow_viewport() {
    let opts = ViewportOptions::CONTINUOUS;
    let mut in_view = InView::new(opts.mode);

    in_view.record(opts.qualifies(500.0, 600.0, 800.0));
    assert!(in_view.get());
    in_view.record(opts.qualifies(900.0, 1000.0, 800.0));
    assert!(!in_view.get());
}

#[test]
fn test_header_scroll_burst_single_sample() {
    let mut gate = FrameGate::new();
    let offsets = [3.0, 9.0, 18.0, 27.0, 40.0];
    let frame_requests = offsets.iter().filter(|_| gate.request()).count();
    assert_eq!(frame_requests, 1);

    // The frame samples the latest offset
    gate.complete();
    assert!(is_scrolled(offsets[offsets.len() - 1]));
}

// ========================================================================
// Stagger ordering
// ========================================================================

#[test]
fn test_feature_cards_enter_in_order() {
    let item = Variant::StaggerItem.motion();
    let starts: Vec<f64> = (0..6)
        .map(|i| STAGGER.child_delay(i) + item.transition.delay)
        .collect();
    for pair in starts.windows(2) {
        assert!(pair[1] > pair[0]);
    }
    // Last card settles within a second and a half of the reveal
    assert!(item.settle_time(STAGGER.child_delay(5)) < 1.5);
}

// ========================================================================
// Roadmap tab switching
// ========================================================================

#[test]
fn test_tab_round_trip_replaces_all_steps() {
    let mut roadmap = Roadmap::default();
    let before: Vec<_> = roadmap.displayed().keyed_steps();

    let SwapChange::Exit(ticket) = roadmap.select(RoadmapTab::Refinancing) else {
        panic!("expected exit");
    };
    // Old steps stay rendered while they animate out
    assert_eq!(roadmap.displayed(), RoadmapTab::Buying);
    assert!(STEP_SWAP.total_time(before.len()) > STEP_SWAP.transition.duration);

    let ticket = roadmap.exit_finished(ticket).unwrap();
    assert!(roadmap.enter_started(ticket));
    let after: Vec<_> = roadmap.displayed().keyed_steps();

    assert_eq!(after.len(), 4);
    for (key, step) in &after {
        assert!(before.iter().all(|(k, s)| k != key && s.title != step.title));
    }
}

#[test]
fn test_rapid_tab_clicks_settle_on_last() {
    let mut roadmap = Roadmap::default();
    let mut tickets = Vec::new();
    for tab in [
        RoadmapTab::Refinancing,
        RoadmapTab::Buying,
        RoadmapTab::Refinancing,
    ] {
        if let SwapChange::Exit(ticket) = roadmap.select(tab) {
            tickets.push(ticket);
        }
    }

    // Every timer fires late, in order; only the newest one applies
    let applied: Vec<_> = tickets
        .into_iter()
        .filter_map(|t| roadmap.exit_finished(t))
        .collect();
    assert_eq!(applied.len(), 1);
    assert_eq!(roadmap.displayed(), RoadmapTab::Refinancing);
    assert_eq!(roadmap.swap().phase(), SwapPhase::Entering);
}

// ========================================================================
// FAQ
// ========================================================================

#[test]
fn test_faq_walkthrough() {
    let mut accordion = FaqAccordion::new();
    for index in 0..FAQS.len() {
        accordion.toggle(index);
        assert_eq!(accordion.open_index(), Some(index));
    }
    accordion.toggle(FAQS.len() - 1);
    assert_eq!(accordion.open_index(), None);
}
