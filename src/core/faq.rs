//! FAQ entries and the single-open accordion

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQS: [FaqEntry; 5] = [
    FaqEntry {
        question: "What if I don't know which loan is best for me?",
        answer: "That's exactly what the first conversation is for — clarity comes before commitment.",
    },
    FaqEntry {
        question: "How early should I talk to a lender?",
        answer: "Earlier than most people think. Good planning saves stress and money.",
    },
    FaqEntry {
        question: "Do I need perfect credit?",
        answer: "No. There are options — and strategies to improve your position.",
    },
    FaqEntry {
        question: "Will this hurt my credit?",
        answer: "Initial conversations are informational. We'll explain before pulling credit.",
    },
    FaqEntry {
        question: "Are you just going to push the lowest rate?",
        answer: "No. We focus on the right structure for your goals, not just today's number.",
    },
];

/// Accordion with at most one expanded entry
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FaqAccordion {
    open: Option<usize>,
}

impl FaqAccordion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_index(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Question header click. Closes `index` if it is open, otherwise opens
    /// it and closes whatever was open before.
    pub fn toggle(&mut self, index: usize) {
        self.open = if self.is_open(index) { None } else { Some(index) };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_closed() {
        let accordion = FaqAccordion::new();
        assert_eq!(accordion.open_index(), None);
        assert!((0..FAQS.len()).all(|i| !accordion.is_open(i)));
    }

    #[test]
    fn test_toggle_open_then_close() {
        let mut accordion = FaqAccordion::new();
        accordion.toggle(2);
        assert_eq!(accordion.open_index(), Some(2));
        accordion.toggle(2);
        assert_eq!(accordion.open_index(), None);
    }

    #[test]
    fn test_opening_another_closes_previous() {
        let mut accordion = FaqAccordion::new();
        accordion.toggle(0);
        accordion.toggle(3);
        assert!(!accordion.is_open(0));
        assert!(accordion.is_open(3));
    }

    #[test]
    fn test_at_most_one_open_for_any_click_sequence() {
        let clicks = [0, 1, 1, 4, 2, 2, 2, 3, 0, 0, 4, 1];
        let mut accordion = FaqAccordion::new();
        let mut expected = None;
        for click in clicks {
            accordion.toggle(click);
            expected = if expected == Some(click) { None } else { Some(click) };
            let open_count = (0..FAQS.len()).filter(|&i| accordion.is_open(i)).count();
            assert!(open_count <= 1);
            assert_eq!(accordion.open_index(), expected);
        }
    }
}
