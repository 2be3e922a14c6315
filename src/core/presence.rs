//! Enter/exit sequencing
//!
//! CSS can animate an element that exists, but it cannot animate one that
//! has just been removed. These state machines keep content mounted long
//! enough for its exit transition to play.
//!
//! Timer callbacks carry a [`Ticket`]. A ticket issued for a transition that
//! was later superseded no longer matches the machine's generation and the
//! callback is ignored.

/// Generation stamp handed to timer callbacks
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

/// Mount state of a collapsible element
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PresencePhase {
    Unmounted,
    /// Mounted in its collapsed style, expands on the next frame
    Entering,
    Present,
    /// Collapsing, unmounts when the exit timer fires
    Exiting,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Presence {
    phase: PresencePhase,
    generation: u64,
}

impl Presence {
    /// Initial state; content that starts open renders expanded right away
    pub fn new(open: bool) -> Self {
        Self {
            phase: if open {
                PresencePhase::Present
            } else {
                PresencePhase::Unmounted
            },
            generation: 0,
        }
    }

    pub fn phase(&self) -> PresencePhase {
        self.phase
    }

    pub fn is_mounted(&self) -> bool {
        self.phase != PresencePhase::Unmounted
    }

    /// Whether the expanded style applies
    pub fn is_expanded(&self) -> bool {
        self.phase == PresencePhase::Present
    }

    fn bump(&mut self) -> Ticket {
        self.generation += 1;
        Ticket(self.generation)
    }

    /// Start showing. Returns the ticket for the follow-up [`Presence::entered`].
    pub fn show(&mut self) -> Option<Ticket> {
        match self.phase {
            PresencePhase::Unmounted => {
                self.phase = PresencePhase::Entering;
                Some(self.bump())
            }
            // Still mounted: reverse straight back to expanded
            PresencePhase::Exiting => {
                self.phase = PresencePhase::Present;
                self.bump();
                None
            }
            PresencePhase::Entering | PresencePhase::Present => None,
        }
    }

    /// Start hiding. Returns the ticket for the follow-up [`Presence::exited`].
    pub fn hide(&mut self) -> Option<Ticket> {
        match self.phase {
            PresencePhase::Entering | PresencePhase::Present => {
                self.phase = PresencePhase::Exiting;
                Some(self.bump())
            }
            PresencePhase::Unmounted | PresencePhase::Exiting => None,
        }
    }

    /// Frame after mount: switch to the expanded style
    pub fn entered(&mut self, ticket: Ticket) -> bool {
        if self.phase == PresencePhase::Entering && ticket.0 == self.generation {
            self.phase = PresencePhase::Present;
            true
        } else {
            false
        }
    }

    /// Exit transition done: unmount
    pub fn exited(&mut self, ticket: Ticket) -> bool {
        if self.phase == PresencePhase::Exiting && ticket.0 == self.generation {
            self.phase = PresencePhase::Unmounted;
            true
        } else {
            false
        }
    }

    /// Drive toward `open`; convenience for effects that only see a bool
    pub fn set_open(&mut self, open: bool) -> Option<Ticket> {
        if open { self.show() } else { self.hide() }
    }
}

/// Phase of a [`Swap`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwapPhase {
    /// New content mounted in its initial style
    Entering,
    Shown,
    /// Old content animating out; the replacement waits
    Exiting,
}

/// What a [`Swap::select`] call did
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwapChange {
    /// Already the target
    Unchanged,
    /// Exit started or retargeted; schedule [`Swap::exit_finished`]
    Exit(Ticket),
    /// Selection returned to the displayed value mid-exit; it animates back
    Resumed,
}

/// Exit-then-enter replacement of one value by another
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Swap<T> {
    target: T,
    displayed: T,
    phase: SwapPhase,
    generation: u64,
}

impl<T: Copy + PartialEq> Swap<T> {
    pub fn new(value: T) -> Self {
        Self {
            target: value,
            displayed: value,
            phase: SwapPhase::Shown,
            generation: 0,
        }
    }

    /// The value most recently selected
    pub fn target(&self) -> T {
        self.target
    }

    /// The value whose content is currently rendered
    pub fn displayed(&self) -> T {
        self.displayed
    }

    pub fn phase(&self) -> SwapPhase {
        self.phase
    }

    pub fn select(&mut self, value: T) -> SwapChange {
        if value == self.target {
            return SwapChange::Unchanged;
        }
        self.target = value;
        self.generation += 1;

        if self.phase == SwapPhase::Exiting && value == self.displayed {
            self.phase = SwapPhase::Shown;
            return SwapChange::Resumed;
        }
        self.phase = SwapPhase::Exiting;
        SwapChange::Exit(Ticket(self.generation))
    }

    /// Exit timer fired: mount the target's content in its initial style.
    /// Returns the ticket for [`Swap::enter_started`].
    pub fn exit_finished(&mut self, ticket: Ticket) -> Option<Ticket> {
        if self.phase != SwapPhase::Exiting || ticket.0 != self.generation {
            return None;
        }
        self.displayed = self.target;
        self.phase = SwapPhase::Entering;
        Some(ticket)
    }

    /// Frame after mount: animate the new content in
    pub fn enter_started(&mut self, ticket: Ticket) -> bool {
        if self.phase == SwapPhase::Entering && ticket.0 == self.generation {
            self.phase = SwapPhase::Shown;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presence_open_close_cycle() {
        let mut presence = Presence::new(false);
        assert!(!presence.is_mounted());

        let ticket = presence.show().unwrap();
        assert_eq!(presence.phase(), PresencePhase::Entering);
        assert!(presence.is_mounted());
        assert!(!presence.is_expanded());

        assert!(presence.entered(ticket));
        assert!(presence.is_expanded());

        let ticket = presence.hide().unwrap();
        assert_eq!(presence.phase(), PresencePhase::Exiting);
        assert!(presence.is_mounted());

        assert!(presence.exited(ticket));
        assert!(!presence.is_mounted());
    }

    #[test]
    fn test_presence_starts_open() {
        let presence = Presence::new(true);
        assert!(presence.is_expanded());
    }

    #[test]
    fn test_presence_reopen_during_exit_ignores_stale_timer() {
        let mut presence = Presence::new(true);
        let exit_ticket = presence.hide().unwrap();
        assert!(presence.show().is_none());
        assert!(presence.is_expanded());

        // Old exit timer lands after the reopen
        assert!(!presence.exited(exit_ticket));
        assert!(presence.is_expanded());
    }

    #[test]
    fn test_presence_quick_close_reopen_close() {
        let mut presence = Presence::new(true);
        let first = presence.hide().unwrap();
        presence.show();
        let second = presence.hide().unwrap();

        assert!(!presence.exited(first));
        assert!(presence.is_mounted());
        assert!(presence.exited(second));
        assert!(!presence.is_mounted());
    }

    #[test]
    fn test_presence_close_before_enter_frame() {
        let mut presence = Presence::new(false);
        let enter = presence.show().unwrap();
        let exit = presence.hide().unwrap();
        assert!(!presence.entered(enter));
        assert!(presence.exited(exit));
    }

    #[test]
    fn test_presence_idempotent_requests() {
        let mut presence = Presence::new(false);
        assert!(presence.hide().is_none());
        presence.show();
        assert!(presence.show().is_none());
        assert!(presence.set_open(false).is_some());
    }

    #[test]
    fn test_swap_exit_then_enter() {
        let mut swap = Swap::new(1);
        let SwapChange::Exit(ticket) = swap.select(2) else {
            panic!("expected exit");
        };
        assert_eq!(swap.target(), 2);
        assert_eq!(swap.displayed(), 1);
        assert_eq!(swap.phase(), SwapPhase::Exiting);

        let ticket = swap.exit_finished(ticket).unwrap();
        assert_eq!(swap.displayed(), 2);
        assert_eq!(swap.phase(), SwapPhase::Entering);

        assert!(swap.enter_started(ticket));
        assert_eq!(swap.phase(), SwapPhase::Shown);
    }

    #[test]
    fn test_swap_select_current_is_noop() {
        let mut swap = Swap::new('a');
        assert_eq!(swap.select('a'), SwapChange::Unchanged);
        assert_eq!(swap.phase(), SwapPhase::Shown);
    }

    #[test]
    fn test_swap_back_during_exit_resumes() {
        let mut swap = Swap::new(1);
        let SwapChange::Exit(ticket) = swap.select(2) else {
            panic!("expected exit");
        };
        assert_eq!(swap.select(1), SwapChange::Resumed);
        assert_eq!(swap.phase(), SwapPhase::Shown);
        assert!(swap.exit_finished(ticket).is_none());
        assert_eq!(swap.displayed(), 1);
    }

    #[test]
    fn test_swap_retarget_during_exit() {
        let mut swap = Swap::new(1);
        let SwapChange::Exit(first) = swap.select(2) else {
            panic!("expected exit");
        };
        let SwapChange::Exit(second) = swap.select(3) else {
            panic!("expected exit");
        };
        assert!(swap.exit_finished(first).is_none());
        assert!(swap.exit_finished(second).is_some());
        assert_eq!(swap.displayed(), 3);
    }
}
