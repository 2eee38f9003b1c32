//! The two-stage unlock gate.
//!
//! ```text
//! Locked --input--> Animating{ready: false} --sequence done--> Animating{ready: true}
//!        \                                                          |
//!         `<----------------------- logout --------- Unlocked <--input
//! ```
//!
//! Input that arrives before the password sequence finishes is dropped,
//! and a second input is needed to confirm. Pure modifier presses never
//! count as input.

use crate::session::SessionState;

/// Keys that never activate the gate on their own
pub const MODIFIER_KEYS: [&str; 4] = ["Shift", "Control", "Alt", "Meta"];

/// Phase of the unlock gate
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnlockPhase {
    /// Waiting for the first input.
    #[default]
    Locked,
    /// Password sequence running; `ready` once it has finished.
    Animating { ready: bool },
    /// Content panels reachable.
    Unlocked,
}

impl UnlockPhase {
    pub fn is_unlocked(&self) -> bool {
        matches!(self, UnlockPhase::Unlocked)
    }

    pub fn status_display(&self) -> &'static str {
        match self {
            UnlockPhase::Locked => "Awaiting authorization",
            UnlockPhase::Animating { ready: false } => "Verifying",
            UnlockPhase::Animating { ready: true } => "Authorized",
            UnlockPhase::Unlocked => "Authenticated",
        }
    }
}

/// User input delivered to the gate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// A key press, identified by its key name (e.g. `"a"`, `"Enter"`, `"Shift"`).
    Key(String),
    Click,
    Tap,
}

impl InputEvent {
    pub fn key(name: impl Into<String>) -> Self {
        InputEvent::Key(name.into())
    }

    /// Whether this input can move the gate forward.
    pub fn is_activating(&self) -> bool {
        match self {
            InputEvent::Key(name) => !MODIFIER_KEYS.contains(&name.as_str()),
            InputEvent::Click | InputEvent::Tap => true,
        }
    }
}

/// Side effect requested by a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnlockCommand {
    /// Begin the password reveal.
    StartSequence,
    /// Write `unlocked=true` and bump the visitor counter.
    PersistUnlock,
    /// Clear the unlock flag, the router and the password reveal.
    ClearSession,
}

/// Unlock gate state machine
#[derive(Debug, Clone, Default)]
pub struct UnlockMachine {
    phase: UnlockPhase,
}

impl UnlockMachine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Initial phase from the persisted session: returning visitors skip
    /// the gate entirely.
    pub fn from_session(session: &SessionState) -> Self {
        let phase = if session.unlocked {
            UnlockPhase::Unlocked
        } else {
            UnlockPhase::Locked
        };
        Self { phase }
    }

    pub fn phase(&self) -> UnlockPhase {
        self.phase
    }

    pub fn is_unlocked(&self) -> bool {
        self.phase.is_unlocked()
    }

    /// Feed one input event.
    pub fn handle(&mut self, input: &InputEvent) -> Option<UnlockCommand> {
        if !input.is_activating() {
            return None;
        }
        match self.phase {
            UnlockPhase::Locked => {
                self.phase = UnlockPhase::Animating { ready: false };
                Some(UnlockCommand::StartSequence)
            }
            UnlockPhase::Animating { ready: true } => {
                self.phase = UnlockPhase::Unlocked;
                Some(UnlockCommand::PersistUnlock)
            }
            UnlockPhase::Animating { ready: false } | UnlockPhase::Unlocked => None,
        }
    }

    /// The password sequence has finished. Returns true if this made the
    /// gate ready for confirmation.
    pub fn sequence_complete(&mut self) -> bool {
        if self.phase == (UnlockPhase::Animating { ready: false }) {
            self.phase = UnlockPhase::Animating { ready: true };
            true
        } else {
            false
        }
    }

    /// Return to the locked gate from any phase.
    pub fn logout(&mut self) -> UnlockCommand {
        self.phase = UnlockPhase::Locked;
        UnlockCommand::ClearSession
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_locked_without_session() {
        let machine = UnlockMachine::from_session(&SessionState::default());
        assert_eq!(machine.phase(), UnlockPhase::Locked);
    }

    #[test]
    fn test_starts_unlocked_with_persisted_flag() {
        let machine = UnlockMachine::from_session(&SessionState {
            unlocked: true,
            visitor_count: 4,
        });
        assert!(machine.is_unlocked());
    }

    #[test]
    fn test_first_input_starts_sequence() {
        let mut machine = UnlockMachine::new();
        assert_eq!(
            machine.handle(&InputEvent::key("a")),
            Some(UnlockCommand::StartSequence)
        );
        assert_eq!(machine.phase(), UnlockPhase::Animating { ready: false });
    }

    #[test]
    fn test_modifier_keys_are_ignored() {
        let mut machine = UnlockMachine::new();
        for key in MODIFIER_KEYS {
            assert_eq!(machine.handle(&InputEvent::key(key)), None);
        }
        assert_eq!(machine.phase(), UnlockPhase::Locked);
    }

    #[test]
    fn test_non_modifier_special_keys_activate() {
        assert!(InputEvent::key("Enter").is_activating());
        assert!(InputEvent::key("Escape").is_activating());
        assert!(InputEvent::Tap.is_activating());
        assert!(!InputEvent::key("Meta").is_activating());
    }

    #[test]
    fn test_early_input_is_ignored() {
        let mut machine = UnlockMachine::new();
        machine.handle(&InputEvent::Click);
        assert_eq!(machine.handle(&InputEvent::Click), None);
        assert_eq!(machine.handle(&InputEvent::key("x")), None);
        assert_eq!(machine.phase(), UnlockPhase::Animating { ready: false });
    }

    #[test]
    fn test_confirm_after_sequence_unlocks_once() {
        let mut machine = UnlockMachine::new();
        machine.handle(&InputEvent::Click);
        assert!(machine.sequence_complete());
        assert!(!machine.sequence_complete());

        assert_eq!(
            machine.handle(&InputEvent::Tap),
            Some(UnlockCommand::PersistUnlock)
        );
        assert!(machine.is_unlocked());
        assert_eq!(machine.handle(&InputEvent::Tap), None);
        assert_eq!(machine.handle(&InputEvent::key("a")), None);
        assert!(machine.is_unlocked());
    }

    #[test]
    fn test_modifier_does_not_confirm() {
        let mut machine = UnlockMachine::new();
        machine.handle(&InputEvent::Click);
        machine.sequence_complete();
        assert_eq!(machine.handle(&InputEvent::key("Shift")), None);
        assert_eq!(machine.phase(), UnlockPhase::Animating { ready: true });
    }

    #[test]
    fn test_sequence_complete_outside_animation_is_noop() {
        let mut machine = UnlockMachine::new();
        assert!(!machine.sequence_complete());
        assert_eq!(machine.phase(), UnlockPhase::Locked);
    }

    #[test]
    fn test_logout_from_any_phase_locks() {
        let phases = [
            UnlockPhase::Locked,
            UnlockPhase::Animating { ready: false },
            UnlockPhase::Animating { ready: true },
            UnlockPhase::Unlocked,
        ];
        for phase in phases {
            let mut machine = UnlockMachine { phase };
            assert_eq!(machine.logout(), UnlockCommand::ClearSession);
            assert_eq!(machine.phase(), UnlockPhase::Locked);
        }
    }
}
