use std::hash::{Hash, Hasher};

use crate::session::Session;
use crate::types::{Color, GameState};

/// Read-only view of a session handed to renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub state: GameState,
    pub active_color: Option<Color>,
    pub steps: u8,
    pub input_len: u8,
    pub strict_mode: bool,
    /// Session generation (bumped on every reset).
    pub epoch: u32,
    /// Games started since launch.
    pub games: u32,
    /// Longest round completed since launch.
    pub best_steps: u8,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Fill `self` from a session without allocating.
    pub fn fill_from(&mut self, session: &Session) {
        self.state = session.state;
        self.active_color = session.active_color;
        self.steps = session.sequence.len() as u8;
        self.input_len = session.user_input.len() as u8;
        self.strict_mode = session.strict_mode;
    }

    /// Message for the current state.
    pub fn message(&self) -> &'static str {
        self.state.message()
    }

    /// Label of the start control.
    pub fn start_label(&self) -> &'static str {
        if self.state == GameState::NotStarted {
            "Start"
        } else {
            "Restart"
        }
    }

    /// Stable fingerprint used to skip redraws of unchanged frames.
    pub fn fingerprint(&self) -> u64 {
        let mut h = Fnv1aHasher::new();
        self.hash(&mut h);
        h.finish()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            state: GameState::NotStarted,
            active_color: None,
            steps: 0,
            input_len: 0,
            strict_mode: false,
            epoch: 0,
            games: 0,
            best_steps: 0,
        }
    }
}

struct Fnv1aHasher {
    state: u64,
}

impl Fnv1aHasher {
    fn new() -> Self {
        Self {
            state: 0xcbf2_9ce4_8422_2325,
        }
    }
}

impl Hasher for Fnv1aHasher {
    fn finish(&self) -> u64 {
        self.state
    }

    fn write(&mut self, bytes: &[u8]) {
        for b in bytes {
            self.state ^= *b as u64;
            self.state = self.state.wrapping_mul(0x0000_0100_0000_01b3);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_label_follows_state() {
        let mut snap = GameSnapshot::default();
        assert_eq!(snap.start_label(), "Start");
        snap.state = GameState::AwaitingInput;
        assert_eq!(snap.start_label(), "Restart");
    }

    #[test]
    fn fingerprint_changes_with_active_color() {
        let mut snap = GameSnapshot::default();
        let a = snap.fingerprint();
        snap.active_color = Some(Color::Green);
        assert_ne!(a, snap.fingerprint());
        snap.active_color = None;
        assert_eq!(a, snap.fingerprint());
    }

    #[test]
    fn fill_from_copies_session_fields() {
        let mut session = Session::new(true);
        session.state = GameState::AwaitingInput;
        session.extend_sequence(Color::Red);
        session.extend_sequence(Color::Blue);
        session.record_input(Color::Red);

        let mut snap = GameSnapshot::default();
        snap.fill_from(&session);
        assert_eq!(snap.state, GameState::AwaitingInput);
        assert_eq!(snap.steps, 2);
        assert_eq!(snap.input_len, 1);
        assert!(snap.strict_mode);
    }
}
