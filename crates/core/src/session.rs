//! Session module - the mutable state of one game
//!
//! A `Session` is a plain value: the engine owns exactly one and is the only
//! thing that mutates it. Sequences are stored inline with a fixed capacity of
//! [`MAX_SEQUENCE_LEN`], so a whole game never allocates.

use arrayvec::ArrayVec;

use crate::types::{Color, GameState, MAX_SEQUENCE_LEN};

/// Fixed-capacity list of colors (a round's sequence or the player's input).
pub type ColorSeq = ArrayVec<Color, MAX_SEQUENCE_LEN>;

/// Complete state of the current game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub state: GameState,
    /// Pad currently lit, if any.
    pub active_color: Option<Color>,
    /// Colors the player must reproduce this round.
    pub sequence: ColorSeq,
    pub strict_mode: bool,
    /// Colors pressed so far this round.
    pub user_input: ColorSeq,
}

impl Session {
    pub fn new(strict_mode: bool) -> Self {
        Self {
            state: GameState::NotStarted,
            active_color: None,
            sequence: ArrayVec::new(),
            strict_mode,
            user_input: ArrayVec::new(),
        }
    }

    /// Fresh session that keeps only the strict-mode flag.
    pub fn reset(&mut self) {
        *self = Self::new(self.strict_mode);
    }

    /// Number of steps in the current round.
    pub fn steps(&self) -> usize {
        self.sequence.len()
    }

    /// True once the player has entered as many colors as the round holds.
    pub fn input_complete(&self) -> bool {
        self.user_input.len() >= self.sequence.len()
    }

    /// True while the player may press a pad.
    pub fn accepts_input(&self) -> bool {
        self.state == GameState::AwaitingInput
            && self.active_color.is_none()
            && !self.input_complete()
    }

    /// Append one color to the round. Returns false when the sequence is full.
    pub fn extend_sequence(&mut self, color: Color) -> bool {
        self.sequence.try_push(color).is_ok()
    }

    /// Record a pad press. Returns false when the input buffer is full.
    pub fn record_input(&mut self, color: Color) -> bool {
        self.user_input.try_push(color).is_ok()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(false)
    }
}
