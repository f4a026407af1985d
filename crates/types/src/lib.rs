//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (engine logic, terminal rendering, input mapping).
//!
//! # Game Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `PLAYBACK_SETTLE_MS` | 100 | Pause before a round's playback starts |
//! | `FLASH_GAP_MS` | 200 | Dark gap before each color lights up |
//! | `CUE_OFFSET_MS` | 5 | Sound cue delay after a color lights up |
//! | `FLASH_MS` | 350 | How long a played-back color stays lit |
//! | `PRESS_FLASH_MS` | 150 | How long a pressed pad stays lit |
//! | `MISS_RECOVERY_MS` | 1500 | Pause after a mistake before retry/restart |
//! | `ROUND_ADVANCE_MS` | 500 | Pause after a correct round |
//!
//! # Examples
//!
//! ```
//! use simon_says_types::{Color, GameIntent, GameState, MAX_SEQUENCE_LEN};
//!
//! let color = Color::from_str("yellow").unwrap();
//! assert_eq!(color, Color::Yellow);
//! assert_eq!(color.as_str(), "yellow");
//!
//! assert_eq!(GameState::Missed.message(), "Sorry, you missed. Try again!");
//! assert_eq!(GameIntent::Press(Color::Red), GameIntent::Press(Color::Red));
//!
//! assert_eq!(MAX_SEQUENCE_LEN, 20);
//! ```

/// Longest sequence a player can be asked to reproduce; matching it wins.
pub const MAX_SEQUENCE_LEN: usize = 20;

/// Rounds longer than this earn the "keep going" message.
pub const ENCOURAGE_AFTER_LEN: usize = 4;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Pause between entering a round and replaying its first color.
pub const PLAYBACK_SETTLE_MS: u32 = 100;

/// Dark gap before each replayed color lights up.
pub const FLASH_GAP_MS: u32 = 200;

/// Offset of the sound cue after its color lights up.
pub const CUE_OFFSET_MS: u32 = 5;

/// How long a replayed color stays lit.
pub const FLASH_MS: u32 = 350;

/// How long a pad pressed by the player stays lit before comparison.
pub const PRESS_FLASH_MS: u32 = 150;

/// Pause on a miss before the round is retried (or the game restarted in strict mode).
pub const MISS_RECOVERY_MS: u32 = 1500;

/// Pause after a correct round before the extended sequence plays.
pub const ROUND_ADVANCE_MS: u32 = 500;


/// The four game signals.
///
/// Board layout (2x2):
/// - **Red**: top-left
/// - **Yellow**: top-right
/// - **Blue**: bottom-left
/// - **Green**: bottom-right
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Yellow,
    Blue,
    Green,
}

impl Color {
    /// All colors in board order.
    pub const ALL: [Color; 4] = [Color::Red, Color::Yellow, Color::Blue, Color::Green];

    /// Position in [`Color::ALL`].
    pub fn index(&self) -> usize {
        match self {
            Color::Red => 0,
            Color::Yellow => 1,
            Color::Blue => 2,
            Color::Green => 3,
        }
    }

    pub fn from_index(i: usize) -> Option<Self> {
        Self::ALL.get(i).copied()
    }

    /// Parse color from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use simon_says_types::Color;
    ///
    /// assert_eq!(Color::from_str("red"), Some(Color::Red));
    /// assert_eq!(Color::from_str("GREEN"), Some(Color::Green));
    /// assert_eq!(Color::from_str("purple"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "red" => Some(Color::Red),
            "yellow" => Some(Color::Yellow),
            "blue" => Some(Color::Blue),
            "green" => Some(Color::Green),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
            Color::Green => "green",
        }
    }
}

/// Session phases. Exactly one is active at a time.
///
/// `PlayingSequenceWaiting` and `PlayingSequence` share a message but are
/// separate phases: only the latter has playback in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    NotStarted,
    PlayingSequenceWaiting,
    PlayingSequence,
    AwaitingInput,
    Missed,
    MissedStrict,
    Won,
    Encouraged,
}

impl GameState {
    /// User-facing text shown for this phase.
    pub fn message(&self) -> &'static str {
        match self {
            GameState::NotStarted => "Game not started",
            GameState::PlayingSequenceWaiting | GameState::PlayingSequence => "Playing Sequence",
            GameState::AwaitingInput => "Wait for user input",
            GameState::Missed => "Sorry, you missed. Try again!",
            GameState::MissedStrict => "Sorry, you missed. Start again!",
            GameState::Won => "Hurray, you win!",
            GameState::Encouraged => "Great, keep going!",
        }
    }

    /// Short machine name (used in logs).
    pub fn as_str(&self) -> &'static str {
        match self {
            GameState::NotStarted => "notStarted",
            GameState::PlayingSequenceWaiting => "playingSequenceWaiting",
            GameState::PlayingSequence => "playingSequence",
            GameState::AwaitingInput => "awaitingInput",
            GameState::Missed => "missed",
            GameState::MissedStrict => "missedStrict",
            GameState::Won => "won",
            GameState::Encouraged => "encouraged",
        }
    }
}

/// Intents the engine accepts from the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameIntent {
    /// Begin the first round (only meaningful before the game started)
    Start,
    /// Reset everything except strict mode and begin a new game
    Restart,
    /// Flip strict mode and begin a new game
    ToggleStrict,
    /// Press one of the four pads
    Press(Color),
}

impl GameIntent {
    /// Parse intent from string: `start`, `restart`, `strict`, or a color name.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "start" => Some(GameIntent::Start),
            "restart" => Some(GameIntent::Restart),
            "strict" | "togglestrict" => Some(GameIntent::ToggleStrict),
            other => Color::from_str(other).map(GameIntent::Press),
        }
    }
}
