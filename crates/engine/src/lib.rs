//! Simon Says engine.
//!
//! Drives one game session: accepts player intents, stages playback and
//! recovery on a logical clock, and asks a [`SoundPlayer`] for cues.
//!
//! # Example
//!
//! ```
//! use simon_says_engine::{Engine, RecordingPlayer};
//! use simon_says_engine::types::{GameState, TICK_MS};
//!
//! let mut engine = Engine::new(42, RecordingPlayer::new());
//! engine.start();
//!
//! while engine.state() != GameState::AwaitingInput {
//!     engine.tick(TICK_MS);
//! }
//! assert_eq!(engine.sound().played(), engine.sequence());
//!
//! let first = engine.sequence()[0];
//! assert!(engine.press_color(first));
//! ```

pub mod engine;
pub mod sound;

pub use simon_says_core as core;
pub use simon_says_types as types;

pub use engine::Engine;
pub use sound::{RecordingPlayer, SilentPlayer, SoundPlayer};
