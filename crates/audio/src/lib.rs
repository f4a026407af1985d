//! Sound players for the terminal game.
//!
//! - [`BellPlayer`]: rings the terminal bell (works everywhere, one sound for all colors)
//! - [`TonePlayer`]: a distinct sine tone per color (needs the `tone` feature and an audio device)
//! - [`SilentPlayer`]: no sound
//!
//! Use [`player_for`] to build the player selected by configuration. It never
//! fails: a missing feature or audio device degrades to a simpler player.

use std::io::{self, Write};

use tracing::warn;

pub use simon_says_engine::{SilentPlayer, SoundPlayer};
use simon_says_types::Color;

#[cfg(feature = "tone")]
mod tone;
#[cfg(feature = "tone")]
pub use tone::TonePlayer;

/// Length of one tone cue.
pub const TONE_MS: u64 = 300;

/// How sound cues are produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SoundMode {
    Off,
    #[default]
    Bell,
    Tone,
}

impl SoundMode {
    /// Parse sound mode from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "off" | "none" | "0" => Some(SoundMode::Off),
            "bell" => Some(SoundMode::Bell),
            "tone" | "tones" => Some(SoundMode::Tone),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SoundMode::Off => "off",
            SoundMode::Bell => "bell",
            SoundMode::Tone => "tone",
        }
    }
}

/// Pitch of each pad's cue, in Hz.
pub fn tone_hz(color: Color) -> f32 {
    match color {
        Color::Red => 329.63,
        Color::Yellow => 261.63,
        Color::Blue => 196.00,
        Color::Green => 392.00,
    }
}

/// Rings the terminal bell for every cue.
pub struct BellPlayer<W: Write = io::Stdout> {
    out: W,
}

impl BellPlayer<io::Stdout> {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> BellPlayer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> SoundPlayer for BellPlayer<W> {
    fn play(&mut self, _color: Color) {
        // Best effort: a failed bell must not disturb the game.
        let _ = self.out.write_all(b"\x07");
        let _ = self.out.flush();
    }
}

/// Build the player for `mode`, falling back when it is unavailable.
pub fn player_for(mode: SoundMode) -> Box<dyn SoundPlayer> {
    match mode {
        SoundMode::Off => Box::new(SilentPlayer),
        SoundMode::Bell => Box::new(BellPlayer::stdout()),
        SoundMode::Tone => tone_player(),
    }
}

#[cfg(feature = "tone")]
fn tone_player() -> Box<dyn SoundPlayer> {
    match TonePlayer::new() {
        Ok(p) => Box::new(p),
        Err(e) => {
            warn!(error = %e, "no audio output, sound disabled");
            Box::new(SilentPlayer)
        }
    }
}

#[cfg(not(feature = "tone"))]
fn tone_player() -> Box<dyn SoundPlayer> {
    warn!("built without the `tone` feature, using the terminal bell");
    Box::new(BellPlayer::stdout())
}
