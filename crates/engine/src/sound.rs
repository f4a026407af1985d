//! Sound cue seam.
//!
//! The engine only ever asks for "play the cue for this color". What that
//! means (a tone, a terminal bell, nothing) is up to the implementation.

use crate::types::Color;

/// Plays a distinct audio cue per color. Fire-and-forget.
pub trait SoundPlayer {
    fn play(&mut self, color: Color);
}

impl<T: SoundPlayer + ?Sized> SoundPlayer for Box<T> {
    fn play(&mut self, color: Color) {
        (**self).play(color)
    }
}

impl<T: SoundPlayer + ?Sized> SoundPlayer for &mut T {
    fn play(&mut self, color: Color) {
        (**self).play(color)
    }
}

/// Discards every cue.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentPlayer;

impl SoundPlayer for SilentPlayer {
    fn play(&mut self, _color: Color) {}
}

/// Records cues in order (headless runs and tests).
#[derive(Debug, Clone, Default)]
pub struct RecordingPlayer {
    played: Vec<Color>,
}

impl RecordingPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn played(&self) -> &[Color] {
        &self.played
    }

    pub fn take(&mut self) -> Vec<Color> {
        std::mem::take(&mut self.played)
    }
}

impl SoundPlayer for RecordingPlayer {
    fn play(&mut self, color: Color) {
        self.played.push(color);
    }
}
