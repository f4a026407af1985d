//! Sine-tone cues through rodio.

use std::time::Duration;

use rodio::source::{SineWave, Source};
use rodio::{OutputStream, OutputStreamHandle, Sink};

use crate::{tone_hz, SoundPlayer, TONE_MS};
use simon_says_types::Color;

/// Plays a short sine tone per cue on the default output device.
pub struct TonePlayer {
    _stream: OutputStream,
    handle: OutputStreamHandle,
}

impl TonePlayer {
    pub fn new() -> Result<Self, rodio::StreamError> {
        let (stream, handle) = OutputStream::try_default()?;
        Ok(Self {
            _stream: stream,
            handle,
        })
    }
}

impl SoundPlayer for TonePlayer {
    fn play(&mut self, color: Color) {
        if let Ok(sink) = Sink::try_new(&self.handle) {
            let source = SineWave::new(tone_hz(color))
                .take_duration(Duration::from_millis(TONE_MS))
                .amplify(0.20);
            sink.append(source);
            sink.detach();
        }
    }
}
