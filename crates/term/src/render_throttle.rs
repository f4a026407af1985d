/// Decides when a new frame is worth drawing.
///
/// The board only changes when the snapshot does, so frames are drawn on a
/// fingerprint change and otherwise refreshed at most once per
/// `refresh_interval_ms` (to repaint after the terminal scribbles over us).
#[derive(Debug, Clone)]
pub struct RenderThrottle {
    refresh_interval_ms: u64,
    last_render_ms: u64,
    last_fingerprint: u64,
    has_rendered: bool,
}

impl RenderThrottle {
    pub fn new(refresh_interval_ms: u64) -> Self {
        Self {
            refresh_interval_ms,
            last_render_ms: 0,
            last_fingerprint: 0,
            has_rendered: false,
        }
    }

    pub fn should_render(&mut self, now_ms: u64, fingerprint: u64) -> bool {
        if !self.has_rendered || fingerprint != self.last_fingerprint {
            self.has_rendered = true;
            self.last_render_ms = now_ms;
            self.last_fingerprint = fingerprint;
            return true;
        }

        if now_ms.saturating_sub(self.last_render_ms) >= self.refresh_interval_ms {
            self.last_render_ms = now_ms;
            return true;
        }

        false
    }

    /// Make the next call render regardless of fingerprint (e.g. after a resize).
    pub fn force(&mut self) {
        self.has_rendered = false;
    }
}
