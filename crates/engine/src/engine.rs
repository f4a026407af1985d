//! Engine module - the Simon Says turn-sequencing state machine
//!
//! The engine owns the [`Session`], a seeded [`ColorRng`], and a [`Timeline`]
//! of deferred steps. Intents (start, restart, strict toggle, pad press) are
//! applied immediately; everything staged in time is scheduled on the
//! timeline and runs from [`Engine::tick`].
//!
//! A round plays out like this (times relative to the round start):
//!
//! ```text
//! 0      PlayingSequenceWaiting
//! 100    PlayingSequence
//! 300    color #0 lit          305 cue #0
//! 650    color #0 dark
//! 850    color #1 lit          855 cue #1
//! ...
//! 100 + 550 * n   AwaitingInput
//! ```
//!
//! Every reset bumps the session epoch. Steps carry the epoch they were
//! scheduled in and are skipped if it is no longer current, so a restart in
//! the middle of playback never lets the old round's flashes leak into the
//! new one.

use tracing::{debug, info, trace, warn};

use crate::core::{
    compare, is_encouraging_len, is_winning_len, ColorRng, GameSnapshot, Session, Timeline,
    Verdict,
};
use crate::sound::SoundPlayer;
use crate::types::*;

/// Deferred work items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    /// Settle delay over: start replaying from the first color.
    BeginPlayback,
    /// Light the color at this index.
    LightColor(usize),
    /// Sound cue for a color that just lit up.
    Cue(Color),
    /// Flash window over: darken and move to this index.
    NextColor(usize),
    /// Pressed pad goes dark; compare input.
    ReleasePress,
    /// Non-strict miss: replay the same sequence.
    RetryRound,
    /// Strict miss: new game from length 1.
    RestartAfterMiss,
    /// Round completed: extend the sequence and play it.
    AdvanceRound,
}

/// The game engine.
#[derive(Debug, Clone)]
pub struct Engine<S> {
    session: Session,
    rng: ColorRng,
    timeline: Timeline<Step>,
    /// Generation of the current session.
    epoch: u32,
    /// Games started since the engine was created.
    games: u32,
    /// Longest round completed since the engine was created.
    best_steps: u8,
    sound: S,
}

impl<S: SoundPlayer> Engine<S> {
    /// Create an engine in `NotStarted` with the given RNG seed.
    pub fn new(seed: u64, sound: S) -> Self {
        Self {
            session: Session::new(false),
            rng: ColorRng::new(seed),
            timeline: Timeline::new(),
            epoch: 0,
            games: 0,
            best_steps: 0,
            sound,
        }
    }

    /// Set the initial strict-mode flag (before the first game).
    pub fn with_strict_mode(mut self, strict: bool) -> Self {
        self.session.strict_mode = strict;
        self
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn state(&self) -> GameState {
        self.session.state
    }

    pub fn sequence(&self) -> &[Color] {
        &self.session.sequence
    }

    pub fn user_input(&self) -> &[Color] {
        &self.session.user_input
    }

    pub fn active_color(&self) -> Option<Color> {
        self.session.active_color
    }

    pub fn strict_mode(&self) -> bool {
        self.session.strict_mode
    }

    pub fn epoch(&self) -> u32 {
        self.epoch
    }

    pub fn games(&self) -> u32 {
        self.games
    }

    pub fn best_steps(&self) -> u8 {
        self.best_steps
    }

    /// Logical time in milliseconds since the engine was created.
    pub fn now_ms(&self) -> u64 {
        self.timeline.now_ms()
    }

    /// Number of deferred steps not yet fired (stale ones included).
    pub fn pending_steps(&self) -> usize {
        self.timeline.pending_len()
    }

    pub fn sound(&self) -> &S {
        &self.sound
    }

    pub fn sound_mut(&mut self) -> &mut S {
        &mut self.sound
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.fill_from(&self.session);
        out.epoch = self.epoch;
        out.games = self.games;
        out.best_steps = self.best_steps;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Apply a player intent. Returns false when it was ignored.
    pub fn apply_intent(&mut self, intent: GameIntent) -> bool {
        match intent {
            GameIntent::Start => self.start(),
            GameIntent::Restart => {
                self.restart();
                true
            }
            GameIntent::ToggleStrict => {
                self.toggle_strict_mode();
                true
            }
            GameIntent::Press(color) => self.press_color(color),
        }
    }

    /// Begin the first game. Ignored once a game is under way.
    pub fn start(&mut self) -> bool {
        if self.session.state != GameState::NotStarted {
            trace!(state = self.session.state.as_str(), "start ignored");
            return false;
        }
        self.begin_game();
        true
    }

    /// Reset everything but strict mode, then start a new game.
    pub fn restart(&mut self) {
        self.reset_session();
        self.begin_game();
    }

    /// Flip strict mode, reset, then start a new game.
    pub fn toggle_strict_mode(&mut self) {
        self.session.strict_mode = !self.session.strict_mode;
        info!(strict = self.session.strict_mode, "strict mode toggled");
        self.reset_session();
        self.begin_game();
    }

    /// Press a pad. Only accepted while awaiting input with no pad lit.
    pub fn press_color(&mut self, color: Color) -> bool {
        if !self.session.accepts_input() {
            trace!(
                color = color.as_str(),
                state = self.session.state.as_str(),
                lit = self.session.active_color.is_some(),
                "press ignored"
            );
            return false;
        }

        self.session.record_input(color);
        self.session.active_color = Some(color);
        self.sound.play(color);
        self.schedule(PRESS_FLASH_MS, Step::ReleasePress);
        true
    }

    /// Draw one uniformly random color.
    pub fn random_color(&mut self) -> Color {
        self.rng.next_color()
    }

    /// Advance the logical clock, running every step that comes due.
    ///
    /// Returns true if any current-epoch step ran.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        let mut fired = false;

        self.timeline.begin_advance(elapsed_ms);
        while let Some(due) = self.timeline.pop_due() {
            if due.epoch != self.epoch {
                trace!(step = ?due.step, epoch = due.epoch, "stale step dropped");
                continue;
            }
            self.run_step(due.step);
            fired = true;
        }
        self.timeline.finish_advance();

        fired
    }

    fn run_step(&mut self, step: Step) {
        match step {
            Step::BeginPlayback => {
                self.set_state(GameState::PlayingSequence);
                self.play_next_color(0);
            }
            Step::LightColor(index) => {
                let Some(&color) = self.session.sequence.get(index) else {
                    return;
                };
                self.session.active_color = Some(color);
                self.schedule(CUE_OFFSET_MS, Step::Cue(color));
                self.schedule(FLASH_MS, Step::NextColor(index + 1));
            }
            Step::Cue(color) => self.sound.play(color),
            Step::NextColor(index) => self.play_next_color(index),
            Step::ReleasePress => {
                self.session.active_color = None;
                self.compare_sequences();
            }
            Step::RetryRound => {
                self.session.user_input.clear();
                self.play_sequence();
            }
            Step::RestartAfterMiss => {
                self.reset_session();
                self.begin_game();
            }
            Step::AdvanceRound => {
                self.session.user_input.clear();
                let color = self.random_color();
                if !self.session.extend_sequence(color) {
                    warn!(steps = self.session.steps(), "sequence full, replaying");
                }
                self.play_sequence();
            }
        }
    }

    /// New session with the same strict flag; pending steps become stale.
    fn reset_session(&mut self) {
        self.epoch = self.epoch.wrapping_add(1);
        self.session.reset();
        debug!(epoch = self.epoch, "session reset");
    }

    /// Fresh one-color sequence, then playback.
    fn begin_game(&mut self) {
        self.session.user_input.clear();
        self.session.sequence.clear();
        let color = self.random_color();
        self.session.extend_sequence(color);
        self.games = self.games.wrapping_add(1);
        info!(
            game = self.games,
            epoch = self.epoch,
            strict = self.session.strict_mode,
            "game started"
        );
        self.play_sequence();
    }

    fn play_sequence(&mut self) {
        self.set_state(GameState::PlayingSequenceWaiting);
        self.schedule(PLAYBACK_SETTLE_MS, Step::BeginPlayback);
    }

    fn play_next_color(&mut self, index: usize) {
        self.session.active_color = None;
        if index < self.session.sequence.len() {
            self.schedule(FLASH_GAP_MS, Step::LightColor(index));
        } else {
            self.set_state(GameState::AwaitingInput);
        }
    }

    fn compare_sequences(&mut self) {
        match compare(&self.session.sequence, &self.session.user_input) {
            Verdict::Partial => {}
            Verdict::Mismatch { index } => {
                debug!(
                    index,
                    steps = self.session.steps(),
                    strict = self.session.strict_mode,
                    "mismatch"
                );
                if self.session.strict_mode {
                    self.set_state(GameState::MissedStrict);
                    self.schedule(MISS_RECOVERY_MS, Step::RestartAfterMiss);
                } else {
                    self.set_state(GameState::Missed);
                    self.schedule(MISS_RECOVERY_MS, Step::RetryRound);
                }
            }
            Verdict::Complete => {
                let steps = self.session.steps();
                self.best_steps = self.best_steps.max(steps as u8);

                if is_winning_len(steps) {
                    self.set_state(GameState::Won);
                    info!(game = self.games, steps, "game won");
                    return;
                }
                if is_encouraging_len(steps) {
                    self.set_state(GameState::Encouraged);
                }
                self.schedule(ROUND_ADVANCE_MS, Step::AdvanceRound);
            }
        }
    }

    fn set_state(&mut self, next: GameState) {
        if self.session.state != next {
            debug!(
                from = self.session.state.as_str(),
                to = next.as_str(),
                steps = self.session.steps(),
                "state"
            );
        }
        self.session.state = next;
    }

    fn schedule(&mut self, delay_ms: u32, step: Step) {
        self.timeline.schedule(delay_ms, self.epoch, step);
    }
}

impl Default for Engine<crate::sound::SilentPlayer> {
    fn default() -> Self {
        Self::new(1, crate::sound::SilentPlayer)
    }
}
