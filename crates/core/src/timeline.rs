//! Timeline - single-threaded deferred callbacks
//!
//! The engine never sleeps. Every staged transition (round settle, flash gap,
//! flash hold, sound cue, miss recovery, round advance) is scheduled here as a
//! step with a due time, and fires when the game loop advances the logical
//! clock past it.
//!
//! Ordering rules:
//! - Steps fire in due-time order; equal due times fire in scheduling order.
//! - Before a step is handed out, the clock is set to its due time, so steps
//!   scheduled while handling it are timed from the right instant (and may
//!   themselves come due within the same advance).
//! - Nothing is cancelled. Each step carries the epoch it was scheduled in;
//!   the owner drops steps whose epoch is stale.

/// A scheduled step together with its bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Due<T> {
    pub due_ms: u64,
    pub epoch: u32,
    pub step: T,
}

#[derive(Debug, Clone)]
struct Pending<T> {
    due_ms: u64,
    order: u64,
    epoch: u32,
    step: T,
}

/// Deferred-step queue driven by a logical millisecond clock.
#[derive(Debug, Clone)]
pub struct Timeline<T> {
    now_ms: u64,
    /// Target of the advance in progress (equals `now_ms` when idle).
    horizon_ms: u64,
    next_order: u64,
    pending: Vec<Pending<T>>,
}

impl<T: Copy> Timeline<T> {
    pub fn new() -> Self {
        Self {
            now_ms: 0,
            horizon_ms: 0,
            next_order: 0,
            pending: Vec::with_capacity(8),
        }
    }

    /// Current logical time.
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }

    /// Schedule `step` to fire `delay_ms` after the current logical time.
    pub fn schedule(&mut self, delay_ms: u32, epoch: u32, step: T) {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);
        self.pending.push(Pending {
            due_ms: self.now_ms + delay_ms as u64,
            order,
            epoch,
            step,
        });
    }

    /// Begin moving the clock forward by `elapsed_ms`.
    ///
    /// Call [`Timeline::pop_due`] until it returns `None` to collect every step
    /// that comes due, then [`Timeline::finish_advance`].
    pub fn begin_advance(&mut self, elapsed_ms: u32) {
        self.horizon_ms = self.now_ms + elapsed_ms as u64;
    }

    /// Remove and return the earliest step due at or before the advance target.
    pub fn pop_due(&mut self) -> Option<Due<T>> {
        let idx = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due_ms <= self.horizon_ms)
            .min_by_key(|(_, p)| (p.due_ms, p.order))
            .map(|(i, _)| i)?;

        let p = self.pending.swap_remove(idx);
        // Clock never runs backwards (a zero-delay step scheduled now is due now).
        self.now_ms = self.now_ms.max(p.due_ms);
        Some(Due {
            due_ms: p.due_ms,
            epoch: p.epoch,
            step: p.step,
        })
    }

    /// Complete the advance started by [`Timeline::begin_advance`].
    pub fn finish_advance(&mut self) {
        self.now_ms = self.now_ms.max(self.horizon_ms);
        self.horizon_ms = self.now_ms;
    }

    /// Time until the earliest pending step, if any.
    pub fn next_due_in_ms(&self) -> Option<u64> {
        self.pending
            .iter()
            .map(|p| p.due_ms.saturating_sub(self.now_ms))
            .min()
    }
}

impl<T: Copy> Default for Timeline<T> {
    fn default() -> Self {
        Self::new()
    }
}
