//! Comparison of the player's input against the round's sequence.

use crate::types::{Color, ENCOURAGE_AFTER_LEN, MAX_SEQUENCE_LEN};

/// Result of comparing the input so far with the expected sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Input diverges from the sequence at `index`.
    Mismatch { index: usize },
    /// Input matches so far but is shorter than the sequence.
    Partial,
    /// Whole round reproduced.
    Complete,
}

/// Compare element by element up to the shorter of the two lengths.
pub fn compare(expected: &[Color], input: &[Color]) -> Verdict {
    if let Some(index) = expected
        .iter()
        .zip(input.iter())
        .position(|(should, is)| should != is)
    {
        return Verdict::Mismatch { index };
    }

    if input.len() >= expected.len() {
        Verdict::Complete
    } else {
        Verdict::Partial
    }
}

/// True when completing a round of `len` steps wins the game.
pub fn is_winning_len(len: usize) -> bool {
    len >= MAX_SEQUENCE_LEN
}

/// True when completing a round of `len` steps earns encouragement.
pub fn is_encouraging_len(len: usize) -> bool {
    len > ENCOURAGE_AFTER_LEN && !is_winning_len(len)
}
