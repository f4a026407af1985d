//! Core game model - pure, deterministic, and testable
//!
//! This crate holds the data the Simon Says engine works on. It has **zero
//! dependencies** on terminal, audio, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical color sequences
//! - **Testable**: The clock is logical; tests advance it by hand
//! - **Allocation-light**: Sequences live inline in fixed-capacity arrays
//!
//! # Module Structure
//!
//! - [`session`]: The mutable state of one game
//! - [`compare`]: Input-versus-sequence comparison and length thresholds
//! - [`rng`]: Seeded uniform color generation
//! - [`timeline`]: Deferred steps on a single-threaded logical clock
//! - [`snapshot`]: Copyable view handed to renderers
//!
//! # Example
//!
//! ```
//! use simon_says_core::{compare, Session, Verdict};
//! use simon_says_core::types::Color;
//!
//! let mut session = Session::new(false);
//! session.extend_sequence(Color::Red);
//! session.extend_sequence(Color::Blue);
//! session.record_input(Color::Red);
//!
//! assert_eq!(compare(&session.sequence, &session.user_input), Verdict::Partial);
//! ```

pub mod compare;
pub mod rng;
pub mod session;
pub mod snapshot;
pub mod timeline;

pub use simon_says_types as types;

pub use compare::{compare, is_encouraging_len, is_winning_len, Verdict};
pub use rng::ColorRng;
pub use session::{ColorSeq, Session};
pub use snapshot::GameSnapshot;
pub use timeline::{Due, Timeline};
