//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameIntent`].

pub mod map;

pub use simon_says_types as types;

pub use map::{handle_key_event, should_quit, start_control};
