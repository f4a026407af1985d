//! Simon Says (workspace facade crate).
//!
//! Re-exports the workspace crates under one roof and adds the process-level
//! pieces the binary needs: environment configuration and log setup.

pub mod config;
pub mod logging;

pub use simon_says_audio as audio;
pub use simon_says_core as core;
pub use simon_says_engine as engine;
pub use simon_says_input as input;
pub use simon_says_term as term;
pub use simon_says_types as types;

pub use config::{ConfigError, GameConfig};
