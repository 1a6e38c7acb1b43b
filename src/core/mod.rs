//! Core domain – events, teams, scheduling math, and the repository seam.
//!
//! Nothing in this module depends on any TUI or rendering crate.
//! Every type is `Send + Sync` so it can be shared across async tasks.

pub mod agenda;
pub mod mock;
pub mod model;
pub mod repository;
pub mod scorer;
pub mod time;
