//! A card-based TUI sports schedule.
//!
//! The interesting seam is [`crate::core::repository::EventsRepository`]: the
//! UI only ever talks to that trait, so a real network-backed data source can
//! slot in behind the same interface the bundled
//! [`crate::core::mock::MockRepository`] implements.

pub mod app;
pub mod config;
pub mod core;
pub mod ui;

pub use crate::core::repository::{EventsRepository, RepositoryError};
