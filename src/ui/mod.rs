//! UI / rendering layer — everything that touches Ratatui widgets.
//!
//! This layer takes the *core* data structures and turns them into pixels on
//! the terminal.  No data fetching happens here.

pub mod card;
pub mod layout;
pub mod popup;
pub mod schedule;
pub mod smooth_scroll;
pub mod spinner;
pub mod theme;
