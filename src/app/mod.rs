//! Application orchestration — state management, event loop, and input handling.

pub mod event;
pub mod fetch_runtime;
pub mod handler;
pub mod settings;
pub mod state;
