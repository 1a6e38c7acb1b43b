//! The data-source seam.
//!
//! Everything above this trait (state, runtime, UI) is implementation-blind:
//! the bundled mock and any future network-backed source are interchangeable.

use async_trait::async_trait;
use thiserror::Error;

use crate::core::model::{Event, Team};

/// Failures a repository implementation can surface.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The data source could not be reached or refused the request.
    #[error("data source unavailable: {0}")]
    Unavailable(String),
    /// The data source answered with something that does not parse.
    #[error("malformed schedule data: {0}")]
    Malformed(String),
}

/// Asynchronous source of scheduled events.
///
/// `team_preferences` is advisory: implementations may use it to filter or
/// personalise results, or ignore it entirely.
#[async_trait]
pub trait EventsRepository: Send + Sync {
    /// Upcoming events for the schedule view.
    async fn get_events(&self, team_preferences: &[Team]) -> Result<Vec<Event>, RepositoryError>;

    /// Candidate games for the highlights view.
    async fn get_highlight_games(
        &self,
        team_preferences: &[Team],
    ) -> Result<Vec<Event>, RepositoryError>;
}
