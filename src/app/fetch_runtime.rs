//! Background fetch runtime.
//!
//! Repository calls run as detached tokio tasks that report back over a
//! generation-tagged channel.  The main loop applies whatever lands for the
//! current generation and drops results an older refresh left in flight.

use std::sync::Arc;
use std::time::Instant;

use tokio::sync::mpsc::UnboundedSender;

use crate::app::state::AppState;
use crate::core::model::Event;
use crate::core::repository::{EventsRepository, RepositoryError};

/// Result of one background repository call.
#[derive(Debug)]
pub enum FetchUpdate {
    Schedule(Result<Vec<Event>, RepositoryError>),
    Highlights(Result<Vec<Event>, RepositoryError>),
}

/// Repository calls one refresh fans out to.
const FETCHES_PER_REFRESH: u8 = 2;

/// Kick off a full refresh: schedule and highlight pool, fetched
/// concurrently.  Bumps the generation so anything still in flight from the
/// previous refresh is ignored when it lands.
pub fn start_refresh(
    state: &mut AppState,
    repository: &Arc<dyn EventsRepository>,
    tx: &UnboundedSender<(u64, FetchUpdate)>,
) {
    state.fetch_generation = state.fetch_generation.wrapping_add(1);
    state.pending_fetches = FETCHES_PER_REFRESH;
    state.status_message = None;
    let generation = state.fetch_generation;
    tracing::debug!("refresh started, generation={generation}");

    let prefs = state.preferences.clone();
    let repo = Arc::clone(repository);
    let tx_schedule = tx.clone();
    tokio::spawn(async move {
        let started = Instant::now();
        let result = repo.get_events(&prefs).await;
        tracing::debug!("schedule fetch finished in {:?}", started.elapsed());
        let _ = tx_schedule.send((generation, FetchUpdate::Schedule(result)));
    });

    let prefs = state.preferences.clone();
    let repo = Arc::clone(repository);
    let tx_highlights = tx.clone();
    tokio::spawn(async move {
        let started = Instant::now();
        let result = repo.get_highlight_games(&prefs).await;
        tracing::debug!("highlights fetch finished in {:?}", started.elapsed());
        let _ = tx_highlights.send((generation, FetchUpdate::Highlights(result)));
    });
}

/// Apply one fetch result.  Stale generations are dropped; errors keep the
/// previous data and surface in the status bar.
pub fn apply_fetch_update(state: &mut AppState, generation: u64, update: FetchUpdate) {
    if generation != state.fetch_generation {
        tracing::debug!("dropping stale fetch result, generation={generation}");
        return;
    }
    state.pending_fetches = state.pending_fetches.saturating_sub(1);

    match update {
        FetchUpdate::Schedule(Ok(mut events)) => {
            events.sort_by(|a, b| a.start.cmp(&b.start).then_with(|| a.id.cmp(&b.id)));
            state.schedule = events;
            let len = state.schedule.len();
            state.schedule_list.clamp_selection(len);
        }
        FetchUpdate::Highlights(Ok(events)) => {
            state.highlight_pool = events;
            state.rerank_highlights();
        }
        FetchUpdate::Schedule(Err(err)) | FetchUpdate::Highlights(Err(err)) => {
            tracing::warn!("fetch failed: {err}");
            state.status_message = Some(format!("Refresh failed: {err}"));
        }
    }
}
