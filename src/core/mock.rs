//! In-memory repository used for local development.
//!
//! Resolves a fixed fixture after an artificial delay so loading states get
//! exercised without a real backend.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Local};

use crate::core::model::{Event, Sport, Team};
use crate::core::repository::{EventsRepository, RepositoryError};
use crate::core::time::add_hours;

/// Artificial resolve delay applied to every call.
pub const MOCK_DELAY: Duration = Duration::from_millis(400);

fn espn_logo(code: &str) -> String {
    format!("https://a.espncdn.com/i/teamlogos/nfl/500/scoreboard/{code}.png")
}

/// The three fixture events, anchored to `now`.
pub fn mock_events_from(now: DateTime<Local>) -> Vec<Event> {
    let steelers = Team::new("Pittsburgh Steelers", espn_logo("pit"), Sport::Nfl);
    vec![
        Event::new(
            "test1",
            steelers.clone(),
            Team::new("Baltimore Ravens", espn_logo("bal"), Sport::Nfl),
            add_hours(now, 1),
            add_hours(now, 3),
            Sport::Nfl,
        ),
        Event::new(
            "test2",
            steelers.clone(),
            Team::new("Cleveland Browns", espn_logo("cle"), Sport::Nfl),
            add_hours(now, 5),
            add_hours(now, 7),
            Sport::Nfl,
        ),
        Event::new(
            "test3",
            steelers,
            Team::new("Cincinnati Bengals", espn_logo("cin"), Sport::Nfl),
            add_hours(now, 9),
            add_hours(now, 11),
            Sport::Nfl,
        ),
    ]
}

/// Fixture events anchored to the current wall clock.
pub fn mock_events() -> Vec<Event> {
    mock_events_from(Local::now())
}

/// Default followed teams, used when neither the config file nor the CLI
/// names any.
pub fn mock_saved_teams() -> Vec<Team> {
    vec![
        Team::new("Pittsburgh Steelers", espn_logo("pit"), Sport::Nfl),
        Team::new("Baltimore Ravens", espn_logo("bal"), Sport::Nfl),
    ]
}

/// Resolve followed-team names against the known saved teams.  Unknown names
/// become plain NFL-tagged entries; the tag is inert for preference matching,
/// which compares names only.  Empty input falls back to the defaults.
pub fn resolve_saved_teams(names: &[String]) -> Vec<Team> {
    if names.is_empty() {
        return mock_saved_teams();
    }
    let known = mock_saved_teams();
    names
        .iter()
        .map(|name| {
            known
                .iter()
                .find(|t| t.name.eq_ignore_ascii_case(name))
                .cloned()
                .unwrap_or_else(|| Team::new(name.clone(), String::new(), Sport::Nfl))
        })
        .collect()
}

/// Development stand-in for a real schedule source.
///
/// Both operations ignore the preference list and resolve the same three
/// events after the configured delay.  The fixture is captured once at
/// construction, so repeated calls resolve the identical list.
pub struct MockRepository {
    events: Vec<Event>,
    delay: Duration,
}

impl MockRepository {
    pub fn new() -> Self {
        Self::with_delay(MOCK_DELAY)
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self {
            events: mock_events(),
            delay,
        }
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EventsRepository for MockRepository {
    async fn get_events(&self, _team_preferences: &[Team]) -> Result<Vec<Event>, RepositoryError> {
        tokio::time::sleep(self.delay).await;
        Ok(self.events.clone())
    }

    async fn get_highlight_games(
        &self,
        _team_preferences: &[Team],
    ) -> Result<Vec<Event>, RepositoryError> {
        tokio::time::sleep(self.delay).await;
        Ok(self.events.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn fixture_events_are_two_hours_each_and_chronological() {
        let now = Local.with_ymd_and_hms(2026, 8, 22, 12, 0, 0).unwrap();
        let events = mock_events_from(now);
        assert_eq!(events.len(), 3);
        for ev in &events {
            assert_eq!(ev.duration(), chrono::Duration::hours(2));
            assert_eq!(ev.home_team.name, "Pittsburgh Steelers");
            assert_eq!(ev.sport, Sport::Nfl);
        }
        assert_eq!(events[0].start, add_hours(now, 1));
        assert_eq!(events[1].start, add_hours(now, 5));
        assert_eq!(events[2].start, add_hours(now, 9));
        assert!(events.windows(2).all(|w| w[0].start < w[1].start));
    }

    #[test]
    fn saved_team_resolution() {
        assert_eq!(resolve_saved_teams(&[]), mock_saved_teams());

        let resolved = resolve_saved_teams(&[
            "baltimore ravens".to_string(),
            "Chicago Bears".to_string(),
        ]);
        assert_eq!(resolved[0].name, "Baltimore Ravens");
        assert!(resolved[0].icon_url.contains("bal.png"));
        assert_eq!(resolved[1].name, "Chicago Bears");
        assert!(resolved[1].icon_url.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn resolves_after_the_configured_delay() {
        let repo = MockRepository::with_delay(Duration::from_millis(400));
        let t0 = tokio::time::Instant::now();
        let events = repo.get_events(&[]).await.unwrap();
        assert_eq!(t0.elapsed(), Duration::from_millis(400));
        assert_eq!(events.len(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn ignores_preferences_and_always_resolves_the_same_list() {
        let repo = MockRepository::with_delay(Duration::ZERO);
        let bare = repo.get_events(&[]).await.unwrap();
        let with_prefs = repo.get_events(&mock_saved_teams()).await.unwrap();
        let highlights = repo.get_highlight_games(&mock_saved_teams()).await.unwrap();

        assert_eq!(bare, with_prefs);
        assert_eq!(bare, highlights);
        let ids: Vec<&str> = bare.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["test1", "test2", "test3"]);
    }
}
