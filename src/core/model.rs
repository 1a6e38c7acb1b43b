//! Domain model — teams, sports, and scheduled events.

use chrono::{DateTime, Duration, Local, NaiveDate};

use crate::core::time;

// ───────────────────────────────────────── sport ─────────────

/// Leagues the schedule knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sport {
    Nfl,
    Nba,
    Mlb,
    Nhl,
}

impl Sport {
    /// Short display label, e.g. `"NFL"`.
    pub fn label(self) -> &'static str {
        match self {
            Sport::Nfl => "NFL",
            Sport::Nba => "NBA",
            Sport::Mlb => "MLB",
            Sport::Nhl => "NHL",
        }
    }
}

// ───────────────────────────────────────── team ──────────────

/// A team taking part in an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    pub name: String,
    /// Logo URL from the upstream data source.  Terminals cannot draw it,
    /// so the UI projects it to a monogram badge; the detail view shows it raw.
    pub icon_url: String,
    pub sport: Sport,
}

impl Team {
    pub fn new(name: impl Into<String>, icon_url: impl Into<String>, sport: Sport) -> Self {
        Self {
            name: name.into(),
            icon_url: icon_url.into(),
            sport,
        }
    }

    /// Initials used for the card badge: `"Pittsburgh Steelers"` → `"PS"`,
    /// single-word names use their first two letters.
    pub fn monogram(&self) -> String {
        let words: Vec<&str> = self.name.split_whitespace().collect();
        match words.len() {
            0 => "?".to_string(),
            1 => words[0]
                .chars()
                .take(2)
                .flat_map(|c| c.to_uppercase())
                .collect(),
            _ => words
                .iter()
                .take(3)
                .filter_map(|w| w.chars().next())
                .flat_map(|c| c.to_uppercase())
                .collect(),
        }
    }
}

// ───────────────────────────────────────── event ─────────────

/// One scheduled game between two teams.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub id: String,
    pub home_team: Team,
    pub away_team: Team,
    pub start: DateTime<Local>,
    pub end: DateTime<Local>,
    pub sport: Sport,
}

impl Event {
    pub fn new(
        id: impl Into<String>,
        home_team: Team,
        away_team: Team,
        start: DateTime<Local>,
        end: DateTime<Local>,
        sport: Sport,
    ) -> Self {
        Self {
            id: id.into(),
            home_team,
            away_team,
            start,
            end,
            sport,
        }
    }

    /// Display title in the away-at-home convention,
    /// e.g. `"Baltimore Ravens at Pittsburgh Steelers"`.
    pub fn title(&self) -> String {
        format!("{} at {}", self.away_team.name, self.home_team.name)
    }

    /// Compact start/end display, see [`time::format_range`].
    pub fn time_range(&self, twenty_four_hour: bool, today: NaiveDate) -> String {
        time::format_range(&self.start, &self.end, twenty_four_hour, today)
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// True when either side matches `name` (case-insensitive).
    pub fn involves(&self, name: &str) -> bool {
        self.home_team.name.eq_ignore_ascii_case(name)
            || self.away_team.name.eq_ignore_ascii_case(name)
    }
}
