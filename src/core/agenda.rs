//! Day bucketing — turns the flat event list into the rows the schedule
//! view draws.

use chrono::NaiveDate;

use crate::core::model::Event;
use crate::core::time::day_label;

/// One row in the agenda.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AgendaRow {
    /// Day separator, e.g. `"Today"`.
    Day { label: String },
    /// Index into the event slice the rows were built from.
    Card { index: usize },
}

/// Bucket a chronologically sorted event list into day-labelled rows.
/// Consecutive events starting on the same calendar day share one header.
pub fn build_rows(events: &[Event], today: NaiveDate) -> Vec<AgendaRow> {
    let mut rows = Vec::with_capacity(events.len() + 4);
    let mut current_day: Option<NaiveDate> = None;

    for (index, ev) in events.iter().enumerate() {
        let day = ev.start.date_naive();
        if current_day != Some(day) {
            rows.push(AgendaRow::Day {
                label: day_label(day, today),
            });
            current_day = Some(day);
        }
        rows.push(AgendaRow::Card { index });
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::{Sport, Team};
    use chrono::{DateTime, Local, TimeZone};

    fn at(d: u32, h: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 8, d, h, 0, 0).unwrap()
    }

    fn event(id: &str, start: DateTime<Local>) -> Event {
        let t = |n: &str| Team::new(n, "", Sport::Nfl);
        Event::new(
            id,
            t("Pittsburgh Steelers"),
            t("Baltimore Ravens"),
            start,
            start + chrono::Duration::hours(2),
            Sport::Nfl,
        )
    }

    #[test]
    fn groups_consecutive_same_day_events_under_one_header() {
        let today = at(22, 0).date_naive();
        let events = vec![
            event("a", at(22, 13)),
            event("b", at(22, 18)),
            event("c", at(23, 12)),
        ];
        let rows = build_rows(&events, today);
        assert_eq!(
            rows,
            vec![
                AgendaRow::Day { label: "Today".into() },
                AgendaRow::Card { index: 0 },
                AgendaRow::Card { index: 1 },
                AgendaRow::Day { label: "Tomorrow".into() },
                AgendaRow::Card { index: 2 },
            ]
        );
    }

    #[test]
    fn far_days_get_dated_headers() {
        let today = at(22, 0).date_naive();
        let rows = build_rows(&[event("a", at(29, 18))], today);
        assert_eq!(
            rows[0],
            AgendaRow::Day { label: "Sat Aug 29".into() }
        );
    }

    #[test]
    fn empty_schedule_produces_no_rows() {
        let today = at(22, 0).date_naive();
        assert!(build_rows(&[], today).is_empty());
    }
}
