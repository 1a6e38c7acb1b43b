//! Highlight ranking — picks the most interesting games for the user.

use crate::core::model::{Event, Team};

/// Interest score: one point per side featuring a followed team.
fn interest(event: &Event, preferences: &[Team]) -> u32 {
    let followed =
        |name: &str| preferences.iter().any(|t| t.name.eq_ignore_ascii_case(name));
    u32::from(followed(&event.home_team.name)) + u32::from(followed(&event.away_team.name))
}

/// The up-to-`count` most interesting events, most interesting first.
///
/// Ordering: followed-team involvement (both sides beat one side, one beats
/// none), then earlier start, then id.  Deterministic for equal inputs; the
/// input slice is never reordered.
pub fn most_interesting(events: &[Event], preferences: &[Team], count: usize) -> Vec<Event> {
    let mut ranked: Vec<&Event> = events.iter().collect();
    ranked.sort_by(|a, b| {
        interest(b, preferences)
            .cmp(&interest(a, preferences))
            .then_with(|| a.start.cmp(&b.start))
            .then_with(|| a.id.cmp(&b.id))
    });
    ranked.into_iter().take(count).cloned().collect()
}
