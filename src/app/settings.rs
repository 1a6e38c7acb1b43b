//! Data model for the settings menu.
//!
//! The input handler mutates state through these entries and the popup
//! renders from them, so the list lives here rather than in either module.

use super::state::{ActiveView, AppState};

/// One row of the settings menu.
pub enum SettingsItem {
    /// Descends into another view.
    Submenu {
        label: &'static str,
        view: ActiveView,
    },
    /// On/off switch backed by a config field.
    Toggle {
        label: &'static str,
        read: fn(&AppState) -> bool,
        write: fn(&mut AppState, bool),
    },
    /// Steps through a fixed list of values.
    Cycle {
        label: &'static str,
        show: fn(&AppState) -> String,
        advance: fn(&mut AppState),
    },
}

impl SettingsItem {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Submenu { label, .. } => label,
            Self::Toggle { label, .. } => label,
            Self::Cycle { label, .. } => label,
        }
    }
}

/// Next element after `current`, wrapping at the end.  Falls back to the
/// first value when `current` is not in the list (hand-edited config).
fn next_in<T: Copy + PartialEq>(values: &[T], current: T) -> T {
    match values.iter().position(|v| *v == current) {
        Some(i) => values[(i + 1) % values.len()],
        None => values[0],
    }
}

/// All rows of the settings popup, in display order.
pub static SETTINGS_ITEMS: &[SettingsItem] = &[
    SettingsItem::Submenu {
        label: "Controls",
        view: ActiveView::ControlsSubmenu,
    },
    SettingsItem::Toggle {
        label: "24-Hour Clock",
        read: |s| s.config.twenty_four_hour,
        write: |s, on| {
            s.config.twenty_four_hour = on;
            let _ = s.config.save();
        },
    },
    SettingsItem::Cycle {
        label: "Highlight Count",
        show: |s| s.config.highlight_count.to_string(),
        advance: |s| {
            s.config.highlight_count = next_in(&[1, 2, 3, 5, 8], s.config.highlight_count);
            let _ = s.config.save();
            s.rerank_highlights();
            s.status_message = Some(format!("Highlights shown: {}", s.config.highlight_count));
        },
    },
    SettingsItem::Cycle {
        label: "Double-click Window",
        show: |s| format!("{}ms", s.config.double_click_ms),
        advance: |s| {
            s.config.double_click_ms =
                next_in(&[150, 200, 250, 300, 400, 500], s.config.double_click_ms);
            let _ = s.config.save();
            s.status_message = Some(format!("Double-click window: {}ms", s.config.double_click_ms));
        },
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_in_wraps_and_recovers_from_unknown_values() {
        assert_eq!(next_in(&[1, 2, 3], 1), 2);
        assert_eq!(next_in(&[1, 2, 3], 3), 1);
        assert_eq!(next_in(&[1, 2, 3], 42), 1);
    }
}
