//! Colour palette and text styles used across the UI.

use ratatui::style::{Color, Modifier, Style};

use crate::core::model::Sport;

/// Central theme — change colours here and they propagate everywhere.
pub struct Theme;

impl Theme {
    // ── cards ──────────────────────────────────────────────────
    pub fn card_title_style(selected: bool) -> Style {
        let fg = if selected { Color::LightBlue } else { Color::White };
        Style::default().fg(fg).add_modifier(Modifier::BOLD)
    }

    pub fn meta_style() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn time_style() -> Style {
        Style::default().fg(Color::Yellow)
    }

    pub fn day_header_style() -> Style {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    }

    pub fn selected_border_style() -> Style {
        Style::default().fg(Color::LightBlue)
    }

    /// Badge chip for a team monogram, coloured by league.
    pub fn badge_style(sport: Sport) -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(Self::sport_color(sport))
            .add_modifier(Modifier::BOLD)
    }

    pub fn sport_color(sport: Sport) -> Color {
        match sport {
            Sport::Nfl => Color::Green,
            Sport::Nba => Color::LightRed,
            Sport::Mlb => Color::LightBlue,
            Sport::Nhl => Color::Cyan,
        }
    }

    // ── chrome ─────────────────────────────────────────────────
    pub fn border_style() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn title_style() -> Style {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    }

    pub fn status_bar_style() -> Style {
        Style::default().bg(Color::DarkGray).fg(Color::White)
    }

    pub fn fetch_style() -> Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }

    pub fn tab_active_style() -> Style {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    pub fn tab_inactive_style() -> Style {
        Style::default().fg(Color::DarkGray)
    }
}
