//! Popup overlay widgets — settings menu, controls submenu, and game details.

use chrono::NaiveDate;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use crate::app::settings::{SettingsItem, SETTINGS_ITEMS};
use crate::app::state::AppState;
use crate::config::{Action, AppConfig};
use crate::core::model::{Event, Sport};
use crate::core::time;
use crate::ui::theme::Theme;

// ───────────────────────────────────────── settings popup ────

/// Settings menu popup overlay.
pub struct SettingsPopup<'a> {
    pub selected: usize,
    pub state: &'a AppState,
}

impl<'a> Widget for SettingsPopup<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let height = (SETTINGS_ITEMS.len() as u16) + 6;
        let popup = centered_fixed(44, height, area);
        Clear.render(popup, buf);

        let block = popup_block(" Settings ");
        let inner = block.inner(popup);
        block.render(popup, buf);

        let mut lines = vec![Line::raw("")];
        for (i, item) in SETTINGS_ITEMS.iter().enumerate() {
            let selected = i == self.selected;
            let marker = if selected { " ▸ " } else { "   " };

            // Toggles show their state, cycles their current value.
            let (suffix, suffix_style) = match item {
                SettingsItem::Submenu { .. } => (String::new(), Style::default()),
                SettingsItem::Toggle { read, .. } => {
                    if read(self.state) {
                        ("  [ON]".to_string(), Style::default().fg(Color::Green))
                    } else {
                        ("  [OFF]".to_string(), Style::default().fg(Color::DarkGray))
                    }
                }
                SettingsItem::Cycle { show, .. } => (
                    format!("  {}", show(self.state)),
                    Style::default().fg(Color::Yellow),
                ),
            };

            let mut spans = vec![Span::styled(
                format!("{marker}{}", item.label()),
                row_style(selected),
            )];
            if !suffix.is_empty() {
                spans.push(Span::styled(suffix, suffix_style));
            }
            lines.push(Line::from(spans));
        }
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            "  Enter/Space: toggle  Esc: close",
            Theme::meta_style(),
        )));

        Paragraph::new(lines).render(inner, buf);
    }
}

// ───────────────────────────────────────── controls popup ────

/// Interactive controls / keybinding popup overlay.
pub struct ControlsPopup<'a> {
    pub config: &'a AppConfig,
    pub selected: usize,
    pub awaiting_rebind: bool,
}

impl<'a> Widget for ControlsPopup<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Action rows + 2 blanks + 1 reset + 1 hint + 2 border rows.
        let height = (Action::ALL.len() as u16) + 7;
        let popup = centered_fixed(52, height, area);
        Clear.render(popup, buf);

        let block = popup_block(" Controls ");
        let inner = block.inner(popup);
        block.render(popup, buf);

        let mut lines = vec![Line::raw("")];
        for (i, &action) in Action::ALL.iter().enumerate() {
            let selected = i == self.selected;
            let rebinding = selected && self.awaiting_rebind;
            let keys = if rebinding {
                "Press a key…".to_string()
            } else {
                self.config.display_bindings(action)
            };
            lines.push(binding_row(
                inner.width,
                selected,
                rebinding,
                action.label(),
                &keys,
            ));
        }

        lines.push(Line::raw(""));
        let reset_selected = self.selected == Action::ALL.len();
        lines.push(binding_row(
            inner.width,
            reset_selected,
            false,
            "⟳ Reset to defaults",
            "",
        ));

        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            "  Enter: add key  Del: clear  Esc: back",
            Theme::meta_style(),
        )));

        Paragraph::new(lines).render(inner, buf);
    }
}

// ───────────────────────────────────────── detail popup ──────

/// Full details for one game, opened from the card list.
pub struct DetailPopup<'a> {
    pub event: &'a Event,
    pub twenty_four_hour: bool,
    pub today: NaiveDate,
}

impl<'a> Widget for DetailPopup<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup = centered_fixed(76, 15, area);
        Clear.render(popup, buf);

        let block = popup_block(" Game Details ");
        let inner = block.inner(popup);
        block.render(popup, buf);

        let ev = self.event;
        let when = format!(
            "{} · {} – {}",
            time::day_label(ev.start.date_naive(), self.today),
            time::format_clock(&ev.start, self.twenty_four_hour),
            time::format_clock(&ev.end, self.twenty_four_hour),
        );

        let mut lines = vec![
            Line::raw(""),
            kv_line("Matchup", &ev.title()),
            kv_line("League", ev.sport.label()),
            kv_line("When", &when),
            kv_line("Length", &time::format_duration(ev.duration())),
            kv_line("Id", &ev.id),
            Line::raw(""),
            team_line("Home", &ev.home_team.name, ev.home_team.monogram(), ev.sport),
            team_line("Away", &ev.away_team.name, ev.away_team.monogram(), ev.sport),
            kv_line("Home logo", &ev.home_team.icon_url),
            kv_line("Away logo", &ev.away_team.icon_url),
            Line::raw(""),
        ];
        lines.push(Line::from(Span::styled(
            "  Esc: close",
            Theme::meta_style(),
        )));

        Paragraph::new(lines).render(inner, buf);
    }
}

// ───────────────────────────────────────── helpers ───────────

/// Rounded-border chrome shared by all popups.
fn popup_block(title: &'static str) -> Block<'static> {
    Block::default()
        .title(title)
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray))
}

/// Menu-row text style; selected rows get a highlight bar.
fn row_style(selected: bool) -> Style {
    if selected {
        Style::default()
            .fg(Color::White)
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    }
}

/// One `label … keys` row for the controls list.  The keys column is
/// right-aligned; while a rebind prompt is up it renders bold.
fn binding_row(
    width: u16,
    selected: bool,
    rebinding: bool,
    label: &str,
    keys: &str,
) -> Line<'static> {
    let marker = if selected { " ▸ " } else { "   " };
    let mut keys_style = Style::default().fg(Color::Yellow);
    if selected {
        keys_style = keys_style.bg(Color::DarkGray);
    }
    if rebinding {
        keys_style = keys_style.add_modifier(Modifier::BOLD);
    }

    let left = format!("{marker}{label:<22}");
    let pad = (width as usize).saturating_sub(left.chars().count()).max(1);
    let right = format!("{keys:>pad$}");
    Line::from(vec![
        Span::styled(left, row_style(selected)),
        Span::styled(right, keys_style),
    ])
}

fn kv_line(label: &str, value: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!(" {label:<11}"), Theme::meta_style()),
        Span::raw(value.to_string()),
    ])
}

fn team_line(label: &str, name: &str, monogram: String, sport: Sport) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!(" {label:<11}"), Theme::meta_style()),
        Span::styled(format!(" {monogram} "), Theme::badge_style(sport)),
        Span::raw(format!(" {name}")),
    ])
}

/// Centred rectangle with fixed dimensions, clamped to the available area.
fn centered_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}
