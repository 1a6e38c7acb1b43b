//! The event card — one scheduled game rendered as a bordered card.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │ PS  Baltimore Ravens at Pittsburgh Steelers  │
//! │     NFL                      6:00 – 8:00 PM  │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! The badge is the home team's monogram on the sport colour — the terminal
//! projection of the team icon URL.

use chrono::NaiveDate;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Widget},
};

use crate::core::model::Event;
use crate::ui::theme::Theme;

/// Full height of a card in terminal rows (border, headline, meta, border).
pub const CARD_HEIGHT: u16 = 4;

pub struct EventCard<'a> {
    event: &'a Event,
    today: NaiveDate,
    selected: bool,
    twenty_four_hour: bool,
    clip_top: u16,
    clip_bottom: u16,
}

impl<'a> EventCard<'a> {
    pub fn new(event: &'a Event, today: NaiveDate) -> Self {
        Self {
            event,
            today,
            selected: false,
            twenty_four_hour: false,
            clip_top: 0,
            clip_bottom: 0,
        }
    }

    pub fn selected(mut self, yes: bool) -> Self {
        self.selected = yes;
        self
    }

    pub fn twenty_four_hour(mut self, yes: bool) -> Self {
        self.twenty_four_hour = yes;
        self
    }

    /// Rows of the card hidden above / below the render area.  The scrolling
    /// list uses this while cards slide past the viewport edges; the clipped
    /// edge loses its border line.
    pub fn clip(mut self, top: u16, bottom: u16) -> Self {
        self.clip_top = top;
        self.clip_bottom = bottom;
        self
    }

    fn render_headline(&self, x: u16, y: u16, w: u16, buf: &mut Buffer) {
        let badge = format!(" {} ", self.event.home_team.monogram());
        let line = Line::from(vec![
            Span::styled(badge, Theme::badge_style(self.event.sport)),
            Span::raw(" "),
            Span::styled(self.event.title(), Theme::card_title_style(self.selected)),
        ]);
        buf.set_line(x, y, &line, w);
    }

    fn render_meta(&self, x: u16, y: u16, w: u16, buf: &mut Buffer) {
        // Sport label sits under the title; the badge column stays clear.
        let indent = (self.event.home_team.monogram().chars().count() as u16 + 3).min(w);
        let sport = Line::from(Span::styled(self.event.sport.label(), Theme::meta_style()));
        buf.set_line(x + indent, y, &sport, w.saturating_sub(indent));

        let time = self.event.time_range(self.twenty_four_hour, self.today);
        let time_w = time.chars().count() as u16;
        if indent + 4 + time_w <= w {
            let line = Line::from(Span::styled(time, Theme::time_style()));
            buf.set_line(x + w - time_w, y, &line, time_w);
        }
    }
}

impl Widget for EventCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 6 || area.height == 0 {
            return;
        }

        let top_clipped = self.clip_top > 0;
        let bot_clipped = self.clip_bottom > 0;
        let borders = match (top_clipped, bot_clipped) {
            (true, true) => Borders::LEFT | Borders::RIGHT,
            (true, false) => Borders::LEFT | Borders::RIGHT | Borders::BOTTOM,
            (false, true) => Borders::LEFT | Borders::RIGHT | Borders::TOP,
            (false, false) => Borders::ALL,
        };
        let border_style = if self.selected {
            Theme::selected_border_style()
        } else {
            Theme::border_style()
        };
        Block::default()
            .borders(borders)
            .border_style(border_style)
            .render(area, buf);

        let x = area.x + 1;
        let w = area.width - 2;
        let last_virtual = CARD_HEIGHT.saturating_sub(self.clip_bottom);
        for virtual_row in self.clip_top..last_virtual {
            let screen_y = area.y + (virtual_row - self.clip_top);
            if screen_y >= area.y.saturating_add(area.height) {
                break;
            }
            // Virtual rows 0 and 3 are the border lines the block drew.
            match virtual_row {
                1 => self.render_headline(x, screen_y, w, buf),
                2 => self.render_meta(x, screen_y, w, buf),
                _ => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::{Sport, Team};
    use chrono::{DateTime, Local, TimeZone};
    use ratatui::layout::Position;

    fn event() -> Event {
        let t = |n: &str| Team::new(n, "https://example.test/logo.png", Sport::Nfl);
        let at = |h: u32| -> DateTime<Local> {
            Local.with_ymd_and_hms(2026, 8, 22, h, 0, 0).unwrap()
        };
        Event::new(
            "test1",
            t("Pittsburgh Steelers"),
            t("Baltimore Ravens"),
            at(18),
            at(20),
            Sport::Nfl,
        )
    }

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| {
                buf.cell(Position::new(x, y))
                    .map(|c| c.symbol())
                    .unwrap_or(" ")
            })
            .collect()
    }

    #[test]
    fn renders_badge_title_sport_and_time() {
        let ev = event();
        let today = ev.start.date_naive();
        let mut buf = Buffer::empty(Rect::new(0, 0, 60, 4));
        EventCard::new(&ev, today).render(buf.area, &mut buf);

        assert!(row_text(&buf, 0).contains('┌'));
        let headline = row_text(&buf, 1);
        assert!(headline.contains(" PS "));
        assert!(headline.contains("Baltimore Ravens at Pittsburgh Steelers"));
        let meta = row_text(&buf, 2);
        assert!(meta.contains("NFL"));
        assert!(meta.contains("6:00 – 8:00 PM"));
        assert!(row_text(&buf, 3).contains('└'));
    }

    #[test]
    fn honors_twenty_four_hour_clock() {
        let ev = event();
        let today = ev.start.date_naive();
        let mut buf = Buffer::empty(Rect::new(0, 0, 60, 4));
        EventCard::new(&ev, today)
            .twenty_four_hour(true)
            .render(buf.area, &mut buf);
        assert!(row_text(&buf, 2).contains("18:00 – 20:00"));
    }

    #[test]
    fn clipped_top_drops_the_border_but_keeps_content_rows() {
        let ev = event();
        let today = ev.start.date_naive();
        let mut buf = Buffer::empty(Rect::new(0, 0, 60, 3));
        EventCard::new(&ev, today)
            .clip(1, 0)
            .render(buf.area, &mut buf);

        // Row 0 is the headline now; the bottom border remains.
        assert!(row_text(&buf, 0).contains(" PS "));
        assert!(row_text(&buf, 2).contains('└'));
    }

    #[test]
    fn narrow_areas_truncate_without_panicking() {
        let ev = event();
        let today = ev.start.date_naive();
        let mut buf = Buffer::empty(Rect::new(0, 0, 20, 4));
        EventCard::new(&ev, today).render(buf.area, &mut buf);
        assert!(row_text(&buf, 1).contains(" PS "));
    }
}
