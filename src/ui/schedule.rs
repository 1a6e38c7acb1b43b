//! Schedule pane widget — day-bucketed event cards with smooth scrolling.
//!
//! ## Architecture
//!
//! * **Geometry** (`RowSlot`, `AgendaGeometry`, `agenda_geometry`) — pure
//!   layout math shared between the widget (rendering) and the handler
//!   (hit-testing).
//! * **State** (`CardListState`) — selection, scroll target, and the
//!   smooth-scroll animator, one per tab.
//! * **Widget** (`ScheduleWidget`) — thin orchestrator that positions each
//!   agenda row, clips cards sliding past the viewport edges, and draws the
//!   scrollbar.

use chrono::NaiveDate;
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::Color,
    text::{Line, Span},
    widgets::{Block, Paragraph, StatefulWidget, Widget},
};

use crate::core::agenda::AgendaRow;
use crate::core::model::Event;
use crate::ui::card::{EventCard, CARD_HEIGHT};
use crate::ui::smooth_scroll::SmoothScroll;
use crate::ui::theme::Theme;

// ─── constants ──────────────────────────────────────────────────

const DAY_HEADER_HEIGHT: u16 = 1;
const CARD_GAP: u16 = 1;
const SCROLL_SPEED: f64 = 0.35;

// ─── state ──────────────────────────────────────────────────────

/// Per-tab list state: which card is selected and where the viewport sits.
#[derive(Debug, Clone)]
pub struct CardListState {
    pub selected: usize,
    /// Scroll target in buffer rows (top of the viewport).
    pub scroll_rows: usize,
    pub smooth: SmoothScroll,
}

impl CardListState {
    pub fn new() -> Self {
        Self {
            selected: 0,
            scroll_rows: 0,
            smooth: SmoothScroll::new(SCROLL_SPEED),
        }
    }

    pub fn select_next(&mut self, max: usize) {
        if self.selected + 1 < max {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// Keep the selection valid after the event list changes length.
    pub fn clamp_selection(&mut self, len: usize) {
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }
}

impl Default for CardListState {
    fn default() -> Self {
        Self::new()
    }
}

// ─── geometry ───────────────────────────────────────────────────

/// Vertical extent of one agenda row in buffer rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowSlot {
    pub y: usize,
    pub height: u16,
    /// `Some` for card slots, `None` for day headers.
    pub card_index: Option<usize>,
}

#[derive(Debug, Clone)]
pub struct AgendaGeometry {
    pub slots: Vec<RowSlot>,
    pub total_rows: usize,
}

/// Stack agenda rows top to bottom.  Day headers get a blank line above
/// them (except at the very top) and sit flush on their first card;
/// consecutive cards are separated by [`CARD_GAP`].
pub fn agenda_geometry(rows: &[AgendaRow]) -> AgendaGeometry {
    let mut slots = Vec::with_capacity(rows.len());
    let mut cursor = 0usize;
    let mut prev_was_card = false;

    for row in rows {
        match row {
            AgendaRow::Day { .. } => {
                if cursor > 0 {
                    cursor += 1;
                }
                slots.push(RowSlot {
                    y: cursor,
                    height: DAY_HEADER_HEIGHT,
                    card_index: None,
                });
                cursor += DAY_HEADER_HEIGHT as usize;
                prev_was_card = false;
            }
            AgendaRow::Card { index } => {
                if prev_was_card {
                    cursor += CARD_GAP as usize;
                }
                slots.push(RowSlot {
                    y: cursor,
                    height: CARD_HEIGHT,
                    card_index: Some(*index),
                });
                cursor += CARD_HEIGHT as usize;
                prev_was_card = true;
            }
        }
    }

    AgendaGeometry {
        slots,
        total_rows: cursor,
    }
}

impl AgendaGeometry {
    pub fn slot_for_card(&self, index: usize) -> Option<&RowSlot> {
        self.slots.iter().find(|s| s.card_index == Some(index))
    }

    /// Card under the given viewport row (for mouse hit-testing).  Uses the
    /// scroll target, not the animated offset, so clicks match where the
    /// list is headed.
    pub fn card_at(&self, scroll_rows: usize, rel_row: u16) -> Option<usize> {
        let abs = scroll_rows + rel_row as usize;
        self.slots
            .iter()
            .find(|s| s.card_index.is_some() && abs >= s.y && abs < s.y + s.height as usize)
            .and_then(|s| s.card_index)
    }

    pub fn max_scroll(&self, viewport_rows: usize) -> usize {
        self.total_rows.saturating_sub(viewport_rows)
    }

    /// Scroll just far enough to bring the selected card fully into view.
    /// Selecting the first card under a day header reveals the header too.
    pub fn scroll_for_selection(
        &self,
        selected: usize,
        scroll_rows: usize,
        viewport_rows: usize,
    ) -> usize {
        let pos = match self.slots.iter().position(|s| s.card_index == Some(selected)) {
            Some(pos) => pos,
            None => return scroll_rows.min(self.max_scroll(viewport_rows)),
        };
        let slot = self.slots[pos];

        let mut reveal_top = slot.y;
        if pos > 0 {
            let prev = self.slots[pos - 1];
            if prev.card_index.is_none() && prev.y + prev.height as usize == slot.y {
                reveal_top = prev.y;
            }
        }
        let bottom = slot.y + slot.height as usize;

        let mut scroll = scroll_rows;
        if reveal_top < scroll {
            scroll = reveal_top;
        } else if bottom > scroll + viewport_rows {
            scroll = bottom - viewport_rows;
        }
        scroll.min(self.max_scroll(viewport_rows))
    }
}

// ─── widget ─────────────────────────────────────────────────────

pub struct ScheduleWidget<'a> {
    events: &'a [Event],
    rows: &'a [AgendaRow],
    today: NaiveDate,
    twenty_four_hour: bool,
    block: Option<Block<'a>>,
    empty_message: &'a str,
}

impl<'a> ScheduleWidget<'a> {
    pub fn new(events: &'a [Event], rows: &'a [AgendaRow], today: NaiveDate) -> Self {
        Self {
            events,
            rows,
            today,
            twenty_four_hour: false,
            block: None,
            empty_message: "No games scheduled.",
        }
    }

    pub fn twenty_four_hour(mut self, yes: bool) -> Self {
        self.twenty_four_hour = yes;
        self
    }

    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    pub fn empty_message(mut self, message: &'a str) -> Self {
        self.empty_message = message;
        self
    }
}

impl<'a> StatefulWidget for ScheduleWidget<'a> {
    type State = CardListState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        // Resolve the inner area (inside the optional block border).
        let inner = if let Some(ref block) = self.block {
            let inner = block.inner(area);
            block.clone().render(area, buf);
            inner
        } else {
            area
        };
        if inner.height == 0 || inner.width == 0 {
            return;
        }

        if self.events.is_empty() {
            Paragraph::new(vec![Line::from(Span::styled(
                self.empty_message,
                Theme::meta_style(),
            ))])
            .render(Rect::new(inner.x + 1, inner.y, inner.width.saturating_sub(1), 1), buf);
            return;
        }

        let geom = agenda_geometry(self.rows);
        let viewport = inner.height as usize;
        state.scroll_rows = geom.scroll_for_selection(state.selected, state.scroll_rows, viewport);
        state.smooth.set_target(state.scroll_rows);

        // row_offset shifts everything from the target (positive = rows below it).
        let shift = -(state.scroll_rows as i32) + state.smooth.row_offset() as i32;
        let top = inner.y as i32;
        let bottom = (inner.y + inner.height) as i32;

        for (slot, row) in geom.slots.iter().zip(self.rows) {
            let abs_y = top + slot.y as i32 + shift;
            let abs_bottom = abs_y + slot.height as i32;

            // Skip fully off-screen rows.
            if abs_bottom <= top || abs_y >= bottom {
                continue;
            }

            match row {
                AgendaRow::Day { label } => {
                    let line = Line::from(Span::styled(label.as_str(), Theme::day_header_style()));
                    buf.set_line(inner.x + 1, abs_y as u16, &line, inner.width.saturating_sub(1));
                }
                AgendaRow::Card { index } => {
                    // Clamp to the visible area.
                    let vis_y = abs_y.max(top) as u16;
                    let vis_h = (abs_bottom.min(bottom) - vis_y as i32).max(0) as u16;
                    if vis_h < 2 {
                        continue;
                    }
                    let clip_top = if abs_y < top { (top - abs_y) as u16 } else { 0 };
                    let clip_bottom = if abs_bottom > bottom {
                        (abs_bottom - bottom) as u16
                    } else {
                        0
                    };

                    let vis_rect = Rect::new(inner.x, vis_y, inner.width, vis_h);
                    EventCard::new(&self.events[*index], self.today)
                        .selected(*index == state.selected)
                        .twenty_four_hour(self.twenty_four_hour)
                        .clip(clip_top, clip_bottom)
                        .render(vis_rect, buf);
                }
            }
        }

        // Scrollbar uses the target scroll, not the animated offset.
        render_scrollbar(inner, geom.total_rows, state.scroll_rows, viewport, buf);
    }
}

fn render_scrollbar(area: Rect, total: usize, offset: usize, visible: usize, buf: &mut Buffer) {
    if total <= visible || area.height < 2 || area.width == 0 {
        return;
    }
    let x = area.x + area.width.saturating_sub(1);
    let h = area.height as f64;
    let thumb_sz = ((visible as f64 / total as f64) * h).ceil().max(1.0) as u16;
    let max_off = total.saturating_sub(visible) as f64;
    let thumb_pos = if max_off > 0.0 {
        ((offset as f64 / max_off) * (h - thumb_sz as f64)).round() as u16
    } else {
        0
    };

    for row in 0..area.height {
        let y = area.y + row;
        let is_thumb = row >= thumb_pos && row < thumb_pos + thumb_sz;
        let (ch, fg) = if is_thumb {
            ('█', Color::LightBlue)
        } else {
            ('│', Color::DarkGray)
        };
        if let Some(cell) = buf.cell_mut(Position::new(x, y)) {
            cell.set_char(ch).set_fg(fg);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::agenda::build_rows;
    use crate::core::mock::mock_events_from;
    use chrono::{Local, TimeZone};

    fn two_day_rows() -> Vec<AgendaRow> {
        vec![
            AgendaRow::Day {
                label: "Today".into(),
            },
            AgendaRow::Card { index: 0 },
            AgendaRow::Card { index: 1 },
            AgendaRow::Day {
                label: "Tomorrow".into(),
            },
            AgendaRow::Card { index: 2 },
        ]
    }

    #[test]
    fn geometry_stacks_headers_gaps_and_cards() {
        let geom = agenda_geometry(&two_day_rows());
        let ys: Vec<(usize, Option<usize>)> =
            geom.slots.iter().map(|s| (s.y, s.card_index)).collect();
        assert_eq!(
            ys,
            vec![
                (0, None),     // Today
                (1, Some(0)),  // card, flush under its header
                (6, Some(1)),  // 1 + 4 + gap
                (11, None),    // blank line, then Tomorrow
                (12, Some(2)),
            ]
        );
        assert_eq!(geom.total_rows, 16);
    }

    #[test]
    fn card_at_hits_cards_but_not_headers_or_gaps() {
        let geom = agenda_geometry(&two_day_rows());
        assert_eq!(geom.card_at(0, 0), None); // header
        assert_eq!(geom.card_at(0, 1), Some(0));
        assert_eq!(geom.card_at(0, 4), Some(0));
        assert_eq!(geom.card_at(0, 5), None); // gap
        assert_eq!(geom.card_at(0, 6), Some(1));
        assert_eq!(geom.card_at(6, 6), Some(2)); // scrolled: row 12
    }

    #[test]
    fn selection_scrolls_down_and_reveals_headers_going_up() {
        let geom = agenda_geometry(&two_day_rows());
        // Selecting the last card in an 8-row viewport scrolls its bottom edge in.
        assert_eq!(geom.scroll_for_selection(2, 0, 8), 8);
        // Going back to the first card reveals the "Today" header above it.
        assert_eq!(geom.scroll_for_selection(0, 8, 8), 0);
        // No movement when the selection is already visible.
        assert_eq!(geom.scroll_for_selection(1, 2, 10), 2);
    }

    #[test]
    fn renders_header_and_cards() {
        let now = Local.with_ymd_and_hms(2026, 8, 22, 8, 0, 0).unwrap();
        let events = mock_events_from(now);
        let rows = build_rows(&events, now.date_naive());
        let mut state = CardListState::new();
        let mut buf = Buffer::empty(Rect::new(0, 0, 60, 18));

        ScheduleWidget::new(&events, &rows, now.date_naive()).render(
            buf.area,
            &mut buf,
            &mut state,
        );

        let text: Vec<String> = (0..18).map(|y| row_text(&buf, y)).collect();
        assert!(text[0].contains("Today"));
        assert!(text[2].contains("Baltimore Ravens at Pittsburgh Steelers"));
        assert!(text[7].contains("Cleveland Browns at Pittsburgh Steelers"));
    }

    #[test]
    fn renders_empty_message_without_events() {
        let today = Local.with_ymd_and_hms(2026, 8, 22, 8, 0, 0).unwrap().date_naive();
        let mut state = CardListState::new();
        let mut buf = Buffer::empty(Rect::new(0, 0, 40, 6));

        ScheduleWidget::new(&[], &[], today)
            .empty_message("No highlight games.")
            .render(buf.area, &mut buf, &mut state);

        assert!(row_text(&buf, 0).contains("No highlight games."));
    }

    #[test]
    fn selection_state_clamps() {
        let mut state = CardListState::new();
        state.select_next(3);
        state.select_next(3);
        state.select_next(3);
        assert_eq!(state.selected, 2);
        state.clamp_selection(1);
        assert_eq!(state.selected, 0);
        state.select_prev();
        assert_eq!(state.selected, 0);
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
}
