//! Refresh indicator overlaid on the cards area while a fetch is in flight.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::ui::theme::Theme;

const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Spinner + label pinned to the top-right of the area it is rendered over.
///
/// Meant to sit on the cards block's top border while repository calls are
/// pending; when `visible` is false it draws nothing.
pub struct FetchIndicator {
    pub visible: bool,
    /// Event-loop tick counter; the glyph advances every other tick.
    pub tick: u64,
}

impl Widget for FetchIndicator {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if !self.visible || area.height == 0 {
            return;
        }

        let glyph = FRAMES[(self.tick / 2) as usize % FRAMES.len()];
        let line = Line::from(vec![
            Span::styled(format!(" {glyph} "), Theme::fetch_style()),
            Span::styled("updating ", Theme::meta_style()),
        ]);

        let width = line.width() as u16;
        if area.width < width + 4 {
            return;
        }
        // Sits inside the top border, sparing the corner cell.
        let x = area.right().saturating_sub(width + 2);
        buf.set_line(x, area.y, &line, width);
    }
}
