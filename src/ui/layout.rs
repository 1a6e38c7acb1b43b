//! Layout helpers — split the terminal area into regions.
//!
//! The tab bar geometry lives here so the renderer and the mouse
//! handler agree on where each label sits.

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::Widget;

use crate::ui::theme::Theme;

/// Primary screen layout: tab bar, card pane, bottom status bar.
pub struct AppLayout {
    pub tabs_area: Rect,
    pub cards_area: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    /// Compute the layout from the full terminal area.
    pub fn from_area(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // tab bar
                Constraint::Min(3),    // card pane (takes all remaining space)
                Constraint::Length(1), // status bar
            ])
            .split(area);

        Self {
            tabs_area: chunks[0],
            cards_area: chunks[1],
            status_area: chunks[2],
        }
    }
}

/// Tab labels in display order. Index 0 is the schedule tab.
pub const TAB_LABELS: [&str; 2] = ["Schedule", "Highlights"];

/// One-line tab bar across the top of the screen.
///
/// Labels render as ` Label ` segments separated by a single column,
/// starting one column in from the left edge. [`tab_hit`] walks the
/// same positions when resolving mouse clicks.
pub struct TabsBar {
    pub active: usize,
}

impl Widget for TabsBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        let mut x = area.x + 1;
        for (index, label) in TAB_LABELS.iter().enumerate() {
            if x >= area.x + area.width {
                break;
            }
            let style = if index == self.active {
                Theme::tab_active_style()
            } else {
                Theme::tab_inactive_style()
            };
            let segment = format!(" {label} ");
            buf.set_string(x, area.y, &segment, style);
            x += segment.chars().count() as u16 + 1;
        }
    }
}

/// Tab index under `column`, if the column lands on a label.
pub fn tab_hit(area: Rect, column: u16) -> Option<usize> {
    let mut x = area.x + 1;
    for (index, label) in TAB_LABELS.iter().enumerate() {
        let width = label.chars().count() as u16 + 2;
        if column >= x && column < x + width {
            return Some(index);
        }
        x += width + 1;
    }
    None
}
