//! Central application state.
//!
//! All mutable state lives here so that the rest of the app can be pure
//! functions over `&AppState` (rendering) or `&mut AppState` (event handling).

use chrono::{Local, NaiveDate};
use ratatui::layout::Rect;

use crate::config::AppConfig;
use crate::core::mock::resolve_saved_teams;
use crate::core::model::{Event, Team};
use crate::core::scorer;
use crate::ui::schedule::CardListState;

/// Which tab of the cards pane is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Schedule,
    Highlights,
}

impl Tab {
    pub fn label(self) -> &'static str {
        match self {
            Tab::Schedule => "Schedule",
            Tab::Highlights => "Highlights",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Tab::Schedule => Tab::Highlights,
            Tab::Highlights => Tab::Schedule,
        }
    }
}

/// Which view / overlay is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Cards,
    SettingsMenu,
    ControlsSubmenu,
    Detail,
}

/// Top-level application state.
pub struct AppState {
    /// Upcoming games, chronological.
    pub schedule: Vec<Event>,
    /// Unranked pool the highlight ranking draws from.
    pub highlight_pool: Vec<Event>,
    /// Ranked highlight games (the `highlight_count` most interesting).
    pub highlights: Vec<Event>,
    /// Followed teams, resolved from config / CLI names.
    pub preferences: Vec<Team>,
    /// Widget-level state (selection, scroll), one per tab.
    pub schedule_list: CardListState,
    pub highlights_list: CardListState,
    /// Which tab is shown.
    pub tab: Tab,
    /// Which view / overlay is currently shown.
    pub active_view: ActiveView,
    /// Controls the main event loop.
    pub should_quit: bool,
    /// An optional status message shown in the bottom bar.
    pub status_message: Option<String>,
    /// User configuration.
    pub config: AppConfig,
    /// Currently highlighted item in the settings menu.
    pub settings_selected: usize,
    /// Currently highlighted item in the controls submenu.
    pub controls_selected: usize,
    /// When `true`, the controls submenu is waiting for the user to press
    /// a key to rebind the action at `controls_selected`.
    pub awaiting_rebind: bool,
    /// Flag set by event handlers to trigger a background refresh.
    pub needs_refresh: bool,
    /// Monotonic generation id used to ignore stale fetch results.
    pub fetch_generation: u64,
    /// Fetches still in flight for the current generation (0 = idle).
    pub pending_fetches: u8,
    /// Monotonic frame counter driving the spinner and scroll animation.
    pub tick: u64,
    /// Terminal area from the last draw, used for mouse hit-testing.
    pub terminal_area: Rect,
    /// Last left-clicked card index and click time, for double-click.
    pub last_left_click: Option<(usize, std::time::Instant)>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let preferences = resolve_saved_teams(&config.teams);
        Self {
            schedule: Vec::new(),
            highlight_pool: Vec::new(),
            highlights: Vec::new(),
            preferences,
            schedule_list: CardListState::default(),
            highlights_list: CardListState::default(),
            tab: Tab::default(),
            active_view: ActiveView::default(),
            should_quit: false,
            status_message: None,
            config,
            settings_selected: 0,
            controls_selected: 0,
            awaiting_rebind: false,
            needs_refresh: true,
            fetch_generation: 0,
            pending_fetches: 0,
            tick: 0,
            terminal_area: Rect::default(),
            last_left_click: None,
        }
    }

    /// Events backing the active tab.
    pub fn current_events(&self) -> &[Event] {
        match self.tab {
            Tab::Schedule => &self.schedule,
            Tab::Highlights => &self.highlights,
        }
    }

    pub fn current_list(&self) -> &CardListState {
        match self.tab {
            Tab::Schedule => &self.schedule_list,
            Tab::Highlights => &self.highlights_list,
        }
    }

    pub fn current_list_mut(&mut self) -> &mut CardListState {
        match self.tab {
            Tab::Schedule => &mut self.schedule_list,
            Tab::Highlights => &mut self.highlights_list,
        }
    }

    pub fn selected_event(&self) -> Option<&Event> {
        self.current_events().get(self.current_list().selected)
    }

    /// Re-rank highlights from the pool.  Called after a fetch lands and
    /// whenever preferences or the highlight count change.
    pub fn rerank_highlights(&mut self) {
        self.highlights = scorer::most_interesting(
            &self.highlight_pool,
            &self.preferences,
            self.config.highlight_count,
        );
        let len = self.highlights.len();
        self.highlights_list.clamp_selection(len);
    }

    pub fn is_fetching(&self) -> bool {
        self.pending_fetches > 0
    }

    /// Calendar day used for "Today" / "Tomorrow" labels.
    pub fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}
