//! Input handling — maps key/mouse events to state mutations.

use std::time::{Duration, Instant};

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

use crate::config::{Action, KeyBind};
use crate::core::agenda;
use crate::ui::layout::{self, AppLayout};
use crate::ui::schedule::agenda_geometry;

use super::settings::{SettingsItem, SETTINGS_ITEMS};
use super::state::{ActiveView, AppState, Tab};

/// Total selectable rows in the controls submenu (actions + "Reset").
pub fn controls_item_count() -> usize {
    Action::ALL.len() + 1
}

/// Process a key event, dispatching based on the active view.
pub fn handle_key(state: &mut AppState, key: KeyEvent) {
    // Ctrl+c always quits, regardless of view.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.should_quit = true;
        return;
    }

    match state.active_view {
        ActiveView::Cards => handle_cards_key(state, key),
        ActiveView::SettingsMenu => handle_settings_key(state, key),
        ActiveView::ControlsSubmenu => {
            if state.awaiting_rebind {
                handle_rebind_key(state, key);
            } else {
                handle_controls_key(state, key);
            }
        }
        ActiveView::Detail => handle_detail_key(state, key),
    }
}

// ── Card list (configurable bindings) ───────────────────────────

fn handle_cards_key(state: &mut AppState, key: KeyEvent) {
    // Navigation keys that should always work in the card list.
    match key.code {
        KeyCode::Home => {
            state.current_list_mut().selected = 0;
            return;
        }
        KeyCode::End => {
            let count = state.current_events().len();
            if count > 0 {
                state.current_list_mut().selected = count - 1;
            }
            return;
        }
        _ => {}
    }

    let Some(action) = state.config.match_key(key) else {
        return;
    };

    match action {
        Action::Quit => {
            state.should_quit = true;
        }
        Action::OpenSettings => {
            state.active_view = ActiveView::SettingsMenu;
            state.settings_selected = 0;
        }
        Action::MoveUp => {
            state.current_list_mut().select_prev();
        }
        Action::MoveDown => {
            let count = state.current_events().len();
            state.current_list_mut().select_next(count);
        }
        Action::SwitchTab => {
            switch_tab(state, state.tab.toggled());
        }
        Action::Refresh => {
            state.needs_refresh = true;
        }
        Action::OpenDetail => {
            if state.selected_event().is_some() {
                state.active_view = ActiveView::Detail;
            }
        }
        Action::ToggleClock => {
            // Session-only; the settings menu persists the preference.
            state.config.twenty_four_hour = !state.config.twenty_four_hour;
        }
    }
}

fn switch_tab(state: &mut AppState, tab: Tab) {
    if state.tab != tab {
        state.tab = tab;
        // Card indices differ per tab, so any pending double-click is void.
        state.last_left_click = None;
    }
}

// ── Detail popup (hardcoded keys) ───────────────────────────────

fn handle_detail_key(state: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter => {
            state.active_view = ActiveView::Cards;
        }
        _ => {}
    }
}

// ── Settings menu (hardcoded keys) ──────────────────────────────

fn handle_settings_key(state: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => {
            state.active_view = ActiveView::Cards;
        }
        KeyCode::Up | KeyCode::Char('k') => {
            state.settings_selected = state.settings_selected.saturating_sub(1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.settings_selected = (state.settings_selected + 1).min(SETTINGS_ITEMS.len() - 1);
        }
        KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') | KeyCode::Char(' ') => {
            if let Some(item) = SETTINGS_ITEMS.get(state.settings_selected) {
                match item {
                    SettingsItem::Submenu { view, .. } => {
                        state.active_view = *view;
                        state.controls_selected = 0;
                    }
                    SettingsItem::Toggle { read, write, .. } => {
                        let current = read(state);
                        write(state, !current);
                    }
                    SettingsItem::Cycle { advance, .. } => {
                        advance(state);
                    }
                }
            }
        }
        _ => {}
    }
}

// ── Controls submenu (hardcoded navigation, interactive rebinding) ──

fn handle_controls_key(state: &mut AppState, key: KeyEvent) {
    // The row after the last action is "Reset to defaults".
    let on_action = state.controls_selected < Action::ALL.len();

    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => state.active_view = ActiveView::Cards,
        KeyCode::Left | KeyCode::Char('h') => state.active_view = ActiveView::SettingsMenu,
        KeyCode::Up | KeyCode::Char('k') => {
            state.controls_selected = state.controls_selected.saturating_sub(1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.controls_selected = (state.controls_selected + 1).min(controls_item_count() - 1);
        }
        KeyCode::Enter if on_action => state.awaiting_rebind = true,
        KeyCode::Enter => {
            state.config.reset_defaults();
            let _ = state.config.save();
        }
        KeyCode::Delete | KeyCode::Backspace if on_action => {
            let action = Action::ALL[state.controls_selected];
            state.config.bindings.insert(action, Vec::new());
            let _ = state.config.save();
        }
        _ => {}
    }
}

/// Capture the next key press as a new binding.
fn handle_rebind_key(state: &mut AppState, key: KeyEvent) {
    // Release/Repeat events from kitty-protocol terminals must not bind.
    if key.kind != KeyEventKind::Press {
        return;
    }
    match key.code {
        KeyCode::Esc => state.awaiting_rebind = false,
        // Ctrl+C stays reserved for the emergency quit.
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {}
        _ => {
            let action = Action::ALL[state.controls_selected];
            state.config.add_binding(action, KeyBind::from_key_event(key));
            let _ = state.config.save();
            state.awaiting_rebind = false;
        }
    }
}

// ── Mouse ───────────────────────────────────────────────────────

/// Process a mouse event.
pub fn handle_mouse(state: &mut AppState, mouse: MouseEvent) {
    if state.active_view == ActiveView::Detail {
        // Any click dismisses the detail popup.
        if matches!(mouse.kind, MouseEventKind::Down(_)) {
            state.active_view = ActiveView::Cards;
        }
        return;
    }
    if state.active_view != ActiveView::Cards {
        return;
    }

    let app_layout = AppLayout::from_area(state.terminal_area);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if point_in_rect(app_layout.tabs_area, mouse.column, mouse.row) {
                if let Some(index) = layout::tab_hit(app_layout.tabs_area, mouse.column) {
                    let tab = match index {
                        0 => Tab::Schedule,
                        _ => Tab::Highlights,
                    };
                    switch_tab(state, tab);
                }
                return;
            }

            if !point_in_rect(app_layout.cards_area, mouse.column, mouse.row) {
                return;
            }

            // The card pane draws a border; content starts one row in.
            let content_top = app_layout.cards_area.y.saturating_add(1);
            let content_bottom = app_layout
                .cards_area
                .y
                .saturating_add(app_layout.cards_area.height.saturating_sub(1));
            if mouse.row < content_top || mouse.row >= content_bottom {
                return;
            }

            let rel_row = mouse.row - content_top;
            let rows = agenda::build_rows(state.current_events(), state.today());
            let geom = agenda_geometry(&rows);
            let scroll = state.current_list().scroll_rows;

            let Some(card) = geom.card_at(scroll, rel_row) else {
                // Day header or gap: nothing to select.
                state.last_left_click = None;
                return;
            };

            state.current_list_mut().selected = card;

            let now = Instant::now();
            let is_repeat_click = state
                .last_left_click
                .map(|(last, at)| {
                    last == card
                        && now.duration_since(at)
                            <= Duration::from_millis(state.config.double_click_ms)
                })
                .unwrap_or(false);

            if is_repeat_click {
                // Second click on the same card opens its detail popup.
                state.active_view = ActiveView::Detail;
                state.last_left_click = None;
            } else {
                state.last_left_click = Some((card, now));
            }
        }
        MouseEventKind::ScrollUp => {
            state.current_list_mut().select_prev();
        }
        MouseEventKind::ScrollDown => {
            let count = state.current_events().len();
            state.current_list_mut().select_next(count);
        }
        _ => {}
    }
}

fn point_in_rect(area: Rect, col: u16, row: u16) -> bool {
    col >= area.x
        && col < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::core::mock::mock_events_from;
    use crate::core::model::Event;
    use chrono::Local;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn scroll(kind: MouseEventKind) -> MouseEvent {
        MouseEvent {
            kind,
            column: 10,
            row: 5,
            modifiers: KeyModifiers::NONE,
        }
    }

    /// Three fixture events anchored to today at 08:00 local, so every
    /// start lands on the current calendar day and the agenda shape is
    /// one day header followed by three cards.
    fn todays_events() -> Vec<Event> {
        let base = Local::now()
            .date_naive()
            .and_hms_opt(8, 0, 0)
            .unwrap()
            .and_local_timezone(Local)
            .single()
            .unwrap();
        mock_events_from(base)
    }

    fn test_state() -> AppState {
        let mut state = AppState::new(AppConfig::defaults());
        state.schedule = todays_events();
        state.highlight_pool = todays_events();
        state.rerank_highlights();
        state.needs_refresh = false;
        state.terminal_area = Rect::new(0, 0, 80, 24);
        state
    }

    #[test]
    fn quit_and_refresh_bindings_fire() {
        let mut state = test_state();
        handle_key(&mut state, key(KeyCode::Char('r')));
        assert!(state.needs_refresh);
        handle_key(&mut state, key(KeyCode::Char('q')));
        assert!(state.should_quit);
    }

    #[test]
    fn ctrl_c_quits_from_any_view() {
        let mut state = test_state();
        state.active_view = ActiveView::SettingsMenu;
        handle_key(
            &mut state,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(state.should_quit);
    }

    #[test]
    fn selection_moves_and_clamps_at_both_ends() {
        let mut state = test_state();
        for _ in 0..5 {
            handle_key(&mut state, key(KeyCode::Char('j')));
        }
        assert_eq!(state.schedule_list.selected, 2);
        for _ in 0..5 {
            handle_key(&mut state, key(KeyCode::Char('k')));
        }
        assert_eq!(state.schedule_list.selected, 0);

        handle_key(&mut state, key(KeyCode::End));
        assert_eq!(state.schedule_list.selected, 2);
        handle_key(&mut state, key(KeyCode::Home));
        assert_eq!(state.schedule_list.selected, 0);
    }

    #[test]
    fn tab_key_switches_lists() {
        let mut state = test_state();
        assert_eq!(state.tab, Tab::Schedule);
        handle_key(&mut state, key(KeyCode::Tab));
        assert_eq!(state.tab, Tab::Highlights);

        // Movement now drives the highlights list, not the schedule.
        handle_key(&mut state, key(KeyCode::Down));
        assert_eq!(state.highlights_list.selected, 1);
        assert_eq!(state.schedule_list.selected, 0);

        handle_key(&mut state, key(KeyCode::Tab));
        assert_eq!(state.tab, Tab::Schedule);
    }

    #[test]
    fn enter_opens_detail_only_with_a_selection() {
        let mut state = test_state();
        state.schedule.clear();
        handle_key(&mut state, key(KeyCode::Enter));
        assert_eq!(state.active_view, ActiveView::Cards);

        state.schedule = todays_events();
        handle_key(&mut state, key(KeyCode::Enter));
        assert_eq!(state.active_view, ActiveView::Detail);

        handle_key(&mut state, key(KeyCode::Esc));
        assert_eq!(state.active_view, ActiveView::Cards);
    }

    #[test]
    fn clock_toggle_is_session_only() {
        let mut state = test_state();
        assert!(!state.config.twenty_four_hour);
        handle_key(&mut state, key(KeyCode::Char('t')));
        assert!(state.config.twenty_four_hour);
        handle_key(&mut state, key(KeyCode::Char('t')));
        assert!(!state.config.twenty_four_hour);
    }

    #[test]
    fn settings_menu_opens_navigates_and_descends_into_controls() {
        let mut state = test_state();
        handle_key(&mut state, key(KeyCode::Char('?')));
        assert_eq!(state.active_view, ActiveView::SettingsMenu);
        assert_eq!(state.settings_selected, 0);

        // Clamp at both ends of the item list.
        handle_key(&mut state, key(KeyCode::Char('k')));
        assert_eq!(state.settings_selected, 0);
        for _ in 0..SETTINGS_ITEMS.len() + 2 {
            handle_key(&mut state, key(KeyCode::Char('j')));
        }
        assert_eq!(state.settings_selected, SETTINGS_ITEMS.len() - 1);

        // First item is the controls submenu.
        state.settings_selected = 0;
        handle_key(&mut state, key(KeyCode::Enter));
        assert_eq!(state.active_view, ActiveView::ControlsSubmenu);
        assert_eq!(state.controls_selected, 0);

        // Left returns to the settings menu, Esc all the way out.
        handle_key(&mut state, key(KeyCode::Left));
        assert_eq!(state.active_view, ActiveView::SettingsMenu);
        handle_key(&mut state, key(KeyCode::Esc));
        assert_eq!(state.active_view, ActiveView::Cards);
    }

    #[test]
    fn rebind_prompt_opens_and_esc_cancels() {
        let mut state = test_state();
        state.active_view = ActiveView::ControlsSubmenu;
        state.controls_selected = 0;

        handle_key(&mut state, key(KeyCode::Enter));
        assert!(state.awaiting_rebind);

        handle_key(&mut state, key(KeyCode::Esc));
        assert!(!state.awaiting_rebind);
        assert_eq!(state.active_view, ActiveView::ControlsSubmenu);
    }

    #[test]
    fn clicking_a_card_selects_it_and_a_double_click_opens_detail() {
        let mut state = test_state();
        // Cards area spans rows 1..23; content starts at row 2. The agenda
        // is a day header at relative row 0, then cards at 1..5, 6..10, 11..15.
        let second_card_row = 2 + 6;
        handle_mouse(&mut state, click(10, second_card_row));
        assert_eq!(state.schedule_list.selected, 1);
        assert_eq!(state.active_view, ActiveView::Cards);

        handle_mouse(&mut state, click(10, second_card_row));
        assert_eq!(state.active_view, ActiveView::Detail);

        // While the popup is open, a click dismisses it.
        handle_mouse(&mut state, click(10, second_card_row));
        assert_eq!(state.active_view, ActiveView::Cards);
    }

    #[test]
    fn clicking_a_day_header_clears_the_pending_double_click() {
        let mut state = test_state();
        handle_mouse(&mut state, click(10, 3));
        assert!(state.last_left_click.is_some());

        // Relative row 0 is the day header.
        handle_mouse(&mut state, click(10, 2));
        assert!(state.last_left_click.is_none());
        assert_eq!(state.active_view, ActiveView::Cards);
    }

    #[test]
    fn clicking_a_tab_label_switches_tabs() {
        let mut state = test_state();
        // " Schedule " occupies columns 1..11, " Highlights " 12..24.
        handle_mouse(&mut state, click(13, 0));
        assert_eq!(state.tab, Tab::Highlights);
        handle_mouse(&mut state, click(2, 0));
        assert_eq!(state.tab, Tab::Schedule);
        // A click on the gap between labels changes nothing.
        handle_mouse(&mut state, click(11, 0));
        assert_eq!(state.tab, Tab::Schedule);
    }

    #[test]
    fn scroll_wheel_moves_the_selection() {
        let mut state = test_state();
        handle_mouse(&mut state, scroll(MouseEventKind::ScrollDown));
        handle_mouse(&mut state, scroll(MouseEventKind::ScrollDown));
        assert_eq!(state.schedule_list.selected, 2);
        handle_mouse(&mut state, scroll(MouseEventKind::ScrollUp));
        assert_eq!(state.schedule_list.selected, 1);
    }
}
