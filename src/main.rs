//! A card-based TUI for browsing upcoming games.
//!
//! Run the binary to launch the schedule view. `Tab` flips to the
//! highlights tab, `r` refreshes, `?` opens the settings menu.

use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    widgets::{Block, Borders, Paragraph},
    Terminal,
};

use gameday::app::{
    event::{spawn_input_reader, InputEvent},
    fetch_runtime::{self, FetchUpdate},
    handler,
    state::{ActiveView, AppState, Tab},
};
use gameday::config::AppConfig;
use gameday::core::{agenda, mock::MockRepository};
use gameday::ui::{
    layout::{AppLayout, TabsBar},
    popup,
    schedule::ScheduleWidget,
    spinner::FetchIndicator,
    theme::Theme,
};
use gameday::EventsRepository;

// ───────────────────────────────────────── CLI ───────────────

#[derive(Parser, Debug)]
#[command(name = env!("CARGO_PKG_NAME"), about = "Card-based schedule viewer for upcoming games")]
struct Cli {
    /// Follow a team (repeatable). Overrides the config file.
    #[arg(long = "team", value_name = "NAME")]
    teams: Vec<String>,

    /// Number of games shown on the highlights tab.
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=16))]
    highlights: Option<u8>,

    /// Show times on a 24-hour clock.
    #[arg(long = "twenty-four-hour")]
    twenty_four_hour: bool,

    /// Artificial resolve delay of the built-in repository, in milliseconds.
    #[arg(long = "mock-delay-ms", default_value_t = 400)]
    mock_delay_ms: u64,
}

// ───────────────────────────────────────── main ─────────────

#[tokio::main]
async fn main() -> Result<()> {
    // Initialise tracing (only in debug builds / when RUST_LOG is set).
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr) // stdout hosts the TUI
        .init();

    let cli = Cli::parse();

    // ── config, state, repository ─────────────────────────────
    let mut user_config = AppConfig::load();
    if !cli.teams.is_empty() {
        user_config.teams = cli.teams.clone();
    }
    if let Some(count) = cli.highlights {
        user_config.highlight_count = count as usize;
    }
    if cli.twenty_four_hour {
        user_config.twenty_four_hour = true;
    }

    let mut state = AppState::new(user_config);
    let repository: Arc<dyn EventsRepository> = Arc::new(MockRepository::with_delay(
        Duration::from_millis(cli.mock_delay_ms),
    ));

    // ── terminal setup ────────────────────────────────────────
    enable_raw_mode()?;
    let mut stdout_handle = io::stdout();
    execute!(stdout_handle, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    // ── async channels ────────────────────────────────────────
    let mut inputs = spawn_input_reader(Duration::from_millis(100));
    let (fetch_tx, mut fetch_rx) = tokio::sync::mpsc::unbounded_channel::<(u64, FetchUpdate)>();

    // ── event loop ────────────────────────────────────────────
    loop {
        // ── draw first ─────────────────────────────────────────
        // Always render before doing any expensive work so the UI
        // stays responsive.  Fetched data fills in asynchronously.
        terminal.draw(|frame| {
            state.terminal_area = frame.area();
            let layout = AppLayout::from_area(frame.area());

            let today = state.today();
            let twenty_four_hour = state.config.twenty_four_hour;
            let hint = state.config.status_bar_hint();
            let fetching = state.is_fetching();
            let title = format!(" {} ", state.tab.label());

            let active_tab = match state.tab {
                Tab::Schedule => 0,
                Tab::Highlights => 1,
            };
            frame.render_widget(TabsBar { active: active_tab }, layout.tabs_area);

            let (events, list, empty_message) = match state.tab {
                Tab::Schedule => (
                    &state.schedule,
                    &mut state.schedule_list,
                    "No games scheduled.",
                ),
                Tab::Highlights => (
                    &state.highlights,
                    &mut state.highlights_list,
                    "No highlight games.",
                ),
            };

            let rows = agenda::build_rows(events, today);
            let card_block = Block::default()
                .title(title)
                .title_style(Theme::title_style())
                .borders(Borders::ALL)
                .border_style(Theme::border_style());

            let schedule = ScheduleWidget::new(events, &rows, today)
                .twenty_four_hour(twenty_four_hour)
                .block(card_block)
                .empty_message(empty_message);
            frame.render_stateful_widget(schedule, layout.cards_area, list);

            frame.render_widget(
                FetchIndicator {
                    visible: fetching,
                    tick: state.tick,
                },
                layout.cards_area,
            );

            let status_text = match state.active_view {
                ActiveView::Cards => state.status_message.as_deref().unwrap_or(&hint),
                ActiveView::SettingsMenu | ActiveView::ControlsSubmenu | ActiveView::Detail => "",
            };
            let status = Paragraph::new(status_text).style(Theme::status_bar_style());
            frame.render_widget(status, layout.status_area);

            match state.active_view {
                ActiveView::SettingsMenu => {
                    frame.render_widget(
                        popup::SettingsPopup {
                            selected: state.settings_selected,
                            state: &state,
                        },
                        frame.area(),
                    );
                }
                ActiveView::ControlsSubmenu => {
                    frame.render_widget(
                        popup::ControlsPopup {
                            config: &state.config,
                            selected: state.controls_selected,
                            awaiting_rebind: state.awaiting_rebind,
                        },
                        frame.area(),
                    );
                }
                ActiveView::Detail => {
                    if let Some(event) = state.selected_event() {
                        frame.render_widget(
                            popup::DetailPopup {
                                event,
                                twenty_four_hour,
                                today,
                            },
                            frame.area(),
                        );
                    }
                }
                ActiveView::Cards => {}
            }
        })?;

        // ── kick off fetches AFTER draw ───────────────────────────
        // The draw above already rendered the current data plus the
        // fetch indicator, so a refresh never blocks a frame.  Results
        // land through the channel and appear on a later frame.
        if state.needs_refresh {
            state.needs_refresh = false;
            fetch_runtime::start_refresh(&mut state, &repository, &fetch_tx);
        }

        tokio::select! {
            biased;

            Some(event) = inputs.recv() => {
                match event {
                    InputEvent::Key(k) => handler::handle_key(&mut state, k),
                    InputEvent::Mouse(m) => handler::handle_mouse(&mut state, m),
                    InputEvent::Resize(_, _) => {}
                    InputEvent::Tick => {
                        state.tick = state.tick.wrapping_add(1);
                        state.schedule_list.smooth.tick();
                        state.highlights_list.smooth.tick();
                    }
                }
            }

            Some((generation, update)) = fetch_rx.recv() => {
                fetch_runtime::apply_fetch_update(&mut state, generation, update);

                // Drain everything currently queued without blocking, so a
                // burst of results (both halves of a refresh, or leftovers
                // from a superseded one) costs a single redraw.
                while let Ok((gen, upd)) = fetch_rx.try_recv() {
                    fetch_runtime::apply_fetch_update(&mut state, gen, upd);
                }
            }
        }

        if state.should_quit {
            break;
        }
    }

    // ── teardown ──────────────────────────────────────────────
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}
