//! Terminal input abstraction.
//!
//! Wraps crossterm events into a simpler enum and runs a background task that
//! forwards them over a channel so the main loop stays non-blocking.

use std::time::{Duration, Instant};

use crossterm::event::{self, Event as CtEvent, KeyEvent, KeyEventKind, MouseEvent};
use tokio::sync::mpsc;

/// High-level input consumed by the application.
#[derive(Debug)]
pub enum InputEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
    Tick,
}

/// Spawns a background task that polls the terminal for events and sends them
/// through the returned channel.  Ticks arrive at a steady `tick_rate` even
/// under a stream of input, so animations keep moving while the user scrolls.
pub fn spawn_input_reader(tick_rate: Duration) -> mpsc::UnboundedReceiver<InputEvent> {
    let (tx, rx) = mpsc::unbounded_channel();

    tokio::spawn(async move {
        let mut last_tick = Instant::now();
        loop {
            let timeout = tick_rate.saturating_sub(last_tick.elapsed());
            let has_event = event::poll(timeout).unwrap_or(false);
            if has_event {
                if let Ok(ev) = event::read() {
                    let input = match ev {
                        // Key-release events arrive on kitty-protocol
                        // terminals; only presses and repeats act.
                        CtEvent::Key(k) if k.kind != KeyEventKind::Release => InputEvent::Key(k),
                        CtEvent::Mouse(m) => InputEvent::Mouse(m),
                        CtEvent::Resize(w, h) => InputEvent::Resize(w, h),
                        _ => continue,
                    };
                    if tx.send(input).is_err() {
                        break; // receiver dropped
                    }
                }
            }
            if last_tick.elapsed() >= tick_rate {
                last_tick = Instant::now();
                if tx.send(InputEvent::Tick).is_err() {
                    break;
                }
            }
        }
    });

    rx
}
