//! Event handling for the TUI.
//!
//! Merges keyboard input, terminal resizes and periodic redraw ticks.

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use std::time::Duration;
use tokio::sync::mpsc;

/// Events that can occur in the TUI application.
#[derive(Debug)]
pub enum AppEvent {
    /// Keyboard input event.
    Key(KeyEvent),
    /// The terminal was resized; redraw.
    Resize,
    /// Periodic tick to redraw relative times.
    Tick,
}

/// Event loop that aggregates keyboard input and timer ticks.
pub struct EventLoop {
    rx: mpsc::Receiver<AppEvent>,
    _tx: mpsc::Sender<AppEvent>,
}

impl EventLoop {
    /// Create a new event loop ticking every `tick_rate`.
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel(32);

        // Terminal input is blocking; poll it off the async workers.
        let tx_input = tx.clone();
        tokio::task::spawn_blocking(move || {
            loop {
                if !event::poll(Duration::from_millis(50)).unwrap_or(false) {
                    if tx_input.is_closed() {
                        break;
                    }
                    continue;
                }
                let app_event = match event::read() {
                    Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => AppEvent::Key(key),
                    Ok(Event::Resize(_, _)) => AppEvent::Resize,
                    _ => continue,
                };
                if tx_input.blocking_send(app_event).is_err() {
                    break;
                }
            }
        });

        let tx_tick = tx.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(tick_rate);
            // The first tick completes immediately; the app has just loaded.
            interval.tick().await;
            loop {
                interval.tick().await;
                if tx_tick.send(AppEvent::Tick).await.is_err() {
                    break;
                }
            }
        });

        Self { rx, _tx: tx }
    }

    /// Wait for the next event.
    pub async fn next(&mut self) -> Option<AppEvent> {
        self.rx.recv().await
    }
}
