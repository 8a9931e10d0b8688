//! Event handling for the TUI
//!
//! Terminal input is read on a helper thread and forwarded over a channel,
//! so the main loop only ever blocks on `recv`.

use std::sync::mpsc::{self, Sender};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};

/// Terminal events
#[derive(Debug)]
pub enum Event {
    /// Key press
    Key(KeyEvent),
    /// Terminal resized; the next draw picks up the new size
    Resize,
    /// No input within one tick
    Tick,
}

/// Handles terminal events in a separate thread
pub struct EventHandler {
    rx: mpsc::Receiver<Event>,
}

impl EventHandler {
    /// Starts the reader thread with the given tick rate in milliseconds
    pub fn new(tick_rate_ms: u64) -> Result<Self> {
        let tick_rate = Duration::from_millis(tick_rate_ms);
        let (tx, rx) = mpsc::channel();

        thread::Builder::new()
            .name("tickle-events".to_string())
            .spawn(move || pump(tx, tick_rate))
            .context("Failed to start terminal event thread")?;

        Ok(Self { rx })
    }

    /// Receive the next event (blocking)
    pub fn next(&self) -> Result<Event> {
        Ok(self.rx.recv()?)
    }
}

/// Forwards terminal events until the receiver goes away
fn pump(tx: Sender<Event>, tick_rate: Duration) {
    loop {
        let event = if event::poll(tick_rate).unwrap_or(false) {
            match event::read() {
                // Release/repeat events would double every keystroke on some platforms
                Ok(CrosstermEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                    Event::Key(key)
                }
                Ok(CrosstermEvent::Resize(_, _)) => Event::Resize,
                _ => continue,
            }
        } else {
            Event::Tick
        };

        if tx.send(event).is_err() {
            break;
        }
    }
}
