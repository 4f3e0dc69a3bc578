//! Terminal input
//!
//! crossterm's reader blocks, so it runs on tokio's blocking pool and hands
//! events to the async side over a channel. Only key presses and resizes get
//! through; releases, repeats, mouse and focus events are dropped.

use std::time::Duration;

use crossterm::event::{Event, KeyEvent, KeyEventKind};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    Key(KeyEvent),
    Resize(u16, u16),
}

impl EventKind {
    pub fn from_terminal(event: Event) -> Option<Self> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => Some(EventKind::Key(key)),
            Event::Resize(width, height) => Some(EventKind::Resize(width, height)),
            _ => None,
        }
    }
}

/// Stream of [`EventKind`]s read from the real terminal
///
/// The reader thread notices a stop request within one poll interval.
pub(crate) struct TerminalInput {
    events: mpsc::UnboundedReceiver<EventKind>,
    stop: CancellationToken,
}

impl TerminalInput {
    pub(crate) fn start(poll_interval: Duration) -> Self {
        let (tx, events) = mpsc::unbounded_channel();
        let stop = CancellationToken::new();
        let reader_stop = stop.clone();
        tokio::task::spawn_blocking(move || read_events(tx, poll_interval, reader_stop));
        Self { events, stop }
    }

    /// `None` once the reader has stopped
    pub(crate) async fn next(&mut self) -> Option<EventKind> {
        self.events.recv().await
    }
}

impl Drop for TerminalInput {
    fn drop(&mut self) {
        self.stop.cancel();
    }
}

fn read_events(
    tx: mpsc::UnboundedSender<EventKind>,
    poll_interval: Duration,
    stop: CancellationToken,
) {
    while !stop.is_cancelled() {
        match crossterm::event::poll(poll_interval) {
            Ok(true) => {}
            Ok(false) => continue,
            Err(e) => {
                warn!(error = %e, "Terminal input failed");
                return;
            }
        }
        let event = match crossterm::event::read() {
            Ok(event) => event,
            Err(e) => {
                warn!(error = %e, "Terminal input failed");
                return;
            }
        };
        if let Some(event) = EventKind::from_terminal(event) {
            if tx.send(event).is_err() {
                break;
            }
        }
    }
    debug!("Input reader stopped");
}
