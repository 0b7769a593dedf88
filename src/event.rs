//! Event hub: multiplexes terminal input, ticks, and background login
//! results into a single async channel.

use crossterm::event::{Event as CrosstermEvent, EventStream, KeyEvent, KeyEventKind, MouseEvent};
use futures::StreamExt;
use tokio::sync::mpsc;

use crate::model::UserProfile;

#[derive(Debug)]
pub enum Event {
    /// Terminal key press
    Key(KeyEvent),
    /// Mouse event
    Mouse(MouseEvent),
    /// Terminal resized
    #[allow(dead_code)]
    Resize(u16, u16),
    /// Simulated login finished
    LoginCompleted { ticket: u64, profile: UserProfile },
    /// Periodic tick (1 second)
    Tick,
}

pub struct EventHandler {
    tx: mpsc::UnboundedSender<Event>,
    rx: mpsc::UnboundedReceiver<Event>,
}

impl EventHandler {
    /// Create the channel only. Call [`EventHandler::start`] from inside the
    /// runtime to begin reading the terminal.
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        EventHandler { tx, rx }
    }

    /// Sender for producers outside the hub (the login task).
    pub fn sender(&self) -> mpsc::UnboundedSender<Event> {
        self.tx.clone()
    }

    pub fn start(&self) {
        // Spawn crossterm event reader
        let tx_key = self.tx.clone();
        tokio::spawn(async move {
            let mut reader = EventStream::new();
            while let Some(Ok(evt)) = reader.next().await {
                let forwarded = match evt {
                    CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                        tx_key.send(Event::Key(key))
                    }
                    CrosstermEvent::Mouse(mouse) => tx_key.send(Event::Mouse(mouse)),
                    CrosstermEvent::Resize(w, h) => tx_key.send(Event::Resize(w, h)),
                    _ => Ok(()),
                };
                if forwarded.is_err() {
                    break;
                }
            }
        });

        // Spawn tick timer
        let tx_tick = self.tx.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(std::time::Duration::from_secs(1));
            loop {
                interval.tick().await;
                if tx_tick.send(Event::Tick).is_err() {
                    break;
                }
            }
        });
    }

    pub async fn next(&mut self) -> Option<Event> {
        self.rx.recv().await
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}
