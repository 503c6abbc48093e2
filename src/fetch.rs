//! Edge-driven fetch orchestration
//!
//! One request per distinct committed trigger value. Each request runs on
//! its own background thread and posts exactly one [`FetchMessage`] back to
//! the control thread over an mpsc channel; the TUI loop drains the channel
//! and feeds the state machine.
//!
//! Requests are never deduplicated, cancelled, retried, or timed out. If
//! the trigger changes while an earlier request is still in flight, both
//! completions are applied in arrival order, so a slow stale response can
//! overwrite a newer one. That race is inherited behavior and the one
//! nondeterministic property of the app; it is left as is.

use std::sync::mpsc::{channel, Receiver, Sender};
use std::thread;

use crate::api::{SearchClient, Story};
use crate::logging;

/// Completion messages posted by background fetch threads.
pub enum FetchMessage {
    Loaded(Vec<Story>),
    Failed(String),
}

pub struct Fetcher {
    last_trigger: Option<String>,
    tx: Sender<FetchMessage>,
    rx: Receiver<FetchMessage>,
}

impl Fetcher {
    pub fn new() -> Self {
        let (tx, rx) = channel();
        Self {
            last_trigger: None,
            tx,
            rx,
        }
    }

    /// Compare `trigger` against the last fetched value and start one
    /// request on change (including the initial value at startup). Returns
    /// whether a fetch was started, so the caller can apply `FetchInit`.
    pub fn sync(&mut self, trigger: &str) -> bool {
        if self.last_trigger.as_deref() == Some(trigger) {
            return false;
        }
        self.last_trigger = Some(trigger.to_string());
        self.spawn(trigger.to_string());
        true
    }

    fn spawn(&self, url: String) {
        let tx = self.tx.clone();
        logging::info("FETCH", &format!("GET {}", url));
        thread::spawn(move || {
            let client = SearchClient::new();
            let msg = match client.fetch(&url) {
                Ok(stories) => {
                    logging::info("FETCH", &format!("{} hits for {}", stories.len(), url));
                    FetchMessage::Loaded(stories)
                }
                Err(e) => {
                    logging::warn("FETCH", &format!("{} failed: {}", url, e));
                    FetchMessage::Failed(e.to_string())
                }
            };
            // Receiver may be gone if the app quit mid-flight.
            let _ = tx.send(msg);
        });
    }

    /// Drain one completion without blocking.
    pub fn try_recv(&self) -> Option<FetchMessage> {
        self.rx.try_recv().ok()
    }
}

impl Default for Fetcher {
    fn default() -> Self {
        Self::new()
    }
}
