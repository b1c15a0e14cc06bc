//! Event plumbing for the UI loop.
//!
//! A background thread reads terminal input and forwards it, together with
//! timer callbacks from [`TimerDriver`](super::timers::TimerDriver), into
//! one mpsc channel. The UI loop drains that channel on a single thread,
//! so a user command is always applied before any timer event delivered
//! after it.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::Duration;

use crossterm::event::{Event, KeyEvent, KeyEventKind};

use crate::session::TimerEvent;

pub enum AppEvent {
    Key(KeyEvent),
    Resize(u16, u16),
    /// Periodic redraw heartbeat.
    Tick,
    /// A scheduled session timer fired.
    Timer(TimerEvent),
}

pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: Sender<AppEvent>,
}

impl EventHandler {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        thread::spawn(move || loop {
            match crossterm::event::poll(Duration::from_millis(100)) {
                Ok(true) => {
                    let event = match crossterm::event::read() {
                        Ok(event) => event,
                        Err(err) => {
                            tracing::warn!(target: "events", error = %err, "input read failed");
                            break;
                        }
                    };
                    let forwarded = match event {
                        Event::Key(key) if key.kind != KeyEventKind::Release => {
                            event_tx.send(AppEvent::Key(key))
                        }
                        Event::Resize(cols, rows) => event_tx.send(AppEvent::Resize(cols, rows)),
                        _ => Ok(()),
                    };
                    if forwarded.is_err() {
                        // UI loop is gone
                        break;
                    }
                }
                Ok(false) => {
                    // Poll timeout: heartbeat doubles as a liveness probe
                    // so the thread exits once the receiver is dropped.
                    if event_tx.send(AppEvent::Tick).is_err() {
                        break;
                    }
                }
                Err(err) => {
                    tracing::warn!(target: "events", error = %err, "input poll failed");
                    break;
                }
            }
        });

        Self { rx, tx }
    }

    /// Sender handle for timer tasks.
    pub fn sender(&self) -> Sender<AppEvent> {
        self.tx.clone()
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}
