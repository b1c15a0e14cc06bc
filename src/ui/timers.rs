//! Timer scheduling for the session controller.
//!
//! Each [`TimerRequest`] becomes one tokio task that sleeps for the
//! requested duration and then delivers a [`TimerEvent`] into the UI
//! event channel. Generations make stale deliveries harmless, but the
//! driver still aborts pending tasks on `cancel_all` so nothing fires
//! after a stop or teardown.

use std::io;
use std::sync::mpsc::Sender;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::task::JoinHandle;

use crate::session::{TimerEvent, TimerRequest};
use crate::ui::events::AppEvent;

pub struct TimerDriver {
    runtime: tokio::runtime::Runtime,
    tx: Sender<AppEvent>,
    tasks: Mutex<Vec<JoinHandle<()>>>,
}

impl TimerDriver {
    pub fn new(tx: Sender<AppEvent>) -> io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_time()
            .build()?;
        Ok(Self {
            runtime,
            tx,
            tasks: Mutex::new(Vec::new()),
        })
    }

    /// Schedule every request as its own sleep task.
    pub fn schedule(&self, requests: Vec<TimerRequest>) {
        let mut tasks = self.tasks.lock();
        tasks.retain(|handle| !handle.is_finished());

        for request in requests {
            let (after, event) = match request {
                TimerRequest::Countdown { generation } => (
                    Duration::from_secs(1),
                    TimerEvent::CountdownTick { generation },
                ),
                TimerRequest::Phase { generation, after } => {
                    (after, TimerEvent::PhaseElapsed { generation })
                }
            };
            let tx = self.tx.clone();
            tasks.push(self.runtime.spawn(async move {
                tokio::time::sleep(after).await;
                let _ = tx.send(AppEvent::Timer(event));
            }));
        }
    }

    /// Abort every pending timer task.
    pub fn cancel_all(&self) {
        for handle in self.tasks.lock().drain(..) {
            handle.abort();
        }
    }
}

impl Drop for TimerDriver {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
