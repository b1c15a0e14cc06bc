//! Shared test utilities: a recording observer and a simulated-time
//! scheduler for driving the session controller without real sleeping.

#![allow(dead_code)]

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

use respiro::catalog::{BreathingTechnique, TechniqueCatalog};
use respiro::session::{
    BreathPhase, SessionController, SessionError, SessionObserver, SessionState, TimerEvent,
    TimerRequest,
};

/// One observer notification, tagged with the simulated time it fired at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Observed {
    pub at_ms: u64,
    pub event: ObservedEvent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObservedEvent {
    Phase(BreathPhase),
    Seconds(u32),
    Completed,
}

pub type Record = Arc<Mutex<Vec<Observed>>>;

/// Shared simulated clock, read by the observer when tagging events.
pub type SimClock = Arc<AtomicU64>;

pub struct RecordingObserver {
    record: Record,
    clock: SimClock,
}

impl SessionObserver for RecordingObserver {
    fn phase_changed(&mut self, phase: BreathPhase) {
        self.push(ObservedEvent::Phase(phase));
    }

    fn seconds_remaining_changed(&mut self, seconds: u32) {
        self.push(ObservedEvent::Seconds(seconds));
    }

    fn session_completed(&mut self) {
        self.push(ObservedEvent::Completed);
    }
}

impl RecordingObserver {
    fn push(&mut self, event: ObservedEvent) {
        self.record.lock().push(Observed {
            at_ms: self.clock.load(Ordering::SeqCst),
            event,
        });
    }
}

/// Deterministic scheduler around a [`SessionController`].
///
/// Timer requests are queued with their due time; `advance` fires them in
/// due order as simulated time passes. Pending entries are deliberately
/// kept across pause/stop so that generation filtering is exercised: a
/// stale entry must fire as a no-op, not be forgotten.
pub struct Sim {
    pub controller: SessionController,
    clock: SimClock,
    record: Record,
    now_ms: u64,
    seq: u64,
    pending: Vec<(u64, u64, TimerEvent)>,
}

impl Sim {
    /// Controller over the built-in catalog with a recording observer.
    pub fn new(session_duration_seconds: u32) -> Self {
        Self::with_catalog(TechniqueCatalog::builtin(), session_duration_seconds)
    }

    pub fn with_catalog(catalog: TechniqueCatalog, session_duration_seconds: u32) -> Self {
        let record: Record = Arc::new(Mutex::new(Vec::new()));
        let clock: SimClock = Arc::new(AtomicU64::new(0));
        let observer = RecordingObserver {
            record: Arc::clone(&record),
            clock: Arc::clone(&clock),
        };
        let controller =
            SessionController::new(catalog, session_duration_seconds, Box::new(observer));
        Self {
            controller,
            clock,
            record,
            now_ms: 0,
            seq: 0,
            pending: Vec::new(),
        }
    }

    pub fn state(&self) -> &SessionState {
        self.controller.state()
    }

    /// Everything the observer saw so far.
    pub fn observed(&self) -> Vec<Observed> {
        self.record.lock().clone()
    }

    /// Phase notifications only, as `(at_ms, phase)` pairs.
    pub fn observed_phases(&self) -> Vec<(u64, BreathPhase)> {
        self.observed()
            .into_iter()
            .filter_map(|o| match o.event {
                ObservedEvent::Phase(phase) => Some((o.at_ms, phase)),
                _ => None,
            })
            .collect()
    }

    pub fn completions(&self) -> usize {
        self.observed()
            .iter()
            .filter(|o| o.event == ObservedEvent::Completed)
            .count()
    }

    // -- commands ------------------------------------------------------

    pub fn select_technique(&mut self, id: &str) -> Result<(), SessionError> {
        self.controller.select_technique(id)
    }

    pub fn confirm_selection(&mut self) {
        self.controller.confirm_selection();
    }

    pub fn start(&mut self) -> Result<(), SessionError> {
        let requests = self.controller.start()?;
        self.queue(requests);
        Ok(())
    }

    /// Menu → Instructions → Active in one call.
    pub fn start_from_menu(&mut self) {
        self.confirm_selection();
        self.start().expect("start should succeed");
    }

    pub fn pause(&mut self) {
        self.controller.pause();
    }

    pub fn resume(&mut self) {
        let requests = self.controller.resume();
        self.queue(requests);
    }

    pub fn stop(&mut self) {
        self.controller.stop();
    }

    pub fn reset(&mut self) {
        self.controller.reset();
    }

    // -- simulated time ------------------------------------------------

    pub fn advance_secs(&mut self, seconds: u64) {
        self.advance(Duration::from_secs(seconds));
    }

    /// Advance simulated time, firing queued timers in due order.
    pub fn advance(&mut self, by: Duration) {
        let target = self.now_ms + by.as_millis() as u64;
        loop {
            let next = self
                .pending
                .iter()
                .enumerate()
                .filter(|(_, (due, _, _))| *due <= target)
                .min_by_key(|(_, (due, seq, _))| (*due, *seq))
                .map(|(index, _)| index);
            let Some(index) = next else {
                break;
            };
            let (due, _, event) = self.pending.remove(index);
            self.now_ms = self.now_ms.max(due);
            self.clock.store(self.now_ms, Ordering::SeqCst);
            let requests = self.controller.on_timer(event);
            self.queue(requests);
        }
        self.now_ms = target;
        self.clock.store(self.now_ms, Ordering::SeqCst);
    }

    fn queue(&mut self, requests: Vec<TimerRequest>) {
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
            self.pending
                .push((self.now_ms + after.as_millis() as u64, self.seq, event));
            self.seq += 1;
        }
    }
}

/// Build a throwaway technique for sequencer-level tests.
pub fn technique(inhale: u32, hold: u32, exhale: u32, wait: u32) -> BreathingTechnique {
    BreathingTechnique {
        id: format!("{inhale}-{hold}-{exhale}-{wait}"),
        title: "Test technique".to_string(),
        subtitle: String::new(),
        inhale_seconds: inhale,
        hold_seconds: hold,
        exhale_seconds: exhale,
        hold_after_exhale_seconds: wait,
    }
}
