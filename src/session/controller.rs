//! Session controller: command validation, dispatch and timer wiring.
//!
//! The controller is the only owner of [`SessionState`]. User commands are
//! validated against the catalog, turned into intents and run through the
//! reducer; the resulting state diff drives observer notifications and the
//! timer requests handed back to the runtime.
//!
//! Two logical timers exist while a session is advancing: the one-second
//! countdown and the per-phase timer. Both are represented as
//! [`TimerRequest`]s tagged with the state's timer generation. Commands
//! that invalidate pending timers bump the generation, so a callback that
//! arrives late is recognized as stale and dropped without touching state.

use std::time::Duration;

use crate::catalog::TechniqueCatalog;
use crate::session::error::SessionError;
use crate::session::intent::SessionIntent;
use crate::session::reducer::SessionReducer;
use crate::session::sequencer;
use crate::session::state::{BreathPhase, LifecyclePhase, SessionState};
use crate::ui::mvi::Reducer;

/// A timer the runtime should schedule on the controller's behalf.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerRequest {
    /// Deliver a [`TimerEvent::CountdownTick`] after one second.
    Countdown { generation: u64 },
    /// Deliver a [`TimerEvent::PhaseElapsed`] after `after`.
    Phase { generation: u64, after: Duration },
}

/// A scheduled timer firing back into the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    CountdownTick { generation: u64 },
    PhaseElapsed { generation: u64 },
}

/// Consumer contract for the enclosing UI layer.
///
/// All notifications are invoked synchronously from the dispatch path.
pub trait SessionObserver {
    fn phase_changed(&mut self, _phase: BreathPhase) {}
    fn seconds_remaining_changed(&mut self, _seconds: u32) {}
    fn session_completed(&mut self) {}
}

/// Observer that ignores every notification.
pub struct NullObserver;

impl SessionObserver for NullObserver {}

pub struct SessionController {
    state: SessionState,
    catalog: TechniqueCatalog,
    observer: Box<dyn SessionObserver>,
}

impl SessionController {
    pub fn new(
        catalog: TechniqueCatalog,
        session_duration_seconds: u32,
        observer: Box<dyn SessionObserver>,
    ) -> Self {
        let state = SessionState::new(catalog.default_id(), session_duration_seconds);
        Self {
            state,
            catalog,
            observer,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn catalog(&self) -> &TechniqueCatalog {
        &self.catalog
    }

    /// The technique currently highlighted in the menu.
    pub fn selected_technique(&self) -> &crate::catalog::BreathingTechnique {
        self.catalog
            .get(&self.state.selected_technique_id)
            .unwrap_or_else(|_| self.catalog.default_technique())
    }

    /// Change the highlighted technique. Fails with a not-found error and
    /// leaves the selection untouched if `id` is not in the catalog.
    pub fn select_technique(&mut self, id: &str) -> Result<(), SessionError> {
        self.catalog.get(id)?;
        self.dispatch(SessionIntent::SelectTechnique { id: id.to_string() });
        Ok(())
    }

    pub fn confirm_selection(&mut self) {
        self.dispatch(SessionIntent::ConfirmSelection);
    }

    pub fn back(&mut self) {
        self.dispatch(SessionIntent::Back);
    }

    /// Start the session. Only valid on the instructions screen; the
    /// technique must resolve and pass the positive-duration check, or the
    /// session stays where it is.
    pub fn start(&mut self) -> Result<Vec<TimerRequest>, SessionError> {
        if self.state.lifecycle != LifecyclePhase::Instructions {
            return Err(SessionError::InvalidState {
                command: "start",
                phase: self.state.lifecycle,
            });
        }
        let technique = self.catalog.get(&self.state.selected_technique_id)?.clone();
        sequencer::validate(&technique)?;

        tracing::debug!(target: "session", technique = %technique.id, "session started");
        self.dispatch(SessionIntent::Start { technique });
        self.observer.phase_changed(self.state.breath_phase);
        Ok(self.advancing_timers())
    }

    /// Suspend the countdown and the phase cycle. No-op unless advancing.
    pub fn pause(&mut self) {
        if self.state.is_advancing() {
            tracing::debug!(target: "session", "session paused");
        }
        self.dispatch(SessionIntent::Pause);
    }

    /// Resume a paused session; the breath cycle restarts at inhale.
    /// Returns no timers (no-op) unless the session was actually paused.
    pub fn resume(&mut self) -> Vec<TimerRequest> {
        if !(self.state.is_active() && !self.state.is_running) {
            return Vec::new();
        }
        tracing::debug!(target: "session", "session resumed");
        self.dispatch(SessionIntent::Resume);
        self.observer.phase_changed(self.state.breath_phase);
        self.advancing_timers()
    }

    /// Abort an active session and return to the menu with a full
    /// countdown. No-op outside `Active`.
    pub fn stop(&mut self) {
        if self.state.is_active() {
            tracing::debug!(target: "session", "session stopped");
        }
        self.dispatch(SessionIntent::Stop);
    }

    /// Leave the completed screen for the menu. No-op outside `Completed`.
    pub fn reset(&mut self) {
        self.dispatch(SessionIntent::Reset);
    }

    /// Handle a scheduled timer firing. Stale generations are dropped.
    pub fn on_timer(&mut self, event: TimerEvent) -> Vec<TimerRequest> {
        match event {
            TimerEvent::CountdownTick { generation } => {
                if !self.timer_is_current(generation) {
                    return Vec::new();
                }
                self.dispatch(SessionIntent::CountdownTick { generation });
                self.observer
                    .seconds_remaining_changed(self.state.seconds_remaining);
                if self.state.lifecycle == LifecyclePhase::Completed {
                    tracing::debug!(target: "session", "session completed");
                    self.observer.session_completed();
                    Vec::new()
                } else {
                    vec![TimerRequest::Countdown { generation }]
                }
            }
            TimerEvent::PhaseElapsed { generation } => {
                if !self.timer_is_current(generation) {
                    return Vec::new();
                }
                self.dispatch(SessionIntent::PhaseElapsed { generation });
                self.observer.phase_changed(self.state.breath_phase);
                match self.state.technique.as_ref() {
                    Some(technique) => vec![TimerRequest::Phase {
                        generation,
                        after: sequencer::phase_duration(technique, self.state.breath_phase),
                    }],
                    None => Vec::new(),
                }
            }
        }
    }

    fn timer_is_current(&self, generation: u64) -> bool {
        self.state.is_advancing() && generation == self.state.timer_generation
    }

    /// Timers for a session that just entered (or re-entered) the
    /// advancing state: the next countdown tick plus the current phase.
    fn advancing_timers(&self) -> Vec<TimerRequest> {
        let Some(technique) = self.state.technique.as_ref() else {
            return Vec::new();
        };
        let generation = self.state.timer_generation;
        vec![
            TimerRequest::Countdown { generation },
            TimerRequest::Phase {
                generation,
                after: sequencer::phase_duration(technique, self.state.breath_phase),
            },
        ]
    }

    fn dispatch(&mut self, intent: SessionIntent) {
        self.state = SessionReducer::reduce(std::mem::take(&mut self.state), intent);
    }
}
