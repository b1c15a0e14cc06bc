//! The UI event loop.

use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

use anyhow::Context;

use crate::catalog::TechniqueCatalog;
use crate::session::{BreathPhase, SessionController, SessionObserver};
use crate::ui::app::{App, UiEffects};
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crate::ui::timers::TimerDriver;

/// Observer that mirrors session notifications into the log.
struct TraceObserver;

impl SessionObserver for TraceObserver {
    fn phase_changed(&mut self, phase: BreathPhase) {
        tracing::debug!(target: "session", phase = ?phase, "breath phase changed");
    }

    fn seconds_remaining_changed(&mut self, seconds: u32) {
        tracing::trace!(target: "session", seconds, "countdown tick");
    }

    fn session_completed(&mut self) {
        tracing::info!(target: "session", "session completed");
    }
}

pub fn run(
    catalog: TechniqueCatalog,
    session_duration_seconds: u32,
    initial_technique: Option<&str>,
) -> anyhow::Result<()> {
    let mut controller =
        SessionController::new(catalog, session_duration_seconds, Box::new(TraceObserver));
    if let Some(id) = initial_technique {
        // Fail before touching the terminal so the error stays readable.
        controller
            .select_technique(id)
            .with_context(|| format!("selecting technique '{id}'"))?;
    }

    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new();
    let timers = TimerDriver::new(events.sender())?;
    let mut app = App::new(controller);

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(Duration::from_millis(250)) {
            Ok(AppEvent::Key(key)) => apply(&timers, app.on_key(key)),
            Ok(AppEvent::Timer(event)) => apply(&timers, app.on_timer(event)),
            Ok(AppEvent::Tick) | Ok(AppEvent::Resize(_, _)) => {}
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    timers.cancel_all();
    drop(guard);
    Ok(())
}

fn apply(timers: &TimerDriver, effects: UiEffects) {
    if effects.cancel_pending {
        timers.cancel_all();
    }
    timers.schedule(effects.timers);
}
