//! Pure reducer transitions, without controller or timers.

mod common;

use common::technique;
use respiro::session::{
    BreathPhase, LifecyclePhase, SessionIntent, SessionReducer, SessionState,
};
use respiro::ui::mvi::Reducer;

fn instructions_state() -> SessionState {
    SessionReducer::reduce(SessionState::default(), SessionIntent::ConfirmSelection)
}

fn active_state() -> SessionState {
    SessionReducer::reduce(
        instructions_state(),
        SessionIntent::Start {
            technique: technique(4, 0, 6, 0),
        },
    )
}

#[test]
fn select_technique_only_works_in_menu() {
    let state = SessionReducer::reduce(
        SessionState::default(),
        SessionIntent::SelectTechnique {
            id: "pursed-lips".to_string(),
        },
    );
    assert_eq!(state.selected_technique_id, "pursed-lips");

    let state = SessionReducer::reduce(
        instructions_state(),
        SessionIntent::SelectTechnique {
            id: "pursed-lips".to_string(),
        },
    );
    assert_eq!(state.selected_technique_id, "4-6");
}

#[test]
fn start_enters_active_with_fresh_countdown_and_inhale() {
    let state = active_state();
    assert_eq!(state.lifecycle, LifecyclePhase::Active);
    assert!(state.is_running);
    assert_eq!(state.seconds_remaining, state.session_duration_seconds);
    assert_eq!(state.breath_phase, BreathPhase::Inhale);
    assert!(state.technique.is_some());
}

#[test]
fn start_bumps_the_timer_generation() {
    let before = instructions_state();
    let after = SessionReducer::reduce(
        before.clone(),
        SessionIntent::Start {
            technique: technique(4, 0, 6, 0),
        },
    );
    assert_eq!(after.timer_generation, before.timer_generation + 1);
}

#[test]
fn stale_countdown_tick_is_ignored() {
    let state = active_state();
    let stale = state.timer_generation.wrapping_sub(1);
    let after = SessionReducer::reduce(
        state.clone(),
        SessionIntent::CountdownTick { generation: stale },
    );
    assert_eq!(after, state);
}

#[test]
fn current_countdown_tick_decrements() {
    let state = active_state();
    let generation = state.timer_generation;
    let after = SessionReducer::reduce(state, SessionIntent::CountdownTick { generation });
    assert_eq!(
        after.seconds_remaining,
        after.session_duration_seconds - 1
    );
}

#[test]
fn final_tick_completes_and_retires_the_generation() {
    let mut state = active_state();
    state.seconds_remaining = 1;
    let generation = state.timer_generation;
    let after = SessionReducer::reduce(state, SessionIntent::CountdownTick { generation });
    assert_eq!(after.lifecycle, LifecyclePhase::Completed);
    assert_eq!(after.seconds_remaining, 0);
    assert!(!after.is_running);
    assert_eq!(after.timer_generation, generation + 1);
}

#[test]
fn ticks_do_not_advance_a_paused_session() {
    let paused = SessionReducer::reduce(active_state(), SessionIntent::Pause);
    assert!(!paused.is_running);
    let generation = paused.timer_generation;
    let after = SessionReducer::reduce(
        paused.clone(),
        SessionIntent::CountdownTick { generation },
    );
    assert_eq!(after, paused);
}

#[test]
fn phase_elapsed_walks_the_cycle() {
    let state = active_state();
    let generation = state.timer_generation;
    let after = SessionReducer::reduce(state, SessionIntent::PhaseElapsed { generation });
    // A hold-less technique goes straight to exhale.
    assert_eq!(after.breath_phase, BreathPhase::Exhale);
}

#[test]
fn stale_phase_elapsed_is_ignored() {
    let state = active_state();
    let stale = state.timer_generation + 7;
    let after = SessionReducer::reduce(
        state.clone(),
        SessionIntent::PhaseElapsed { generation: stale },
    );
    assert_eq!(after, state);
}

#[test]
fn resume_restarts_the_breath_cycle() {
    let mut paused = SessionReducer::reduce(active_state(), SessionIntent::Pause);
    paused.breath_phase = BreathPhase::Exhale;
    let resumed = SessionReducer::reduce(paused, SessionIntent::Resume);
    assert!(resumed.is_running);
    assert_eq!(resumed.breath_phase, BreathPhase::Inhale);
}

#[test]
fn stop_restores_the_menu_with_a_full_countdown() {
    let mut state = active_state();
    state.seconds_remaining = 42;
    let stopped = SessionReducer::reduce(state, SessionIntent::Stop);
    assert_eq!(stopped.lifecycle, LifecyclePhase::Menu);
    assert_eq!(
        stopped.seconds_remaining,
        stopped.session_duration_seconds
    );
    assert!(stopped.technique.is_none());
}
