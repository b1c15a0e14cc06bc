//! The single transition function for the session state machine.

use crate::session::intent::SessionIntent;
use crate::session::sequencer;
use crate::session::state::{LifecyclePhase, SessionState};
use crate::ui::mvi::Reducer;

pub struct SessionReducer;

impl Reducer for SessionReducer {
    type State = SessionState;
    type Intent = SessionIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SessionIntent::SelectTechnique { id } => match state.lifecycle {
                LifecyclePhase::Menu => SessionState {
                    selected_technique_id: id,
                    ..state
                },
                _ => state,
            },

            SessionIntent::ConfirmSelection => match state.lifecycle {
                LifecyclePhase::Menu => SessionState {
                    lifecycle: LifecyclePhase::Instructions,
                    ..state
                },
                _ => state,
            },

            SessionIntent::Back => match state.lifecycle {
                LifecyclePhase::Instructions => SessionState {
                    lifecycle: LifecyclePhase::Menu,
                    ..state
                },
                _ => state,
            },

            SessionIntent::Start { technique } => match state.lifecycle {
                LifecyclePhase::Instructions => SessionState {
                    lifecycle: LifecyclePhase::Active,
                    seconds_remaining: state.session_duration_seconds,
                    is_running: true,
                    breath_phase: sequencer::first_phase(),
                    technique: Some(technique),
                    timer_generation: state.timer_generation + 1,
                    ..state
                },
                _ => state,
            },

            SessionIntent::Pause => {
                if state.is_advancing() {
                    // Bumping the generation retires the pending countdown
                    // and phase timers; resume schedules fresh ones.
                    SessionState {
                        is_running: false,
                        timer_generation: state.timer_generation + 1,
                        ..state
                    }
                } else {
                    state
                }
            }

            SessionIntent::Resume => {
                if state.is_active() && !state.is_running {
                    SessionState {
                        is_running: true,
                        breath_phase: sequencer::first_phase(),
                        timer_generation: state.timer_generation + 1,
                        ..state
                    }
                } else {
                    state
                }
            }

            SessionIntent::Stop => match state.lifecycle {
                LifecyclePhase::Active => SessionState {
                    lifecycle: LifecyclePhase::Menu,
                    seconds_remaining: state.session_duration_seconds,
                    is_running: false,
                    technique: None,
                    timer_generation: state.timer_generation + 1,
                    ..state
                },
                _ => state,
            },

            SessionIntent::Reset => match state.lifecycle {
                LifecyclePhase::Completed => SessionState {
                    lifecycle: LifecyclePhase::Menu,
                    seconds_remaining: state.session_duration_seconds,
                    is_running: false,
                    technique: None,
                    timer_generation: state.timer_generation + 1,
                    ..state
                },
                _ => state,
            },

            SessionIntent::CountdownTick { generation } => {
                if !state.is_advancing() || generation != state.timer_generation {
                    // Stale timer: the session moved on since this tick
                    // was scheduled.
                    return state;
                }
                let seconds_remaining = state.seconds_remaining.saturating_sub(1);
                if seconds_remaining == 0 {
                    SessionState {
                        lifecycle: LifecyclePhase::Completed,
                        seconds_remaining,
                        is_running: false,
                        technique: None,
                        timer_generation: state.timer_generation + 1,
                        ..state
                    }
                } else {
                    SessionState {
                        seconds_remaining,
                        ..state
                    }
                }
            }

            SessionIntent::PhaseElapsed { generation } => {
                if !state.is_advancing() || generation != state.timer_generation {
                    return state;
                }
                let Some(technique) = state.technique.as_ref() else {
                    return state;
                };
                let breath_phase = sequencer::next_phase(technique, state.breath_phase);
                SessionState {
                    breath_phase,
                    ..state
                }
            }
        }
    }
}
