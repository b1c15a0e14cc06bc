//! State for the breathing-session lifecycle.

use crate::catalog::{BreathingTechnique, DEFAULT_TECHNIQUE_ID};
use crate::ui::mvi::UiState;

/// Total session length used when nothing else is configured.
pub const DEFAULT_SESSION_DURATION_SECONDS: u32 = 120;

/// Coarse state of the session flow, distinct from the breath phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LifecyclePhase {
    #[default]
    Menu,
    Instructions,
    Active,
    Completed,
}

impl std::fmt::Display for LifecyclePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            LifecyclePhase::Menu => "menu",
            LifecyclePhase::Instructions => "instructions",
            LifecyclePhase::Active => "active",
            LifecyclePhase::Completed => "completed",
        };
        f.write_str(name)
    }
}

/// Sub-state of breathing within one technique cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BreathPhase {
    #[default]
    Inhale,
    Hold,
    Exhale,
    PostExhaleWait,
}

impl BreathPhase {
    /// On-screen cue for the phase.
    pub fn cue(&self) -> &'static str {
        match self {
            BreathPhase::Inhale => "Breathe in",
            BreathPhase::Hold => "Hold",
            BreathPhase::Exhale => "Breathe out",
            BreathPhase::PostExhaleWait => "Rest",
        }
    }
}

/// One session instance: lifecycle, countdown and breath phase.
///
/// `breath_phase` and `technique` are only meaningful while
/// `lifecycle == Active`. `timer_generation` identifies the set of timer
/// callbacks that are still valid: any command that invalidates pending
/// timers bumps it, and a callback carrying a stale generation is ignored
/// by the reducer. This keeps at most one live tick scheduler per session
/// and makes stop/pause deterministic with respect to in-flight timers.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub lifecycle: LifecyclePhase,
    pub selected_technique_id: String,
    pub session_duration_seconds: u32,
    pub seconds_remaining: u32,
    pub is_running: bool,
    pub breath_phase: BreathPhase,
    /// Snapshot of the selected technique, taken when the session starts.
    pub technique: Option<BreathingTechnique>,
    pub timer_generation: u64,
}

impl SessionState {
    pub fn new(default_technique_id: &str, session_duration_seconds: u32) -> Self {
        Self {
            lifecycle: LifecyclePhase::Menu,
            selected_technique_id: default_technique_id.to_string(),
            session_duration_seconds,
            seconds_remaining: session_duration_seconds,
            is_running: false,
            breath_phase: BreathPhase::Inhale,
            technique: None,
            timer_generation: 0,
        }
    }

    pub fn is_active(&self) -> bool {
        self.lifecycle == LifecyclePhase::Active
    }

    /// Active and advancing, as opposed to active but paused.
    pub fn is_advancing(&self) -> bool {
        self.is_active() && self.is_running
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(DEFAULT_TECHNIQUE_ID, DEFAULT_SESSION_DURATION_SECONDS)
    }
}

impl UiState for SessionState {}
