//! Breath phase sequencing.
//!
//! Pure functions describing the cycle
//! `Inhale → Hold → Exhale → PostExhaleWait → Inhale`, with zero-duration
//! hold phases skipped. The sequencer knows nothing about the session
//! countdown; the controller schedules one phase timer at a time from the
//! durations reported here.

use std::time::Duration;

use crate::catalog::BreathingTechnique;
use crate::session::error::SessionError;
use crate::session::state::BreathPhase;

/// Every cycle starts by breathing in.
pub fn first_phase() -> BreathPhase {
    BreathPhase::Inhale
}

/// Next phase after `current`, skipping holds the technique does not use.
pub fn next_phase(technique: &BreathingTechnique, current: BreathPhase) -> BreathPhase {
    match current {
        BreathPhase::Inhale => {
            if technique.hold_seconds > 0 {
                BreathPhase::Hold
            } else {
                BreathPhase::Exhale
            }
        }
        BreathPhase::Hold => BreathPhase::Exhale,
        BreathPhase::Exhale => {
            if technique.hold_after_exhale_seconds > 0 {
                BreathPhase::PostExhaleWait
            } else {
                BreathPhase::Inhale
            }
        }
        BreathPhase::PostExhaleWait => BreathPhase::Inhale,
    }
}

/// Configured duration of `phase` under `technique`.
pub fn phase_duration(technique: &BreathingTechnique, phase: BreathPhase) -> Duration {
    let seconds = match phase {
        BreathPhase::Inhale => technique.inhale_seconds,
        BreathPhase::Hold => technique.hold_seconds,
        BreathPhase::Exhale => technique.exhale_seconds,
        BreathPhase::PostExhaleWait => technique.hold_after_exhale_seconds,
    };
    Duration::from_secs(u64::from(seconds))
}

/// Refuse to sequence a technique that would schedule a zero-duration
/// inhale or exhale timer.
pub fn validate(technique: &BreathingTechnique) -> Result<(), SessionError> {
    if technique.has_positive_durations() {
        Ok(())
    } else {
        Err(SessionError::InvalidTechnique {
            id: technique.id.clone(),
        })
    }
}
