//! Intents for the session lifecycle reducer.

use crate::catalog::BreathingTechnique;
use crate::ui::mvi::Intent;

/// Intents dispatched to [`SessionReducer`](super::reducer::SessionReducer).
///
/// User commands are validated by the controller before they are turned
/// into intents (`SelectTechnique` carries an id that is known to resolve,
/// `Start` carries a technique that passed the duration check), so the
/// reducer itself stays pure and catalog-free.
#[derive(Debug, Clone)]
pub enum SessionIntent {
    /// Change the highlighted technique while still on the menu.
    SelectTechnique { id: String },

    /// Menu → Instructions.
    ConfirmSelection,

    /// Instructions → Menu.
    Back,

    /// Instructions → Active, with a validated technique snapshot.
    Start { technique: BreathingTechnique },

    /// Suspend the countdown and phase cycling.
    Pause,

    /// Resume both timers; the breath cycle restarts at inhale.
    Resume,

    /// Abort the session and return to the menu with a full countdown.
    Stop,

    /// Completed → Menu with a full countdown.
    Reset,

    /// One-second countdown timer fired.
    CountdownTick { generation: u64 },

    /// The current breath phase ran its full duration.
    PhaseElapsed { generation: u64 },
}

impl Intent for SessionIntent {}
