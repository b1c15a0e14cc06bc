//! Error types for session commands.

use thiserror::Error;

use crate::catalog::CatalogError;
use crate::session::state::LifecyclePhase;

/// Errors a session command can return.
///
/// All of these are synchronous and local: a failed command leaves the
/// session state untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The requested technique id is not in the catalog.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// The technique fails the positive-duration invariant, so the phase
    /// sequencer refuses to start.
    #[error("technique '{id}' cannot drive a session: inhale and exhale durations must be positive")]
    InvalidTechnique { id: String },

    /// The command is not applicable in the current lifecycle phase.
    /// Only `start` reports this; pause/resume/stop/reset are no-ops when
    /// they do not apply.
    #[error("'{command}' is not allowed on the {phase} screen")]
    InvalidState {
        command: &'static str,
        phase: LifecyclePhase,
    },
}
