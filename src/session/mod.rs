//! The guided breathing-session subsystem.
//!
//! Split MVI-style: [`state`] holds the session state, [`intent`] the
//! actions, [`reducer`] the single pure transition function. The
//! [`controller`] wraps them with catalog validation, observer
//! notifications and timer requests, and [`sequencer`] provides the pure
//! breath-phase cycle.

pub mod controller;
pub mod error;
pub mod intent;
pub mod reducer;
pub mod sequencer;
pub mod state;

pub use controller::{
    NullObserver, SessionController, SessionObserver, TimerEvent, TimerRequest,
};
pub use error::SessionError;
pub use intent::SessionIntent;
pub use reducer::SessionReducer;
pub use state::{
    BreathPhase, LifecyclePhase, SessionState, DEFAULT_SESSION_DURATION_SECONDS,
};
