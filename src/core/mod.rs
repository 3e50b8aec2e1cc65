//! Core state machine types.
//!
//! This module contains the vocabulary shared by every other module:
//! - State and event definitions via the `State` and `Event` traits
//! - `StateId`, which adds the pre-initial `none` sentinel
//! - History of committed transitions

mod event;
mod history;
mod state;

pub use event::{Event, DEFAULT_STARTUP};
pub use history::{StateHistory, StateTransition};
pub use state::{State, StateId, NONE_NAME};
