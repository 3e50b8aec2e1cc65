//! The machine instance and its dispatch protocol.
//!
//! A [`Machine`] is owned by the host and built once from an immutable
//! [`TransitionTable`]. Events are fired with [`Machine::fire`]; each call
//! runs synchronously through the guard checks, hook phases and state
//! mutation, except when a leave hook defers. The machine then parks the
//! transition until the host resolves the returned [`TransitionController`].
//!
//! # Key Concepts
//!
//! - **Outcome**: the non-fault result of a dispatch
//! - **FsmError**: faults, all routed through one overridable handler
//! - **TransitionController**: commit/cancel handle for a suspended transition

mod controller;
mod dispatch;
mod error;
pub mod error_handler;
mod outcome;
mod query;

pub use controller::TransitionController;
pub use error::{ErrorKind, FsmError};
pub use error_handler::ErrorHandler;
pub use outcome::Outcome;

use crate::builder::TransitionTable;
use crate::core::{Event, State, StateHistory, StateId};
use crate::hooks::{HookTable, TransitionContext};
use std::collections::HashSet;
use std::fmt;
use uuid::Uuid;

/// The transition a leave hook suspended, with the ticket its controller
/// carries.
pub(crate) struct Pending<S, E, A> {
    pub(crate) ticket: Uuid,
    pub(crate) context: TransitionContext<S, E, A>,
}

/// A running state machine.
///
/// `S` is the state type, `E` the event type and `A` the argument type
/// passed along with each event to the hooks.
pub struct Machine<S, E, A = ()> {
    table: TransitionTable<S, E>,
    hooks: HookTable<S, E, A>,
    terminal: HashSet<S>,
    on_error: ErrorHandler<S, E, A>,
    startup: Option<E>,
    current: StateId<S>,
    pending: Option<Pending<S, E, A>>,
    history: StateHistory<S, E>,
}

impl<S: State, E: Event, A> Machine<S, E, A> {
    pub(crate) fn from_parts(
        table: TransitionTable<S, E>,
        hooks: HookTable<S, E, A>,
        terminal: HashSet<S>,
        on_error: ErrorHandler<S, E, A>,
        startup: Option<E>,
        history: StateHistory<S, E>,
    ) -> Self {
        Self {
            table,
            hooks,
            terminal,
            on_error,
            startup,
            current: StateId::None,
            pending: None,
            history,
        }
    }
}

impl<S: State, E: Event, A> fmt::Debug for Machine<S, E, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Machine")
            .field("current", &self.current)
            .field(
                "pending",
                &self.pending.as_ref().map(|pending| pending.ticket),
            )
            .field("hooks", &self.hooks.len())
            .finish_non_exhaustive()
    }
}
