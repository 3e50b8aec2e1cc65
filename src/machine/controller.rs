//! Handle for a suspended transition.

use crate::core::{Event, State};
use crate::hooks::TransitionContext;
use crate::machine::{FsmError, Machine, Outcome};
use std::fmt;
use uuid::Uuid;

/// A transition suspended by a leave hook.
///
/// The machine keeps the captured context; the controller is the ticket
/// that lets the host finish it. `commit` and `cancel` consume the
/// controller, so each handle resolves the transition at most once. A
/// handle whose ticket no longer matches the machine's outstanding
/// transition (already resolved through another handle, or issued by a
/// different machine) is refused with [`FsmError::StaleController`] and
/// changes nothing.
#[derive(Clone, Debug, PartialEq, Eq)]
#[must_use = "a suspended transition stays outstanding until committed or cancelled"]
pub struct TransitionController {
    ticket: Uuid,
    event: String,
    from: String,
    to: String,
}

impl TransitionController {
    pub(crate) fn new<S: State, E: Event, A>(ticket: Uuid, ctx: &TransitionContext<S, E, A>) -> Self {
        Self {
            ticket,
            event: ctx.event.name().to_string(),
            from: ctx.from.name().to_string(),
            to: ctx.to.name().to_string(),
        }
    }

    pub fn ticket(&self) -> Uuid {
        self.ticket
    }

    pub fn event(&self) -> &str {
        &self.event
    }

    pub fn from(&self) -> &str {
        &self.from
    }

    pub fn to(&self) -> &str {
        &self.to
    }

    /// Finish the transition: set the state, then run the enter, change and
    /// after hooks.
    pub fn commit<S: State, E: Event, A>(
        self,
        machine: &mut Machine<S, E, A>,
    ) -> Result<Outcome, FsmError> {
        machine.resume(self.ticket)
    }

    /// Abandon the transition: run only the after hooks and leave the state
    /// untouched.
    pub fn cancel<S: State, E: Event, A>(
        self,
        machine: &mut Machine<S, E, A>,
    ) -> Result<Outcome, FsmError> {
        machine.abandon(self.ticket)
    }
}

impl fmt::Display for TransitionController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} -> {})", self.event, self.from, self.to)
    }
}
