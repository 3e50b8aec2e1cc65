//! Read-only view of a machine. Every query is valid at any time,
//! including while a transition is suspended.

use super::{Machine, TransitionController};
use crate::builder::TransitionTable;
use crate::core::{Event, State, StateHistory, StateId};
use crate::hooks::TransitionContext;

impl<S: State, E: Event, A> Machine<S, E, A> {
    /// Current position; `StateId::None` until the startup transition ran.
    pub fn current(&self) -> &StateId<S> {
        &self.current
    }

    pub fn is(&self, state: &S) -> bool {
        self.current.is(state)
    }

    pub fn is_one_of(&self, states: &[S]) -> bool {
        states.iter().any(|state| self.current.is(state))
    }

    /// True when no transition is outstanding and the table has an exact or
    /// wildcard entry for `event` from the current state.
    pub fn can(&self, event: &E) -> bool {
        self.pending.is_none() && self.table.target(event, &self.current).is_some()
    }

    pub fn cannot(&self, event: &E) -> bool {
        !self.can(event)
    }

    /// True when the current state is one of the terminal states.
    pub fn is_finished(&self) -> bool {
        self.current
            .as_state()
            .is_some_and(|state| self.terminal.contains(state))
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Context captured by the outstanding transition, if any.
    pub fn pending(&self) -> Option<&TransitionContext<S, E, A>> {
        self.pending.as_ref().map(|pending| &pending.context)
    }

    /// A fresh handle for the outstanding transition.
    ///
    /// Useful when the first controller was not kept, such as a deferred
    /// startup fired while the machine was being built. Only the first
    /// handle used resolves the transition.
    pub fn controller(&self) -> Option<TransitionController> {
        self.pending
            .as_ref()
            .map(|pending| TransitionController::new(pending.ticket, &pending.context))
    }

    pub fn startup_event(&self) -> Option<&E> {
        self.startup.as_ref()
    }

    pub fn history(&self) -> &StateHistory<S, E> {
        &self.history
    }

    pub fn table(&self) -> &TransitionTable<S, E> {
        &self.table
    }

    /// Distinct event names the machine was configured with.
    pub fn events(&self) -> impl Iterator<Item = &E> {
        self.table.events()
    }
}
