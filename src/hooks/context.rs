//! Context handed to every hook.

use crate::core::{Event, State, StateId};

/// The event being dispatched, with its resolved endpoints and arguments.
///
/// The same value is captured by a suspended transition, so a later commit
/// or cancel replays the hooks with exactly what the leave phase saw.
#[derive(Clone, Debug, PartialEq)]
pub struct TransitionContext<S, E, A> {
    pub event: E,
    pub from: StateId<S>,
    pub to: StateId<S>,
    pub args: A,
}

impl<S: State, E: Event, A> TransitionContext<S, E, A> {
    /// True when the event resolved to the state it was fired from.
    pub fn is_no_op(&self) -> bool {
        self.from == self.to
    }

    pub fn event_name(&self) -> &str {
        self.event.name()
    }
}
