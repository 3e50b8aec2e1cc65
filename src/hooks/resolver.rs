//! Pure lookup of the hooks applicable to a phase.
//!
//! Each phase has a specific slot and a generic slot. A slot lists its keys
//! by precedence and contributes the first one registered, so a phase
//! yields zero, one or two hooks, specific first.

use super::{Hook, HookFn, HookTable};
use crate::core::{Event, State, StateId};

/// Dispatch phase a lookup is made for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Before,
    Leave,
    Enter,
    Change,
    After,
}

fn slots<S: State, E: Event>(
    phase: Phase,
    event: &E,
    from: &StateId<S>,
    to: &StateId<S>,
) -> [Vec<Hook<S, E>>; 2] {
    match phase {
        Phase::Before => [
            vec![Hook::BeforeEvent(event.clone())],
            vec![Hook::BeforeAnyEvent],
        ],
        Phase::Leave => [
            from.as_state()
                .map(|state| vec![Hook::LeaveState(state.clone())])
                .unwrap_or_default(),
            vec![Hook::LeaveAnyState],
        ],
        Phase::Enter => [
            to.as_state()
                .map(|state| vec![Hook::EnterState(state.clone()), Hook::OnState(state.clone())])
                .unwrap_or_default(),
            vec![Hook::EnterAnyState, Hook::OnAnyState],
        ],
        Phase::Change => [Vec::new(), vec![Hook::ChangeState]],
        Phase::After => [
            vec![Hook::AfterEvent(event.clone()), Hook::OnEvent(event.clone())],
            vec![Hook::AfterAnyEvent, Hook::OnAnyEvent],
        ],
    }
}

/// Hooks to run for `phase`, in invocation order, with the key each was
/// registered under.
pub fn resolve<'t, S: State, E: Event, A>(
    phase: Phase,
    event: &E,
    from: &StateId<S>,
    to: &StateId<S>,
    hooks: &'t HookTable<S, E, A>,
) -> Vec<(Hook<S, E>, &'t HookFn<S, E, A>)> {
    slots(phase, event, from, to)
        .into_iter()
        .filter_map(|slot| {
            slot.into_iter()
                .find_map(|key| hooks.get(&key).map(|hook| (key, hook)))
        })
        .collect()
}
