//! Lifecycle hooks.
//!
//! Hooks are host callables registered under an explicit [`Hook`] key at
//! construction time. The dispatcher never builds hook names at runtime;
//! it asks the [`resolver`] which registered hooks apply to a phase.
//!
//! Hook precedence for the enter and after phases: a fully qualified hook
//! (`EnterState`, `AfterEvent`) is preferred over its short form (`OnState`,
//! `OnEvent`). The generic hooks run in addition to the specific ones,
//! never instead of them.

mod context;
pub mod resolver;

pub use context::TransitionContext;
pub use resolver::{resolve, Phase};

use crate::core::{Event, State};
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

/// Registration key of a hook.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Hook<S, E> {
    /// Before a specific event.
    BeforeEvent(E),
    BeforeAnyEvent,
    /// Leaving a specific state.
    LeaveState(S),
    LeaveAnyState,
    /// Entering a specific state.
    EnterState(S),
    /// Short form of `EnterState`, used only when `EnterState` is absent.
    OnState(S),
    EnterAnyState,
    /// Short form of `EnterAnyState`.
    OnAnyState,
    /// After the state changed, once per committed transition.
    ChangeState,
    /// After a specific event.
    AfterEvent(E),
    /// Short form of `AfterEvent`, used only when `AfterEvent` is absent.
    OnEvent(E),
    AfterAnyEvent,
    /// Short form of `AfterAnyEvent`.
    OnAnyEvent,
}

impl<S: State, E: Event> fmt::Display for Hook<S, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BeforeEvent(event) => write!(f, "before:{}", event.name()),
            Self::BeforeAnyEvent => f.write_str("before:*"),
            Self::LeaveState(state) => write!(f, "leave:{}", state.name()),
            Self::LeaveAnyState => f.write_str("leave:*"),
            Self::EnterState(state) => write!(f, "enter:{}", state.name()),
            Self::OnState(state) => write!(f, "on-state:{}", state.name()),
            Self::EnterAnyState => f.write_str("enter:*"),
            Self::OnAnyState => f.write_str("on-state:*"),
            Self::ChangeState => f.write_str("change"),
            Self::AfterEvent(event) => write!(f, "after:{}", event.name()),
            Self::OnEvent(event) => write!(f, "on-event:{}", event.name()),
            Self::AfterAnyEvent => f.write_str("after:*"),
            Self::OnAnyEvent => f.write_str("on-event:*"),
        }
    }
}

/// What a hook asks the dispatcher to do next.
///
/// Only the before and leave phases act on `Cancel`; only the leave phase
/// acts on `Defer`. Other phases ignore everything but faults.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HookOutcome {
    #[default]
    Proceed,
    /// Veto the transition.
    Cancel,
    /// Suspend the transition until the host commits or cancels it.
    Defer,
}

/// A hook either steers the protocol or faults.
pub type HookResult = anyhow::Result<HookOutcome>;

/// Type alias for registered hook callables.
pub type HookFn<S, E, A> =
    Arc<dyn Fn(&TransitionContext<S, E, A>) -> HookResult + Send + Sync>;

/// Hooks keyed by phase and event or state.
pub struct HookTable<S, E, A> {
    hooks: HashMap<Hook<S, E>, HookFn<S, E, A>>,
}

impl<S: Eq + Hash, E: Eq + Hash, A> HookTable<S, E, A> {
    pub fn new() -> Self {
        Self {
            hooks: HashMap::new(),
        }
    }

    /// Register `hook` under `key`, replacing any previous registration.
    pub fn insert(&mut self, key: Hook<S, E>, hook: HookFn<S, E, A>) {
        self.hooks.insert(key, hook);
    }

    pub fn get(&self, key: &Hook<S, E>) -> Option<&HookFn<S, E, A>> {
        self.hooks.get(key)
    }

    pub fn contains(&self, key: &Hook<S, E>) -> bool {
        self.hooks.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }
}

impl<S: Eq + Hash, E: Eq + Hash, A> Default for HookTable<S, E, A> {
    fn default() -> Self {
        Self::new()
    }
}
