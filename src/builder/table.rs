//! Compiled transition table.
//!
//! Descriptors are merged per event name into a mapping from source state
//! to destination. Resolution prefers an exact source entry and falls back
//! to the wildcard entry; the precedence is decided at lookup time, so
//! declaration order only matters between two entries for the same
//! (event, source) pair, where the later one wins.

use crate::builder::descriptor::{EventDescriptor, Sources};
use crate::core::{Event, State, StateId};
use std::collections::{HashMap, HashSet};

/// Destination recorded for one (event, source) entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Target<S> {
    To(S),
    /// Declared without a destination: the event is a no-op.
    Stay,
}

#[derive(Clone, Debug)]
struct Routes<S> {
    exact: HashMap<StateId<S>, Target<S>>,
    wildcard: Option<Target<S>>,
}

impl<S> Default for Routes<S> {
    fn default() -> Self {
        Self {
            exact: HashMap::new(),
            wildcard: None,
        }
    }
}

/// Immutable per-event mapping from source state to destination.
#[derive(Clone, Debug)]
pub struct TransitionTable<S, E> {
    routes: HashMap<E, Routes<S>>,
    order: Vec<E>,
}

impl<S: State, E: Event> TransitionTable<S, E> {
    /// Compile descriptors, with the synthesized startup transition
    /// (`none -> initial` under the startup event) declared first.
    pub fn compile<I>(startup: Option<(E, S)>, descriptors: I) -> Self
    where
        I: IntoIterator<Item = EventDescriptor<S, E>>,
    {
        let mut table = Self {
            routes: HashMap::new(),
            order: Vec::new(),
        };

        if let Some((event, initial)) = startup {
            table.add(EventDescriptor::new(event).from_none().to(initial));
        }
        for descriptor in descriptors {
            table.add(descriptor);
        }
        table
    }

    fn add(&mut self, descriptor: EventDescriptor<S, E>) {
        let EventDescriptor { name, from, to } = descriptor;
        let target = to.map_or(Target::Stay, Target::To);

        if !self.routes.contains_key(&name) {
            self.order.push(name.clone());
        }
        let routes = self.routes.entry(name).or_default();

        match from {
            Sources::Any => routes.wildcard = Some(target),
            Sources::States(states) => {
                for state in states {
                    routes.exact.insert(state, target.clone());
                }
            }
        }
    }

    /// Entry applying to `event` fired from `from`: exact match first,
    /// wildcard second.
    pub fn target(&self, event: &E, from: &StateId<S>) -> Option<&Target<S>> {
        let routes = self.routes.get(event)?;
        routes.exact.get(from).or(routes.wildcard.as_ref())
    }

    /// Destination of `event` fired from `from`, or `None` if the event is
    /// not available there. A no-op entry resolves to `from` itself.
    pub fn resolve(&self, event: &E, from: &StateId<S>) -> Option<StateId<S>> {
        self.target(event, from).map(|target| match target {
            Target::To(state) => StateId::State(state.clone()),
            Target::Stay => from.clone(),
        })
    }

    pub fn contains(&self, event: &E) -> bool {
        self.routes.contains_key(event)
    }

    /// Distinct event names in declaration order.
    pub fn events(&self) -> impl Iterator<Item = &E> {
        self.order.iter()
    }

    /// Every state named as a source or destination.
    pub fn states(&self) -> HashSet<&S> {
        let mut states = HashSet::new();
        for routes in self.routes.values() {
            states.extend(routes.exact.keys().filter_map(StateId::as_state));
            let targets = routes.exact.values().chain(routes.wildcard.iter());
            for target in targets {
                if let Target::To(state) = target {
                    states.insert(state);
                }
            }
        }
        states
    }
}
