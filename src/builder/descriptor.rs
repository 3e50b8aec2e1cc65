//! Declarative event descriptors and the initial-state declaration.

use crate::core::{State, StateId, NONE_NAME};
use serde::Deserialize;

/// Source name that marks a config descriptor as a wildcard.
pub const WILDCARD: &str = "*";

/// Source states an event descriptor applies to.
///
/// In a config file `from` is absent or `"*"` for the wildcard, otherwise
/// one state or a list. The name `"none"` refers to the pre-initial
/// sentinel.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(
    try_from = "OneOrMany<S>",
    bound(deserialize = "S: State + Deserialize<'de>")
)]
pub enum Sources<S> {
    /// Wildcard: any state without a more specific entry for the event.
    Any,
    States(Vec<StateId<S>>),
}

impl<S> Default for Sources<S> {
    fn default() -> Self {
        Self::Any
    }
}

/// One state or a list of states, as written in a config file.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum OneOrMany<S> {
    One(S),
    Many(Vec<S>),
}

impl<S> OneOrMany<S> {
    pub(crate) fn into_vec(self) -> Vec<S> {
        match self {
            Self::One(state) => vec![state],
            Self::Many(states) => states,
        }
    }
}

impl<S: State> TryFrom<OneOrMany<S>> for Sources<S> {
    type Error = String;

    fn try_from(value: OneOrMany<S>) -> Result<Self, Self::Error> {
        let states = value.into_vec();
        if states.iter().any(|state| state.name() == WILDCARD) {
            return match states.len() {
                1 => Ok(Self::Any),
                _ => Err(format!(
                    "wildcard source '{WILDCARD}' cannot be combined with other states"
                )),
            };
        }

        let ids = states
            .into_iter()
            .map(|state| {
                if state.name() == NONE_NAME {
                    StateId::None
                } else {
                    StateId::State(state)
                }
            })
            .collect();
        Ok(Self::States(ids))
    }
}

/// A named event with its source states and optional destination.
///
/// Several descriptors may share a name. Without `to` the event is a no-op
/// on the matching states; without `from` it matches any state that has no
/// explicit entry for the event.
///
/// # Example
///
/// ```rust
/// use modeswitch::builder::{EventDescriptor, Sources};
/// use modeswitch::core::StateId;
///
/// let load = EventDescriptor::new("load")
///     .from("starting")
///     .from("playing")
///     .to("loading");
///
/// assert_eq!(
///     load.from,
///     Sources::States(vec![StateId::State("starting"), StateId::State("playing")])
/// );
///
/// let quit: EventDescriptor<&str, &str> = EventDescriptor::new("quit").to("lost");
/// assert_eq!(quit.from, Sources::Any);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(bound(deserialize = "S: State + Deserialize<'de>, E: Deserialize<'de>"))]
pub struct EventDescriptor<S, E> {
    pub name: E,
    #[serde(default)]
    pub from: Sources<S>,
    #[serde(default)]
    pub to: Option<S>,
}

impl<S, E> EventDescriptor<S, E> {
    /// Create a wildcard no-op descriptor; narrow it with `from` and `to`.
    pub fn new(name: E) -> Self {
        Self {
            name,
            from: Sources::Any,
            to: None,
        }
    }

    /// Add a source state.
    pub fn from(self, state: S) -> Self {
        self.from_id(StateId::State(state))
    }

    /// Add several source states.
    pub fn from_states<I>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = S>,
    {
        for state in states {
            self = self.from(state);
        }
        self
    }

    /// Add the pre-initial sentinel as a source. `from` always names a
    /// declared state, even one called `"none"`.
    pub fn from_none(self) -> Self {
        self.from_id(StateId::None)
    }

    fn from_id(mut self, id: StateId<S>) -> Self {
        match self.from {
            Sources::Any => self.from = Sources::States(vec![id]),
            Sources::States(ref mut states) => states.push(id),
        }
        self
    }

    /// Set the destination state.
    pub fn to(mut self, state: S) -> Self {
        self.to = Some(state);
        self
    }
}

/// Initial-state declaration.
///
/// The builder synthesizes a `none -> state` transition under `event`
/// (or the event type's default startup event). Unless deferred, that
/// transition fires while the machine is being built.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(
    from = "InitialSpec<S, E>",
    bound(deserialize = "S: Deserialize<'de>, E: Deserialize<'de>")
)]
pub struct Initial<S, E> {
    pub state: S,
    pub event: Option<E>,
    pub defer: bool,
}

impl<S, E> Initial<S, E> {
    pub fn new(state: S) -> Self {
        Self {
            state,
            event: None,
            defer: false,
        }
    }

    /// Use `event` instead of the default startup event.
    pub fn event(mut self, event: E) -> Self {
        self.event = Some(event);
        self
    }

    /// Leave the machine in `none` until the host fires the startup event.
    pub fn deferred(mut self) -> Self {
        self.defer = true;
        self
    }
}

/// A bare state, or the full `{state, event, defer}` object.
#[derive(Deserialize)]
#[serde(
    untagged,
    bound(deserialize = "S: Deserialize<'de>, E: Deserialize<'de>")
)]
enum InitialSpec<S, E> {
    Full {
        state: S,
        #[serde(default)]
        event: Option<E>,
        #[serde(default)]
        defer: bool,
    },
    State(S),
}

impl<S, E> From<InitialSpec<S, E>> for Initial<S, E> {
    fn from(spec: InitialSpec<S, E>) -> Self {
        match spec {
            InitialSpec::Full {
                state,
                event,
                defer,
            } => Self {
                state,
                event,
                defer,
            },
            InitialSpec::State(state) => Self::new(state),
        }
    }
}
