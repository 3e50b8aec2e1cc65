//! Declarative machine configuration.
//!
//! The table part of a machine (initial state, terminal states and events)
//! can be loaded from JSON. Hooks and the fault handler are code and are
//! attached to the builder afterwards.
//!
//! ```rust
//! use modeswitch::builder::MachineConfig;
//!
//! let config: MachineConfig<String, String> = MachineConfig::from_json(r#"{
//!     "initial": "menu",
//!     "final": ["won", "lost"],
//!     "events": [
//!         { "name": "play", "from": "menu", "to": "playing" },
//!         { "name": "win", "from": "playing", "to": "won" },
//!         { "name": "quit", "to": "lost" }
//!     ]
//! }"#).unwrap();
//!
//! let mut machine = config.into_builder::<()>().build().unwrap();
//! assert!(machine.is(&"menu".to_string()));
//!
//! assert!(machine.fire("quit".to_string()).unwrap().is_succeeded());
//! assert!(machine.is_finished());
//! ```

use crate::builder::descriptor::{EventDescriptor, Initial, OneOrMany};
use crate::builder::error::BuildError;
use crate::builder::machine::MachineBuilder;
use crate::core::{Event, State};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

/// Table-level configuration of a machine.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(bound(deserialize = "S: State + Deserialize<'de>, E: Deserialize<'de>"))]
pub struct MachineConfig<S, E> {
    /// A bare state or `{ "state", "event", "defer" }`.
    #[serde(default)]
    pub initial: Option<Initial<S, E>>,

    /// One state or a list; also accepted as `final`.
    #[serde(default, alias = "final", deserialize_with = "one_or_many")]
    pub terminal: Vec<S>,

    #[serde(default)]
    pub events: Vec<EventDescriptor<S, E>>,
}

fn one_or_many<'de, D, S>(deserializer: D) -> Result<Vec<S>, D::Error>
where
    D: Deserializer<'de>,
    S: Deserialize<'de>,
{
    OneOrMany::deserialize(deserializer).map(OneOrMany::into_vec)
}

impl<S: State, E> MachineConfig<S, E> {
    pub fn from_json(json: &str) -> Result<Self, BuildError>
    where
        S: DeserializeOwned,
        E: DeserializeOwned,
    {
        Ok(serde_json::from_str(json)?)
    }
}

impl<S: State, E: Event> MachineConfig<S, E> {
    /// Start a builder from this configuration.
    pub fn into_builder<A: 'static>(self) -> MachineBuilder<S, E, A> {
        let builder = MachineBuilder::with_args()
            .terminals(self.terminal)
            .events(self.events);
        match self.initial {
            Some(initial) => builder.initial_with(initial),
            None => builder,
        }
    }
}
