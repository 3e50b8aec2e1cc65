//! Core State trait and the pre-initial sentinel.
//!
//! States are host-defined closed types. The machine tracks its position as
//! a [`StateId`], which adds the `none` sentinel occupied before the startup
//! transition has run.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug, Display};
use std::hash::Hash;

/// Name displayed for the pre-initial sentinel.
pub const NONE_NAME: &str = "none";

/// Trait for state machine states.
///
/// # Required Traits
///
/// - `Clone`: states are captured into transition contexts and history
/// - `Eq` + `Hash`: states key the transition table and hook table
/// - `Debug`: states must be debuggable for diagnostics
///
/// # Example
///
/// ```rust
/// use modeswitch::core::State;
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug)]
/// enum Mode {
///     Menu,
///     Playing,
/// }
///
/// impl State for Mode {
///     fn name(&self) -> &str {
///         match self {
///             Self::Menu => "Menu",
///             Self::Playing => "Playing",
///         }
///     }
/// }
///
/// assert_eq!(Mode::Playing.name(), "Playing");
/// ```
pub trait State: Clone + Eq + Hash + Debug + Send + Sync + 'static {
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;
}

impl State for String {
    fn name(&self) -> &str {
        self
    }
}

impl State for &'static str {
    fn name(&self) -> &str {
        self
    }
}

/// Position of a machine: either the pre-initial sentinel or a declared state.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StateId<S> {
    /// The machine has not run its startup transition yet.
    None,
    State(S),
}

impl<S: State> StateId<S> {
    pub fn name(&self) -> &str {
        match self {
            Self::None => NONE_NAME,
            Self::State(state) => state.name(),
        }
    }

    pub fn as_state(&self) -> Option<&S> {
        match self {
            Self::None => None,
            Self::State(state) => Some(state),
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// True when this position is exactly `state`.
    pub fn is(&self, state: &S) -> bool {
        self.as_state() == Some(state)
    }
}

impl<S> Default for StateId<S> {
    fn default() -> Self {
        Self::None
    }
}

impl<S> From<S> for StateId<S> {
    fn from(state: S) -> Self {
        Self::State(state)
    }
}

impl<S: State> Display for StateId<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
