//! Event trait for the names a machine can be asked to fire.

use std::fmt::Debug;
use std::hash::Hash;

/// Name of the startup event used by string-keyed machines.
pub const DEFAULT_STARTUP: &str = "startup";

/// Trait for state machine events.
///
/// An event is a named request to transition; the transition table resolves
/// it against the current state.
///
/// `startup` supplies the event used for the implicit `none -> initial`
/// transition when the builder is not given one explicitly.
pub trait Event: Clone + Eq + Hash + Debug + Send + Sync + 'static {
    fn name(&self) -> &str;

    /// Default startup event, if this event type has one.
    fn startup() -> Option<Self> {
        None
    }
}

impl Event for String {
    fn name(&self) -> &str {
        self
    }

    fn startup() -> Option<Self> {
        Some(DEFAULT_STARTUP.to_string())
    }
}

impl Event for &'static str {
    fn name(&self) -> &str {
        self
    }

    fn startup() -> Option<Self> {
        Some(DEFAULT_STARTUP)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Eq, Hash, Debug)]
    enum Command {
        Start,
    }

    impl Event for Command {
        fn name(&self) -> &str {
            "Start"
        }
    }

    #[test]
    fn enum_events_have_no_startup_by_default() {
        assert_eq!(Command::Start.name(), "Start");
        assert!(Command::startup().is_none());
    }

    #[test]
    fn string_events_default_to_startup() {
        assert_eq!(<&'static str as Event>::startup(), Some("startup"));
        assert_eq!(<String as Event>::startup().as_deref(), Some("startup"));
    }
}
