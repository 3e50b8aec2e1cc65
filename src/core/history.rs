//! State transition history tracking.
//!
//! Every committed transition is appended to the machine's history. No-op,
//! cancelled and still-suspended transitions never appear here.

use super::state::{State, StateId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// Record of a single committed transition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StateTransition<S, E> {
    /// The event that caused the transition
    pub event: E,
    /// The state being transitioned from
    pub from: StateId<S>,
    /// The state being transitioned to
    pub to: StateId<S>,
    /// When the transition was committed
    pub timestamp: DateTime<Utc>,
}

impl<S, E> StateTransition<S, E> {
    pub fn new(event: E, from: StateId<S>, to: StateId<S>) -> Self {
        Self {
            event,
            from,
            to,
            timestamp: Utc::now(),
        }
    }
}

/// Ordered history of committed transitions.
///
/// With a limit set, the oldest records are dropped once the limit is
/// reached, so a long-running host does not grow without bound.
///
/// # Example
///
/// ```rust
/// use modeswitch::core::{StateHistory, StateId, StateTransition};
///
/// let mut history: StateHistory<&'static str, &'static str> = StateHistory::new();
/// history.record(StateTransition::new("startup", StateId::None, StateId::State("menu")));
/// history.record(StateTransition::new("play", StateId::State("menu"), StateId::State("playing")));
///
/// let path = history.get_path();
/// assert_eq!(path.len(), 3); // none -> menu -> playing
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StateHistory<S, E> {
    transitions: VecDeque<StateTransition<S, E>>,
    limit: Option<usize>,
}

impl<S, E> Default for StateHistory<S, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, E> StateHistory<S, E> {
    /// Create a new unbounded history.
    pub fn new() -> Self {
        Self {
            transitions: VecDeque::new(),
            limit: None,
        }
    }

    /// Create a history that keeps at most `limit` records.
    pub fn bounded(limit: usize) -> Self {
        Self {
            transitions: VecDeque::with_capacity(limit),
            limit: Some(limit),
        }
    }

    pub fn record(&mut self, transition: StateTransition<S, E>) {
        if self.limit == Some(0) {
            return;
        }
        if let Some(limit) = self.limit {
            while self.transitions.len() >= limit {
                self.transitions.pop_front();
            }
        }
        self.transitions.push_back(transition);
    }

    /// Get the path of positions traversed.
    ///
    /// Returns the `from` of the first retained record, then the `to` of
    /// each record in order.
    pub fn get_path(&self) -> Vec<&StateId<S>> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.front() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Time between the first and last retained records.
    pub fn duration(&self) -> Option<Duration> {
        match (self.transitions.front(), self.transitions.back()) {
            (Some(first), Some(last)) => last
                .timestamp
                .signed_duration_since(first.timestamp)
                .to_std()
                .ok(),
            _ => None,
        }
    }

    pub fn last(&self) -> Option<&StateTransition<S, E>> {
        self.transitions.back()
    }

    /// Maximum number of records kept, if bounded.
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    pub fn transitions(&self) -> impl Iterator<Item = &StateTransition<S, E>> {
        self.transitions.iter()
    }
}

impl<S: State, E> StateHistory<S, E> {
    /// Names of the positions traversed, for logs and assertions.
    pub fn path_names(&self) -> Vec<&str> {
        self.get_path().into_iter().map(StateId::name).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum TestState {
        Loading,
        Playing,
        Won,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Loading => "Loading",
                Self::Playing => "Playing",
                Self::Won => "Won",
            }
        }
    }

    fn step(from: StateId<TestState>, to: TestState) -> StateTransition<TestState, String> {
        StateTransition::new("go".to_string(), from, StateId::State(to))
    }

    #[test]
    fn new_history_is_empty() {
        let history: StateHistory<TestState, String> = StateHistory::new();
        assert!(history.is_empty());
        assert!(history.get_path().is_empty());
        assert!(history.duration().is_none());
        assert!(history.last().is_none());
    }

    #[test]
    fn get_path_returns_state_sequence() {
        let mut history = StateHistory::new();
        history.record(step(StateId::None, TestState::Loading));
        history.record(step(TestState::Loading.into(), TestState::Playing));
        history.record(step(TestState::Playing.into(), TestState::Won));

        assert_eq!(history.len(), 3);
        assert_eq!(history.path_names(), vec!["none", "Loading", "Playing", "Won"]);
        assert_eq!(history.last().map(|t| t.to.name()), Some("Won"));
    }

    #[test]
    fn bounded_history_drops_oldest_records() {
        let mut history = StateHistory::bounded(2);
        history.record(step(StateId::None, TestState::Loading));
        history.record(step(TestState::Loading.into(), TestState::Playing));
        history.record(step(TestState::Playing.into(), TestState::Won));

        assert_eq!(history.len(), 2);
        assert_eq!(history.path_names(), vec!["Loading", "Playing", "Won"]);
    }

    #[test]
    fn zero_limit_records_nothing() {
        let mut history = StateHistory::bounded(0);
        history.record(step(StateId::None, TestState::Loading));
        assert!(history.is_empty());
    }

    #[test]
    fn duration_calculates_elapsed_time() {
        let mut history = StateHistory::new();
        history.record(step(StateId::None, TestState::Loading));

        std::thread::sleep(Duration::from_millis(10));

        history.record(step(TestState::Loading.into(), TestState::Playing));

        let duration = history.duration();
        assert!(duration.is_some());
        assert!(duration.unwrap() >= Duration::from_millis(10));
    }

    #[test]
    fn history_serializes_correctly() {
        let mut history = StateHistory::new();
        history.record(step(StateId::None, TestState::Loading));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: StateHistory<TestState, String> = serde_json::from_str(&json).unwrap();

        assert_eq!(history.len(), deserialized.len());
        assert_eq!(history.last(), deserialized.last());
    }
}
