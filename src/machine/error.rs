//! Faults raised while dispatching events.

use thiserror::Error;
use uuid::Uuid;

/// Classification of a dispatch fault, with the legacy numeric codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The event is not available from the current state.
    InvalidTransition,
    /// A suspended transition is still outstanding.
    PendingTransition,
    /// A host hook faulted.
    InvalidCallback,
    /// A controller no longer matches the outstanding transition.
    StaleController,
}

impl ErrorKind {
    pub fn code(self) -> u16 {
        match self {
            Self::InvalidTransition => 100,
            Self::PendingTransition => 200,
            Self::InvalidCallback => 300,
            Self::StaleController => 400,
        }
    }
}

/// Errors that can occur while firing events or resolving a suspended
/// transition.
#[derive(Debug, Error)]
pub enum FsmError {
    #[error("Event '{event}' inappropriate in current state '{from}'")]
    InvalidTransition { event: String, from: String },

    #[error(
        "Event '{event}' inappropriate because previous transition '{outstanding}' did not complete"
    )]
    PendingTransition {
        event: String,
        from: String,
        outstanding: String,
    },

    #[error("Hook {hook} failed during event '{event}' ({from} -> {to}): {source}")]
    InvalidCallback {
        event: String,
        from: String,
        to: String,
        hook: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("Transition controller {ticket} does not match the outstanding transition")]
    StaleController { ticket: Uuid },
}

impl FsmError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidTransition { .. } => ErrorKind::InvalidTransition,
            Self::PendingTransition { .. } => ErrorKind::PendingTransition,
            Self::InvalidCallback { .. } => ErrorKind::InvalidCallback,
            Self::StaleController { .. } => ErrorKind::StaleController,
        }
    }

    /// Name of the event the fault was raised for, when there is one.
    pub fn event(&self) -> Option<&str> {
        match self {
            Self::InvalidTransition { event, .. }
            | Self::PendingTransition { event, .. }
            | Self::InvalidCallback { event, .. } => Some(event),
            Self::StaleController { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn kinds_carry_legacy_codes() {
        assert_eq!(ErrorKind::InvalidTransition.code(), 100);
        assert_eq!(ErrorKind::PendingTransition.code(), 200);
        assert_eq!(ErrorKind::InvalidCallback.code(), 300);
        assert_eq!(ErrorKind::StaleController.code(), 400);
    }

    #[test]
    fn invalid_transition_message_names_event_and_state() {
        let err = FsmError::InvalidTransition {
            event: "play".to_string(),
            from: "menu".to_string(),
        };
        assert_eq!(err.kind(), ErrorKind::InvalidTransition);
        assert_eq!(err.event(), Some("play"));
        assert_eq!(
            err.to_string(),
            "Event 'play' inappropriate in current state 'menu'"
        );
    }

    #[test]
    fn callback_fault_keeps_its_cause() {
        let err = FsmError::InvalidCallback {
            event: "play".to_string(),
            from: "loading".to_string(),
            to: "playing".to_string(),
            hook: "enter:playing".to_string(),
            source: anyhow::anyhow!("sound pool exhausted"),
        };
        assert_eq!(err.kind(), ErrorKind::InvalidCallback);
        assert!(err.to_string().contains("sound pool exhausted"));
        assert_eq!(
            err.source().map(|cause| cause.to_string()),
            Some("sound pool exhausted".to_string())
        );
    }

    #[test]
    fn stale_controller_has_no_event() {
        let err = FsmError::StaleController {
            ticket: Uuid::new_v4(),
        };
        assert_eq!(err.kind(), ErrorKind::StaleController);
        assert!(err.event().is_none());
    }
}
