//! Results of a dispatch.

use crate::machine::{ErrorKind, TransitionController};

/// Legitimate (non-fault) result of firing an event.
#[derive(Debug, PartialEq, Eq)]
#[must_use]
pub enum Outcome {
    /// The machine moved to the destination state.
    Succeeded,
    /// The event resolved to the current state; only after hooks ran.
    NoTransition,
    /// A before or leave hook vetoed the event, or a suspended transition
    /// was abandoned.
    Cancelled,
    /// A leave hook suspended the transition; the host resolves it through
    /// the controller.
    Pending(TransitionController),
    /// The fault handler recovered from an illegal or blocked event.
    Rejected(ErrorKind),
}

impl Outcome {
    /// Legacy numeric result code; rejections report their error code.
    pub fn code(&self) -> u16 {
        match self {
            Self::Succeeded => 1,
            Self::NoTransition => 2,
            Self::Cancelled => 3,
            Self::Pending(_) => 4,
            Self::Rejected(kind) => kind.code(),
        }
    }

    pub fn is_succeeded(&self) -> bool {
        matches!(self, Self::Succeeded)
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending(_))
    }

    /// Take the controller out of a pending outcome.
    pub fn into_controller(self) -> Option<TransitionController> {
        match self {
            Self::Pending(controller) => Some(controller),
            _ => None,
        }
    }
}
