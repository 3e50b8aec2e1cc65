//! Ready-made fault policies for [`MachineBuilder::on_error`].
//!
//! A handler receives every fault together with the context of the event
//! that raised it. Returning `Err` re-raises the fault to the caller of the
//! dispatch. Returning `Ok(())` recovers: a faulting hook is treated as if
//! it returned `Proceed`, and an illegal or blocked event is reported as
//! [`Outcome::Rejected`](crate::machine::Outcome::Rejected).
//!
//! [`MachineBuilder::on_error`]: crate::builder::MachineBuilder::on_error

use crate::core::{Event, State};
use crate::hooks::TransitionContext;
use crate::machine::FsmError;
use std::sync::Arc;

/// Type alias for the overridable fault handler.
pub type ErrorHandler<S, E, A> =
    Arc<dyn Fn(&TransitionContext<S, E, A>, FsmError) -> Result<(), FsmError> + Send + Sync>;

/// Default policy: every fault reaches the caller.
pub fn raise<S, E, A>(_ctx: &TransitionContext<S, E, A>, err: FsmError) -> Result<(), FsmError> {
    Err(err)
}

/// Log the fault and keep going.
pub fn log_and_continue<S: State, E: Event, A>(
    ctx: &TransitionContext<S, E, A>,
    err: FsmError,
) -> Result<(), FsmError> {
    tracing::warn!(
        event = ctx.event.name(),
        from = %ctx.from,
        to = %ctx.to,
        code = err.kind().code(),
        "{err}"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::StateId;

    fn ctx() -> TransitionContext<&'static str, &'static str, ()> {
        TransitionContext {
            event: "play",
            from: StateId::State("menu"),
            to: StateId::State("menu"),
            args: (),
        }
    }

    fn invalid() -> FsmError {
        FsmError::InvalidTransition {
            event: "play".to_string(),
            from: "menu".to_string(),
        }
    }

    #[test]
    fn raise_returns_the_fault() {
        let result = raise(&ctx(), invalid());
        assert!(matches!(result, Err(FsmError::InvalidTransition { .. })));
    }

    #[test]
    fn log_and_continue_recovers() {
        assert!(log_and_continue(&ctx(), invalid()).is_ok());
    }
}
