//! Event dispatch protocol.
//!
//! Order of a dispatch:
//! 1. an outstanding transition blocks every event (`PendingTransition`)
//! 2. an event without a table entry here is illegal (`InvalidTransition`)
//! 3. before hooks may cancel
//! 4. a no-op event runs only the after hooks
//! 5. leave hooks may cancel or defer
//! 6. commit: set the state, then enter, change and after hooks

use super::{FsmError, Machine, Outcome, Pending, TransitionController};
use crate::core::{Event, State, StateTransition};
use crate::hooks::{resolve, Hook, HookFn, HookOutcome, Phase, TransitionContext};
use tracing::{debug, trace};
use uuid::Uuid;

impl<S: State, E: Event, A> Machine<S, E, A> {
    /// Fire `event` with default arguments.
    pub fn fire(&mut self, event: E) -> Result<Outcome, FsmError>
    where
        A: Default,
    {
        self.fire_with(event, A::default())
    }

    /// Fire `event`, handing `args` to every hook.
    pub fn fire_with(&mut self, event: E, args: A) -> Result<Outcome, FsmError> {
        let from = self.current.clone();
        let to = self
            .table
            .resolve(&event, &from)
            .unwrap_or_else(|| from.clone());
        let ctx = TransitionContext {
            event,
            from,
            to,
            args,
        };

        if let Some(pending) = &self.pending {
            let err = FsmError::PendingTransition {
                event: ctx.event.name().to_string(),
                from: ctx.from.name().to_string(),
                outstanding: pending.context.event.name().to_string(),
            };
            return self.reject(&ctx, err);
        }

        if self.cannot(&ctx.event) {
            let err = FsmError::InvalidTransition {
                event: ctx.event.name().to_string(),
                from: ctx.from.name().to_string(),
            };
            return self.reject(&ctx, err);
        }

        if self.run_phase(Phase::Before, &ctx)? == HookOutcome::Cancel {
            debug!(event = ctx.event.name(), from = %ctx.from, "event cancelled before leaving");
            return Ok(Outcome::Cancelled);
        }

        if ctx.is_no_op() {
            self.run_phase(Phase::After, &ctx)?;
            return Ok(Outcome::NoTransition);
        }

        match self.run_phase(Phase::Leave, &ctx)? {
            HookOutcome::Cancel => {
                debug!(event = ctx.event.name(), from = %ctx.from, to = %ctx.to, "transition cancelled on leave");
                Ok(Outcome::Cancelled)
            }
            HookOutcome::Defer => Ok(Outcome::Pending(self.suspend(ctx))),
            HookOutcome::Proceed => self.complete(ctx),
        }
    }

    /// Fire the startup event, for machines whose initial transition was
    /// deferred. `None` when no initial state was declared.
    pub fn start(&mut self) -> Option<Result<Outcome, FsmError>>
    where
        A: Default,
    {
        self.start_with(A::default())
    }

    /// Fire the startup event with `args`.
    pub fn start_with(&mut self, args: A) -> Option<Result<Outcome, FsmError>> {
        let event = self.startup.clone()?;
        Some(self.fire_with(event, args))
    }

    pub(crate) fn resume(&mut self, ticket: Uuid) -> Result<Outcome, FsmError> {
        let ctx = self.take_pending(ticket)?;
        self.complete(ctx)
    }

    pub(crate) fn abandon(&mut self, ticket: Uuid) -> Result<Outcome, FsmError> {
        let ctx = self.take_pending(ticket)?;
        debug!(event = ctx.event.name(), from = %ctx.from, to = %ctx.to, "suspended transition cancelled");
        self.run_phase(Phase::After, &ctx)?;
        Ok(Outcome::Cancelled)
    }

    fn take_pending(&mut self, ticket: Uuid) -> Result<TransitionContext<S, E, A>, FsmError> {
        match self.pending.take() {
            Some(pending) if pending.ticket == ticket => Ok(pending.context),
            other => {
                self.pending = other;
                Err(FsmError::StaleController { ticket })
            }
        }
    }

    fn suspend(&mut self, ctx: TransitionContext<S, E, A>) -> TransitionController {
        let ticket = Uuid::new_v4();
        let controller = TransitionController::new(ticket, &ctx);
        debug!(event = ctx.event.name(), from = %ctx.from, to = %ctx.to, %ticket, "transition suspended");
        self.pending = Some(Pending {
            ticket,
            context: ctx,
        });
        controller
    }

    /// Commit phase. The state is set before any hook runs, so a fault in an
    /// enter, change or after hook leaves the machine in the new state.
    fn complete(&mut self, ctx: TransitionContext<S, E, A>) -> Result<Outcome, FsmError> {
        self.current = ctx.to.clone();
        self.history.record(StateTransition::new(
            ctx.event.clone(),
            ctx.from.clone(),
            ctx.to.clone(),
        ));
        debug!(event = ctx.event.name(), from = %ctx.from, to = %ctx.to, "transition committed");

        self.run_phase(Phase::Enter, &ctx)?;
        self.run_phase(Phase::Change, &ctx)?;
        self.run_phase(Phase::After, &ctx)?;
        Ok(Outcome::Succeeded)
    }

    /// Run the hooks of one phase and fold their outcomes.
    ///
    /// Before: the first `Cancel` stops the phase. Leave: every hook runs,
    /// then `Cancel` outranks `Defer`. Other phases ignore outcomes.
    fn run_phase(
        &self,
        phase: Phase,
        ctx: &TransitionContext<S, E, A>,
    ) -> Result<HookOutcome, FsmError> {
        let mut verdict = HookOutcome::Proceed;
        for (key, hook) in resolve(phase, &ctx.event, &ctx.from, &ctx.to, &self.hooks) {
            let outcome = self.call(&key, hook, ctx)?;
            match (phase, outcome) {
                (Phase::Before, HookOutcome::Cancel) => return Ok(HookOutcome::Cancel),
                (Phase::Leave, HookOutcome::Cancel) => verdict = HookOutcome::Cancel,
                (Phase::Leave, HookOutcome::Defer) if verdict == HookOutcome::Proceed => {
                    verdict = HookOutcome::Defer
                }
                _ => {}
            }
        }
        Ok(verdict)
    }

    fn call(
        &self,
        key: &Hook<S, E>,
        hook: &HookFn<S, E, A>,
        ctx: &TransitionContext<S, E, A>,
    ) -> Result<HookOutcome, FsmError> {
        trace!(hook = %key, event = ctx.event.name(), "running hook");
        match hook(ctx) {
            Ok(outcome) => Ok(outcome),
            Err(source) => {
                let err = FsmError::InvalidCallback {
                    event: ctx.event.name().to_string(),
                    from: ctx.from.name().to_string(),
                    to: ctx.to.name().to_string(),
                    hook: key.to_string(),
                    source,
                };
                (self.on_error)(ctx, err)?;
                Ok(HookOutcome::Proceed)
            }
        }
    }

    fn reject(
        &self,
        ctx: &TransitionContext<S, E, A>,
        err: FsmError,
    ) -> Result<Outcome, FsmError> {
        let kind = err.kind();
        (self.on_error)(ctx, err)?;
        Ok(Outcome::Rejected(kind))
    }
}
