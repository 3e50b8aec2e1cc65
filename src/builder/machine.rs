//! Builder for constructing machines.

use crate::builder::descriptor::{EventDescriptor, Initial};
use crate::builder::error::BuildError;
use crate::builder::table::TransitionTable;
use crate::core::{Event, State, StateHistory};
use crate::hooks::{Hook, HookOutcome, HookResult, HookTable, TransitionContext};
use crate::machine::{error_handler, ErrorHandler, FsmError, Machine};
use std::sync::Arc;
use tracing::debug;

/// Committed transitions a machine keeps unless told otherwise.
pub const DEFAULT_HISTORY_LIMIT: usize = 256;

/// Builder for constructing machines with a fluent API.
///
/// Hooks and the fault handler are registered here; the declarative part
/// (initial state, terminal states, events) can also come from a
/// [`MachineConfig`](crate::builder::MachineConfig).
pub struct MachineBuilder<S, E, A = ()> {
    initial: Option<Initial<S, E>>,
    terminal: Vec<S>,
    events: Vec<EventDescriptor<S, E>>,
    hooks: HookTable<S, E, A>,
    on_error: Option<ErrorHandler<S, E, A>>,
    history_limit: Option<usize>,
}

impl<S: State, E: Event> MachineBuilder<S, E, ()> {
    /// Create a builder for a machine whose events carry no arguments.
    pub fn new() -> Self {
        Self::with_args()
    }
}

impl<S: State, E: Event, A: 'static> MachineBuilder<S, E, A> {
    /// Create a builder for a machine whose events carry `A`.
    pub fn with_args() -> Self {
        Self {
            initial: None,
            terminal: Vec::new(),
            events: Vec::new(),
            hooks: HookTable::new(),
            on_error: None,
            history_limit: Some(DEFAULT_HISTORY_LIMIT),
        }
    }

    /// Set the initial state, entered through the default startup event.
    pub fn initial(self, state: S) -> Self {
        self.initial_with(Initial::new(state))
    }

    /// Set the full initial declaration.
    pub fn initial_with(mut self, initial: Initial<S, E>) -> Self {
        self.initial = Some(initial);
        self
    }

    /// Add a terminal state.
    pub fn terminal(mut self, state: S) -> Self {
        self.terminal.push(state);
        self
    }

    pub fn terminals<I>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = S>,
    {
        self.terminal.extend(states);
        self
    }

    /// Add an event descriptor. Order matters only between entries for the
    /// same event and source, where the later one wins.
    pub fn event(mut self, descriptor: EventDescriptor<S, E>) -> Self {
        self.events.push(descriptor);
        self
    }

    pub fn events<I>(mut self, descriptors: I) -> Self
    where
        I: IntoIterator<Item = EventDescriptor<S, E>>,
    {
        self.events.extend(descriptors);
        self
    }

    /// Register a hook that may cancel or defer.
    pub fn hook<F>(mut self, key: Hook<S, E>, hook: F) -> Self
    where
        F: Fn(&TransitionContext<S, E, A>) -> HookResult + Send + Sync + 'static,
    {
        self.hooks.insert(key, Arc::new(hook));
        self
    }

    /// Register a hook that only observes the transition.
    pub fn observe<F>(self, key: Hook<S, E>, observer: F) -> Self
    where
        F: Fn(&TransitionContext<S, E, A>) + Send + Sync + 'static,
    {
        self.hook(key, move |ctx| {
            observer(ctx);
            Ok(HookOutcome::Proceed)
        })
    }

    /// Override the fault handler. The default re-raises every fault.
    pub fn on_error<F>(mut self, handler: F) -> Self
    where
        F: Fn(&TransitionContext<S, E, A>, FsmError) -> Result<(), FsmError>
            + Send
            + Sync
            + 'static,
    {
        self.on_error = Some(Arc::new(handler));
        self
    }

    /// Keep at most `limit` committed transitions in the history.
    /// Defaults to [`DEFAULT_HISTORY_LIMIT`].
    pub fn history_limit(mut self, limit: usize) -> Self {
        self.history_limit = Some(limit);
        self
    }

    /// Record every committed transition.
    pub fn unbounded_history(mut self) -> Self {
        self.history_limit = None;
        self
    }

    /// Build the machine and, unless the initial transition is deferred,
    /// fire the startup event with default arguments.
    ///
    /// A startup transition that is cancelled or suspended by a hook still
    /// yields the machine; inspect `current()` or `controller()` to see
    /// where it stands.
    pub fn build(self) -> Result<Machine<S, E, A>, BuildError>
    where
        A: Default,
    {
        self.build_with(A::default)
    }

    /// Build the machine, calling `args` for the startup arguments only if
    /// the startup transition fires here.
    ///
    /// For argument types without a `Default`. A machine with no initial
    /// state or a deferred one never calls `args`; start it later with
    /// [`Machine::start_with`].
    pub fn build_with<F>(self, args: F) -> Result<Machine<S, E, A>, BuildError>
    where
        F: FnOnce() -> A,
    {
        let fire_startup = self.initial.as_ref().is_some_and(|initial| !initial.defer);
        let mut machine = self.assemble()?;
        if fire_startup {
            if let Some(result) = machine.start_with(args()) {
                let outcome = result?;
                debug!(code = outcome.code(), current = %machine.current(), "startup fired");
            }
        }
        Ok(machine)
    }

    fn assemble(self) -> Result<Machine<S, E, A>, BuildError> {
        let startup = match self.initial {
            Some(initial) => {
                let event = initial
                    .event
                    .or_else(E::startup)
                    .ok_or_else(|| BuildError::MissingStartupEvent {
                        state: initial.state.name().to_string(),
                    })?;
                Some((event, initial.state))
            }
            None => None,
        };
        let startup_event = startup.as_ref().map(|(event, _)| event.clone());
        let table = TransitionTable::compile(startup, self.events);

        let history = match self.history_limit {
            Some(limit) => StateHistory::bounded(limit),
            None => StateHistory::new(),
        };
        let on_error = self
            .on_error
            .unwrap_or_else(|| Arc::new(error_handler::raise::<S, E, A>));

        Ok(Machine::from_parts(
            table,
            self.hooks,
            self.terminal.into_iter().collect(),
            on_error,
            startup_event,
            history,
        ))
    }
}

impl<S: State, E: Event, A: 'static> Default for MachineBuilder<S, E, A> {
    fn default() -> Self {
        Self::with_args()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::StateId;
    use crate::machine::{ErrorKind, Outcome};

    #[derive(Clone, PartialEq, Eq, Hash, Debug)]
    enum Mode {
        Booting,
        Menu,
    }

    impl State for Mode {
        fn name(&self) -> &str {
            match self {
                Self::Booting => "Booting",
                Self::Menu => "Menu",
            }
        }
    }

    #[derive(Clone, PartialEq, Eq, Hash, Debug)]
    enum Command {
        Boot,
        Ready,
    }

    impl Event for Command {
        fn name(&self) -> &str {
            match self {
                Self::Boot => "Boot",
                Self::Ready => "Ready",
            }
        }
    }

    #[test]
    fn builder_requires_a_startup_event_for_enum_events() {
        let result = MachineBuilder::<Mode, Command>::new()
            .initial(Mode::Booting)
            .build();

        assert!(matches!(
            result,
            Err(BuildError::MissingStartupEvent { ref state }) if state == "Booting"
        ));
    }

    #[test]
    fn explicit_startup_event_enters_initial_state() {
        let machine = MachineBuilder::<Mode, Command>::new()
            .initial_with(Initial::new(Mode::Booting).event(Command::Boot))
            .event(EventDescriptor::new(Command::Ready).from(Mode::Booting).to(Mode::Menu))
            .build()
            .unwrap();

        assert!(machine.is(&Mode::Booting));
        assert_eq!(machine.startup_event(), Some(&Command::Boot));
        assert_eq!(
            machine.events().cloned().collect::<Vec<_>>(),
            vec![Command::Boot, Command::Ready]
        );
    }

    #[test]
    fn machine_without_initial_state_stays_in_none() {
        let mut machine = MachineBuilder::<Mode, Command>::new()
            .event(EventDescriptor::new(Command::Ready).to(Mode::Menu))
            .build()
            .unwrap();

        assert_eq!(machine.current(), &StateId::None);
        assert!(machine.start().is_none());
        assert_eq!(machine.fire(Command::Ready).unwrap(), Outcome::Succeeded);
        assert!(machine.is(&Mode::Menu));
    }

    #[test]
    fn failing_startup_hook_fails_the_build() {
        let result = MachineBuilder::<Mode, Command>::new()
            .initial_with(Initial::new(Mode::Booting).event(Command::Boot))
            .hook(Hook::EnterState(Mode::Booting), |_| {
                anyhow::bail!("assets missing")
            })
            .build();

        match result {
            Err(BuildError::Startup(err)) => assert_eq!(err.kind(), ErrorKind::InvalidCallback),
            other => panic!("expected startup failure, got {other:?}"),
        }
    }

    #[test]
    fn deferred_startup_in_leave_hook_is_reachable_through_controller() {
        let mut machine = MachineBuilder::<Mode, Command>::new()
            .initial_with(Initial::new(Mode::Booting).event(Command::Boot))
            .hook(Hook::LeaveAnyState, |_| Ok(HookOutcome::Defer))
            .build()
            .unwrap();

        assert_eq!(machine.current(), &StateId::None);
        let controller = machine.controller().unwrap();
        assert_eq!(controller.event(), "Boot");
        assert_eq!(controller.commit(&mut machine).unwrap(), Outcome::Succeeded);
        assert!(machine.is(&Mode::Booting));
    }

    #[test]
    fn terminal_states_drive_is_finished() {
        let mut machine = MachineBuilder::<Mode, Command>::new()
            .initial_with(Initial::new(Mode::Booting).event(Command::Boot))
            .event(EventDescriptor::new(Command::Ready).from(Mode::Booting).to(Mode::Menu))
            .terminals([Mode::Menu])
            .build()
            .unwrap();

        assert!(!machine.is_finished());
        assert_eq!(machine.fire(Command::Ready).unwrap(), Outcome::Succeeded);
        assert!(machine.is_finished());
    }

    #[test]
    fn history_limit_bounds_recorded_transitions() {
        let mut machine = MachineBuilder::<Mode, Command>::new()
            .initial_with(Initial::new(Mode::Booting).event(Command::Boot))
            .event(EventDescriptor::new(Command::Ready).from(Mode::Booting).to(Mode::Menu))
            .history_limit(1)
            .build()
            .unwrap();

        assert_eq!(machine.fire(Command::Ready).unwrap(), Outcome::Succeeded);
        assert_eq!(machine.history().len(), 1);
        assert_eq!(machine.history().path_names(), vec!["Booting", "Menu"]);
    }

    #[test]
    fn history_is_bounded_by_default() {
        let machine = MachineBuilder::<Mode, Command>::new().build().unwrap();
        assert_eq!(machine.history().limit(), Some(DEFAULT_HISTORY_LIMIT));

        let machine = MachineBuilder::<Mode, Command>::new()
            .unbounded_history()
            .build()
            .unwrap();
        assert_eq!(machine.history().limit(), None);
    }

    #[derive(Clone, Debug, PartialEq)]
    struct Hit {
        damage: u32,
    }

    #[test]
    fn arguments_without_default_build_and_start_later() {
        let mut machine = MachineBuilder::<Mode, Command, Hit>::with_args()
            .initial_with(Initial::new(Mode::Booting).event(Command::Boot).deferred())
            .event(EventDescriptor::new(Command::Ready).from(Mode::Booting).to(Mode::Menu))
            .build_with(|| unreachable!("deferred startup does not fire during build"))
            .unwrap();
        assert_eq!(machine.current(), &StateId::None);

        let started = machine.start_with(Hit { damage: 0 }).unwrap().unwrap();
        assert_eq!(started, Outcome::Succeeded);
        assert_eq!(
            machine.fire_with(Command::Ready, Hit { damage: 3 }).unwrap(),
            Outcome::Succeeded
        );
        assert!(machine.is(&Mode::Menu));
    }

    #[test]
    fn build_with_supplies_startup_arguments() {
        let machine = MachineBuilder::<Mode, Command, Hit>::with_args()
            .initial_with(Initial::new(Mode::Booting).event(Command::Boot))
            .hook(Hook::EnterState(Mode::Booting), |ctx| {
                anyhow::ensure!(ctx.args.damage == 7, "unexpected startup args");
                Ok(HookOutcome::Proceed)
            })
            .build_with(|| Hit { damage: 7 })
            .unwrap();
        assert!(machine.is(&Mode::Booting));
    }
}
