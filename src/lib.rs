//! Modeswitch: an embeddable event-driven finite state machine.
//!
//! A machine is declared once as a set of named events, each mapping source
//! states to a destination, and then driven by the host firing events. Every
//! dispatch runs through layered lifecycle hooks which may veto the event or
//! suspend it until the host commits or cancels.
//!
//! # Core Concepts
//!
//! - **Transition table**: compiled from event descriptors; exact source
//!   entries beat wildcard ones, and an initial state adds a synthesized
//!   startup transition out of the `none` sentinel
//! - **Hooks**: before, leave, enter, change and after phases, keyed by
//!   [`Hook`](hooks::Hook)
//! - **Outcome**: the result code of a dispatch, including
//!   [`Outcome::Pending`] with its [`TransitionController`]
//! - **FsmError**: faults, routed through one overridable handler
//!
//! # Example
//!
//! ```rust
//! use modeswitch::builder::{EventDescriptor, MachineBuilder};
//! use modeswitch::hooks::{Hook, HookOutcome};
//! use modeswitch::machine::Outcome;
//!
//! let mut machine = MachineBuilder::<&str, &str>::new()
//!     .initial("menu")
//!     .terminal("won")
//!     .event(EventDescriptor::new("play").from("menu").to("playing"))
//!     .event(EventDescriptor::new("win").from("playing").to("won"))
//!     .hook(Hook::LeaveState("menu"), |_| Ok(HookOutcome::Defer))
//!     .build()
//!     .unwrap();
//!
//! assert!(machine.is(&"menu"));
//! assert!(machine.can(&"play"));
//! assert!(machine.cannot(&"win"));
//!
//! let controller = machine.fire("play").unwrap().into_controller().unwrap();
//! assert!(machine.cannot(&"play"));
//! assert_eq!(controller.commit(&mut machine).unwrap(), Outcome::Succeeded);
//!
//! assert_eq!(machine.fire("win").unwrap(), Outcome::Succeeded);
//! assert!(machine.is_finished());
//! ```

pub mod builder;
pub mod core;
pub mod hooks;
pub mod machine;

// Re-export commonly used types
pub use builder::{BuildError, EventDescriptor, Initial, MachineBuilder, MachineConfig};
pub use core::{Event, State, StateHistory, StateId, StateTransition};
pub use hooks::{Hook, HookOutcome, HookResult, TransitionContext};
pub use machine::{ErrorKind, FsmError, Machine, Outcome, TransitionController};
