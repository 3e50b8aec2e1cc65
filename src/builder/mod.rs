//! Builder API for machine construction.
//!
//! Machines are described by event descriptors (in code or from JSON) and
//! hooks, then compiled into an immutable [`TransitionTable`] owned by the
//! running [`Machine`](crate::machine::Machine).

pub mod config;
pub mod descriptor;
pub mod error;
pub mod machine;
pub mod macros;
pub mod table;

pub use config::MachineConfig;
pub use descriptor::{EventDescriptor, Initial, Sources, WILDCARD};
pub use error::BuildError;
pub use machine::{MachineBuilder, DEFAULT_HISTORY_LIMIT};
pub use table::{Target, TransitionTable};
