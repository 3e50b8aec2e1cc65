//! Build errors for machine construction.

use crate::machine::FsmError;
use thiserror::Error;

/// Errors that can occur when building a machine.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error(
        "Initial state '{state}' has no startup event. Call .event(..) on the initial declaration or implement Event::startup()"
    )]
    MissingStartupEvent { state: String },

    #[error("Invalid machine configuration: {0}")]
    InvalidConfig(#[from] serde_json::Error),

    #[error("Startup transition failed: {0}")]
    Startup(#[from] FsmError),
}
