//! Host platform utility functions

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use std::env;
use std::path::PathBuf;
use thiserror::Error;

// ---------------------------------------------------------------------------
// CONSTANTS
// ---------------------------------------------------------------------------

/// Environment variable pointing at the root of the software tree, which
/// holds the `params` and `sessions` directories.
pub const SW_ROOT_ENV_VAR: &str = "LOKARRIA_SW_ROOT";

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum HostError {
    #[error("The software root environment variable ({}) is not set", SW_ROOT_ENV_VAR)]
    SwRootNotSet,
}

// ---------------------------------------------------------------------------
// PUBLIC FUNCTIONS
// ---------------------------------------------------------------------------

/// Get the root directory of the software tree.
pub fn get_sw_root() -> Result<PathBuf, HostError> {
    match env::var_os(SW_ROOT_ENV_VAR) {
        Some(p) if !p.is_empty() => Ok(PathBuf::from(p)),
        _ => Err(HostError::SwRootNotSet)
    }
}
