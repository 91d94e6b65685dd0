//! Path runner parameters

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use serde::Deserialize;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Parameters for the path runner
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Params {

    /// Linear demand at or below which a waypoint is considered reached and skipped without
    /// sending a command.
    ///
    /// Units: meters
    pub drive_threshold_m: f64
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Default for Params {
    fn default() -> Self {
        Self {
            drive_threshold_m: 0.5
        }
    }
}

impl Params {
    /// True if a command with the given linear demand should be sent.
    pub fn should_drive(&self, linear_ms: f64) -> bool {
        linear_ms > self.drive_threshold_m
    }
}
