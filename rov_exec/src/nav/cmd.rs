//! Navigation command

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use serde::Serialize;

use comms_if::eqpt::drive::DriveDems;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// A drive command produced by navigation for a single control cycle.
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize)]
pub struct NavCmd {
    /// Turn rate demand, radians/second, in (-pi, pi]. Positive turns to the left.
    pub angular_rads: f64,

    /// Forward speed demand, meters/second.
    pub linear_ms: f64,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl NavCmd {
    /// The command which stops the rover.
    pub fn stop() -> Self {
        Self::default()
    }
}

impl From<NavCmd> for DriveDems {
    fn from(cmd: NavCmd) -> Self {
        DriveDems::new(cmd.angular_rads, cmd.linear_ms)
    }
}
