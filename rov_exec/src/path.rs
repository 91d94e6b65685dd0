//! # Path
//!
//! This module defines the path followed by the rover, an ordered list of waypoint poses. Paths are
//! loaded from JSON files which hold an array of objects with a `Pose` field, in the same format
//! as the localisation endpoint of the robot service. Other fields are ignored.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use std::path::Path;

use comms_if::eqpt::loc::LocRep;

use crate::loc::Pose;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// The waypoints to visit, in order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WaypointPath {
    pub waypoints: Vec<Pose>,
}

// -----------------------------------------------------------------------------------------------
// ENUMS
// -----------------------------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum PathError {
    #[error("Cannot load the path file: {0}")]
    FileLoadError(std::io::Error),

    #[error("Cannot parse the path: {0}")]
    DeserializeError(serde_json::Error),
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl WaypointPath {
    /// Load a path from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, PathError> {
        let json = std::fs::read_to_string(path).map_err(PathError::FileLoadError)?;

        Self::from_json(&json)
    }

    /// Parse a path from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, PathError> {
        let reps: Vec<LocRep> = serde_json::from_str(json).map_err(PathError::DeserializeError)?;

        Ok(Self {
            waypoints: reps.into_iter().map(Pose::from).collect(),
        })
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Pose> {
        self.waypoints.iter()
    }
}
