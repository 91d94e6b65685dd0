//! # Localisation Equipment Communications Module
//!
//! Pose data as returned by the `/lokarria/localization` endpoint. The same shape is used by
//! waypoint files, which are a JSON array of these responses.

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use nalgebra::{Quaternion, Vector3};
use serde::{Deserialize, Serialize};

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

/// A position in the world frame, in meters.
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// An orientation quaternion, unit norm by convention.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Orientation {
    pub w: f64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// A position and orientation pair.
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PoseData {
    pub position: Position,
    pub orientation: Orientation,
}

/// Response from the localisation endpoint.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LocRep {
    pub pose: PoseData,

    /// Server timestamp of the pose. Waypoint files may omit it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
}

// ------------------------------------------------------------------------------------------------
// IMPLS
// ------------------------------------------------------------------------------------------------

impl Default for Orientation {
    /// The identity orientation, facing along +X.
    fn default() -> Self {
        Self { w: 1.0, x: 0.0, y: 0.0, z: 0.0 }
    }
}

impl From<Position> for Vector3<f64> {
    fn from(p: Position) -> Self {
        Vector3::new(p.x, p.y, p.z)
    }
}

impl From<Orientation> for Quaternion<f64> {
    fn from(o: Orientation) -> Self {
        Quaternion::new(o.w, o.x, o.y, o.z)
    }
}
