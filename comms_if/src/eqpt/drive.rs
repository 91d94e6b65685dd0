//! # Differential Drive Equipment Communications Module

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use serde::{Deserialize, Serialize};

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

/// Demands sent to the `/lokarria/differentialdrive` endpoint.
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DriveDems {
    /// Target turn rate, radians/second. Positive turns to the left.
    pub target_angular_speed: f64,

    /// Target forward speed, meters/second.
    pub target_linear_speed: f64,
}

// ------------------------------------------------------------------------------------------------
// IMPLS
// ------------------------------------------------------------------------------------------------

impl DriveDems {
    pub fn new(target_angular_speed: f64, target_linear_speed: f64) -> Self {
        Self {
            target_angular_speed,
            target_linear_speed,
        }
    }

    /// Demands which bring the robot to a stop.
    pub fn stop() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_drive_dems_ser() {
        let val = serde_json::to_value(&DriveDems::new(0.25, 1.5)).unwrap();

        assert_eq!(
            val,
            serde_json::json!({"TargetAngularSpeed": 0.25, "TargetLinearSpeed": 1.5})
        );
    }
}
