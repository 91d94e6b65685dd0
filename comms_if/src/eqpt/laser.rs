//! # Laser Equipment Communications Module
//!
//! Laser range data is not used by the navigation loop, it is provided for inspection from the
//! command line and for future use.

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use serde::{Deserialize, Serialize};

// ------------------------------------------------------------------------------------------------
// CONSTANTS
// ------------------------------------------------------------------------------------------------

/// Separation between generated beam angles. Independent of the reported `AngleIncrement`.
pub const BEAM_ANGLE_STEP_RAD: f64 = std::f64::consts::PI / 180.0;

/// Upper limit on the number of generated beam angles, ten full turns.
pub const MAX_BEAM_ANGLES: usize = 3600;

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

/// Response from the `/lokarria/laser/echoes` endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LaserEchoes {
    /// Range readings in meters, one per beam.
    pub echoes: Vec<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
}

/// Response from the `/lokarria/laser/properties` endpoint.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LaserProperties {
    /// Angle of the first beam relative to the robot's heading, radians.
    pub start_angle: f64,

    /// Angle of the last beam relative to the robot's heading, radians.
    pub end_angle: f64,

    /// Reported angle between beams, radians.
    pub angle_increment: f64,
}

// ------------------------------------------------------------------------------------------------
// IMPLS
// ------------------------------------------------------------------------------------------------

impl LaserProperties {
    /// Number of beams implied by the reported increment.
    ///
    /// Returns `None` if the increment is not positive or the range is not finite.
    pub fn beam_count(&self) -> Option<usize> {
        let count = (self.end_angle - self.start_angle) / self.angle_increment;

        if self.angle_increment > 0.0 && count.is_finite() && count >= 0.0 {
            Some(count.trunc() as usize)
        }
        else {
            None
        }
    }

    /// Angle of each beam, from the start angle up to and including the end angle, one degree
    /// apart.
    ///
    /// At most [`MAX_BEAM_ANGLES`] angles are returned. Empty if either angle is not finite or the
    /// end is before the start.
    pub fn beam_angles(&self) -> Vec<f64> {
        let (start, end) = (self.start_angle, self.end_angle);

        if !start.is_finite() || !end.is_finite() || end < start {
            return Vec::new();
        }

        let steps = ((end - start) / BEAM_ANGLE_STEP_RAD).floor();
        let count = if steps.is_finite() && steps < MAX_BEAM_ANGLES as f64 {
            steps as usize + 1
        }
        else {
            MAX_BEAM_ANGLES
        };

        (0..count)
            .map(|i| start + (i as f64) * BEAM_ANGLE_STEP_RAD)
            .filter(|a| *a <= end)
            .collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_laser_deser() {
        let echoes: LaserEchoes = serde_json::from_str(
            r#"{"Echoes": [1.0, 2.5, 40.0], "Timestamp": 99}"#
        ).unwrap();
        assert_eq!(echoes.echoes, vec![1.0, 2.5, 40.0]);
        assert_eq!(echoes.timestamp, Some(99));

        let props: LaserProperties = serde_json::from_str(
            r#"{"StartAngle": -2.35, "EndAngle": 2.35, "AngleIncrement": 0.0175, "Pose": {}}"#
        ).unwrap();
        assert_eq!(props.start_angle, -2.35);
        assert_eq!(props.angle_increment, 0.0175);
    }

    #[test]
    fn test_beam_angles() {
        let props = LaserProperties {
            start_angle: -FRAC_PI_2,
            end_angle: FRAC_PI_2,
            angle_increment: 0.5,
        };

        let angles = props.beam_angles();

        assert_eq!(angles[0], -FRAC_PI_2);
        assert!((angles[1] - angles[0] - PI / 180.0).abs() < 1e-12);
        assert!(*angles.last().unwrap() <= FRAC_PI_2);
        assert!(angles.len() == 180 || angles.len() == 181);
        assert_eq!(props.beam_count(), Some(6));
    }

    #[test]
    fn test_degenerate_properties() {
        let props = LaserProperties {
            start_angle: 1.0,
            end_angle: 0.0,
            angle_increment: 0.0,
        };

        assert!(props.beam_angles().is_empty());
        assert_eq!(props.beam_count(), None);
    }

    #[test]
    fn test_beam_angles_large_range() {
        // Start and end coincide far from zero, a single beam
        let props = LaserProperties {
            start_angle: 1.0e17,
            end_angle: 1.0e17,
            angle_increment: 0.0175,
        };
        assert_eq!(props.beam_angles(), vec![1.0e17]);

        // A huge span is capped
        let props = LaserProperties {
            start_angle: -1.0e10,
            end_angle: 1.0e10,
            angle_increment: 0.0175,
        };
        let angles = props.beam_angles();
        assert_eq!(angles.len(), MAX_BEAM_ANGLES);
        assert_eq!(angles[0], -1.0e10);

        let props = LaserProperties {
            start_angle: -f64::MAX,
            end_angle: f64::MAX,
            angle_increment: 0.0175,
        };
        assert_eq!(props.beam_angles().len(), MAX_BEAM_ANGLES);
    }
}
