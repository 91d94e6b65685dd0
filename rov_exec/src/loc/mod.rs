//! # Localisation module
//!
//! The rover does not localise itself, its pose is read from the robot service. This module
//! provides the pose representation used by navigation.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use nalgebra::{Quaternion, Vector3};

use comms_if::eqpt::loc::{LocRep, PoseData};
use util::maths;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// A pose (position and attitude in the world frame), either of the rover or of a waypoint.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Pose {

    /// The position in the world frame
    pub position_m: Vector3<f64>,

    /// The attitude in the world frame. This is a quaternion that will rotate the body's forward
    /// axis into the direction the body is facing. Expected to be unit norm but not enforced.
    pub attitude_q: Quaternion<f64>
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Pose {

    pub fn new(position_m: Vector3<f64>, attitude_q: Quaternion<f64>) -> Self {
        Self { position_m, attitude_q }
    }

    /// Return the heading (angle to the positive X axis) in radians, in the range [-pi, pi].
    pub fn get_heading(&self) -> f64 {
        let b = self.get_bearing();
        b.y.atan2(b.x)
    }

    /// Return the direction the pose is facing as a world frame vector.
    pub fn get_bearing(&self) -> Vector3<f64> {
        maths::bearing(&self.attitude_q)
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            position_m: Vector3::zeros(),
            attitude_q: Quaternion::identity()
        }
    }
}

impl From<PoseData> for Pose {
    fn from(data: PoseData) -> Self {
        Self {
            position_m: data.position.into(),
            attitude_q: data.orientation.into()
        }
    }
}

impl From<LocRep> for Pose {
    fn from(rep: LocRep) -> Self {
        rep.pose.into()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use nalgebra::UnitQuaternion;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_get_heading() {
        assert_eq!(Pose::default().get_heading(), 0.0);

        for &yaw in &[FRAC_PI_2, -FRAC_PI_2, 0.3, -2.9, PI - 1e-6] {
            let pose = Pose::new(
                Vector3::zeros(),
                *UnitQuaternion::from_euler_angles(0.0, 0.0, yaw).quaternion()
            );

            assert!((pose.get_heading() - yaw).abs() < 1e-9, "yaw {}", yaw);
        }
    }

    #[test]
    fn test_from_loc_rep() {
        let rep: LocRep = serde_json::from_str(r#"{
            "Pose": {
                "Position": {"X": 1.0, "Y": 2.0, "Z": 3.0},
                "Orientation": {"W": 0.5, "X": 0.5, "Y": 0.5, "Z": 0.5}
            }
        }"#).unwrap();

        let pose = Pose::from(rep);

        assert_eq!(pose.position_m, Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(pose.attitude_q, Quaternion::new(0.5, 0.5, 0.5, 0.5));
    }
}
