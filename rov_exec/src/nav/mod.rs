//! # Navigation module
//!
//! Navigation chases a single waypoint using two proportional laws with unit gain and no
//! saturation:
//!
//! - The angular demand is the heading error, the difference between the direction from the rover
//!   to the waypoint and the rover's current heading, wrapped into (-pi, pi].
//! - The linear demand is the planar distance from the rover to the waypoint.
//!
//! All functions here are pure, the caller is responsible for acquiring the rover's pose.

// ---------------------------------------------------------------------------
// MODULES
// ---------------------------------------------------------------------------

mod cmd;

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

pub use cmd::*;

use crate::loc::Pose;
use util::maths::wrap_pi;

// ---------------------------------------------------------------------------
// FUNCTIONS
// ---------------------------------------------------------------------------

/// Planar (XY) distance from the rover to the goal. Z is ignored.
pub fn distance_to(rov_pose: &Pose, goal_pose: &Pose) -> f64 {
    (goal_pose.position_m - rov_pose.position_m).xy().norm()
}

/// Planar distance between any two poses.
pub fn xy_distance(pose_0: &Pose, pose_1: &Pose) -> f64 {
    distance_to(pose_0, pose_1)
}

/// Angular speed demand to turn the rover towards the goal.
///
/// If the rover and goal positions coincide the direction to the goal is taken as 0 (the
/// behaviour of `atan2(0, 0)`).
pub fn angular_command(rov_pose: &Pose, goal_pose: &Pose) -> f64 {
    let delta = goal_pose.position_m - rov_pose.position_m;

    let desired_rad = delta.y.atan2(delta.x);
    let turn_rad = desired_rad - rov_pose.get_heading();

    wrap_pi(turn_rad)
}

/// Linear speed demand to drive the rover to the goal.
pub fn linear_command(rov_pose: &Pose, goal_pose: &Pose) -> f64 {
    distance_to(rov_pose, goal_pose)
}

/// Calculate the full command to drive the rover towards the goal.
pub fn nav_cmd(rov_pose: &Pose, goal_pose: &Pose) -> NavCmd {
    NavCmd {
        angular_rads: angular_command(rov_pose, goal_pose),
        linear_ms: linear_command(rov_pose, goal_pose),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use nalgebra::{Quaternion, UnitQuaternion, Vector3};
    use std::f64::consts::{FRAC_PI_2, PI};

    const TOL: f64 = 1e-9;

    fn pose(x: f64, y: f64, z: f64, yaw: f64) -> Pose {
        Pose::new(
            Vector3::new(x, y, z),
            *UnitQuaternion::from_euler_angles(0.0, 0.0, yaw).quaternion()
        )
    }

    fn at(x: f64, y: f64) -> Pose {
        Pose::new(Vector3::new(x, y, 0.0), Quaternion::identity())
    }

    #[test]
    fn test_straight_ahead() {
        let cmd = nav_cmd(&Pose::default(), &at(1.0, 0.0));

        assert!(cmd.angular_rads.abs() < TOL);
        assert_eq!(cmd.linear_ms, 1.0);
    }

    #[test]
    fn test_goal_to_the_left() {
        let cmd = nav_cmd(&Pose::default(), &at(0.0, 1.0));

        assert!((cmd.angular_rads - FRAC_PI_2).abs() < TOL);
        assert_eq!(cmd.linear_ms, 1.0);
    }

    #[test]
    fn test_coincident() {
        let cmd = nav_cmd(&at(0.0, 0.0), &at(0.0, 0.0));

        assert_eq!(cmd.linear_ms, 0.0);
        assert_eq!(cmd.angular_rads, 0.0);

        // Coincident but the rover is rotated, the turn is back towards 0
        let cmd = nav_cmd(&pose(2.0, 2.0, 0.0, 0.5), &at(2.0, 2.0));
        assert!((cmd.angular_rads + 0.5).abs() < TOL);
    }

    #[test]
    fn test_turn_wraps() {
        // Facing just below -X with the goal just above it, the short way round is a small right
        // turn rather than almost a full turn to the left.
        let rov = pose(0.0, 0.0, 0.0, -PI + 0.1);
        let goal = at(-1.0, 0.1);

        let ang = angular_command(&rov, &goal);
        let expected = (0.1f64).atan2(-1.0) - (-PI + 0.1) - 2.0 * PI;

        assert!(ang > -PI && ang <= PI);
        assert!((ang - expected).abs() < TOL);
        assert!(ang < 0.0);

        // And the mirror case
        let rov = pose(0.0, 0.0, 0.0, PI - 0.1);
        let goal = at(-1.0, -0.1);
        let ang = angular_command(&rov, &goal);

        assert!(ang > -PI && ang <= PI);
        assert!(ang > 0.0);
    }

    #[test]
    fn test_turn_always_in_range() {
        for i in 0..36 {
            let yaw = -PI + (i as f64) * PI / 18.0;
            for j in 0..12 {
                let a = (j as f64) * PI / 6.0;
                let rov = pose(1.0, -1.0, 0.0, yaw);
                let goal = at(1.0 + a.cos(), -1.0 + a.sin());

                let ang = angular_command(&rov, &goal);
                assert!(ang > -PI && ang <= PI, "yaw {} goal angle {} -> {}", yaw, a, ang);
            }
        }
    }

    #[test]
    fn test_distance_ignores_z() {
        let a = pose(1.0, 1.0, 5.0, 0.0);
        let b = pose(4.0, 5.0, -3.0, 1.0);

        assert_eq!(distance_to(&a, &b), 5.0);
        assert_eq!(distance_to(&a, &b), distance_to(&b, &a));
        assert_eq!(xy_distance(&a, &a), 0.0);
        assert_eq!(linear_command(&a, &b), 5.0);
    }
}
