//! # Path runner module
//!
//! The path runner drives the rover through a path one waypoint at a time. For each waypoint:
//!
//! - The rover's pose is read from the robot service.
//! - Navigation calculates the angular and linear demands towards the waypoint.
//! - If the linear demand is above the drive threshold the command is sent, and the runner pauses
//!   for as many seconds as the linear demand before moving on. Otherwise the waypoint is skipped.
//!
//! Once all waypoints have been visited a stop command is sent. Any failure to talk to the robot
//! aborts the run immediately, nothing is retried.

// ---------------------------------------------------------------------------
// MODULES
// ---------------------------------------------------------------------------

mod params;

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use std::{thread, time::Duration};
use log::{debug, info};
use serde::Serialize;

// Internal
pub use params::Params;

use crate::{
    loc::Pose,
    nav::{self, NavCmd},
    path::WaypointPath,
};
use comms_if::net::{LokarriaClient, LokarriaClientError};

// ---------------------------------------------------------------------------
// TRAITS
// ---------------------------------------------------------------------------

/// Link to the robot, providing its pose and accepting drive commands.
pub trait RobotLink {
    /// Read the current pose of the rover.
    fn pose(&mut self) -> Result<Pose, LokarriaClientError>;

    /// Send a drive command to the rover.
    fn drive(&mut self, cmd: &NavCmd) -> Result<(), LokarriaClientError>;
}

/// Paces the runner between waypoints.
pub trait Pacer {
    /// Block for the given duration.
    fn pause(&mut self, duration: Duration);
}

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// A [`Pacer`] which sleeps the current thread.
#[derive(Debug, Default, Copy, Clone)]
pub struct ThreadPacer;

/// Drives the rover along a [`WaypointPath`].
pub struct PathRunner<L, P> {
    link: L,
    pacer: P,
    params: Params,
}

/// Summary of a completed run.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct RunReport {
    /// Number of waypoints processed
    pub num_waypoints: usize,

    /// Number of drive commands sent, not including the final stop
    pub num_cmds_sent: usize,

    /// Number of waypoints skipped as they were within the drive threshold
    pub num_skipped: usize,

    /// Total time spent pausing after commands
    pub total_pause_s: f64,
}

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum PathRunnerError {
    #[error("Could not read the rover pose for waypoint {0}: {1}")]
    PoseError(usize, LokarriaClientError),

    #[error("Could not send the drive command for waypoint {0}: {1}")]
    DriveError(usize, LokarriaClientError),

    #[error("Could not send the stop command: {0}")]
    StopError(LokarriaClientError),

    #[error("Linear demand of {1} for waypoint {0} is not a valid pause time")]
    InvalidPause(usize, f64),
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl RobotLink for LokarriaClient {
    fn pose(&mut self) -> Result<Pose, LokarriaClientError> {
        self.get_pose().map(Pose::from)
    }

    fn drive(&mut self, cmd: &NavCmd) -> Result<(), LokarriaClientError> {
        self.send_drive_dems(&(*cmd).into())
    }
}

impl Pacer for ThreadPacer {
    fn pause(&mut self, duration: Duration) {
        thread::sleep(duration)
    }
}

impl<L, P> PathRunner<L, P>
where
    L: RobotLink,
    P: Pacer,
{
    pub fn new(link: L, pacer: P, params: Params) -> Self {
        Self { link, pacer, params }
    }

    pub fn link(&self) -> &L {
        &self.link
    }

    pub fn pacer(&self) -> &P {
        &self.pacer
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Drive through every waypoint of the path, then stop the rover.
    pub fn run(&mut self, path: &WaypointPath) -> Result<RunReport, PathRunnerError> {
        let mut report = RunReport::default();

        info!(
            "Running path of {} waypoints (drive threshold {} m)",
            path.len(),
            self.params.drive_threshold_m
        );

        for (i, goal) in path.iter().enumerate() {
            report.num_waypoints += 1;

            let rov_pose = self.link.pose().map_err(|e| PathRunnerError::PoseError(i, e))?;

            debug!(
                "Waypoint {}: rover at ({:.3}, {:.3}) heading {:.3} rad, goal at ({:.3}, {:.3})",
                i,
                rov_pose.position_m.x,
                rov_pose.position_m.y,
                rov_pose.get_heading(),
                goal.position_m.x,
                goal.position_m.y
            );

            let cmd = nav::nav_cmd(&rov_pose, goal);

            if !self.params.should_drive(cmd.linear_ms) {
                info!(
                    "Waypoint {}: {:.3} m away, within threshold, skipping",
                    i, cmd.linear_ms
                );
                report.num_skipped += 1;
                continue;
            }

            let pause = Duration::try_from_secs_f64(cmd.linear_ms)
                .map_err(|_| PathRunnerError::InvalidPause(i, cmd.linear_ms))?;

            info!(
                "Waypoint {}: angular {:.3} rad/s, linear {:.3} m/s",
                i, cmd.angular_rads, cmd.linear_ms
            );

            self.link.drive(&cmd).map_err(|e| PathRunnerError::DriveError(i, e))?;
            report.num_cmds_sent += 1;

            self.pacer.pause(pause);
            report.total_pause_s += pause.as_secs_f64();
        }

        self.link.drive(&NavCmd::stop()).map_err(PathRunnerError::StopError)?;

        info!(
            "Path complete: {} waypoints, {} commands sent, {} skipped",
            report.num_waypoints, report.num_cmds_sent, report.num_skipped
        );

        Ok(report)
    }
}
