//! Main rover-side executable entry point.
//!
//! # Architecture
//!
//! The executable drives the robot through a path of waypoints:
//!
//!     - Initialise the session and logging
//!     - Load parameters and the path given as the only argument
//!     - Connect to the robot service
//!     - Run the path:
//!         - Pose acquisition from the robot service
//!         - Navigation towards the current waypoint
//!         - Drive command output
//!     - Stop the robot
//!
//! # Usage
//!
//!     rov_exec <path.json>
//!
//! The `LOKARRIA_SW_ROOT` environment variable must point to the root of the repository so that
//! parameter files can be found and sessions saved.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use color_eyre::{Report, eyre::{WrapErr, eyre}};
use log::{debug, info};
use std::env;

// Internal
use comms_if::net::{LokarriaClient, NetParams};
use rov_lib::{
    path::WaypointPath,
    path_runner::{self, PathRunner, ThreadPacer},
};
use util::{
    logger::{logger_init, LevelFilter},
    session::Session,
};

// ---------------------------------------------------------------------------
// FUNCTIONS
// ---------------------------------------------------------------------------

/// Executable main function, entry point.
fn main() -> Result<(), Report> {

    color_eyre::install()?;

    // ---- EARLY INITIALISATION ----

    // Initialise session
    let session = Session::new(
        "rov_exec",
        "sessions"
    ).wrap_err("Failed to create the session")?;

    // Initialise logger
    logger_init(LevelFilter::Trace, &session)
        .wrap_err("Failed to initialise logging")?;

    // Log information on this execution.
    info!("Lokarria Rover Executable\n");
    info!("Session directory: {:?}\n", session.session_root);

    // ---- LOAD PARAMETERS ----

    let net_params: NetParams = util::params::load(
        "net.toml"
    ).wrap_err("Could not load net params")?;

    let runner_params: path_runner::Params = util::params::load(
        "nav.toml"
    ).wrap_err("Could not load nav params")?;

    info!("Exec parameters loaded");

    // ---- LOAD PATH ----

    // Collect all arguments
    let args: Vec<String> = env::args().collect();

    debug!("CLI arguments: {:?}", args);

    let path_file = path_arg(&args)?;

    info!("Loading path from \"{}\"", path_file);

    let path = WaypointPath::load(path_file)
        .wrap_err_with(|| format!("Failed to load the path from \"{}\"", path_file))?;

    info!("Loaded path contains {} waypoints\n", path.len());

    // ---- INITIALISE NETWORK ----

    info!("Initialising network");

    let client = LokarriaClient::new(&net_params)
        .wrap_err("Failed to initialise the LokarriaClient")?;

    info!("LokarriaClient initialised for {}\n", client.base_url());

    // ---- RUN PATH ----

    let mut runner = PathRunner::new(client, ThreadPacer, runner_params);

    let report = runner.run(&path).wrap_err("Failed to run the path")?;

    info!(
        "Run report: {}",
        serde_json::to_string(&report).wrap_err("Could not serialise the run report")?
    );

    // ---- SHUTDOWN ----

    info!("End of execution");

    Ok(())
}

/// Get the path file from the command line arguments, which must hold exactly one argument after
/// the executable name.
fn path_arg(args: &[String]) -> Result<&str, Report> {
    match args {
        [_, path_file] => Ok(path_file.as_str()),
        _ => Err(eyre!(
            "Expected exactly one argument (the path file), found {}",
            args.len().saturating_sub(1)
        )),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn args(a: &[&str]) -> Vec<String> {
        a.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_path_arg() {
        assert_eq!(
            path_arg(&args(&["rov_exec", "paths/demo_path.json"])).unwrap(),
            "paths/demo_path.json"
        );

        assert!(path_arg(&args(&["rov_exec"])).is_err());
        assert!(path_arg(&args(&["rov_exec", "a.json", "b.json"])).is_err());

        // An empty argument list is an error rather than a panic
        let e = path_arg(&[]).unwrap_err();
        assert!(e.to_string().contains("found 0"));
    }
}
