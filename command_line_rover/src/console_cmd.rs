//! # Console commands
//!
//! Commands accepted by the console, and the formatting of the responses printed for them.

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use serde::Serialize;
use serde_json::{ser::PrettyFormatter, Serializer, Value};
use structopt::{clap::AppSettings, StructOpt};

// ------------------------------------------------------------------------------------------------
// ENUMS
// ------------------------------------------------------------------------------------------------

/// A command typed into the console.
#[derive(Debug, Clone, PartialEq, StructOpt)]
#[structopt(
    name = "lokarria",
    no_version,
    global_settings = &[AppSettings::AllowNegativeNumbers]
)]
pub enum ConsoleCmd {
    /// Print the robot's pose.
    #[structopt(name = "pose")]
    Pose,

    /// Print the direction the robot is facing.
    #[structopt(name = "heading")]
    Heading,

    /// Print the latest laser echoes.
    #[structopt(name = "laser")]
    Laser,

    /// Print the angle of each laser beam relative to the robot's heading.
    #[structopt(name = "angles")]
    Angles,

    /// Print the laser properties.
    #[structopt(name = "props")]
    Props,

    /// Send a drive command.
    #[structopt(name = "drive")]
    Drive {
        /// Angular speed in radians/second, positive turns left.
        angular_rads: f64,

        /// Linear speed in meters/second.
        linear_ms: f64,
    },

    /// Stop the robot.
    #[structopt(name = "stop")]
    Stop,

    /// Exit the console.
    #[structopt(name = "quit", alias = "exit")]
    Quit,
}

// ------------------------------------------------------------------------------------------------
// IMPLS
// ------------------------------------------------------------------------------------------------

impl ConsoleCmd {
    /// Parse a command from a line typed into the console.
    ///
    /// Returns `Ok(None)` if the line is blank. Parse failures include help and usage requests,
    /// whose message should be shown to the user.
    pub fn parse_line(line: &str) -> Result<Option<Self>, structopt::clap::Error> {
        let words: Vec<&str> = line.split_whitespace().collect();

        if words.is_empty() {
            return Ok(None);
        }

        Self::from_iter_safe(std::iter::once("lokarria").chain(words)).map(Some)
    }
}

// ------------------------------------------------------------------------------------------------
// FUNCTIONS
// ------------------------------------------------------------------------------------------------

/// Format a response for printing, with object keys sorted and an indent of four spaces.
pub fn pretty<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    // Going through `Value` sorts the keys
    let value: Value = serde_json::to_value(value)?;

    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    value.serialize(&mut ser)?;

    // serde_json only emits valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
