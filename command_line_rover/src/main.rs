//! # Command line rover
//!
//! Interactive console for the robot service. Each line typed is parsed as a command, sent to the
//! robot, and the response printed as JSON. Type `help` for the list of commands.

// ------------------------------------------------------------------------------------------------
// MODULES
// ------------------------------------------------------------------------------------------------

mod console_cmd;

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use color_eyre::{eyre::WrapErr, Report};
use rustyline::{error::ReadlineError, DefaultEditor};
use serde_json::json;
use structopt::StructOpt;

use comms_if::{
    eqpt::drive::DriveDems,
    net::{LokarriaClient, NetParams},
};
use console_cmd::{pretty, ConsoleCmd};

// ------------------------------------------------------------------------------------------------
// CONSTANTS
// ------------------------------------------------------------------------------------------------

const PROMPT: &str = "Lokarria $ ";
const HISTORY_PATH: &str = "data/history.txt";

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

#[derive(Debug, StructOpt)]
#[structopt(name = "command_line_rover", about = "Interactive console for a Lokarria robot")]
struct Opts {
    /// Base address of the robot service (default from `NetParams`)
    #[structopt(long)]
    url: Option<String>,

    /// Request timeout in milliseconds (default from `NetParams`)
    #[structopt(long)]
    timeout_ms: Option<u64>,
}

// ------------------------------------------------------------------------------------------------
// IMPLS
// ------------------------------------------------------------------------------------------------

impl Opts {
    /// Network parameters from the options, with anything not given taken from the defaults.
    fn net_params(self) -> NetParams {
        let defaults = NetParams::default();

        NetParams {
            base_url: self.url.unwrap_or(defaults.base_url),
            timeout_ms: self.timeout_ms.unwrap_or(defaults.timeout_ms),
        }
    }
}

// ------------------------------------------------------------------------------------------------
// FUNCTIONS
// ------------------------------------------------------------------------------------------------

fn main() -> Result<(), Report> {
    color_eyre::install()?;

    let opts = Opts::from_args();

    let client = LokarriaClient::new(&opts.net_params())
        .wrap_err("Failed to create the client")?;

    println!("Connected to {}", client.base_url());

    let mut rl = DefaultEditor::new().wrap_err("Failed to start the line editor")?;
    if rl.load_history(HISTORY_PATH).is_err() {
        println!("No history detected");
    }

    loop {
        match rl.readline(PROMPT) {
            Ok(line) => {
                let _ = rl.add_history_entry(line.as_str());

                match ConsoleCmd::parse_line(&line) {
                    Ok(Some(ConsoleCmd::Quit)) => break,
                    Ok(Some(cmd)) => match exec(&client, &cmd) {
                        Ok(s) => println!("{}", s),
                        Err(e) => println!("Error: {:?}", e),
                    },
                    Ok(None) => (),
                    Err(e) => println!("{}", e.message),
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => {
                println!("Unhandled Error: {:?}", err);
                break;
            }
        }
    }

    shutdown(&client);

    if let Err(e) = rl.save_history(HISTORY_PATH) {
        println!("Could not save history: {}", e);
    }

    Ok(())
}

/// Execute a command against the robot, returning the text to print.
fn exec(client: &LokarriaClient, cmd: &ConsoleCmd) -> Result<String, Report> {
    let text = match cmd {
        ConsoleCmd::Pose => pretty(&client.get_pose()?)?,
        ConsoleCmd::Heading => {
            let h = client.get_heading()?;
            pretty(&json!({"X": h.x, "Y": h.y, "Z": h.z}))?
        }
        ConsoleCmd::Laser => pretty(&client.get_laser()?)?,
        ConsoleCmd::Angles => pretty(&client.get_laser_angles()?)?,
        ConsoleCmd::Props => pretty(&client.get_laser_properties()?)?,
        ConsoleCmd::Drive {
            angular_rads,
            linear_ms,
        } => {
            let dems = DriveDems::new(*angular_rads, *linear_ms);
            client.send_drive_dems(&dems)?;
            format!("Sent {}", pretty(&dems)?)
        }
        ConsoleCmd::Stop => {
            client.send_drive_dems(&DriveDems::stop())?;
            String::from("Stopped")
        }
        ConsoleCmd::Quit => String::new(),
    };

    Ok(text)
}

/// Stop the robot on the way out.
fn shutdown(client: &LokarriaClient) {
    println!("Exiting...");

    if let Err(e) = client.send_drive_dems(&DriveDems::stop()) {
        println!("Could not stop the robot: {}", e);
    }
}
