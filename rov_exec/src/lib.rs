//! # Rover library.
//!
//! This library allows other crates in the workspace to access items defined inside the rover
//! crate.

// ------------------------------------------------------------------------------------------------
// MODULES
// ------------------------------------------------------------------------------------------------

/// Localisation module - the rover's pose in the world
pub mod loc;

/// Navigation module - converts the rover pose and a target waypoint into drive commands
pub mod nav;

/// Path module - the ordered list of waypoints to visit
pub mod path;

/// Path runner - drives the rover through each waypoint of a path in turn
pub mod path_runner;
