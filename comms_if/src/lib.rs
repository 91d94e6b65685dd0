//! # Communications interface crate.
//!
//! Provides the interface to the robot service, which is exposed through the Lokarria HTTP/JSON
//! interface of the Microsoft Robotics Developer Studio simulator.

// ------------------------------------------------------------------------------------------------
// MODULES
// ------------------------------------------------------------------------------------------------

/// Request and response definitions for equipment exposed by the robot service
pub mod eqpt;

/// Network module
pub mod net;
