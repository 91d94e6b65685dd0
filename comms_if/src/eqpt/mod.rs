//! # Equipment Interface
//!
//! This module defines the interface structures which are exchanged with the robot service.

// -----------------------------------------------------------------------------------------------
// MODULES
// -----------------------------------------------------------------------------------------------

pub mod laser;
pub mod loc;
pub mod drive;
