//! Board-agnostic core logic for the Vigil motion alarm firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Hardware abstraction traits (motion sensor, tone output, wake line)
//! - The tick-driven controller state machine (Init / Sleep / Alert)
//! - The alert profile table and escalation policy
//! - The heartbeat ticker
//! - Timing constants
//!
//! Everything here is driven by a fixed 10 ms tick supplied by the
//! platform and is fully testable on the host with mock devices.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod config;
pub mod controller;
pub mod heartbeat;
pub mod profile;
pub mod state;
pub mod traits;
