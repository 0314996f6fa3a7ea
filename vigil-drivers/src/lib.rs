//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in vigil-core:
//!
//! - ADXL362 micropower accelerometer (SPI, wake-on-motion)
//! - PWM tone generator (buzzer)
//!
//! Drivers are generic over `embedded-hal` 1.0 traits and carry no
//! board-specific code.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod adxl362;
pub mod tone;

pub use adxl362::{Adxl362, AwakePin};
pub use tone::PwmTone;
