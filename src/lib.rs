//! # coil-stepper
//!
//! Full-step and half-step coil sequencing for 4-wire stepper motors
//! (ULN2003-style unipolar drivers, or bipolar motors behind an H-bridge)
//! with embedded-hal 1.0 support.
//!
//! ## Features
//!
//! - **embedded-hal 1.0**: Uses `OutputPin` for IN1..IN4, `DelayNs` for timing
//! - **no_std compatible**: Core library works without standard library
//! - **Full and half step**: 4-state and 8-state excitation tables
//! - **Speed control**: RPM converted to a rounded-up per-step delay
//! - **Position tracking**: Signed absolute position in steps
//! - **Configuration-driven**: Optional TOML motor definitions
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use coil_stepper::{StepMode, StepperMotorBuilder};
//!
//! let mut motor = StepperMotorBuilder::new()
//!     .pins(in1, in2, in3, in4)
//!     .delay(delay)
//!     .steps_per_revolution(2048)
//!     .mode(StepMode::Half)
//!     .build()?;
//!
//! motor.set_speed(12)?;
//! motor.step(4096)?;
//! motor.release_coils()?;
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O and TOML parsing
//! - `defmt`: Enables defmt logging for embedded targets

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

// Core modules
pub mod config;
pub mod error;
pub mod motor;

// Re-exports for ergonomic API
pub use config::{validate_config, MotorConfig, PinId, SystemConfig};
pub use error::{ConfigError, Error, MotorError, Result};
pub use motor::{CoilPattern, Position, StepMode, StepperMotor, StepperMotorBuilder, DEFAULT_RPM};

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::{load_config, parse_config};

// Unit types
pub use config::units::{Degrees, Steps};
