//! Motor module for coil-stepper.
//!
//! Provides the 4-wire stepper driver, its excitation sequences and step timing.

mod builder;
mod driver;
mod position;
pub mod sequence;
pub mod timing;

pub use builder::StepperMotorBuilder;
pub use driver::StepperMotor;
pub use position::Position;
pub use sequence::{CoilPattern, StepMode, FULL_STEP_SEQUENCE, HALF_STEP_SEQUENCE};
pub use timing::DEFAULT_RPM;
