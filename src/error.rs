//! Error types for coil-stepper.
//!
//! Configuration problems are caught at construction or call time; hardware
//! failures while driving the coils are fatal for the current motion.

use core::fmt;

use crate::config::PinId;
use crate::motor::StepMode;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all coil-stepper operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// Motor operation error
    Motor(MotorError),
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// A required builder field was not provided
    MissingField(&'static str),
    /// Motor name not found in configuration
    MotorNotFound(heapless::String<32>),
    /// Steps per revolution must be greater than zero
    InvalidStepsPerRevolution(u16),
    /// Speed must be greater than zero RPM
    InvalidSpeed(u32),
    /// The same pin was assigned to two coil inputs
    PinConflict {
        /// The pin assigned twice
        pin: PinId,
        /// Lower coil input using the pin (1 = IN1)
        first_input: u8,
        /// Higher coil input using the same pin
        second_input: u8,
    },
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Motor operation errors.
#[derive(Debug, Clone, PartialEq)]
pub enum MotorError {
    /// A coil pin could not be driven; the coil state is unknown
    HardwareFault,
    /// Switching excitation mode after construction is not supported
    ModeChangeUnsupported {
        /// Mode the motor was built with
        current: StepMode,
        /// Mode that was requested
        requested: StepMode,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Motor(e) => write!(f, "Motor error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::MissingField(field) => write!(f, "{} is required", field),
            ConfigError::MotorNotFound(name) => write!(f, "Motor '{}' not found", name),
            ConfigError::InvalidStepsPerRevolution(v) => {
                write!(f, "Invalid steps per revolution: {}. Must be > 0", v)
            }
            ConfigError::InvalidSpeed(v) => write!(f, "Invalid speed: {} RPM. Must be > 0", v),
            ConfigError::PinConflict {
                pin,
                first_input,
                second_input,
            } => {
                write!(
                    f,
                    "Pin conflict: IN{} and IN{} both use {}",
                    first_input, second_input, pin
                )
            }
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for MotorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MotorError::HardwareFault => write!(f, "GPIO pin operation failed"),
            MotorError::ModeChangeUnsupported { current, requested } => {
                write!(
                    f,
                    "Cannot switch step mode from {} to {} after construction",
                    current, requested
                )
            }
        }
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<MotorError> for Error {
    fn from(e: MotorError) -> Self {
        Error::Motor(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for MotorError {}
