//! Hardware pin identities.

use core::fmt;

use serde::Deserialize;

use crate::error::ConfigError;

/// A GPIO pin identified by port and pin number.
///
/// Only used to detect the same pin being assigned to two coil inputs; the
/// driver itself works on `OutputPin` handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinId {
    /// GPIO port number.
    pub port: u8,
    /// Pin number within the port.
    pub pin: u8,
}

impl PinId {
    /// Create a new pin identity.
    #[inline]
    pub const fn new(port: u8, pin: u8) -> Self {
        Self { port, pin }
    }
}

impl fmt::Display for PinId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "port {} pin {}", self.port, self.pin)
    }
}

/// Reject pin lists where any pin appears twice.
///
/// Inputs are reported 1-based, matching the IN1..IN4 labels.
pub fn check_pin_conflicts(pins: &[PinId]) -> Result<(), ConfigError> {
    for (i, pin) in pins.iter().enumerate() {
        if let Some(offset) = pins[i + 1..].iter().position(|p| p == pin) {
            return Err(ConfigError::PinConflict {
                pin: *pin,
                first_input: (i + 1) as u8,
                second_input: (i + offset + 2) as u8,
            });
        }
    }
    Ok(())
}
