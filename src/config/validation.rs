//! Configuration validation.

use crate::error::Result;
use crate::motor::timing;

use super::pins::check_pin_conflicts;
use super::{MotorConfig, SystemConfig};

/// Validate a system configuration.
///
/// Checks every motor with [`validate_motor`].
pub fn validate_config(config: &SystemConfig) -> Result<()> {
    for motor in config.motors.values() {
        validate_motor(motor)?;
    }

    Ok(())
}

/// Validate a single motor configuration.
///
/// Checks:
/// - Steps per revolution is non-zero
/// - Speed is non-zero
/// - Pin identities, if given, are distinct
pub fn validate_motor(config: &MotorConfig) -> Result<()> {
    timing::step_delay_ms(config.steps_per_revolution, config.mode, config.speed_rpm)?;

    if let Some(ref pins) = config.pins {
        check_pin_conflicts(pins)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PinId;
    use crate::error::{ConfigError, Error};
    use crate::motor::StepMode;

    fn make_test_config() -> MotorConfig {
        MotorConfig {
            name: heapless::String::try_from("test").unwrap(),
            steps_per_revolution: 200,
            mode: StepMode::Full,
            speed_rpm: 10,
            pins: None,
        }
    }

    #[test]
    fn test_valid_motor() {
        assert!(validate_motor(&make_test_config()).is_ok());
    }

    #[test]
    fn test_zero_steps_per_revolution() {
        let config = MotorConfig {
            steps_per_revolution: 0, // Invalid!
            ..make_test_config()
        };

        let result = validate_motor(&config);
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidStepsPerRevolution(0)))
        ));
    }

    #[test]
    fn test_zero_speed() {
        let config = MotorConfig {
            speed_rpm: 0,
            ..make_test_config()
        };

        assert!(matches!(
            validate_motor(&config),
            Err(Error::Config(ConfigError::InvalidSpeed(0)))
        ));
    }

    #[test]
    fn test_pin_conflict() {
        let config = MotorConfig {
            pins: Some([
                PinId::new(0, 1),
                PinId::new(0, 1),
                PinId::new(0, 3),
                PinId::new(0, 4),
            ]),
            ..make_test_config()
        };

        assert!(matches!(
            validate_motor(&config),
            Err(Error::Config(ConfigError::PinConflict { .. }))
        ));
    }
}
