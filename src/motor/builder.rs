//! Builder pattern for StepperMotor.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::config::{check_pin_conflicts, MotorConfig, PinId, SystemConfig};
use crate::error::{ConfigError, Error, Result};

use super::driver::StepperMotor;
use super::sequence::StepMode;
use super::timing;

/// Builder for creating StepperMotor instances.
///
/// `build()` is the motor's initialization: it validates the parameters,
/// drives the power-on pattern (IN1 high, IN2 low, IN3 high, IN4 low) and
/// applies the default speed of 10 RPM before any configured speed.
pub struct StepperMotorBuilder<IN1, IN2, IN3, IN4, DELAY>
where
    IN1: OutputPin,
    IN2: OutputPin,
    IN3: OutputPin,
    IN4: OutputPin,
    DELAY: DelayNs,
{
    pins: Option<(IN1, IN2, IN3, IN4)>,
    delay: Option<DELAY>,
    name: Option<heapless::String<32>>,
    steps_per_revolution: Option<u16>,
    mode: StepMode,
    speed_rpm: Option<u32>,
    pin_ids: Option<[PinId; 4]>,
}

impl<IN1, IN2, IN3, IN4, DELAY> Default for StepperMotorBuilder<IN1, IN2, IN3, IN4, DELAY>
where
    IN1: OutputPin,
    IN2: OutputPin,
    IN3: OutputPin,
    IN4: OutputPin,
    DELAY: DelayNs,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<IN1, IN2, IN3, IN4, DELAY> StepperMotorBuilder<IN1, IN2, IN3, IN4, DELAY>
where
    IN1: OutputPin,
    IN2: OutputPin,
    IN3: OutputPin,
    IN4: OutputPin,
    DELAY: DelayNs,
{
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            pins: None,
            delay: None,
            name: None,
            steps_per_revolution: None,
            mode: StepMode::Full,
            speed_rpm: None,
            pin_ids: None,
        }
    }

    /// Set the four coil input pins, in IN1..IN4 order.
    pub fn pins(mut self, in1: IN1, in2: IN2, in3: IN3, in4: IN4) -> Self {
        self.pins = Some((in1, in2, in3, in4));
        self
    }

    /// Set the delay provider.
    pub fn delay(mut self, delay: DELAY) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Set the motor name.
    pub fn name(mut self, name: &str) -> Self {
        self.name = heapless::String::try_from(name).ok();
        self
    }

    /// Set full steps per mechanical revolution.
    pub fn steps_per_revolution(mut self, steps: u16) -> Self {
        self.steps_per_revolution = Some(steps);
        self
    }

    /// Set the excitation mode (defaults to full step).
    pub fn mode(mut self, mode: StepMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the speed applied after the power-on default.
    pub fn speed_rpm(mut self, rpm: u32) -> Self {
        self.speed_rpm = Some(rpm);
        self
    }

    /// Declare the hardware identity of each pin so duplicates are rejected.
    pub fn pin_ids(mut self, ids: [PinId; 4]) -> Self {
        self.pin_ids = Some(ids);
        self
    }

    /// Configure from a MotorConfig.
    pub fn from_motor_config(mut self, config: &MotorConfig) -> Self {
        self.name = Some(config.name.clone());
        self.steps_per_revolution = Some(config.steps_per_revolution);
        self.mode = config.mode;
        self.speed_rpm = Some(config.speed_rpm);
        self.pin_ids = config.pins;
        self
    }

    /// Configure from SystemConfig by motor name.
    pub fn from_config(self, config: &SystemConfig, motor_name: &str) -> Result<Self> {
        let motor_config = config.motor(motor_name).ok_or_else(|| {
            Error::Config(ConfigError::MotorNotFound(
                heapless::String::try_from(motor_name).unwrap_or_default(),
            ))
        })?;

        Ok(self.from_motor_config(motor_config))
    }

    /// Build and initialize the StepperMotor.
    ///
    /// All parameters are validated before any pin is driven.
    ///
    /// # Errors
    ///
    /// - `ConfigError::MissingField` if pins, delay or steps per revolution are missing
    /// - `ConfigError::InvalidStepsPerRevolution` if steps per revolution is 0
    /// - `ConfigError::InvalidSpeed` if the configured speed is 0 RPM
    /// - `ConfigError::PinConflict` if declared pin ids repeat
    /// - `MotorError::HardwareFault` if the power-on pattern cannot be driven
    pub fn build(self) -> Result<StepperMotor<IN1, IN2, IN3, IN4, DELAY>> {
        let pins = self.pins.ok_or(ConfigError::MissingField("pins"))?;
        let delay = self.delay.ok_or(ConfigError::MissingField("delay"))?;
        let steps = self
            .steps_per_revolution
            .ok_or(ConfigError::MissingField("steps_per_revolution"))?;

        // Rejects a zero step count as well as a zero speed
        timing::step_delay_ms(steps, self.mode, self.speed_rpm.unwrap_or(timing::DEFAULT_RPM))?;

        if let Some(ids) = self.pin_ids.as_ref() {
            check_pin_conflicts(ids)?;
        }

        let name = self
            .name
            .unwrap_or_else(|| heapless::String::try_from("motor").unwrap_or_default());

        let mut motor = StepperMotor::new(pins, delay, steps, self.mode, name);
        motor.init()?;
        if let Some(rpm) = self.speed_rpm {
            motor.set_speed(rpm)?;
        }

        Ok(motor)
    }
}
