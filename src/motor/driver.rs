//! Four-wire stepper motor driver.
//!
//! Generic over embedded-hal 1.0 pin and delay types.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::config::units::{Degrees, Steps};
use crate::error::{MotorError, Result};

use super::position::Position;
use super::sequence::{CoilPattern, StepMode, POWER_ON_PATTERN, RELEASED_PATTERN};
use super::timing::{self, DEFAULT_RPM};

/// Stepper motor driven by sequencing four coil inputs.
///
/// Generic over:
/// - `IN1`..`IN4`: coil input pins (must implement `OutputPin`)
/// - `DELAY`: Delay provider (must implement `DelayNs`)
///
/// Motion is blocking: [`step`](Self::step) holds the calling thread for
/// `|delta| * step_delay_ms` milliseconds.
pub struct StepperMotor<IN1, IN2, IN3, IN4, DELAY>
where
    IN1: OutputPin,
    IN2: OutputPin,
    IN3: OutputPin,
    IN4: OutputPin,
    DELAY: DelayNs,
{
    in1: IN1,
    in2: IN2,
    in3: IN3,
    in4: IN4,

    /// Delay provider for step timing.
    delay: DELAY,

    /// Current absolute position.
    position: Position,

    /// Full steps per mechanical revolution.
    steps_per_revolution: u16,

    /// Excitation mode, fixed at construction.
    mode: StepMode,

    /// Last speed applied through `set_speed`.
    speed_rpm: u32,

    /// Milliseconds waited before each step.
    step_delay_ms: u32,

    /// Motor name for logging/debugging.
    name: heapless::String<32>,
}

impl<IN1, IN2, IN3, IN4, DELAY> StepperMotor<IN1, IN2, IN3, IN4, DELAY>
where
    IN1: OutputPin,
    IN2: OutputPin,
    IN3: OutputPin,
    IN4: OutputPin,
    DELAY: DelayNs,
{
    /// Assemble a motor without touching the hardware.
    ///
    /// `steps_per_revolution` must already be validated as non-zero.
    pub(crate) fn new(
        pins: (IN1, IN2, IN3, IN4),
        delay: DELAY,
        steps_per_revolution: u16,
        mode: StepMode,
        name: heapless::String<32>,
    ) -> Self {
        let (in1, in2, in3, in4) = pins;
        Self {
            in1,
            in2,
            in3,
            in4,
            delay,
            position: Position::for_revolution(timing::effective_steps_per_revolution(
                steps_per_revolution,
                mode,
            )),
            steps_per_revolution,
            mode,
            speed_rpm: 0,
            step_delay_ms: 0,
            name,
        }
    }

    /// Drive the power-on pattern and apply the default speed.
    pub(crate) fn init(&mut self) -> Result<()> {
        self.apply(POWER_ON_PATTERN)?;
        self.set_speed(DEFAULT_RPM)?;

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "{=str}: initialized, {} steps/rev, {} mode",
            self.name.as_str(),
            self.steps_per_revolution,
            self.mode
        );

        Ok(())
    }

    /// Get the motor name.
    #[inline]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Get current position in steps.
    #[inline]
    pub fn position_steps(&self) -> Steps {
        self.position.steps()
    }

    /// Get current position in degrees.
    #[inline]
    pub fn position_degrees(&self) -> Degrees {
        self.position.degrees()
    }

    /// Get the excitation mode.
    #[inline]
    pub fn mode(&self) -> StepMode {
        self.mode
    }

    /// Get full steps per mechanical revolution.
    #[inline]
    pub fn steps_per_revolution(&self) -> u16 {
        self.steps_per_revolution
    }

    /// Get sequencer steps per revolution (doubled in half-step mode).
    #[inline]
    pub fn effective_steps_per_revolution(&self) -> u32 {
        timing::effective_steps_per_revolution(self.steps_per_revolution, self.mode)
    }

    /// Get the current speed in RPM.
    #[inline]
    pub fn speed_rpm(&self) -> u32 {
        self.speed_rpm
    }

    /// Get the delay held before each step, in milliseconds.
    #[inline]
    pub fn step_delay_ms(&self) -> u32 {
        self.step_delay_ms
    }

    /// Pattern for the current position.
    #[inline]
    pub fn current_pattern(&self) -> CoilPattern {
        self.mode.pattern(self.position.steps().value())
    }

    /// Blocking time a call to `step(delta)` would take at the current speed.
    #[inline]
    pub fn motion_duration_ms(&self, delta: i64) -> u64 {
        timing::motion_duration_ms(self.step_delay_ms, delta)
    }

    /// Set the speed in revolutions per minute.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidSpeed` if `rpm` is 0; the previous speed
    /// is kept.
    pub fn set_speed(&mut self, rpm: u32) -> Result<()> {
        self.step_delay_ms = timing::step_delay_ms(self.steps_per_revolution, self.mode, rpm)?;
        self.speed_rpm = rpm;

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "{=str}: speed {} rpm, {} ms/step",
            self.name.as_str(),
            rpm,
            self.step_delay_ms
        );

        Ok(())
    }

    /// Request a different excitation mode.
    ///
    /// The mode is fixed at construction. Requesting the current mode is a
    /// no-op.
    ///
    /// # Errors
    ///
    /// Returns `MotorError::ModeChangeUnsupported` for any other mode.
    pub fn set_mode(&mut self, mode: StepMode) -> Result<()> {
        if mode == self.mode {
            return Ok(());
        }
        Err(MotorError::ModeChangeUnsupported {
            current: self.mode,
            requested: mode,
        }
        .into())
    }

    /// Move `delta` steps relative to the current position (blocking).
    ///
    /// Every step first waits `step_delay_ms`, then drives the pattern for
    /// the new position. A `delta` of 0 does nothing.
    ///
    /// # Errors
    ///
    /// Returns `MotorError::HardwareFault` if a pin cannot be driven. The
    /// motion stops there and the position stays at the last step whose
    /// pattern was fully applied.
    pub fn step(&mut self, delta: i64) -> Result<()> {
        if delta == 0 {
            return Ok(());
        }

        let start = self.position.steps().value();
        let target = start.saturating_add(delta);
        let direction: i64 = if target > start { 1 } else { -1 };

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "{=str}: moving {} steps from {}",
            self.name.as_str(),
            delta,
            start
        );

        let mut current = start;
        while current != target {
            current += direction;

            self.delay.delay_ms(self.step_delay_ms);
            let pattern = self.mode.pattern(current);
            self.apply(pattern)?;
            self.position.move_steps(direction);
        }

        #[cfg(feature = "defmt")]
        defmt::trace!("{=str}: at {}", self.name.as_str(), current);

        Ok(())
    }

    /// Drive every input low so the rotor free-wheels.
    ///
    /// The position is kept; the next step or [`hold`](Self::hold)
    /// re-energizes the coils.
    pub fn release_coils(&mut self) -> Result<()> {
        self.apply(RELEASED_PATTERN)
    }

    /// Re-apply the pattern for the current position.
    pub fn hold(&mut self) -> Result<()> {
        self.apply(self.current_pattern())
    }

    /// Release the pins and delay provider.
    pub fn release(self) -> ((IN1, IN2, IN3, IN4), DELAY) {
        ((self.in1, self.in2, self.in3, self.in4), self.delay)
    }

    fn apply(&mut self, pattern: CoilPattern) -> Result<()> {
        let [l1, l2, l3, l4] = pattern.levels();
        drive(&mut self.in1, l1)?;
        drive(&mut self.in2, l2)?;
        drive(&mut self.in3, l3)?;
        drive(&mut self.in4, l4)?;
        Ok(())
    }
}

fn drive<P: OutputPin>(pin: &mut P, high: bool) -> core::result::Result<(), MotorError> {
    let result = if high { pin.set_high() } else { pin.set_low() };
    result.map_err(|_| MotorError::HardwareFault)
}
