//! Speed to step-delay conversion.

use crate::error::{ConfigError, Result};

use super::sequence::StepMode;

/// Speed applied when a motor is constructed.
pub const DEFAULT_RPM: u32 = 10;

const MS_PER_MINUTE: u64 = 60_000;

/// Sequencer steps per revolution, doubled in half-step mode.
#[inline]
pub fn effective_steps_per_revolution(steps_per_revolution: u16, mode: StepMode) -> u32 {
    steps_per_revolution as u32 * mode.steps_multiplier()
}

/// Milliseconds to hold each step at `rpm`, rounded up.
///
/// Computes `ceil(60000 / (effective_steps_per_revolution * rpm))` exactly
/// in integer arithmetic.
///
/// # Errors
///
/// - `ConfigError::InvalidStepsPerRevolution` if `steps_per_revolution` is 0
/// - `ConfigError::InvalidSpeed` if `rpm` is 0
pub fn step_delay_ms(steps_per_revolution: u16, mode: StepMode, rpm: u32) -> Result<u32> {
    if steps_per_revolution == 0 {
        return Err(ConfigError::InvalidStepsPerRevolution(steps_per_revolution).into());
    }
    if rpm == 0 {
        return Err(ConfigError::InvalidSpeed(rpm).into());
    }

    // u32 * u32 always fits in u64
    let steps_per_minute =
        effective_steps_per_revolution(steps_per_revolution, mode) as u64 * rpm as u64;
    let delay = (MS_PER_MINUTE + steps_per_minute - 1) / steps_per_minute;

    Ok(delay as u32)
}

/// Total blocking time for a move of `delta` steps.
#[inline]
pub fn motion_duration_ms(delay_ms: u32, delta: i64) -> u64 {
    (delay_ms as u64).saturating_mul(delta.unsigned_abs())
}
