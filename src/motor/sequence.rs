//! Coil excitation sequences for 4-wire steppers.
//!
//! The pattern driven onto the coils is a pure function of the absolute
//! position and the excitation mode.

use core::fmt;

use serde::Deserialize;

/// Logical levels for the four coil inputs (IN1, IN2, IN3, IN4).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CoilPattern(pub [bool; 4]);

impl CoilPattern {
    /// Build a pattern from four levels, `1` meaning high.
    #[inline]
    pub const fn new(in1: u8, in2: u8, in3: u8, in4: u8) -> Self {
        Self([in1 != 0, in2 != 0, in3 != 0, in4 != 0])
    }

    /// Get the level for each input in IN1..IN4 order.
    #[inline]
    pub const fn levels(self) -> [bool; 4] {
        self.0
    }

    /// Number of inputs driven high.
    pub fn energized(self) -> usize {
        self.0.iter().filter(|&&level| level).count()
    }
}

impl fmt::Display for CoilPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for level in self.0 {
            f.write_str(if level { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// Pattern driven when the motor is constructed, whatever the mode.
pub const POWER_ON_PATTERN: CoilPattern = CoilPattern::new(1, 0, 1, 0);

/// Pattern with every input low (coils released).
pub const RELEASED_PATTERN: CoilPattern = CoilPattern::new(0, 0, 0, 0);

/// Full-step sequence, two coils energized in every state.
pub const FULL_STEP_SEQUENCE: [CoilPattern; 4] = [
    CoilPattern::new(1, 0, 1, 0),
    CoilPattern::new(0, 1, 1, 0),
    CoilPattern::new(0, 1, 0, 1),
    CoilPattern::new(1, 0, 0, 1),
];

/// Half-step sequence, alternating two-coil and one-coil states.
pub const HALF_STEP_SEQUENCE: [CoilPattern; 8] = [
    CoilPattern::new(1, 0, 1, 0),
    CoilPattern::new(0, 0, 1, 0),
    CoilPattern::new(0, 1, 1, 0),
    CoilPattern::new(0, 1, 0, 0),
    CoilPattern::new(0, 1, 0, 1),
    CoilPattern::new(0, 0, 0, 1),
    CoilPattern::new(1, 0, 0, 1),
    CoilPattern::new(1, 0, 0, 0),
];

/// Excitation mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(rename_all = "snake_case")]
pub enum StepMode {
    /// Four states per cycle, maximum torque.
    #[default]
    Full,
    /// Eight states per cycle, double angular resolution.
    Half,
}

impl StepMode {
    /// Get the excitation table for this mode.
    #[inline]
    pub fn sequence(self) -> &'static [CoilPattern] {
        match self {
            StepMode::Full => &FULL_STEP_SEQUENCE,
            StepMode::Half => &HALF_STEP_SEQUENCE,
        }
    }

    /// Number of states in one excitation cycle.
    #[inline]
    pub fn sequence_len(self) -> usize {
        self.sequence().len()
    }

    /// Sequencer steps per full motor step.
    #[inline]
    pub const fn steps_multiplier(self) -> u32 {
        match self {
            StepMode::Full => 1,
            StepMode::Half => 2,
        }
    }

    /// Pattern to drive when the motor is at `position`.
    #[inline]
    pub fn pattern(self, position: i64) -> CoilPattern {
        let table = self.sequence();
        table[phase_index(position, table.len())]
    }
}

impl fmt::Display for StepMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepMode::Full => f.write_str("full"),
            StepMode::Half => f.write_str("half"),
        }
    }
}

/// Table index for a position.
///
/// Takes the magnitude of the truncating remainder, so `-1` maps to index 1
/// rather than `len - 1`.
#[inline]
pub fn phase_index(position: i64, len: usize) -> usize {
    (position % len as i64).unsigned_abs() as usize
}
