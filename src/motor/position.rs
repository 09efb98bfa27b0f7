//! Position tracking for stepper motors.
//!
//! Provides absolute position tracking in sequencer steps with unit conversions.

use crate::config::units::{Degrees, Steps};

/// Motor position tracker.
///
/// Maintains absolute position in steps and provides unit conversions.
#[derive(Debug, Clone, Copy, Default)]
pub struct Position {
    /// Current position in steps (from power-on)
    steps: Steps,
    /// Steps per degree for conversions
    steps_per_degree: f32,
}

impl Position {
    /// Create a new position tracker at the origin.
    #[inline]
    pub fn new(steps_per_degree: f32) -> Self {
        Self {
            steps: Steps::default(),
            steps_per_degree,
        }
    }

    /// Create a tracker from the number of sequencer steps in one revolution.
    #[inline]
    pub fn for_revolution(steps_per_revolution: u32) -> Self {
        Self::new(steps_per_revolution as f32 / 360.0)
    }

    /// Get current position in steps.
    #[inline]
    pub fn steps(&self) -> Steps {
        self.steps
    }

    /// Get current position in degrees.
    #[inline]
    pub fn degrees(&self) -> Degrees {
        self.steps.to_degrees(self.steps_per_degree)
    }

    /// Move by a number of steps.
    #[inline]
    pub fn move_steps(&mut self, delta: i64) {
        self.steps = Steps(self.steps.0 + delta);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_tracking() {
        // 200 full steps, half-step mode: 400 steps/rev
        let mut pos = Position::for_revolution(400);

        assert_eq!(pos.steps().value(), 0);

        pos.move_steps(100);
        assert!((pos.degrees().value() - 90.0).abs() < 0.01);

        pos.move_steps(-300);
        assert_eq!(pos.steps().value(), -200);
        assert!((pos.degrees().value() + 180.0).abs() < 0.01);
    }
}
