//! Motor configuration from TOML.

use heapless::String;
use serde::Deserialize;

use crate::motor::timing::{self, DEFAULT_RPM};
use crate::motor::StepMode;

use super::pins::PinId;

/// Complete motor configuration from TOML.
#[derive(Debug, Clone, Deserialize)]
pub struct MotorConfig {
    /// Human-readable name (max 32 chars).
    pub name: String<32>,

    /// Full steps per mechanical revolution (200 for 1.8° motors, 2048 for a geared 28BYJ-48).
    pub steps_per_revolution: u16,

    /// Excitation mode.
    #[serde(default)]
    pub mode: StepMode,

    /// Speed applied after construction.
    #[serde(default = "default_speed_rpm")]
    pub speed_rpm: u32,

    /// Optional pin identities for IN1..IN4, checked for duplicates.
    #[serde(default)]
    pub pins: Option<[PinId; 4]>,
}

fn default_speed_rpm() -> u32 {
    DEFAULT_RPM
}

impl MotorConfig {
    /// Sequencer steps per revolution (doubled in half-step mode).
    pub fn effective_steps_per_revolution(&self) -> u32 {
        timing::effective_steps_per_revolution(self.steps_per_revolution, self.mode)
    }
}
