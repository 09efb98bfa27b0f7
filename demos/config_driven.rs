//! Example: Configuration-driven motor construction.
//!
//! This example demonstrates how to:
//! - Parse and validate motor configuration from TOML
//! - Build a motor by name from the configuration
//! - Observe how a bad configuration is reported
//!
//! Run with: `cargo run --example config_driven --features std`

use coil_stepper::{parse_config, Result, StepperMotorBuilder};

/// Mock coil pin for demonstration.
struct MockCoilPin;

impl embedded_hal::digital::ErrorType for MockCoilPin {
    type Error = core::convert::Infallible;
}

impl embedded_hal::digital::OutputPin for MockCoilPin {
    fn set_low(&mut self) -> core::result::Result<(), Self::Error> {
        Ok(())
    }

    fn set_high(&mut self) -> core::result::Result<(), Self::Error> {
        Ok(())
    }
}

/// Mock delay for demonstration.
struct MockDelay;

impl embedded_hal::delay::DelayNs for MockDelay {
    fn delay_ns(&mut self, _ns: u32) {
        // In real code, this would actually delay
    }
}

const CONFIG: &str = r#"
[motors.dial]
name = "Dial"
steps_per_revolution = 2048
mode = "half"
speed_rpm = 12
pins = [
    { port = 2, pin = 0 },
    { port = 2, pin = 1 },
    { port = 2, pin = 2 },
    { port = 2, pin = 3 },
]

[motors.feeder]
name = "Feeder"
steps_per_revolution = 200
"#;

const BAD_CONFIG: &str = r#"
[motors.dial]
name = "Dial"
steps_per_revolution = 2048
pins = [
    { port = 2, pin = 0 },
    { port = 2, pin = 1 },
    { port = 2, pin = 0 },
    { port = 2, pin = 3 },
]
"#;

fn main() -> Result<()> {
    println!("=== Configuration Loading ===");

    let config = parse_config(CONFIG)?;
    println!("Loaded configuration with {} motor(s)", config.motors.len());

    for name in config.motor_names() {
        let mut motor = StepperMotorBuilder::new()
            .from_config(&config, name)?
            .pins(MockCoilPin, MockCoilPin, MockCoilPin, MockCoilPin)
            .delay(MockDelay)
            .build()?;

        println!("\nMotor '{}' ({}):", name, motor.name());
        println!("  Mode: {}", motor.mode());
        println!(
            "  Speed: {} rpm -> {} ms/step",
            motor.speed_rpm(),
            motor.step_delay_ms()
        );

        let quarter = motor.effective_steps_per_revolution() as i64 / 4;
        println!(
            "  Quarter turn: {} steps, {} ms",
            quarter,
            motor.motion_duration_ms(quarter)
        );

        motor.step(quarter)?;
        println!(
            "  Now at {} steps ({:.1} degrees)",
            motor.position_steps().value(),
            motor.position_degrees().value()
        );
    }

    println!("\n=== Validation ===");
    match parse_config(BAD_CONFIG) {
        Ok(_) => println!("Unexpectedly accepted"),
        Err(e) => println!("Rejected: {}", e),
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
