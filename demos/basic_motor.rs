//! Basic motor control example.
//!
//! Drives a 28BYJ-48 style motor through full-step and half-step moves and
//! prints the coil pattern after each step.
//!
//! This example uses in-memory pins, so it runs without real hardware.
//!
//! Run with: `cargo run --example basic_motor`

use coil_stepper::{Result, StepMode, StepperMotorBuilder};

/// Mock delay provider for demonstration.
struct MockDelay;

impl embedded_hal::delay::DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        // In real code, this would use hardware timer
        std::thread::sleep(std::time::Duration::from_nanos(ns as u64));
    }
}

/// Mock output pin for demonstration.
struct MockPin {
    state: bool,
}

impl MockPin {
    fn new() -> Self {
        Self { state: false }
    }
}

impl embedded_hal::digital::OutputPin for MockPin {
    fn set_high(&mut self) -> core::result::Result<(), Self::Error> {
        self.state = true;
        Ok(())
    }

    fn set_low(&mut self) -> core::result::Result<(), Self::Error> {
        self.state = false;
        Ok(())
    }
}

impl embedded_hal::digital::ErrorType for MockPin {
    type Error = core::convert::Infallible;
}

fn run(mode: StepMode) -> Result<()> {
    println!("=== {} step ===", mode);

    let mut motor = StepperMotorBuilder::new()
        .name("demo_motor")
        .pins(MockPin::new(), MockPin::new(), MockPin::new(), MockPin::new())
        .delay(MockDelay)
        .steps_per_revolution(2048)
        .mode(mode)
        .build()?;

    println!(
        "Default speed: {} rpm, {} ms/step",
        motor.speed_rpm(),
        motor.step_delay_ms()
    );

    motor.set_speed(15)?;
    println!(
        "After set_speed(15): {} ms/step, {} steps/rev",
        motor.step_delay_ms(),
        motor.effective_steps_per_revolution()
    );

    println!("Forward {} steps:", mode.sequence_len());
    for _ in 0..mode.sequence_len() {
        motor.step(1)?;
        println!(
            "  position {:>3}  pattern {}",
            motor.position_steps().value(),
            motor.current_pattern()
        );
    }

    println!("Reverse {} steps:", mode.sequence_len());
    for _ in 0..mode.sequence_len() {
        motor.step(-1)?;
        println!(
            "  position {:>3}  pattern {}",
            motor.position_steps().value(),
            motor.current_pattern()
        );
    }

    motor.step(-3)?;
    println!(
        "After step(-3): {} steps ({:.2} degrees), pattern {}",
        motor.position_steps().value(),
        motor.position_degrees().value(),
        motor.current_pattern()
    );

    motor.release_coils()?;
    let ((in1, in2, in3, in4), _delay) = motor.release();
    println!(
        "Coils released: IN1={} IN2={} IN3={} IN4={}\n",
        in1.state, in2.state, in3.state, in4.state
    );

    Ok(())
}

fn main() -> Result<()> {
    println!("=== Basic Motor Control Example ===\n");

    run(StepMode::Full)?;
    run(StepMode::Half)?;

    println!("=== Example Complete ===");
    Ok(())
}
