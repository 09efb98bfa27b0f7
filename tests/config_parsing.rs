//! Configuration-driven motor construction.

mod common;

use coil_stepper::config::{parse_config, validate_config, SystemConfig};
use coil_stepper::{ConfigError, Error, StepMode, Steps};

use common::recording_builder;

const CONFIG: &str = r#"
[motors.dial]
name = "Dial"
steps_per_revolution = 2048
mode = "half"
speed_rpm = 15
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

#[test]
fn parse_multiple_motors() {
    let config = parse_config(CONFIG).expect("Should parse config");

    let names: Vec<_> = config.motor_names().collect();
    assert_eq!(names, ["dial", "feeder"]);

    let feeder = config.motor("feeder").expect("Feeder should exist");
    assert_eq!(feeder.mode, StepMode::Full);
    assert_eq!(feeder.speed_rpm, 10);
    assert!(config.motor("nonexistent").is_none());
}

#[test]
fn build_motor_from_config() {
    let config = parse_config(CONFIG).unwrap();
    let (builder, _log) = recording_builder();

    let mut motor = builder.from_config(&config, "dial").unwrap().build().unwrap();

    assert_eq!(motor.name(), "Dial");
    assert_eq!(motor.mode(), StepMode::Half);
    assert_eq!(motor.effective_steps_per_revolution(), 4096);
    // ceil(60000 / (4096 * 15)) = ceil(0.976) = 1
    assert_eq!(motor.step_delay_ms(), 1);

    motor.step(1024).unwrap();
    assert_eq!(motor.position_steps(), Steps(1024));
    assert!((motor.position_degrees().value() - 90.0).abs() < 0.01);
}

#[test]
fn unknown_motor_name() {
    let config = parse_config(CONFIG).unwrap();
    let (builder, _log) = recording_builder();

    let result = builder.from_config(&config, "gantry");
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::MotorNotFound(_)))
    ));
}

#[test]
fn conflicting_pins_fail_validation() {
    let toml_str = r#"
[motors.dial]
name = "Dial"
steps_per_revolution = 2048
pins = [
    { port = 2, pin = 0 },
    { port = 2, pin = 1 },
    { port = 2, pin = 1 },
    { port = 2, pin = 3 },
]
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    assert!(matches!(
        validate_config(&config),
        Err(Error::Config(ConfigError::PinConflict { .. }))
    ));
    assert!(parse_config(toml_str).is_err());
}

#[test]
fn unknown_mode_rejected() {
    let toml_str = r#"
[motors.dial]
name = "Dial"
steps_per_revolution = 2048
mode = "quarter"
"#;

    assert!(matches!(
        parse_config(toml_str),
        Err(Error::Config(ConfigError::ParseError(_)))
    ));
}

#[test]
fn empty_config_is_valid() {
    let config = SystemConfig::default();
    assert!(validate_config(&config).is_ok());
    assert!(parse_config("").unwrap().motor_names().next().is_none());
}
