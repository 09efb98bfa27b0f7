//! Property tests for step timing and sequencing.

mod common;

use coil_stepper::motor::timing::step_delay_ms;
use coil_stepper::{StepMode, Steps};
use proptest::prelude::*;

use common::{delay_count, last_pattern, recording_motor};

fn any_mode() -> impl Strategy<Value = StepMode> {
    prop_oneof![Just(StepMode::Full), Just(StepMode::Half)]
}

proptest! {
    #[test]
    fn delay_is_ceiling_of_ms_per_step(
        steps in 1u16..=4096,
        mode in any_mode(),
        rpm in 1u32..=1000,
    ) {
        let effective = steps as f64 * mode.steps_multiplier() as f64;
        let expected = (60_000.0 / (effective * rpm as f64)).ceil() as u32;
        prop_assert_eq!(step_delay_ms(steps, mode, rpm).unwrap(), expected);
    }

    #[test]
    fn pattern_depends_only_on_position(
        position in -100_000i64..100_000,
        mode in any_mode(),
    ) {
        let len = mode.sequence_len() as i64;
        prop_assert_eq!(mode.pattern(position), mode.pattern(position + len));
        prop_assert_eq!(mode.pattern(position), mode.pattern(position - len));
    }

    #[test]
    fn net_motion_round_trip(
        start in -50i64..50,
        n in -50i64..50,
        mode in any_mode(),
    ) {
        let (mut motor, log) = recording_motor(200, mode);
        motor.step(start).unwrap();
        let before = last_pattern(&log);
        let delays_before = delay_count(&log);

        motor.step(n).unwrap();
        motor.step(-n).unwrap();

        prop_assert_eq!(motor.position_steps(), Steps(start));
        prop_assert_eq!(last_pattern(&log), before);
        prop_assert_eq!(delay_count(&log) - delays_before, 2 * n.unsigned_abs() as usize);
    }
}
