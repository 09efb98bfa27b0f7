//! Recording fakes shared by the integration tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::convert::Infallible;
use std::rc::Rc;

use coil_stepper::{CoilPattern, StepMode, StepperMotor, StepperMotorBuilder};
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, OutputPin};

/// Something observable the driver did to the hardware.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Pin `index` (0 = IN1) driven to `level`.
    Pin(usize, bool),
    /// Blocking delay of the given milliseconds.
    DelayMs(u32),
}

pub type EventLog = Rc<RefCell<Vec<Event>>>;

pub struct RecordingPin {
    index: usize,
    log: EventLog,
}

impl ErrorType for RecordingPin {
    type Error = Infallible;
}

impl OutputPin for RecordingPin {
    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.log.borrow_mut().push(Event::Pin(self.index, true));
        Ok(())
    }

    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.log.borrow_mut().push(Event::Pin(self.index, false));
        Ok(())
    }
}

pub struct RecordingDelay {
    log: EventLog,
}

impl DelayNs for RecordingDelay {
    fn delay_ns(&mut self, _ns: u32) {
        panic!("driver should only use millisecond delays");
    }

    fn delay_ms(&mut self, ms: u32) {
        self.log.borrow_mut().push(Event::DelayMs(ms));
    }
}

pub type RecordingMotor =
    StepperMotor<RecordingPin, RecordingPin, RecordingPin, RecordingPin, RecordingDelay>;

pub fn recording_builder() -> (
    StepperMotorBuilder<RecordingPin, RecordingPin, RecordingPin, RecordingPin, RecordingDelay>,
    EventLog,
) {
    let log: EventLog = Rc::new(RefCell::new(Vec::new()));
    let pin = |index| RecordingPin {
        index,
        log: log.clone(),
    };
    let builder = StepperMotorBuilder::new()
        .pins(pin(0), pin(1), pin(2), pin(3))
        .delay(RecordingDelay { log: log.clone() });
    (builder, log)
}

pub fn recording_motor(steps_per_revolution: u16, mode: StepMode) -> (RecordingMotor, EventLog) {
    let (builder, log) = recording_builder();
    let motor = builder
        .steps_per_revolution(steps_per_revolution)
        .mode(mode)
        .build()
        .expect("valid motor");
    (motor, log)
}

/// The four pin events that drive `pattern`.
pub fn pattern_events(pattern: CoilPattern) -> [Event; 4] {
    let [a, b, c, d] = pattern.levels();
    [
        Event::Pin(0, a),
        Event::Pin(1, b),
        Event::Pin(2, c),
        Event::Pin(3, d),
    ]
}

/// Last complete pattern written to the pins, if any.
pub fn last_pattern(log: &EventLog) -> Option<CoilPattern> {
    let mut levels = [None; 4];
    for event in log.borrow().iter() {
        if let Event::Pin(index, level) = *event {
            levels[index] = Some(level);
        }
    }
    match levels {
        [Some(a), Some(b), Some(c), Some(d)] => Some(CoilPattern([a, b, c, d])),
        _ => None,
    }
}

pub fn delay_count(log: &EventLog) -> usize {
    log.borrow()
        .iter()
        .filter(|e| matches!(e, Event::DelayMs(_)))
        .count()
}
