//! A `std`-only `MotorDriver` that records every energize/de-energize
//! transition, for black-box assertions in the interpreter's test suite.
//! Plays the same role `embedded-hal-mock` plays for `GpioMotorDriver`,
//! but speaks in this domain's vocabulary (CW/CCW transitions) instead of
//! pin-level transactions.

extern crate std;

use std::vec::Vec;

/// One observed energize/de-energize transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    ClockwiseOn,
    ClockwiseOff,
    CounterClockwiseOn,
    CounterClockwiseOff,
}

/// An in-memory `MotorDriver` that records its transition history.
#[derive(Debug, Default)]
pub struct RecordingMotorDriver {
    cw_on: bool,
    ccw_on: bool,
    history: Vec<Transition>,
}

impl RecordingMotorDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// The full transition history since construction.
    pub fn history(&self) -> &[Transition] {
        &self.history
    }

    /// Clears the recorded history without altering the current channel
    /// state.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}

impl crate::MotorDriver for RecordingMotorDriver {
    fn clockwise(&mut self, on: bool) {
        if on {
            debug_assert!(!self.ccw_on, "CCW must be off before CW energizes");
            self.cw_on = true;
            self.history.push(Transition::ClockwiseOn);
        } else {
            self.cw_on = false;
            self.history.push(Transition::ClockwiseOff);
        }
    }

    fn counter_clockwise(&mut self, on: bool) {
        if on {
            debug_assert!(!self.cw_on, "CW must be off before CCW energizes");
            self.ccw_on = true;
            self.history.push(Transition::CounterClockwiseOn);
        } else {
            self.ccw_on = false;
            self.history.push(Transition::CounterClockwiseOff);
        }
    }

    fn is_clockwise(&self) -> bool {
        self.cw_on
    }

    fn is_counter_clockwise(&self) -> bool {
        self.ccw_on
    }
}
