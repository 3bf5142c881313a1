//! GPIO-backed `MotorDriver`, active-low, matching the reference hardware
//! wiring (`pin_cw`/`pin_ccw` driven low to energize).

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::{MotorDriver, MotorDriverConfig};

/// A `MotorDriver` backed by two active-low GPIO output pins.
///
/// Energizing a channel first de-energizes the opposite one and waits
/// `config.reversal_dead_time_us` before asserting the new channel, so a
/// direction reversal never leaves both channels energized even for a
/// single instruction.
pub struct GpioMotorDriver<CW, CCW, D> {
    cw_pin: CW,
    ccw_pin: CCW,
    delay: D,
    config: MotorDriverConfig,
    cw_on: bool,
    ccw_on: bool,
}

impl<CW, CCW, D, E> GpioMotorDriver<CW, CCW, D>
where
    CW: OutputPin<Error = E>,
    CCW: OutputPin<Error = E>,
    D: DelayNs,
{
    /// Builds a new driver and leaves both channels de-energized.
    pub fn new(mut cw_pin: CW, mut ccw_pin: CCW, delay: D, config: MotorDriverConfig) -> Self {
        // Active-low: "high" is the inactive/de-energized state.
        let _ = cw_pin.set_high();
        let _ = ccw_pin.set_high();
        Self {
            cw_pin,
            ccw_pin,
            delay,
            config,
            cw_on: false,
            ccw_on: false,
        }
    }
}

impl<CW, CCW, D, E> MotorDriver for GpioMotorDriver<CW, CCW, D>
where
    CW: OutputPin<Error = E>,
    CCW: OutputPin<Error = E>,
    D: DelayNs,
{
    fn clockwise(&mut self, on: bool) {
        if on {
            // Safety check - ensure the opposite channel is stopped first.
            let _ = self.ccw_pin.set_high();
            self.ccw_on = false;
            self.delay.delay_us(self.config.reversal_dead_time_us);
            let _ = self.cw_pin.set_low();
            self.cw_on = true;
        } else {
            let _ = self.cw_pin.set_high();
            self.cw_on = false;
        }
    }

    fn counter_clockwise(&mut self, on: bool) {
        if on {
            let _ = self.cw_pin.set_high();
            self.cw_on = false;
            self.delay.delay_us(self.config.reversal_dead_time_us);
            let _ = self.ccw_pin.set_low();
            self.ccw_on = true;
        } else {
            let _ = self.ccw_pin.set_high();
            self.ccw_on = false;
        }
    }

    fn is_clockwise(&self) -> bool {
        self.cw_on
    }

    fn is_counter_clockwise(&self) -> bool {
        self.ccw_on
    }
}
