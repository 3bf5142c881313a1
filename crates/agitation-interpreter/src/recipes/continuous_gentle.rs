//! A continuous, unbounded-by-either-bound gentle agitation, grounded in
//! the donor firmware's `CONTINUOUS_GENTLE_STATIC` table.
//!
//! This is deliberately not a well-formed recipe on its own: the body's
//! `Loop` has both `count == 0` and `max_duration == 0`, and it never
//! reaches `Done`. It exists to be wrapped by a caller that supplies the
//! outer bound (e.g. a host-side timer that calls `pause()` after a fixed
//! wall-clock duration), and is exercised in tests purely as the
//! unbounded-loop edge case.

use super::GENTLE_INVERSION;
use crate::movement::{Movement, Ticks};
use crate::recipe::{Process, Step};

const CONTINUOUS_GENTLE_BODY: [Movement; 1] = [Movement::Loop {
    count: 0,
    max_duration: Ticks(0),
    body: &GENTLE_INVERSION,
}];

const CONTINUOUS_GENTLE_STEPS: [Step; 1] = [Step {
    name: "Continuous Gentle Agitation",
    description: "Unbounded gentle inversion; the host supplies the stopping condition.",
    target_temperature_c: 20.0,
    body: &CONTINUOUS_GENTLE_BODY,
}];

/// A process wrapping the unbounded gentle-agitation body. Not intended to
/// be run to `Done`; the host stops it externally (e.g. `pause()` or
/// `skip_current_step()` on a timer).
pub const CONTINUOUS_GENTLE: Process = Process {
    name: "Continuous Gentle Agitation",
    film_type: "any",
    tank_type: "any",
    chemistry: "any",
    nominal_temperature_c: 20.0,
    steps: &CONTINUOUS_GENTLE_STEPS,
};
