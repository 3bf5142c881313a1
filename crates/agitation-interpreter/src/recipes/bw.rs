//! Standard black & white development: an initial agitation burst, a rest,
//! then a single periodic agitation cycle.

use super::STANDARD_INVERSION;
use crate::movement::{Movement, Ticks};
use crate::recipe::{Process, Step};

const DEVELOPMENT_BODY: [Movement; 4] = [
    Movement::Loop {
        count: 4,
        max_duration: Ticks(0),
        body: &STANDARD_INVERSION,
    },
    Movement::Pause {
        duration: Ticks(24),
    },
    Movement::Loop {
        count: 2,
        max_duration: Ticks(0),
        body: &STANDARD_INVERSION,
    },
    Movement::WaitUser {
        message: "Development complete. Ready for fixer?",
    },
];

const BW_STEPS: [Step; 1] = [Step {
    name: "Development",
    description: "Initial agitation burst, then a single periodic agitation cycle.",
    target_temperature_c: 20.0,
    body: &DEVELOPMENT_BODY,
}];

/// The reference black & white standard-development process.
pub const BW_STANDARD_DEVELOPMENT: Process = Process {
    name: "B&W Standard Development",
    film_type: "black & white",
    tank_type: "Paterson 2-reel",
    chemistry: "generic B&W developer",
    nominal_temperature_c: 20.0,
    steps: &BW_STEPS,
};
