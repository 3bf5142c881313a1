//! Stand development: a brief initial agitation followed by a single long
//! undisturbed pause.

use super::STANDARD_INVERSION;
use crate::movement::{Movement, Ticks};
use crate::recipe::{Process, Step};

const STAND_BODY: [Movement; 3] = [
    Movement::Loop {
        count: 3,
        max_duration: Ticks(0),
        body: &STANDARD_INVERSION,
    },
    Movement::Pause {
        duration: Ticks(3600),
    },
    Movement::WaitUser {
        message: "Stand development complete.",
    },
];

const STAND_STEPS: [Step; 1] = [Step {
    name: "Stand",
    description: "Brief initial agitation, then a full hour undisturbed.",
    target_temperature_c: 20.0,
    body: &STAND_BODY,
}];

/// The reference stand-development process.
pub const STAND_DEVELOPMENT: Process = Process {
    name: "Stand Development",
    film_type: "black & white",
    tank_type: "Paterson 2-reel",
    chemistry: "highly diluted B&W developer",
    nominal_temperature_c: 20.0,
    steps: &STAND_STEPS,
};
