//! The C-41 full process: Pre-Wash, Color Developer, Bleach, Stabilizer.
//!
//! The Color Developer step is the recipe that exercises nested,
//! duration-bounded loops: an outer loop capped at 210 ticks (3.5 minutes)
//! iterating a one-minute agitation cycle (a 50-tick pause followed by up
//! to 10 ticks of gentle inversion), terminated by the outer deadline
//! rather than by the cycle completing evenly.

use super::{GENTLE_INVERSION, STANDARD_INVERSION};
use crate::movement::{Movement, Ticks};
use crate::recipe::{Process, Step};

const PRE_WASH_BODY: [Movement; 3] = [
    Movement::Loop {
        count: 4,
        max_duration: Ticks(0),
        body: &STANDARD_INVERSION,
    },
    Movement::Pause {
        duration: Ticks(30),
    },
    Movement::WaitUser {
        message: "Pre-wash complete. Ready for developer?",
    },
];

const COLOR_DEVELOPER_MINUTE_CYCLE: [Movement; 2] = [
    Movement::Pause {
        duration: Ticks(50),
    },
    Movement::Loop {
        count: 0,
        max_duration: Ticks(10),
        body: &GENTLE_INVERSION,
    },
];

const COLOR_DEVELOPER_BODY: [Movement; 2] = [
    Movement::Loop {
        count: 0,
        max_duration: Ticks(210),
        body: &COLOR_DEVELOPER_MINUTE_CYCLE,
    },
    Movement::WaitUser {
        message: "Development complete. Ready for bleach?",
    },
];

const BLEACH_BODY: [Movement; 4] = [
    Movement::Loop {
        count: 3,
        max_duration: Ticks(0),
        body: &STANDARD_INVERSION,
    },
    Movement::Pause {
        duration: Ticks(300),
    },
    Movement::Loop {
        count: 2,
        max_duration: Ticks(0),
        body: &STANDARD_INVERSION,
    },
    Movement::WaitUser {
        message: "Bleach complete. Ready for stabilizer?",
    },
];

const STABILIZER_BODY: [Movement; 3] = [
    Movement::Loop {
        count: 2,
        max_duration: Ticks(0),
        body: &STANDARD_INVERSION,
    },
    Movement::Pause {
        duration: Ticks(60),
    },
    Movement::WaitUser {
        message: "Stabilizer complete. Process finished.",
    },
];

const C41_STEPS: [Step; 4] = [
    Step {
        name: "Pre-Wash",
        description: "Brings the film and tank up to temperature before development.",
        target_temperature_c: 38.0,
        body: &PRE_WASH_BODY,
    },
    Step {
        name: "Color Developer",
        description: "Develops the latent image. Gentle, duration-bounded agitation.",
        target_temperature_c: 38.0,
        body: &COLOR_DEVELOPER_BODY,
    },
    Step {
        name: "Bleach",
        description: "Converts developed silver back to a soluble form.",
        target_temperature_c: 38.0,
        body: &BLEACH_BODY,
    },
    Step {
        name: "Stabilizer",
        description: "Final rinse and dye stabilization before drying.",
        target_temperature_c: 38.0,
        body: &STABILIZER_BODY,
    },
];

/// The reference C-41 process: four steps, each gated by a `WaitUser`
/// confirmation before the next begins.
pub const C41_FULL_PROCESS: Process = Process {
    name: "C-41 Full Process",
    film_type: "C-41 color negative",
    tank_type: "Paterson 2-reel",
    chemistry: "Kodak Flexicolor C-41",
    nominal_temperature_c: 38.0,
    steps: &C41_STEPS,
};
