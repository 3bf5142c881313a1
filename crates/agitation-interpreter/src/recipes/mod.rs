//! Compile-time reference recipes, as in the donor firmware.
//!
//! Each process is a plain `&'static` constant; there is no parser or
//! loader for the core. See [`dynamic`] for the stubbed text-loading entry
//! point the donor firmware also left unimplemented.

pub mod dynamic;

mod bw;
mod c41;
mod continuous_gentle;
mod stand;

pub use bw::BW_STANDARD_DEVELOPMENT;
pub use c41::C41_FULL_PROCESS;
pub use continuous_gentle::CONTINUOUS_GENTLE;
pub use stand::STAND_DEVELOPMENT;

use crate::movement::{Movement, Ticks};

/// The canonical 4-movement agitation pattern: CW(1)-Pause(1)-CCW(1)-
/// Pause(1).
pub const STANDARD_INVERSION: [Movement; 4] = [
    Movement::Cw {
        duration: Ticks(1),
    },
    Movement::Pause {
        duration: Ticks(1),
    },
    Movement::Ccw {
        duration: Ticks(1),
    },
    Movement::Pause {
        duration: Ticks(1),
    },
];

/// A gentler variant of [`STANDARD_INVERSION`] (CW(2)-Pause(1)-CCW(2)-
/// Pause(1)), used by processes whose chemistry calls for slower
/// inversions, such as C-41 color developer.
pub const GENTLE_INVERSION: [Movement; 4] = [
    Movement::Cw {
        duration: Ticks(2),
    },
    Movement::Pause {
        duration: Ticks(1),
    },
    Movement::Ccw {
        duration: Ticks(2),
    },
    Movement::Pause {
        duration: Ticks(1),
    },
];
