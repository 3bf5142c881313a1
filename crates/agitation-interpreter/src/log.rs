//! Dual-path structured logging: `defmt` on bare-metal builds, `tracing` on
//! `std` builds, compiled out entirely when neither feature is enabled.
//!
//! Mirrors `klipper-mcu-firmware::safety`'s use of `defmt::error!` for
//! fault reporting and `klipper-host`'s use of `tracing::{debug,warn}!` for
//! host-side diagnostics; this crate needs both since it targets either
//! side of that split.

macro_rules! log_debug {
    ($($arg:tt)*) => {
        #[cfg(feature = "defmt-logging")]
        defmt::debug!($($arg)*);
        #[cfg(all(feature = "std", not(feature = "defmt-logging")))]
        tracing::debug!($($arg)*);
    };
}

macro_rules! log_warn {
    ($($arg:tt)*) => {
        #[cfg(feature = "defmt-logging")]
        defmt::warn!($($arg)*);
        #[cfg(all(feature = "std", not(feature = "defmt-logging")))]
        tracing::warn!($($arg)*);
    };
}

pub(crate) use log_debug;
pub(crate) use log_warn;
