//! Compile-time tunables for the interpreter.
//!
//! There is no runtime configuration file: recipes are `&'static` data and
//! the core's non-goals explicitly exclude dynamic loading. What follows is
//! the fixed-capacity equivalent of a config struct, matching how
//! `ThermalMonitor::new` in the donor firmware takes its limits as
//! explicit constructor parameters rather than reading a global.

/// Maximum nesting depth of `Loop` movements, matching the donor's
/// `#define MAX_LOOP_DEPTH 3`. Exposed as the default for the
/// [`crate::MovementInterpreter`]'s `MAX_DEPTH` const generic; a caller
/// that wants a different bound can instantiate the type with a different
/// value.
pub const MAX_DEPTH: usize = 3;
