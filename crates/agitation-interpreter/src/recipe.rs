//! Static recipe data model: [`Step`] and [`Process`]. Instances are
//! compile-time `&'static` constants; see [`crate::recipes`] for the
//! reference processes.

use crate::movement::Movement;

/// An ordered sequence of movements with a human-readable name,
/// description, and target temperature.
///
/// Temperature is purely informational: the core does not close a thermal
/// loop, it only reports the target alongside the current reading a host
/// feeds in via [`crate::ProcessInterpreter::set_current_temperature_c`].
#[derive(Debug, Clone, Copy)]
pub struct Step {
    pub name: &'static str,
    pub description: &'static str,
    pub target_temperature_c: f32,
    pub body: &'static [Movement],
}

/// An ordered sequence of [`Step`]s describing a full film-development
/// workflow.
#[derive(Debug, Clone, Copy)]
pub struct Process {
    pub name: &'static str,
    pub film_type: &'static str,
    pub tank_type: &'static str,
    pub chemistry: &'static str,
    pub nominal_temperature_c: f32,
    pub steps: &'static [Step],
}
