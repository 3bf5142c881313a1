//! Dynamic (text-format) recipe loading, a declared non-goal.
//!
//! The donor firmware carries a stubbed `agitation_process_from_yaml` entry
//! point that always fails; this mirrors it so a caller's code can be
//! written against the eventual signature without the core actually
//! parsing anything.

use crate::error::RecipeError;
use crate::recipe::Process;

/// Always fails. A conversion entry point for a future text recipe format
/// (e.g. YAML); no parser exists in this crate.
pub fn from_text(_source: &str) -> Result<&'static Process, RecipeError> {
    Err(RecipeError::Unsupported)
}
