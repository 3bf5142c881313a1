//! Error types for the interpreter crate.
//!
//! There is deliberately no `Result` return from `tick()` on either
//! interpreter: a tick cannot fail by construction (recipes are `&'static`
//! data, so dangling indices aren't expressible). Fallibility is confined
//! to recipe loading, matching `motion::errors::PlannerError`'s scope.

/// Errors produced while loading or converting a recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecipeError {
    /// Dynamic recipe loading from a text format is not implemented; the
    /// core only ever executes compile-time `&'static` recipes.
    Unsupported,
}

impl core::fmt::Display for RecipeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RecipeError::Unsupported => {
                write!(f, "dynamic recipe loading from text is not supported")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for RecipeError {}
