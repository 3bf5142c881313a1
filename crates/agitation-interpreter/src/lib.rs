//! # Agitation Interpreter
//!
//! A deterministic, tick-driven interpreter for film-development agitation
//! recipes (`no_std`-friendly).
//!
//! Two interpreters, layered:
//! - [`MovementInterpreter`] executes one linear sequence of `CW`/`CCW`/
//!   `Pause`/`Loop`/`WaitUser` movements against a [`motor_driver::
//!   MotorDriver`], one tick at a time, with a bounded stack of nested
//!   loop contexts.
//! - [`ProcessInterpreter`] walks an ordered list of named [`Step`]s,
//!   owning the movement interpreter and mediating `WaitUser` gates,
//!   pause/resume/skip/restart.
//!
//! Recipes ([`Process`]) are compile-time `&'static` data; see [`recipes`]
//! for the shipped reference processes (C-41, B&W standard development,
//! stand development).

#![cfg_attr(not(feature = "std"), no_std)]

pub mod config;
mod error;
mod interpreter;
mod log;
mod loop_context;
mod movement;
mod process;
mod recipe;
pub mod recipes;

pub use error::RecipeError;
pub use interpreter::{MovementInterpreter, TickResult};
pub use loop_context::LoopProgress;
pub use movement::{Movement, MovementKind, Ticks};
pub use process::{Phase, ProcessInterpreter};
pub use recipe::{Process, Step};
