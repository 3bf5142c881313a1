//! The upper-level process interpreter: walks a [`Process`]'s ordered
//! steps, owning a [`MovementInterpreter`] for the current one.

use motor_driver::MotorDriver;

use crate::config::MAX_DEPTH as DEFAULT_MAX_DEPTH;
use crate::interpreter::{MovementInterpreter, TickResult};
use crate::log::log_debug;
use crate::movement::MovementKind;
use crate::loop_context::LoopProgress;
use crate::recipe::{Process, Step};

/// Lifecycle phase of a [`ProcessInterpreter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running,
    Complete,
    /// Reserved for a future fallible `MotorDriver`; no code path in this
    /// crate reaches it on its own; see [`ProcessInterpreter::fail`].
    Error,
}

/// Sequences a [`Process`]'s steps, mediating `WaitUser` gates and exposing
/// pause/skip/restart to a host/UI layer.
pub struct ProcessInterpreter<M, const MAX_DEPTH: usize = DEFAULT_MAX_DEPTH> {
    process: &'static Process,
    current_step_index: usize,
    movement_interpreter: MovementInterpreter<M, MAX_DEPTH>,
    phase: Phase,
    waiting_for_user: bool,
    user_message: Option<&'static str>,
    paused: bool,
    target_temperature_c: f32,
    current_temperature_c: f32,
    last_error: Option<&'static str>,
}

impl<M: MotorDriver, const MAX_DEPTH: usize> ProcessInterpreter<M, MAX_DEPTH> {
    /// Stores `process` and takes ownership of `motor`. Does not start any
    /// movement; the first step's body is installed lazily on the first
    /// `tick()`.
    pub fn new(process: &'static Process, motor: M) -> Self {
        Self {
            process,
            current_step_index: 0,
            movement_interpreter: MovementInterpreter::new(&[], motor),
            phase: Phase::Idle,
            waiting_for_user: false,
            user_message: None,
            paused: false,
            target_temperature_c: 0.0,
            current_temperature_c: 0.0,
            last_error: None,
        }
    }

    /// Re-seeds from `process`, replacing the motor port. Equivalent to
    /// building a fresh interpreter.
    pub fn init(&mut self, process: &'static Process, motor: M) {
        self.process = process;
        self.current_step_index = 0;
        self.movement_interpreter.init(&[], motor);
        self.phase = Phase::Idle;
        self.waiting_for_user = false;
        self.user_message = None;
        self.paused = false;
        self.target_temperature_c = 0.0;
        self.current_temperature_c = 0.0;
        self.last_error = None;
    }

    /// One tick of work on the current step, or advancement to the next
    /// step if the current one has completed.
    pub fn tick(&mut self) -> TickResult {
        if self.current_step_index >= self.process.steps.len() {
            self.phase = Phase::Complete;
            self.movement_interpreter.stop();
            return TickResult::Done;
        }

        if self.waiting_for_user {
            return TickResult::AwaitingUser(self.user_message.unwrap_or(""));
        }

        if self.paused {
            self.movement_interpreter.stop();
            return TickResult::Active;
        }

        if matches!(self.phase, Phase::Idle | Phase::Complete) {
            let step = self.current_step();
            self.movement_interpreter.set_body(step.body);
            self.target_temperature_c = step.target_temperature_c;
            self.phase = Phase::Running;
            log_debug!("starting step {}", self.current_step_index);
        }

        match self.movement_interpreter.tick() {
            TickResult::AwaitingUser(message) => {
                self.waiting_for_user = true;
                self.user_message = Some(message);
                TickResult::AwaitingUser(message)
            }
            TickResult::Active => TickResult::Active,
            TickResult::Done => {
                self.current_step_index += 1;
                self.phase = Phase::Idle;
                if self.current_step_index >= self.process.steps.len() {
                    self.phase = Phase::Complete;
                    TickResult::Done
                } else {
                    TickResult::Active
                }
            }
        }
    }

    /// Acknowledges a pending `WaitUser`, advancing past it. A no-op when
    /// not currently waiting.
    pub fn confirm(&mut self) {
        if !self.waiting_for_user {
            return;
        }
        self.waiting_for_user = false;
        self.user_message = None;
        self.movement_interpreter.confirm_wait();
    }

    /// Sets the pause flag and immediately de-energizes the motor.
    /// Idempotent.
    pub fn pause(&mut self) {
        self.paused = true;
        self.movement_interpreter.stop();
    }

    /// Clears the pause flag. Idempotent.
    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// De-energizes, clears any pending wait, and advances to the next
    /// step. Transitions to `Complete` if that was the last step.
    pub fn skip_current_step(&mut self) {
        self.movement_interpreter.stop();
        self.waiting_for_user = false;
        self.user_message = None;
        self.current_step_index += 1;
        self.phase = if self.current_step_index >= self.process.steps.len() {
            Phase::Complete
        } else {
            Phase::Idle
        };
    }

    /// Re-initializes the movement interpreter from the current step's
    /// body, discarding any progress made on it so far.
    pub fn restart_current_step(&mut self) {
        if self.current_step_index >= self.process.steps.len() {
            return;
        }
        let step = self.current_step();
        self.movement_interpreter.set_body(step.body);
        self.target_temperature_c = step.target_temperature_c;
        self.waiting_for_user = false;
        self.user_message = None;
        self.phase = Phase::Running;
    }

    /// Returns to `Idle` at the first step, from any phase. Unlike
    /// [`Self::init`], the process reference and motor are kept as-is.
    pub fn reset(&mut self) {
        self.movement_interpreter.stop();
        self.current_step_index = 0;
        self.waiting_for_user = false;
        self.user_message = None;
        self.paused = false;
        self.phase = Phase::Idle;
        self.last_error = None;
    }

    /// Widening point for a future fallible `MotorDriver`: no code path in
    /// this crate calls it, but a caller wiring one in can drive the
    /// `Error` transition explicitly.
    pub fn fail(&mut self, reason: &'static str) {
        self.movement_interpreter.stop();
        self.phase = Phase::Error;
        self.last_error = Some(reason);
    }

    /// Index of the step currently running (or about to run).
    pub fn current_step_index(&self) -> usize {
        self.current_step_index
    }

    /// The step currently running (or about to run). Panics if called
    /// after the process has completed; check `phase()` first.
    pub fn current_step(&self) -> &'static Step {
        &self.process.steps[self.current_step_index]
    }

    /// The movement kind currently driving the motor.
    pub fn current_movement_kind(&self) -> MovementKind {
        self.movement_interpreter.current_movement_kind()
    }

    /// Progress of the innermost active loop frame, if any.
    pub fn innermost_loop(&self) -> Option<LoopProgress> {
        self.movement_interpreter.innermost_loop()
    }

    /// Current loop-stack nesting depth.
    pub fn depth(&self) -> usize {
        self.movement_interpreter.depth()
    }

    pub fn target_temperature_c(&self) -> f32 {
        self.target_temperature_c
    }

    pub fn current_temperature_c(&self) -> f32 {
        self.current_temperature_c
    }

    /// Feeds a sensor reading for host-side rendering; purely
    /// informational; no thermal loop is closed here.
    pub fn set_current_temperature_c(&mut self, temperature_c: f32) {
        self.current_temperature_c = temperature_c;
    }

    pub fn wait_message(&self) -> Option<&'static str> {
        self.user_message
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_waiting_for_user(&self) -> bool {
        self.waiting_for_user
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn last_error(&self) -> Option<&'static str> {
        self.last_error
    }

    /// Borrows the owned motor port, for host-side observation.
    pub fn motor(&self) -> &M {
        self.movement_interpreter.motor()
    }
}
