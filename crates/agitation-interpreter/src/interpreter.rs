//! The lower-level movement interpreter: executes one step's movement
//! sequence, one tick at a time, against a [`MotorDriver`].

use heapless::Vec as HVec;
use motor_driver::MotorDriver;

use crate::config::MAX_DEPTH as DEFAULT_MAX_DEPTH;
use crate::log::{log_debug, log_warn};
use crate::loop_context::{LoopContext, LoopProgress};
use crate::movement::{Movement, MovementKind, Ticks};

/// The result of advancing an interpreter by exactly one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickResult {
    /// The tick advanced interpreter state (possibly just loop-frame
    /// bookkeeping); the run is not yet finished.
    Active,
    /// The top-level sequence and all nested loops have completed. The
    /// motor is de-energized.
    Done,
    /// Execution is suspended on a `WaitUser` gate carrying this message.
    /// The motor is de-energized; nothing advances until the host calls
    /// the owning interpreter's `confirm`.
    AwaitingUser(&'static str),
}

/// Executes one linear [`Movement`] sequence against a [`MotorDriver`],
/// tick by tick, maintaining a bounded stack of nested [`LoopContext`]
/// frames.
///
/// `MAX_DEPTH` bounds the loop-nesting depth with a fixed-capacity
/// `heapless::Vec`, no dynamic allocation, and a recipe that would need to
/// push past it has its offending `Loop` silently skipped (see
/// [`Self::tick`]'s dispatch of [`Movement::Loop`]).
pub struct MovementInterpreter<M, const MAX_DEPTH: usize = DEFAULT_MAX_DEPTH> {
    root_body: &'static [Movement],
    current_body: &'static [Movement],
    current_body_length: usize,
    current_index: usize,
    stack: HVec<LoopContext, MAX_DEPTH>,
    current_movement_kind: MovementKind,
    ticks_remaining: Ticks,
    motor: M,
}

impl<M: MotorDriver, const MAX_DEPTH: usize> MovementInterpreter<M, MAX_DEPTH> {
    /// Installs `body` as the top-level sequence and takes ownership of
    /// `motor`. The motor is de-energized on return.
    pub fn new(body: &'static [Movement], motor: M) -> Self {
        let mut interpreter = Self {
            root_body: body,
            current_body: body,
            current_body_length: body.len(),
            current_index: 0,
            stack: HVec::new(),
            current_movement_kind: MovementKind::Pause,
            ticks_remaining: Ticks::ZERO,
            motor,
        };
        interpreter.stop_current();
        interpreter
    }

    /// Re-installs `body` and replaces the motor port. Equivalent to
    /// building a fresh interpreter, but reuses the allocation (such as it
    /// is; the loop stack is fixed-capacity regardless).
    pub fn init(&mut self, body: &'static [Movement], motor: M) {
        self.motor = motor;
        self.set_body(body);
    }

    /// Re-seeds the interpreter from the original body and the already-
    /// owned motor port, without replacing either.
    pub fn reset(&mut self) {
        let body = self.root_body;
        self.set_body(body);
    }

    /// Retargets the interpreter at a new top-level body, keeping the
    /// already-owned motor. Used by [`crate::ProcessInterpreter`] to move
    /// on to each step's sequence in turn.
    pub fn set_body(&mut self, body: &'static [Movement]) {
        self.root_body = body;
        self.current_body = body;
        self.current_body_length = body.len();
        self.current_index = 0;
        self.stack.clear();
        self.ticks_remaining = Ticks::ZERO;
        self.stop_current();
    }

    /// De-energizes the motor, whatever movement was in flight.
    pub fn stop(&mut self) {
        self.stop_current();
    }

    /// Advances the interpreter by exactly one tick.
    pub fn tick(&mut self) -> TickResult {
        if let Some(result) = self.unwind() {
            return result;
        }

        if self.account_loop_durations() {
            // An outer deadline fired. The movement that was in flight (if
            // any) is abandoned mid-tick; de-energize before unwinding, per
            // the "every transition out of Cw/Ccw, including on
            // termination" rule.
            self.stop_current();
            self.ticks_remaining = Ticks::ZERO;
            if let Some(result) = self.unwind() {
                return result;
            }
            return TickResult::Active;
        }

        if self.ticks_remaining.get() > 0 {
            self.ticks_remaining = self.ticks_remaining.dec();
            return TickResult::Active;
        }

        self.dispatch()
    }

    /// The movement kind currently driving (or last driving) the motor.
    pub fn current_movement_kind(&self) -> MovementKind {
        self.current_movement_kind
    }

    /// Ticks left to hold the movement currently in flight.
    pub fn ticks_remaining(&self) -> Ticks {
        self.ticks_remaining
    }

    /// Current loop-stack nesting depth.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Progress of the innermost active loop frame, if any.
    pub fn innermost_loop(&self) -> Option<LoopProgress> {
        self.stack.last().map(LoopProgress::from)
    }

    /// Whether the interpreter is currently suspended on a `WaitUser` gate.
    pub fn is_awaiting_user(&self) -> bool {
        matches!(self.current_movement_kind, MovementKind::AwaitingUser)
    }

    /// Borrows the owned motor port, for host-side observation.
    pub fn motor(&self) -> &M {
        &self.motor
    }

    /// Advances past a pending `WaitUser` movement. A no-op if the
    /// interpreter isn't currently awaiting one.
    pub(crate) fn confirm_wait(&mut self) {
        if self.is_awaiting_user() {
            self.current_index += 1;
            self.current_movement_kind = MovementKind::Pause;
        }
    }

    fn stop_current(&mut self) {
        match self.current_movement_kind {
            MovementKind::Cw => self.motor.clockwise(false),
            MovementKind::Ccw => self.motor.counter_clockwise(false),
            MovementKind::Pause | MovementKind::AwaitingUser => {}
        }
        self.current_movement_kind = MovementKind::Pause;
    }

    /// Increments `elapsed_duration` for every live frame (root to top);
    /// marks a frame `terminated` once its `max_duration` elapses, and
    /// cascades termination to every frame nested beneath it. Returns
    /// whether any frame was (newly) terminated this tick.
    fn account_loop_durations(&mut self) -> bool {
        let mut terminate_from = None;
        for (index, frame) in self.stack.iter_mut().enumerate() {
            frame.elapsed_duration = frame.elapsed_duration.inc();
            if !frame.terminated
                && !frame.is_duration_unbounded()
                && frame.elapsed_duration.get() >= frame.max_duration.get()
            {
                frame.terminated = true;
                if terminate_from.is_none() {
                    terminate_from = Some(index);
                }
            }
        }
        if let Some(index) = terminate_from {
            log_debug!("loop frame {} hit its max_duration deadline", index);
            for frame in self.stack.iter_mut().skip(index + 1) {
                frame.terminated = true;
            }
            true
        } else {
            false
        }
    }

    /// Pops and restarts loop frames until the interpreter is positioned at
    /// a runnable movement, or the root body is exhausted. Returns
    /// `Some(TickResult::Done)` once that happens; `None` means there is a
    /// runnable movement at `current_body[current_index]`.
    fn unwind(&mut self) -> Option<TickResult> {
        loop {
            let top_terminated = self.stack.last().map_or(false, |frame| frame.terminated);
            if self.ticks_remaining.get() > 0
                || (self.current_index < self.current_body_length && !top_terminated)
            {
                return None;
            }

            let Some(frame) = self.stack.last_mut() else {
                self.stop_current();
                return Some(TickResult::Done);
            };

            if frame.terminated {
                self.pop_frame();
                continue;
            }

            // Natural end of the frame's body (current_index reached its length).
            if frame.original_count > 0 {
                frame.remaining_iterations = frame.remaining_iterations.saturating_sub(1);
                if frame.remaining_iterations > 0 {
                    self.current_index = 0;
                    continue;
                }
                self.pop_frame();
            } else {
                // Unbounded by count: restart the body.
                self.current_index = 0;
            }
        }
    }

    fn pop_frame(&mut self) {
        let frame = self.stack.pop().expect("pop_frame called on empty stack");
        self.current_body = self.stack.last().map_or(self.root_body, |parent| parent.body);
        self.current_body_length = self.current_body.len();
        self.current_index = frame.parent_index + 1;
    }

    /// Dispatches `current_body[current_index]`, looping internally (no
    /// tick consumed) across `Loop` pushes and no-op skips until a concrete
    /// movement or `WaitUser` is reached.
    fn dispatch(&mut self) -> TickResult {
        loop {
            if let Some(result) = self.unwind() {
                return result;
            }

            match self.current_body[self.current_index] {
                Movement::Cw { duration } => {
                    self.stop_current();
                    self.motor.clockwise(true);
                    self.current_movement_kind = MovementKind::Cw;
                    self.ticks_remaining = Ticks::hold_after_dispatch(duration);
                    self.current_index += 1;
                    return TickResult::Active;
                }
                Movement::Ccw { duration } => {
                    self.stop_current();
                    self.motor.counter_clockwise(true);
                    self.current_movement_kind = MovementKind::Ccw;
                    self.ticks_remaining = Ticks::hold_after_dispatch(duration);
                    self.current_index += 1;
                    return TickResult::Active;
                }
                Movement::Pause { duration } => {
                    self.stop_current();
                    self.ticks_remaining = Ticks::hold_after_dispatch(duration);
                    self.current_index += 1;
                    return TickResult::Active;
                }
                Movement::Loop {
                    count,
                    max_duration,
                    body,
                } => {
                    if self.stack.len() == MAX_DEPTH {
                        log_warn!(
                            "loop nesting would exceed MAX_DEPTH ({}); skipping",
                            MAX_DEPTH
                        );
                        self.current_index += 1;
                        continue;
                    }
                    let frame = LoopContext::new(self.current_index, count, max_duration, body);
                    self.stack
                        .push(frame)
                        .ok()
                        .expect("capacity already checked above");
                    self.current_body = body;
                    self.current_body_length = body.len();
                    self.current_index = 0;
                    continue;
                }
                Movement::WaitUser { message } => {
                    self.stop_current();
                    self.current_movement_kind = MovementKind::AwaitingUser;
                    return TickResult::AwaitingUser(message);
                }
            }
        }
    }
}
