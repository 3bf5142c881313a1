//! Scenario- and property-level coverage for `MovementInterpreter`, mirroring
//! the reference end-to-end transcripts and quantified invariants the
//! agitation-motor subsystem is specified against.

use agitation_interpreter::{Movement, MovementInterpreter, Ticks, TickResult};
use motor_driver::{MotorDriver, RecordingMotorDriver, Transition};

fn interpreter(body: &'static [Movement]) -> MovementInterpreter<RecordingMotorDriver> {
    MovementInterpreter::new(body, RecordingMotorDriver::new())
}

#[test]
fn simple_cw_pause_ccw_transcript() {
    const BODY: [Movement; 3] = [
        Movement::Cw { duration: Ticks(2) },
        Movement::Pause { duration: Ticks(1) },
        Movement::Ccw { duration: Ticks(2) },
    ];
    let mut m = interpreter(&BODY);

    assert_eq!(m.tick(), TickResult::Active); // CW=on
    assert_eq!(m.tick(), TickResult::Active); // hold
    assert_eq!(m.tick(), TickResult::Active); // CW=off, Pause
    assert_eq!(m.tick(), TickResult::Active); // CCW=on
    assert_eq!(m.tick(), TickResult::Active); // hold
    assert_eq!(m.tick(), TickResult::Done); // CCW=off, Done

    assert!(m.motor().is_stopped());
    assert_eq!(
        m.motor().history(),
        &[
            Transition::ClockwiseOn,
            Transition::ClockwiseOff,
            Transition::CounterClockwiseOn,
            Transition::CounterClockwiseOff,
        ]
    );
}

#[test]
fn count_bounded_loop_runs_body_exactly_n_times() {
    const CYCLE: [Movement; 2] = [
        Movement::Cw { duration: Ticks(1) },
        Movement::Pause { duration: Ticks(1) },
    ];
    const BODY: [Movement; 1] = [Movement::Loop {
        count: 3,
        max_duration: Ticks::ZERO,
        body: &CYCLE,
    }];
    let mut m = interpreter(&BODY);

    let mut done_at = None;
    for i in 1..=10 {
        if m.tick() == TickResult::Done {
            done_at = Some(i);
            break;
        }
    }
    let done_at = done_at.expect("interpreter should reach Done within 10 ticks");

    assert!(m.motor().is_stopped());
    let on_count = m
        .motor()
        .history()
        .iter()
        .filter(|t| **t == Transition::ClockwiseOn)
        .count();
    assert_eq!(on_count, 3, "the inversion should run exactly 3 times");
    let off_count = m
        .motor()
        .history()
        .iter()
        .filter(|t| **t == Transition::ClockwiseOff)
        .count();
    assert_eq!(off_count, 3);
    assert_eq!(done_at, 7, "3 iterations x 2 ticks each, plus one tick to unwind past the loop");
}

#[test]
fn duration_bounded_unbounded_loop_terminates_on_deadline() {
    const CYCLE: [Movement; 2] = [
        Movement::Cw { duration: Ticks(1) },
        Movement::Pause { duration: Ticks(1) },
    ];
    const BODY: [Movement; 1] = [Movement::Loop {
        count: 0,
        max_duration: Ticks(5),
        body: &CYCLE,
    }];
    let mut m = interpreter(&BODY);

    for _ in 0..5 {
        assert_eq!(m.tick(), TickResult::Active);
    }
    assert_eq!(m.tick(), TickResult::Done);
    assert!(m.motor().is_stopped());
    assert_eq!(m.depth(), 0);

    // Once Done, further ticks stay Done and keep the motor de-energized.
    assert_eq!(m.tick(), TickResult::Done);
    assert!(m.motor().is_stopped());
}

#[test]
fn outer_deadline_force_terminates_inner_unbounded_loop() {
    const INNER: [Movement; 2] = [
        Movement::Cw { duration: Ticks(1) },
        Movement::Pause { duration: Ticks(1) },
    ];
    const OUTER_BODY: [Movement; 1] = [Movement::Loop {
        count: 0,
        max_duration: Ticks::ZERO,
        body: &INNER,
    }];
    const BODY: [Movement; 1] = [Movement::Loop {
        count: 0,
        max_duration: Ticks(10),
        body: &OUTER_BODY,
    }];
    let mut m = interpreter(&BODY);

    let mut tick_count = 0;
    loop {
        tick_count += 1;
        assert!(tick_count <= 50, "interpreter never reached Done");
        if m.tick() == TickResult::Done {
            break;
        }
    }

    assert!(m.motor().is_stopped());
    assert_eq!(m.depth(), 0, "both loop frames must have unwound");
}

#[test]
fn zero_duration_movement_consumes_exactly_one_tick() {
    const BODY: [Movement; 2] = [
        Movement::Cw { duration: Ticks::ZERO },
        Movement::Pause { duration: Ticks::ZERO },
    ];
    let mut m = interpreter(&BODY);

    assert_eq!(m.tick(), TickResult::Active); // CW dispatched and immediately held for 0 further ticks
    assert_eq!(m.tick(), TickResult::Active); // Pause dispatched
    assert_eq!(m.tick(), TickResult::Done);

    assert_eq!(
        m.motor().history(),
        &[Transition::ClockwiseOn, Transition::ClockwiseOff]
    );
}

#[test]
fn loop_count_one_runs_body_exactly_once() {
    const CYCLE: [Movement; 1] = [Movement::Cw { duration: Ticks(1) }];
    const BODY: [Movement; 1] = [Movement::Loop {
        count: 1,
        max_duration: Ticks::ZERO,
        body: &CYCLE,
    }];
    let mut m = interpreter(&BODY);

    assert_eq!(m.tick(), TickResult::Active);
    assert_eq!(m.tick(), TickResult::Done);
    let on_count = m
        .motor()
        .history()
        .iter()
        .filter(|t| **t == Transition::ClockwiseOn)
        .count();
    assert_eq!(on_count, 1);
}

#[test]
fn empty_loop_body_pops_immediately_decrementing_within_one_tick() {
    const EMPTY: [Movement; 0] = [];
    const BODY: [Movement; 1] = [Movement::Loop {
        count: 5,
        max_duration: Ticks::ZERO,
        body: &EMPTY,
    }];
    let mut m = interpreter(&BODY);

    // The loop has nothing to execute; all 5 iterations collapse into the
    // same tick that dispatches it, and the interpreter is immediately Done.
    assert_eq!(m.tick(), TickResult::Done);
    assert!(m.motor().is_stopped());
    assert!(m.motor().history().is_empty());
}

#[test]
fn nested_loops_up_to_max_depth_push_and_pop_symmetrically() {
    const L3_BODY: [Movement; 1] = [Movement::Cw { duration: Ticks(1) }];
    const L2_BODY: [Movement; 1] = [Movement::Loop {
        count: 1,
        max_duration: Ticks::ZERO,
        body: &L3_BODY,
    }];
    const L1_BODY: [Movement; 1] = [Movement::Loop {
        count: 1,
        max_duration: Ticks::ZERO,
        body: &L2_BODY,
    }];
    const BODY: [Movement; 1] = [Movement::Loop {
        count: 1,
        max_duration: Ticks::ZERO,
        body: &L1_BODY,
    }];
    let mut m: MovementInterpreter<RecordingMotorDriver, 3> =
        MovementInterpreter::new(&BODY, RecordingMotorDriver::new());

    assert_eq!(m.tick(), TickResult::Active);
    assert_eq!(m.depth(), 3, "all three nested loops should be pushed");
    assert!(m.motor().is_clockwise());

    assert_eq!(m.tick(), TickResult::Done);
    assert_eq!(m.depth(), 0, "all three frames should have unwound");
    assert!(m.motor().is_stopped());
}

#[test]
fn loop_past_max_depth_is_silently_skipped() {
    const L4_BODY: [Movement; 1] = [Movement::Cw { duration: Ticks(1) }];
    const L3_BODY: [Movement; 1] = [Movement::Loop {
        count: 1,
        max_duration: Ticks::ZERO,
        body: &L4_BODY,
    }];
    const L2_BODY: [Movement; 1] = [Movement::Loop {
        count: 1,
        max_duration: Ticks::ZERO,
        body: &L3_BODY,
    }];
    const L1_BODY: [Movement; 1] = [Movement::Loop {
        count: 1,
        max_duration: Ticks::ZERO,
        body: &L2_BODY,
    }];
    const BODY: [Movement; 1] = [Movement::Loop {
        count: 1,
        max_duration: Ticks::ZERO,
        body: &L1_BODY,
    }];
    // Four levels of nesting against the default MAX_DEPTH of 3: the
    // innermost loop (guarding the CW movement) must be dropped, and the
    // CW movement inside it never dispatched.
    let mut m: MovementInterpreter<RecordingMotorDriver, 3> =
        MovementInterpreter::new(&BODY, RecordingMotorDriver::new());

    assert_eq!(m.tick(), TickResult::Done);
    assert!(m.motor().history().is_empty(), "the 4th-level loop's CW must never fire");
    assert!(m.motor().is_stopped());
    assert!(m.depth() <= 3);
}

#[test]
fn never_both_channels_energized_across_reversals() {
    const BODY: [Movement; 5] = [
        Movement::Cw { duration: Ticks(1) },
        Movement::Ccw { duration: Ticks(1) },
        Movement::Cw { duration: Ticks(1) },
        Movement::Ccw { duration: Ticks(1) },
        Movement::Pause { duration: Ticks(1) },
    ];
    let mut m = interpreter(&BODY);

    loop {
        assert!(!(m.motor().is_clockwise() && m.motor().is_counter_clockwise()));
        if m.tick() == TickResult::Done {
            break;
        }
        assert!(!(m.motor().is_clockwise() && m.motor().is_counter_clockwise()));
    }
    assert!(m.motor().is_stopped());
}

#[test]
fn reset_reproduces_identical_motor_history() {
    const CYCLE: [Movement; 4] = [
        Movement::Cw { duration: Ticks(2) },
        Movement::Pause { duration: Ticks(1) },
        Movement::Ccw { duration: Ticks(2) },
        Movement::Pause { duration: Ticks(1) },
    ];
    const BODY: [Movement; 1] = [Movement::Loop {
        count: 3,
        max_duration: Ticks::ZERO,
        body: &CYCLE,
    }];
    let mut fresh = interpreter(&BODY);
    let mut fresh_history = Vec::new();
    for _ in 0..20 {
        fresh.tick();
        fresh_history.push(fresh.motor().history().to_vec());
    }

    // Drive a second interpreter partway through the same recipe, reset it,
    // then replay the same number of ticks. `RecordingMotorDriver` keeps
    // accumulating history across the reset (there is no mutable accessor
    // to clear it), so the post-reset transcript is compared relative to
    // the length recorded right after `reset()`, not from index 0.
    let mut reused = interpreter(&BODY);
    for _ in 0..7 {
        reused.tick();
    }
    reused.reset();
    let baseline = reused.motor().history().len();
    let mut reused_history = Vec::new();
    for _ in 0..20 {
        reused.tick();
        reused_history.push(reused.motor().history()[baseline..].to_vec());
    }

    assert_eq!(fresh_history, reused_history);
}

#[test]
fn stopped_on_every_wait_and_done_observation() {
    const BODY: [Movement; 3] = [
        Movement::Cw { duration: Ticks(1) },
        Movement::Pause { duration: Ticks(1) },
        Movement::Ccw { duration: Ticks(1) },
    ];
    let mut m = interpreter(&BODY);
    m.tick();
    m.tick();
    m.tick();
    assert_eq!(m.tick(), TickResult::Done);
    assert!(m.motor().is_stopped());
}
