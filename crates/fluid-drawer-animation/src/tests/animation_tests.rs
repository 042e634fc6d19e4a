use super::*;
use fluid_drawer_core::RuntimeHandle;
use std::cell::Cell;
use std::rc::Rc;

const FRAME_NANOS: u64 = 16_666_667; // ~60 FPS

fn pump(runtime: &RuntimeHandle, frame_time: &mut u64, max_frames: usize) {
    for _ in 0..max_frames {
        if !runtime.has_pending_frame_callbacks() {
            break;
        }
        *frame_time += FRAME_NANOS;
        runtime.drain_frame_callbacks(*frame_time);
    }
}

#[test]
fn easing_linear_is_identity() {
    assert_eq!(Easing::Linear.transform(0.0), 0.0);
    assert_eq!(Easing::Linear.transform(0.5), 0.5);
    assert_eq!(Easing::Linear.transform(1.0), 1.0);
}

#[test]
fn easing_bounds_are_correct() {
    let easings = [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
        Easing::FastOutSlowIn,
    ];

    for easing in easings {
        assert!(
            easing.transform(0.0).abs() < 0.01,
            "start should be ~0 for {:?}",
            easing
        );
        assert!(
            (easing.transform(1.0) - 1.0).abs() < 0.01,
            "end should be ~1 for {:?}",
            easing
        );
    }
}

#[test]
fn tween_interpolates_and_settles_at_target() {
    let runtime = RuntimeHandle::new();
    let anim = Animatable::new(0.0f32, runtime.clone());
    let state = anim.state();

    anim.animate_to(1.0, AnimationSpec::linear(300));
    assert!(anim.is_animating());

    let mut frame_time = 0u64;
    let mut saw_midpoint = false;
    for _ in 0..40 {
        if !runtime.has_pending_frame_callbacks() {
            break;
        }
        frame_time += FRAME_NANOS;
        runtime.drain_frame_callbacks(frame_time);
        let value = state.get();
        if value > 0.0 && value < 1.0 {
            saw_midpoint = true;
        }
    }

    assert!(saw_midpoint, "animation should report intermediate values");
    assert_eq!(state.get(), 1.0);
    assert!(!anim.is_animating());
    assert!(!runtime.has_pending_frame_callbacks());
}

#[test]
fn completion_fires_exactly_once() {
    let runtime = RuntimeHandle::new();
    let anim = Animatable::new(0.0f32, runtime.clone());
    let completions = Rc::new(Cell::new(0u32));
    let counter = Rc::clone(&completions);

    anim.animate_to_then(1.0, AnimationSpec::linear(100), move || {
        counter.set(counter.get() + 1)
    });

    let mut frame_time = 0u64;
    pump(&runtime, &mut frame_time, 40);
    assert_eq!(completions.get(), 1);

    // Nothing left scheduled, nothing fires again.
    pump(&runtime, &mut frame_time, 4);
    assert_eq!(completions.get(), 1);
}

#[test]
fn retarget_restarts_from_current_value_and_drops_old_completion() {
    let runtime = RuntimeHandle::new();
    let anim = Animatable::new(0.0f32, runtime.clone());
    let state = anim.state();
    let first_done = Rc::new(Cell::new(false));
    let flag = Rc::clone(&first_done);

    anim.animate_to_then(1.0, AnimationSpec::linear(300), move || flag.set(true));

    // Run part of the tween, then retarget back toward 0.
    let mut frame_time = 0u64;
    for _ in 0..5 {
        frame_time += FRAME_NANOS;
        runtime.drain_frame_callbacks(frame_time);
    }
    let mid = state.get();
    assert!(mid > 0.0 && mid < 1.0);

    anim.animate_to(0.0, AnimationSpec::linear(300));
    assert_eq!(anim.target(), 0.0);

    pump(&runtime, &mut frame_time, 60);
    assert_eq!(state.get(), 0.0);
    assert!(
        !first_done.get(),
        "superseded completion must never be invoked"
    );
}

#[test]
fn snap_cancels_in_flight_tween() {
    let runtime = RuntimeHandle::new();
    let anim = Animatable::new(0.0f32, runtime.clone());
    let state = anim.state();
    let done = Rc::new(Cell::new(false));
    let flag = Rc::clone(&done);

    anim.animate_to_then(1.0, AnimationSpec::linear(300), move || flag.set(true));
    let mut frame_time = FRAME_NANOS;
    runtime.drain_frame_callbacks(frame_time);

    anim.snap_to(42.0);
    assert_eq!(state.get(), 42.0);
    assert!(!anim.is_animating());

    pump(&runtime, &mut frame_time, 40);
    assert_eq!(state.get(), 42.0);
    assert!(!done.get());
}

#[test]
fn zero_duration_completes_immediately_after_start_frame() {
    let runtime = RuntimeHandle::new();
    let anim = Animatable::new(0.0f32, runtime.clone());
    let state = anim.state();

    anim.animate_to(5.0, AnimationSpec::linear(0));
    let mut frame_time = 0u64;
    pump(&runtime, &mut frame_time, 4);

    assert_eq!(state.get(), 5.0);
    assert!(!anim.is_animating());
}
