//! End-to-end drawer behavior, driven through the headless robot host.
//!
//! Geometry used throughout: viewport 800 high, drawer 350 high unless a
//! test says otherwise, so the panel rests at y=450 with the touch strip
//! spanning [450, 480).

use fluid_drawer::{
    DispatchOutcome, DrawerConfig, EmptyContent, FluidDrawer, TouchAreaStyle,
};
use fluid_drawer_core::{OsFamily, Point, PointerEvent, PointerEventKind, RuntimeHandle};
use fluid_drawer_testing::{DrawerRobot, NullKeyboardService, RobotOptions, FRAME_NANOS};
use std::cell::Cell;
use std::rc::Rc;

fn open_robot() -> DrawerRobot {
    DrawerRobot::open_drawer(RobotOptions::default())
}

#[test]
fn starts_unmounted_and_inert() {
    let mut robot = DrawerRobot::new(RobotOptions::default());
    assert!(!robot.drawer().is_mounted());
    assert!(!robot.scene().mounted);
    assert!(robot.scene().panel.is_none());

    assert_eq!(robot.tap(200.0, 200.0), DispatchOutcome::Ignored);
    assert_eq!(robot.close_count(), 0);
}

#[test]
fn opening_mounts_immediately_and_tweens_in() {
    let mut robot = DrawerRobot::new(RobotOptions::default());
    robot.set_open(true);

    // Mounted before a single frame runs; offset still at full height.
    assert!(robot.drawer().is_mounted());
    assert_eq!(robot.drawer().offset(), 350.0);
    assert_eq!(robot.drawer().opacity(), 0.0);

    // Mid-tween: both values strictly between their endpoints.
    robot.advance_frames(10);
    let offset = robot.drawer().offset();
    let opacity = robot.drawer().opacity();
    assert!(offset > 0.0 && offset < 350.0, "offset was {offset}");
    assert!(opacity > 0.0 && opacity < 1.0, "opacity was {opacity}");

    // The 300 ms tween is done within 20 frames.
    robot.advance_frames(10);
    assert_eq!(robot.drawer().offset(), 0.0);
    assert_eq!(robot.drawer().opacity(), 1.0);
    assert_eq!(robot.scene().panel.as_ref().unwrap().translate_y, 0.0);
}

#[test]
fn mounting_open_starts_visible_and_tweens_in() {
    let mut robot = DrawerRobot::new(RobotOptions {
        open: true,
        ..RobotOptions::default()
    });
    assert!(robot.drawer().is_mounted());
    assert_eq!(robot.drawer().opacity(), 1.0);
    assert_eq!(robot.drawer().offset(), 350.0);

    robot.settle();
    assert_eq!(robot.drawer().offset(), 0.0);
}

#[test]
fn closing_unmounts_only_after_opacity_completes() {
    let mut robot = open_robot();
    robot.set_open(false);

    // Exit animation in flight: still in the render tree.
    robot.advance_frames(10);
    assert!(robot.drawer().is_mounted());

    robot.advance_frames(10);
    assert!(!robot.drawer().is_mounted());
    assert_eq!(robot.drawer().offset(), 350.0);
    assert_eq!(robot.drawer().opacity(), 0.0);
    assert!(robot.scene().panel.is_none());
}

#[test]
fn rapid_toggle_keeps_drawer_mounted() {
    let mut robot = open_robot();
    robot.set_open(false);
    robot.advance_frames(6);
    robot.set_open(true);
    robot.settle();

    // The exit's unmount completion was superseded; last write wins.
    assert!(robot.drawer().is_mounted());
    assert_eq!(robot.drawer().offset(), 0.0);
    assert_eq!(robot.drawer().opacity(), 1.0);
}

#[test]
fn short_drag_settles_back_without_dismissing() {
    let mut robot = open_robot();
    robot.drag(Point::new(200.0, 460.0), Point::new(200.0, 580.0));

    // Tracked 1:1 while dragging, release at 120 < 200.
    assert_eq!(robot.drawer().offset(), 120.0);
    assert_eq!(robot.close_count(), 0);

    robot.settle();
    assert_eq!(robot.drawer().offset(), 0.0);
    assert_eq!(robot.close_count(), 0);
}

#[test]
fn long_drag_dismisses_exactly_once_without_snap_back() {
    let mut robot = open_robot();
    robot.drag(Point::new(200.0, 460.0), Point::new(200.0, 710.0));

    assert_eq!(robot.close_count(), 1);
    // No snap-back was scheduled; the offset stays where the finger left
    // it until the caller flips `open`.
    assert!(!robot.runtime().has_pending_frame_callbacks());
    assert_eq!(robot.drawer().offset(), 250.0);

    robot.set_open(false);
    robot.settle();
    assert!(!robot.drawer().is_mounted());
    assert_eq!(robot.close_count(), 1);
}

#[test]
fn dismiss_scenario_with_custom_height() {
    let mut robot = DrawerRobot::open_drawer(RobotOptions {
        drawer_height: 400.0,
        ..RobotOptions::default()
    });

    // Panel rests at y=400; drag the strip down 250.
    robot.drag(Point::new(200.0, 410.0), Point::new(200.0, 660.0));
    assert_eq!(robot.close_count(), 1);
    assert!(!robot.runtime().has_pending_frame_callbacks());

    robot.set_open(false);
    robot.settle();
    assert_eq!(robot.drawer().offset(), 400.0);
}

#[test]
fn horizontal_drag_is_never_claimed() {
    let mut robot = open_robot();
    robot.clear_content_events();
    robot.drag(Point::new(200.0, 460.0), Point::new(400.0, 480.0));

    assert_eq!(robot.close_count(), 0);
    assert_eq!(robot.drawer().offset(), 0.0);

    // Down, all ten moves, and the release reached the content.
    let events = robot.content_events();
    assert_eq!(events.len(), 12);
    assert_eq!(events.first().unwrap().kind, PointerEventKind::Down);
    assert_eq!(events.last().unwrap().kind, PointerEventKind::Up);
}

#[test]
fn upward_drag_is_never_claimed() {
    let mut robot = open_robot();
    robot.clear_content_events();
    robot.drag(Point::new(200.0, 470.0), Point::new(200.0, 300.0));

    assert_eq!(robot.close_count(), 0);
    assert_eq!(robot.drawer().offset(), 0.0);
    assert_eq!(robot.content_events().len(), 12);
}

#[test]
fn claimed_drag_cancels_content_touches() {
    let mut robot = open_robot();
    robot.clear_content_events();

    assert_eq!(robot.touch_down(200.0, 460.0), DispatchOutcome::Content);
    assert_eq!(robot.touch_move(200.0, 510.0), DispatchOutcome::Drag);
    assert_eq!(robot.touch_move(200.0, 560.0), DispatchOutcome::Drag);
    robot.touch_up();

    let events = robot.content_events();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].kind, PointerEventKind::Down);
    assert_eq!(events[1].kind, PointerEventKind::Cancel);
}

#[test]
fn drag_offset_is_unclamped_above_drawer_height() {
    let mut robot = open_robot();
    robot.touch_down(200.0, 460.0);
    robot.touch_move(200.0, 860.0);

    assert_eq!(robot.drawer().offset(), 400.0);
    let panel = robot.scene().panel.unwrap();
    assert!(panel.translate_y > panel.height);

    assert_eq!(robot.touch_up(), DispatchOutcome::Drag);
    assert_eq!(robot.close_count(), 1);
}

#[test]
fn backdrop_tap_closes_once_per_tap() {
    let mut robot = open_robot();

    assert_eq!(robot.tap(200.0, 200.0), DispatchOutcome::BackdropTap);
    assert_eq!(robot.close_count(), 1);

    assert_eq!(robot.tap(300.0, 100.0), DispatchOutcome::BackdropTap);
    assert_eq!(robot.close_count(), 2);
}

#[test]
fn untouchable_backdrop_ignores_taps() {
    let mut robot = DrawerRobot::open_drawer(RobotOptions {
        backdrop_touchable: false,
        ..RobotOptions::default()
    });

    assert_eq!(robot.tap(200.0, 200.0), DispatchOutcome::Ignored);
    assert_eq!(robot.close_count(), 0);
    assert!(!robot.scene().backdrop.unwrap().touchable);
}

#[test]
fn panel_body_touches_go_to_content() {
    let mut robot = open_robot();
    robot.clear_content_events();

    assert_eq!(robot.tap(200.0, 600.0), DispatchOutcome::Content);
    assert_eq!(robot.close_count(), 0);
    assert_eq!(robot.content_events().len(), 2);
}

#[test]
fn handle_visibility_follows_config() {
    let robot = open_robot();
    assert!(robot.scene().panel.unwrap().handle.is_some());

    let robot = DrawerRobot::open_drawer(RobotOptions {
        handle_visible: false,
        ..RobotOptions::default()
    });
    assert!(robot.scene().panel.unwrap().handle.is_none());
}

#[test]
fn keyboard_subscription_uses_family_channels_and_tears_down_once() {
    let robot = DrawerRobot::new(RobotOptions {
        os_family: OsFamily::Apple,
        ..RobotOptions::default()
    });
    let channels = robot.keyboard_service().subscribed_channels();
    assert_eq!(channels.len(), 1);
    assert_eq!(channels[0].show, "keyboardWillShow");
    assert_eq!(channels[0].hide, "keyboardWillHide");
    assert_eq!(robot.keyboard_service().live_subscriptions(), 1);

    let keyboard = robot.unmount();
    assert_eq!(keyboard.live_subscriptions(), 0);
}

#[test]
fn android_family_subscribes_did_channels() {
    let robot = DrawerRobot::new(RobotOptions::default());
    let channels = robot.keyboard_service().subscribed_channels();
    assert_eq!(channels[0].show, "keyboardDidShow");
    assert_eq!(channels[0].hide, "keyboardDidHide");
}

#[test]
fn keyboard_show_only_records_height() {
    let mut robot = open_robot();
    robot.show_keyboard(300.0);

    assert_eq!(robot.drawer().keyboard_height(), 300.0);
    assert_eq!(robot.drawer().offset(), 0.0);
    // No animation was scheduled by the show notification.
    assert!(!robot.runtime().has_pending_frame_callbacks());
}

#[test]
fn keyboard_hide_resets_height_and_settles_offset() {
    let mut robot = open_robot();
    robot.show_keyboard(300.0);

    // Leave the panel displaced by an unfinished drag, then hide.
    robot.touch_down(200.0, 460.0);
    robot.touch_move(200.0, 560.0);
    robot.touch_up();
    robot.hide_keyboard(160);

    assert_eq!(robot.drawer().keyboard_height(), 0.0);
    assert!(robot.runtime().has_pending_frame_callbacks());
    robot.settle();
    assert_eq!(robot.drawer().offset(), 0.0);
}

#[test]
fn missing_keyboard_capability_degrades_silently() {
    let runtime = RuntimeHandle::new();
    let close_count = Rc::new(Cell::new(0u32));
    let counter = Rc::clone(&close_count);
    let config = DrawerConfig::new(
        move || counter.set(counter.get() + 1),
        TouchAreaStyle::default(),
    );

    // A host without keyboard notifications still mounts and runs.
    let mut drawer = FluidDrawer::mount(
        config,
        Box::new(EmptyContent),
        false,
        runtime.clone(),
        &NullKeyboardService,
        OsFamily::Android,
        800.0,
    );
    assert_eq!(drawer.keyboard_height(), 0.0);

    drawer.set_open(true);
    let mut now = 0u64;
    for _ in 0..20 {
        now += FRAME_NANOS;
        runtime.drain_frame_callbacks(now);
    }
    assert_eq!(drawer.offset(), 0.0);
    assert_eq!(drawer.opacity(), 1.0);
    assert_eq!(drawer.keyboard_height(), 0.0);

    // Drag-to-dismiss is unaffected by the missing capability.
    drawer.handle_pointer(PointerEvent::down(Point::new(200.0, 460.0)));
    drawer.handle_pointer(PointerEvent::moved(Point::new(200.0, 710.0)));
    drawer.handle_pointer(PointerEvent::up(Point::new(200.0, 710.0)));
    assert_eq!(close_count.get(), 1);
}

#[test]
fn viewport_resize_shifts_hit_regions() {
    let mut robot = open_robot();

    // Viewport 800: the panel rests at y=450, so y=300 is backdrop.
    assert_eq!(robot.tap(200.0, 300.0), DispatchOutcome::BackdropTap);
    assert_eq!(robot.close_count(), 1);

    // Viewport 600: the panel now rests at y=250 and the same point
    // lands in its touch strip, reaching content instead.
    robot.drawer_mut().set_viewport_height(600.0);
    assert_eq!(robot.tap(200.0, 300.0), DispatchOutcome::Content);
    assert_eq!(robot.close_count(), 1);
}

#[test]
fn animations_request_frames_from_the_host_scheduler() {
    let mut robot = DrawerRobot::new(RobotOptions::default());
    let before = robot.frame_requests();
    robot.set_open(true);
    assert!(robot.frame_requests() > before);
}
