use crate::host::{CountingScheduler, ScriptedKeyboardService};
use fluid_drawer::{
    DispatchOutcome, DrawerConfig, DrawerContent, DrawerScene, FluidDrawer, TouchAreaStyle,
};
use fluid_drawer_core::{KeyboardEvent, OsFamily, Point, PointerEvent, RuntimeHandle};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Frame period the robot advances by, ~60 FPS.
pub const FRAME_NANOS: u64 = 16_666_667;

/// How a robot-driven drawer is configured.
#[derive(Debug, Clone, Copy)]
pub struct RobotOptions {
    pub open: bool,
    pub drawer_height: f32,
    pub handle_visible: bool,
    pub backdrop_touchable: bool,
    pub os_family: OsFamily,
    pub viewport_height: f32,
}

impl Default for RobotOptions {
    fn default() -> Self {
        Self {
            open: false,
            drawer_height: 350.0,
            handle_visible: true,
            backdrop_touchable: true,
            os_family: OsFamily::Android,
            viewport_height: 800.0,
        }
    }
}

/// Panel content that records every event forwarded to it.
pub struct CountingContent {
    events: Rc<RefCell<Vec<PointerEvent>>>,
}

impl DrawerContent for CountingContent {
    fn on_pointer_event(&mut self, event: &PointerEvent) {
        self.events.borrow_mut().push(*event);
    }
}

/// Programmatic control over a real mounted drawer: input simulation,
/// frame pumping, keyboard events, and dismissal counting.
pub struct DrawerRobot {
    runtime: RuntimeHandle,
    scheduler: Rc<CountingScheduler>,
    keyboard: ScriptedKeyboardService,
    drawer: FluidDrawer,
    close_count: Rc<Cell<u32>>,
    content_events: Rc<RefCell<Vec<PointerEvent>>>,
    frame_time: u64,
    cursor: Point,
}

impl DrawerRobot {
    pub fn new(options: RobotOptions) -> Self {
        let scheduler = Rc::new(CountingScheduler::new());
        let runtime = RuntimeHandle::with_scheduler(Some(scheduler.clone()));
        let keyboard = ScriptedKeyboardService::new();

        let close_count = Rc::new(Cell::new(0u32));
        let counter = Rc::clone(&close_count);
        let config = DrawerConfig::new(
            move || counter.set(counter.get() + 1),
            TouchAreaStyle::default(),
        )
        .drawer_height(options.drawer_height)
        .handle_visible(options.handle_visible)
        .backdrop_touchable(options.backdrop_touchable);

        let content_events = Rc::new(RefCell::new(Vec::new()));
        let content = CountingContent {
            events: Rc::clone(&content_events),
        };

        let drawer = FluidDrawer::mount(
            config,
            Box::new(content),
            options.open,
            runtime.clone(),
            &keyboard,
            options.os_family,
            options.viewport_height,
        );

        Self {
            runtime,
            scheduler,
            keyboard,
            drawer,
            close_count,
            content_events,
            frame_time: 0,
            cursor: Point::default(),
        }
    }

    pub fn open_drawer(options: RobotOptions) -> Self {
        let mut robot = Self::new(options);
        robot.set_open(true);
        robot.settle();
        robot
    }

    pub fn set_open(&mut self, open: bool) {
        self.drawer.set_open(open);
    }

    /// Advance `count` frames of ~16.67 ms each, draining the runtime.
    pub fn advance_frames(&mut self, count: usize) {
        for _ in 0..count {
            self.frame_time += FRAME_NANOS;
            self.runtime.drain_frame_callbacks(self.frame_time);
        }
    }

    pub fn advance_millis(&mut self, millis: u64) {
        let frames = (millis * 1_000_000).div_ceil(FRAME_NANOS);
        self.advance_frames(frames as usize);
    }

    /// Pump frames until no animation wants another one.
    pub fn settle(&mut self) {
        for _ in 0..240 {
            if !self.runtime.has_pending_frame_callbacks() {
                break;
            }
            self.advance_frames(1);
        }
    }

    pub fn touch_down(&mut self, x: f32, y: f32) -> DispatchOutcome {
        self.cursor = Point::new(x, y);
        self.drawer.handle_pointer(PointerEvent::down(self.cursor))
    }

    pub fn touch_move(&mut self, x: f32, y: f32) -> DispatchOutcome {
        self.cursor = Point::new(x, y);
        self.drawer.handle_pointer(PointerEvent::moved(self.cursor))
    }

    pub fn touch_up(&mut self) -> DispatchOutcome {
        self.drawer.handle_pointer(PointerEvent::up(self.cursor))
    }

    /// Drag from one point to another in smooth steps, then release.
    pub fn drag(&mut self, from: Point, to: Point) {
        self.touch_down(from.x, from.y);
        let steps = 10;
        for i in 1..=steps {
            let t = i as f32 / steps as f32;
            self.touch_move(from.x + (to.x - from.x) * t, from.y + (to.y - from.y) * t);
        }
        self.touch_up();
    }

    pub fn tap(&mut self, x: f32, y: f32) -> DispatchOutcome {
        self.touch_down(x, y);
        self.touch_up()
    }

    pub fn show_keyboard(&mut self, height: f32) {
        self.keyboard.emit_show(KeyboardEvent {
            height,
            duration_millis: 250,
        });
    }

    pub fn hide_keyboard(&mut self, duration_millis: u64) {
        self.keyboard.emit_hide(KeyboardEvent {
            height: 0.0,
            duration_millis,
        });
    }

    pub fn close_count(&self) -> u32 {
        self.close_count.get()
    }

    pub fn content_events(&self) -> Vec<PointerEvent> {
        self.content_events.borrow().clone()
    }

    pub fn clear_content_events(&self) {
        self.content_events.borrow_mut().clear();
    }

    pub fn scene(&self) -> DrawerScene {
        self.drawer.scene()
    }

    pub fn drawer(&self) -> &FluidDrawer {
        &self.drawer
    }

    pub fn drawer_mut(&mut self) -> &mut FluidDrawer {
        &mut self.drawer
    }

    pub fn keyboard_service(&self) -> &ScriptedKeyboardService {
        &self.keyboard
    }

    pub fn frame_requests(&self) -> u64 {
        self.scheduler.frame_requests()
    }

    pub fn runtime(&self) -> &RuntimeHandle {
        &self.runtime
    }

    /// Drop the drawer while keeping the host alive, so teardown
    /// behavior can be asserted.
    pub fn unmount(self) -> ScriptedKeyboardService {
        let keyboard = self.keyboard.clone();
        drop(self.drawer);
        keyboard
    }
}
