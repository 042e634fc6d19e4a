//! Headless demo host for the drawer.
//!
//! Runs a scripted scenario in real time against a minimal host
//! implementation: open, drag below the dismiss threshold, keyboard
//! show/hide, then a drag past the threshold that dismisses the drawer.
//! Run with `RUST_LOG=debug` to see the widget's own logging.

use fluid_drawer::{DrawerConfig, DrawerContent, FluidDrawer, TouchAreaStyle};
use fluid_drawer_core::{
    Clock, KeyboardChannels, KeyboardEvent, KeyboardHandler, KeyboardService,
    KeyboardSubscription, OsFamily, Point, PointerEvent, RuntimeHandle,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;
use web_time::Instant;

const FRAME: Duration = Duration::from_millis(16);
const VIEWPORT_HEIGHT: f32 = 800.0;

struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Clock for MonotonicClock {
    fn now_nanos(&self) -> u64 {
        self.origin.elapsed().as_nanos() as u64
    }
}

/// Single-subscriber keyboard host backed by the demo script.
#[derive(Clone, Default)]
struct HostKeyboard {
    subscriber: Rc<RefCell<Option<(KeyboardHandler, KeyboardHandler)>>>,
}

impl HostKeyboard {
    fn emit_show(&self, event: KeyboardEvent) {
        if let Some((on_show, _)) = self.subscriber.borrow().as_ref() {
            on_show(&event);
        }
    }

    fn emit_hide(&self, event: KeyboardEvent) {
        if let Some((_, on_hide)) = self.subscriber.borrow().as_ref() {
            on_hide(&event);
        }
    }
}

impl KeyboardService for HostKeyboard {
    fn subscribe(
        &self,
        channels: KeyboardChannels,
        on_show: KeyboardHandler,
        on_hide: KeyboardHandler,
    ) -> Option<KeyboardSubscription> {
        log::info!(
            "keyboard subscription on {} / {}",
            channels.show,
            channels.hide
        );
        *self.subscriber.borrow_mut() = Some((on_show, on_hide));
        let subscriber = Rc::clone(&self.subscriber);
        Some(KeyboardSubscription::new(move || {
            subscriber.borrow_mut().take();
            log::info!("keyboard subscription torn down");
        }))
    }
}

struct LoggingContent;

impl DrawerContent for LoggingContent {
    fn on_pointer_event(&mut self, event: &PointerEvent) {
        log::info!("content received {:?}", event.kind);
    }
}

/// Pump the runtime on a ~60 FPS cadence until all animations settle.
fn pump(runtime: &RuntimeHandle, clock: &MonotonicClock) {
    while runtime.has_pending_frame_callbacks() {
        runtime.drain_frame_callbacks(clock.now_nanos());
        std::thread::sleep(FRAME);
    }
}

fn log_scene(drawer: &FluidDrawer) {
    let scene = drawer.scene();
    match scene.panel {
        Some(panel) => log::info!(
            "scene: mounted, opacity {:.2}, panel translate_y {:.1} of {:.1}",
            scene.opacity,
            panel.translate_y,
            panel.height
        ),
        None => log::info!("scene: unmounted"),
    }
}

fn main() {
    env_logger::init();

    let runtime = RuntimeHandle::new();
    let clock = MonotonicClock::new();
    let keyboard = HostKeyboard::default();
    let close_requested = Rc::new(Cell::new(false));

    let close_flag = Rc::clone(&close_requested);
    let config = DrawerConfig::new(
        move || {
            log::info!("on_close invoked");
            close_flag.set(true);
        },
        TouchAreaStyle::default(),
    );

    let mut drawer = FluidDrawer::mount(
        config,
        Box::new(LoggingContent),
        false,
        runtime.clone(),
        &keyboard,
        OsFamily::Android,
        VIEWPORT_HEIGHT,
    );

    log::info!("opening drawer");
    drawer.set_open(true);
    pump(&runtime, &clock);
    log_scene(&drawer);

    // Panel rests at y=450 with the default geometry; drag the strip
    // down 120 px, short of the dismiss threshold.
    log::info!("short drag, should settle back");
    drawer.handle_pointer(PointerEvent::down(Point::new(200.0, 460.0)));
    for step in 1..=10 {
        let y = 460.0 + 12.0 * step as f32;
        drawer.handle_pointer(PointerEvent::moved(Point::new(200.0, y)));
    }
    drawer.handle_pointer(PointerEvent::up(Point::new(200.0, 580.0)));
    pump(&runtime, &clock);
    log_scene(&drawer);

    log::info!("keyboard show/hide");
    keyboard.emit_show(KeyboardEvent {
        height: 300.0,
        duration_millis: 250,
    });
    log::info!("recorded keyboard height {}", drawer.keyboard_height());
    keyboard.emit_hide(KeyboardEvent {
        height: 0.0,
        duration_millis: 160,
    });
    pump(&runtime, &clock);

    log::info!("long drag, should dismiss");
    drawer.handle_pointer(PointerEvent::down(Point::new(200.0, 460.0)));
    for step in 1..=10 {
        let y = 460.0 + 25.0 * step as f32;
        drawer.handle_pointer(PointerEvent::moved(Point::new(200.0, y)));
    }
    drawer.handle_pointer(PointerEvent::up(Point::new(200.0, 710.0)));

    if close_requested.get() {
        log::info!("caller closing drawer");
        drawer.set_open(false);
        pump(&runtime, &clock);
    }
    log_scene(&drawer);
}
