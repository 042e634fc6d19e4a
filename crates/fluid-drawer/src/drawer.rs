use crate::config::DrawerConfig;
use crate::content::DrawerContent;
use crate::gesture::{DragRecognizer, MoveDecision, ReleaseDecision, SETTLE_DURATION_MILLIS};
use crate::scene::{BackdropNode, DrawerScene, HandleNode, PanelNode, TouchAreaNode};
use fluid_drawer_animation::{Animatable, AnimationSpec, Easing};
use fluid_drawer_core::{
    KeyboardEvent, KeyboardHandler, KeyboardService, KeyboardSubscription, OsFamily, Point,
    PointerEvent, PointerEventKind, RuntimeHandle, State,
};
use std::cell::Cell;
use std::rc::Rc;

/// Where a dispatched pointer event ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Unmounted, or nothing was interested in the event.
    Ignored,
    /// Consumed by the drag recognizer.
    Drag,
    /// Forwarded to the panel content.
    Content,
    /// Tap on a touchable backdrop; the dismissal callback was invoked.
    BackdropTap,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Region {
    Backdrop,
    Handle,
    Panel,
}

/// Which surface owns the touch sequence currently in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Capture {
    None,
    Handle,
    Backdrop,
    Content,
}

/// A mounted bottom-sheet drawer instance.
///
/// All state lives for the lifetime of the instance; dropping it tears
/// down the keyboard subscription exactly once.
pub struct FluidDrawer {
    config: DrawerConfig,
    content: Box<dyn DrawerContent>,
    open: bool,
    /// True while the drawer must stay in the render tree, including the
    /// exit animation after `open` flips to false.
    render_gate: Rc<Cell<bool>>,
    offset_y: Animatable<f32>,
    offset_state: State<f32>,
    opacity: Animatable<f32>,
    opacity_state: State<f32>,
    keyboard_height: Rc<Cell<f32>>,
    recognizer: DragRecognizer,
    capture: Capture,
    viewport_height: f32,
    _keyboard_subscription: Option<KeyboardSubscription>,
}

impl FluidDrawer {
    /// Create a drawer and establish its keyboard subscription.
    ///
    /// The subscription is set up once here and torn down once on drop;
    /// configuration changes never re-subscribe. A host without keyboard
    /// notifications degrades silently.
    pub fn mount(
        config: DrawerConfig,
        content: Box<dyn DrawerContent>,
        open: bool,
        runtime: RuntimeHandle,
        keyboard: &dyn KeyboardService,
        os_family: OsFamily,
        viewport_height: f32,
    ) -> Self {
        let offset_y = Animatable::new(config.drawer_height, runtime.clone());
        let opacity = Animatable::new(if open { 1.0 } else { 0.0 }, runtime);
        let keyboard_height = Rc::new(Cell::new(0.0f32));

        let channels = os_family.keyboard_channels();
        let show_height = Rc::clone(&keyboard_height);
        let on_show: KeyboardHandler = Rc::new(move |event: &KeyboardEvent| {
            show_height.set(event.height);
            log::debug!("keyboard shown, height {}", event.height);
        });
        let hide_height = Rc::clone(&keyboard_height);
        let offset_on_hide = offset_y.clone();
        let on_hide: KeyboardHandler = Rc::new(move |event: &KeyboardEvent| {
            hide_height.set(0.0);
            offset_on_hide.animate_to(0.0, AnimationSpec::linear(event.duration_millis));
        });
        let subscription = keyboard.subscribe(channels, on_show, on_hide);
        if subscription.is_none() {
            log::warn!("keyboard notifications unavailable; drawer will not track the keyboard");
        }

        let mut drawer = Self {
            open: false,
            render_gate: Rc::new(Cell::new(open)),
            offset_state: offset_y.state(),
            opacity_state: opacity.state(),
            offset_y,
            opacity,
            keyboard_height,
            recognizer: DragRecognizer::new(),
            capture: Capture::None,
            viewport_height,
            config,
            content,
            _keyboard_subscription: subscription,
        };
        if open {
            drawer.set_open(true);
        }
        drawer
    }

    /// Mirror the caller's visibility signal.
    ///
    /// Opening mounts immediately and tweens in; closing tweens out and
    /// unmounts only once the opacity animation completes. Rapid toggles
    /// restart the tweens toward the new target (last write wins) and
    /// drop the superseded unmount callback.
    pub fn set_open(&mut self, open: bool) {
        if open == self.open {
            return;
        }
        self.open = open;
        log::debug!("drawer visibility -> {}", open);

        if open {
            self.render_gate.set(true);
        }

        let spec = AnimationSpec::tween(SETTLE_DURATION_MILLIS, Easing::EaseInOut);
        let offset_target = if open { 0.0 } else { self.config.drawer_height };
        self.offset_y.animate_to(offset_target, spec);

        if open {
            self.opacity.animate_to(1.0, spec);
        } else {
            let gate = Rc::clone(&self.render_gate);
            self.opacity.animate_to_then(0.0, spec, move || {
                gate.set(false);
                log::debug!("drawer unmounted after exit animation");
            });
        }
    }

    pub fn open(&self) -> bool {
        self.open
    }

    /// Whether the drawer is currently in the render tree.
    pub fn is_mounted(&self) -> bool {
        self.render_gate.get()
    }

    /// Last keyboard height reported by the host. Recorded but not
    /// applied to the panel position; see DESIGN.md.
    pub fn keyboard_height(&self) -> f32 {
        self.keyboard_height.get()
    }

    /// Current downward translation of the panel.
    pub fn offset(&self) -> f32 {
        self.offset_state.get()
    }

    pub fn opacity(&self) -> f32 {
        self.opacity_state.get()
    }

    pub fn set_viewport_height(&mut self, height: f32) {
        self.viewport_height = height;
    }

    /// Describe the current frame. Pure; hosts draw it, tests assert on it.
    pub fn scene(&self) -> DrawerScene {
        let opacity = self.opacity_state.get();
        if !self.render_gate.get() {
            return DrawerScene::unmounted(opacity);
        }
        DrawerScene {
            mounted: true,
            opacity,
            backdrop: Some(BackdropNode {
                style: self.config.backdrop_style,
                touchable: self.config.backdrop_touchable,
            }),
            panel: Some(PanelNode {
                translate_y: self.offset_state.get(),
                height: self.config.drawer_height,
                style: self.config.drawer_style,
                touch_area: TouchAreaNode {
                    style: self.config.top_touch_area_style,
                },
                handle: self
                    .config
                    .handle_visible
                    .then(|| HandleNode {
                        style: self.config.handle_style,
                    }),
            }),
        }
    }

    /// Route a pointer event to the backdrop, the drag recognizer, or the
    /// panel content. Unmounted drawers ignore all input.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> DispatchOutcome {
        if !self.render_gate.get() {
            return DispatchOutcome::Ignored;
        }

        match event.kind {
            PointerEventKind::Down => self.on_down(event),
            PointerEventKind::Move => self.on_move(event),
            PointerEventKind::Up => self.on_up(event),
            PointerEventKind::Cancel => self.on_cancel(event),
        }
    }

    fn on_down(&mut self, event: PointerEvent) -> DispatchOutcome {
        match self.region_at(event.position) {
            Region::Handle => {
                self.capture = Capture::Handle;
                self.recognizer.begin(event.position);
                // The down itself is never claimed; underlying targets
                // see it until a move decides otherwise.
                self.content.on_pointer_event(&event);
                DispatchOutcome::Content
            }
            Region::Panel => {
                self.capture = Capture::Content;
                self.content.on_pointer_event(&event);
                DispatchOutcome::Content
            }
            Region::Backdrop => {
                self.capture = Capture::Backdrop;
                DispatchOutcome::Ignored
            }
        }
    }

    fn on_move(&mut self, event: PointerEvent) -> DispatchOutcome {
        match self.capture {
            Capture::Handle => match self.recognizer.on_move(event.position) {
                MoveDecision::Claim { dy } => {
                    log::debug!("drag claimed at dy {dy:.1}");
                    // The sequence now belongs to the drawer; tell the
                    // content its touches are over.
                    self.content
                        .on_pointer_event(&PointerEvent::cancel(event.position));
                    if dy > 0.0 {
                        self.offset_y.snap_to(dy);
                    }
                    DispatchOutcome::Drag
                }
                MoveDecision::Track { dy } => {
                    // 1:1 tracking, deliberately unclamped above.
                    if dy > 0.0 {
                        self.offset_y.snap_to(dy);
                    }
                    DispatchOutcome::Drag
                }
                MoveDecision::PassThrough => {
                    self.content.on_pointer_event(&event);
                    DispatchOutcome::Content
                }
            },
            Capture::Content => {
                self.content.on_pointer_event(&event);
                DispatchOutcome::Content
            }
            Capture::Backdrop | Capture::None => DispatchOutcome::Ignored,
        }
    }

    fn on_up(&mut self, event: PointerEvent) -> DispatchOutcome {
        let capture = std::mem::replace(&mut self.capture, Capture::None);
        match capture {
            Capture::Handle => match self.recognizer.on_release() {
                ReleaseDecision::Dismiss => {
                    log::debug!("drag past dismiss threshold, invoking on_close");
                    // No snap-back here: the caller is expected to flip
                    // `open` and drive the exit animation.
                    (self.config.on_close)();
                    DispatchOutcome::Drag
                }
                ReleaseDecision::SettleBack => {
                    self.offset_y.animate_to(
                        0.0,
                        AnimationSpec::tween(SETTLE_DURATION_MILLIS, Easing::EaseInOut),
                    );
                    DispatchOutcome::Drag
                }
                ReleaseDecision::Pass => {
                    self.content.on_pointer_event(&event);
                    DispatchOutcome::Content
                }
            },
            Capture::Backdrop => {
                if self.config.backdrop_touchable
                    && self.region_at(event.position) == Region::Backdrop
                {
                    (self.config.on_close)();
                    DispatchOutcome::BackdropTap
                } else {
                    DispatchOutcome::Ignored
                }
            }
            Capture::Content => {
                self.content.on_pointer_event(&event);
                DispatchOutcome::Content
            }
            Capture::None => DispatchOutcome::Ignored,
        }
    }

    fn on_cancel(&mut self, event: PointerEvent) -> DispatchOutcome {
        let capture = std::mem::replace(&mut self.capture, Capture::None);
        let claimed = self.recognizer.is_claimed();
        self.recognizer.cancel();
        match capture {
            Capture::Handle if !claimed => {
                self.content.on_pointer_event(&event);
                DispatchOutcome::Content
            }
            Capture::Content => {
                self.content.on_pointer_event(&event);
                DispatchOutcome::Content
            }
            _ => DispatchOutcome::Ignored,
        }
    }

    fn panel_top(&self) -> f32 {
        self.viewport_height - self.config.drawer_height + self.offset_state.get()
    }

    fn region_at(&self, point: Point) -> Region {
        let top = self.panel_top();
        if point.y < top {
            Region::Backdrop
        } else if point.y < top + self.config.top_touch_area_style.height {
            Region::Handle
        } else {
            Region::Panel
        }
    }
}
