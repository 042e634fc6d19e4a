use fluid_drawer_core::{
    KeyboardChannels, KeyboardEvent, KeyboardHandler, KeyboardService, KeyboardSubscription,
    RuntimeScheduler,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Scheduler that just counts frame requests, so tests can assert that
/// animations actually ask the host for frames.
#[derive(Default)]
pub struct CountingScheduler {
    requests: Cell<u64>,
}

impl CountingScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frame_requests(&self) -> u64 {
        self.requests.get()
    }
}

impl RuntimeScheduler for CountingScheduler {
    fn schedule_frame(&self) {
        self.requests.set(self.requests.get() + 1);
    }
}

struct Subscriber {
    id: u64,
    on_show: KeyboardHandler,
    on_hide: KeyboardHandler,
}

#[derive(Default)]
struct KeyboardInner {
    next_id: u64,
    subscribers: Vec<Subscriber>,
    subscribed_channels: Vec<KeyboardChannels>,
}

/// Keyboard service that records subscriptions and lets tests emit
/// show/hide notifications to whoever is subscribed.
#[derive(Clone, Default)]
pub struct ScriptedKeyboardService {
    inner: Rc<RefCell<KeyboardInner>>,
}

impl ScriptedKeyboardService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of currently live subscriptions.
    pub fn live_subscriptions(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }

    /// Every channel pair ever subscribed with, in order.
    pub fn subscribed_channels(&self) -> Vec<KeyboardChannels> {
        self.inner.borrow().subscribed_channels.clone()
    }

    pub fn emit_show(&self, event: KeyboardEvent) {
        for handler in self.handlers(|s| Rc::clone(&s.on_show)) {
            handler(&event);
        }
    }

    pub fn emit_hide(&self, event: KeyboardEvent) {
        for handler in self.handlers(|s| Rc::clone(&s.on_hide)) {
            handler(&event);
        }
    }

    fn handlers(&self, pick: impl Fn(&Subscriber) -> KeyboardHandler) -> Vec<KeyboardHandler> {
        // Clone out of the borrow so a handler may re-enter the service.
        self.inner.borrow().subscribers.iter().map(pick).collect()
    }
}

impl KeyboardService for ScriptedKeyboardService {
    fn subscribe(
        &self,
        channels: KeyboardChannels,
        on_show: KeyboardHandler,
        on_hide: KeyboardHandler,
    ) -> Option<KeyboardSubscription> {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.subscribed_channels.push(channels);
            inner.subscribers.push(Subscriber {
                id,
                on_show,
                on_hide,
            });
            id
        };
        let inner = Rc::clone(&self.inner);
        Some(KeyboardSubscription::new(move || {
            inner
                .borrow_mut()
                .subscribers
                .retain(|subscriber| subscriber.id != id);
        }))
    }
}

/// A host without keyboard notification capability; `subscribe` always
/// fails, exercising the silent-degrade path.
#[derive(Clone, Copy, Default)]
pub struct NullKeyboardService;

impl KeyboardService for NullKeyboardService {
    fn subscribe(
        &self,
        _channels: KeyboardChannels,
        _on_show: KeyboardHandler,
        _on_hide: KeyboardHandler,
    ) -> Option<KeyboardSubscription> {
        None
    }
}
