use crate::platform::KeyboardChannels;
use std::rc::Rc;

/// Payload of a keyboard visibility notification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyboardEvent {
    /// Reported on-screen keyboard height in logical pixels.
    pub height: f32,
    /// Platform-reported animation duration for the transition.
    pub duration_millis: u64,
}

pub type KeyboardHandler = Rc<dyn Fn(&KeyboardEvent)>;

/// Host service delivering keyboard visibility notifications.
///
/// `subscribe` returns `None` when the host lacks the capability; the
/// caller degrades silently (the drawer just never repositions).
pub trait KeyboardService {
    fn subscribe(
        &self,
        channels: KeyboardChannels,
        on_show: KeyboardHandler,
        on_hide: KeyboardHandler,
    ) -> Option<KeyboardSubscription>;
}

/// RAII guard for a keyboard subscription. Unsubscribes exactly once,
/// either via [`KeyboardSubscription::unsubscribe`] or on drop.
pub struct KeyboardSubscription {
    teardown: Option<Box<dyn FnOnce()>>,
}

impl KeyboardSubscription {
    pub fn new(teardown: impl FnOnce() + 'static) -> Self {
        Self {
            teardown: Some(Box::new(teardown)),
        }
    }

    pub fn unsubscribe(mut self) {
        if let Some(teardown) = self.teardown.take() {
            teardown();
        }
    }
}

impl Drop for KeyboardSubscription {
    fn drop(&mut self) {
        if let Some(teardown) = self.teardown.take() {
            teardown();
        }
    }
}

#[cfg(test)]
#[path = "tests/keyboard_tests.rs"]
mod tests;
