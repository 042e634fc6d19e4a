//! Host platform abstraction traits.
//!
//! These seams let the drawer delegate frame scheduling, timing, and
//! OS-family detection to the host instead of branching on ambient
//! globals inside the widget.

/// Schedules work for the runtime.
///
/// Implementations are responsible for triggering a frame drain on the
/// host's render cadence whenever a callback is registered.
pub trait RuntimeScheduler {
    /// Request that the host schedule a new frame.
    fn schedule_frame(&self);
}

/// Provides timing information for real-time hosts.
pub trait Clock {
    /// Nanoseconds elapsed since an arbitrary fixed origin.
    fn now_nanos(&self) -> u64;
}

/// Host OS family, injected by the embedder. Only used to pick the
/// keyboard notification channel names; behavior is otherwise identical
/// across platforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OsFamily {
    Apple,
    Android,
}

/// Named notification channels for keyboard visibility events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyboardChannels {
    pub show: &'static str,
    pub hide: &'static str,
}

impl OsFamily {
    /// Apple platforms announce the keyboard before it moves, Android
    /// after it has settled; the drawer treats both the same way.
    pub fn keyboard_channels(self) -> KeyboardChannels {
        match self {
            OsFamily::Apple => KeyboardChannels {
                show: "keyboardWillShow",
                hide: "keyboardWillHide",
            },
            OsFamily::Android => KeyboardChannels {
                show: "keyboardDidShow",
                hide: "keyboardDidHide",
            },
        }
    }
}
