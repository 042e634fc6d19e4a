//! Runtime substrate for the fluid-drawer widget.
//!
//! The drawer consumes its host through a handful of narrow seams: a
//! frame-callback runtime that drives animations, a keyboard notification
//! service, and plain pointer events. Everything here is single-threaded
//! and host-agnostic so the widget can run headless in tests.

mod frame_clock;
mod keyboard;
mod platform;
mod pointer;
mod runtime;
mod state;

pub use frame_clock::{FrameCallbackRegistration, FrameClock};
pub use keyboard::{KeyboardEvent, KeyboardHandler, KeyboardService, KeyboardSubscription};
pub use platform::{Clock, KeyboardChannels, OsFamily, RuntimeScheduler};
pub use pointer::{Point, PointerEvent, PointerEventKind};
pub use runtime::{FrameCallbackId, RuntimeHandle};
pub use state::{MutableState, State};
