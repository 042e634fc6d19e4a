//! Timing-based animation driver for the fluid-drawer widget.
//!
//! Provides eased tween animations scheduled on the host frame clock.
//! The drawer only ever uses fixed-duration timing interpolation, so
//! there is no physics here.

mod animation;

pub use animation::{Animatable, AnimationSpec, Easing, Lerp};
