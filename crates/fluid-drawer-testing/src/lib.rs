//! Headless test host for the fluid-drawer widget.
//!
//! Provides scripted stand-ins for every host seam the drawer consumes
//! (frame scheduling, keyboard notifications) plus [`DrawerRobot`], a
//! robot-style harness that drives frames, drags, taps and keyboard
//! events against a real mounted drawer.

mod host;
mod robot;

pub use host::{CountingScheduler, NullKeyboardService, ScriptedKeyboardService};
pub use robot::{CountingContent, DrawerRobot, RobotOptions, FRAME_NANOS};
