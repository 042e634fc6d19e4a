//! A bottom-sheet drawer widget.
//!
//! The drawer slides up from the bottom edge over a translucent backdrop.
//! An external `open` signal drives enter/exit tweens; a drag on the
//! handle strip can dismiss it; keyboard visibility notifications
//! reposition it. All host services (frame clock, keyboard notifications,
//! pointer events) come in through the narrow seams of
//! `fluid-drawer-core`, so the widget runs headless in tests.
//!
//! # Example
//!
//! ```no_run
//! use fluid_drawer::{DrawerConfig, EmptyContent, FluidDrawer, TouchAreaStyle};
//! use fluid_drawer_core::{OsFamily, RuntimeHandle};
//!
//! # struct NoKeyboard;
//! # impl fluid_drawer_core::KeyboardService for NoKeyboard {
//! #     fn subscribe(
//! #         &self,
//! #         _: fluid_drawer_core::KeyboardChannels,
//! #         _: fluid_drawer_core::KeyboardHandler,
//! #         _: fluid_drawer_core::KeyboardHandler,
//! #     ) -> Option<fluid_drawer_core::KeyboardSubscription> {
//! #         None
//! #     }
//! # }
//! let runtime = RuntimeHandle::new();
//! let config = DrawerConfig::new(|| println!("closed"), TouchAreaStyle::default());
//! let mut drawer = FluidDrawer::mount(
//!     config,
//!     Box::new(EmptyContent),
//!     false,
//!     runtime.clone(),
//!     &NoKeyboard,
//!     OsFamily::Android,
//!     800.0,
//! );
//! drawer.set_open(true);
//! ```

mod config;
mod content;
mod drawer;
mod gesture;
mod scene;
mod style;

pub use config::DrawerConfig;
pub use content::{DrawerContent, EmptyContent};
pub use drawer::{DispatchOutcome, FluidDrawer};
pub use gesture::{DISMISS_DRAG_DISTANCE, SETTLE_DURATION_MILLIS};
pub use scene::{BackdropNode, DrawerScene, HandleNode, PanelNode, TouchAreaNode};
pub use style::{BackdropStyle, Color, DrawerStyle, HandleStyle, TouchAreaStyle};
