use crate::style::{BackdropStyle, DrawerStyle, HandleStyle, TouchAreaStyle};
use std::rc::Rc;

/// Caller-supplied configuration for a mounted drawer.
///
/// `on_close` and the touch-area style are required; everything else has
/// the stock defaults. Inputs are trusted as-is (a negative height gives
/// undefined visual results rather than an error).
#[derive(Clone)]
pub struct DrawerConfig {
    pub on_close: Rc<dyn Fn()>,
    pub drawer_height: f32,
    pub handle_visible: bool,
    pub top_touch_area_style: TouchAreaStyle,
    pub handle_style: HandleStyle,
    pub drawer_style: DrawerStyle,
    pub backdrop_style: BackdropStyle,
    pub backdrop_touchable: bool,
}

impl DrawerConfig {
    pub fn new(on_close: impl Fn() + 'static, top_touch_area_style: TouchAreaStyle) -> Self {
        Self {
            on_close: Rc::new(on_close),
            drawer_height: 350.0,
            handle_visible: true,
            top_touch_area_style,
            handle_style: HandleStyle::default(),
            drawer_style: DrawerStyle::default(),
            backdrop_style: BackdropStyle::default(),
            backdrop_touchable: true,
        }
    }

    pub fn drawer_height(mut self, height: f32) -> Self {
        self.drawer_height = height;
        self
    }

    pub fn handle_visible(mut self, visible: bool) -> Self {
        self.handle_visible = visible;
        self
    }

    pub fn handle_style(mut self, style: HandleStyle) -> Self {
        self.handle_style = style;
        self
    }

    pub fn drawer_style(mut self, style: DrawerStyle) -> Self {
        self.drawer_style = style;
        self
    }

    pub fn backdrop_style(mut self, style: BackdropStyle) -> Self {
        self.backdrop_style = style;
        self
    }

    pub fn backdrop_touchable(mut self, touchable: bool) -> Self {
        self.backdrop_touchable = touchable;
        self
    }
}
