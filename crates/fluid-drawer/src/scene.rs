use crate::style::{BackdropStyle, DrawerStyle, HandleStyle, TouchAreaStyle};

/// Pure description of what the drawer wants on screen this frame.
/// Hosts draw it; tests assert on it.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawerScene {
    /// False while unmounted (exit animation finished or never opened):
    /// nothing is in the render tree and no input is handled.
    pub mounted: bool,
    /// Applied to the whole overlay, [0, 1].
    pub opacity: f32,
    pub backdrop: Option<BackdropNode>,
    pub panel: Option<PanelNode>,
}

impl DrawerScene {
    pub(crate) fn unmounted(opacity: f32) -> Self {
        Self {
            mounted: false,
            opacity,
            backdrop: None,
            panel: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BackdropNode {
    pub style: BackdropStyle,
    pub touchable: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PanelNode {
    /// Downward translation from the resting position. 0 = fully open,
    /// the drawer height = fully hidden. May exceed the height during a
    /// drag; it is not clamped.
    pub translate_y: f32,
    pub height: f32,
    pub style: DrawerStyle,
    pub touch_area: TouchAreaNode,
    pub handle: Option<HandleNode>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TouchAreaNode {
    pub style: TouchAreaStyle,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HandleNode {
    pub style: HandleStyle,
}
