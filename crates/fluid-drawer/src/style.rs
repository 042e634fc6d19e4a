//! Style model for the drawer's three surfaces plus the handle strip.
//!
//! Defaults mirror the stock look; caller-supplied styles replace the
//! defaults wholesale. Values are never validated at runtime.

/// RGB color with a separate alpha fraction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);
}

/// Full-bleed translucent surface behind the panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackdropStyle {
    pub color: Color,
}

impl Default for BackdropStyle {
    fn default() -> Self {
        Self {
            color: Color::rgba(0, 0, 0, 0.6),
        }
    }
}

/// The bottom-anchored panel surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawerStyle {
    pub background: Color,
    /// Radius applied to the two top corners.
    pub corner_radius: f32,
}

impl Default for DrawerStyle {
    fn default() -> Self {
        Self {
            background: Color::WHITE,
            corner_radius: 15.0,
        }
    }
}

/// The small visual grab indicator centered in the touch strip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleStyle {
    pub width: f32,
    pub height: f32,
    pub corner_radius: f32,
    pub color: Color,
}

impl Default for HandleStyle {
    fn default() -> Self {
        Self {
            width: 50.0,
            height: 5.0,
            corner_radius: 3.0,
            color: Color::rgb(0x9D, 0xB2, 0xBF),
        }
    }
}

/// The draggable strip along the top edge of the panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchAreaStyle {
    pub height: f32,
    pub padding_top: f32,
    pub corner_radius: f32,
}

impl Default for TouchAreaStyle {
    fn default() -> Self {
        Self {
            height: 30.0,
            padding_top: 5.0,
            corner_radius: 15.0,
        }
    }
}
