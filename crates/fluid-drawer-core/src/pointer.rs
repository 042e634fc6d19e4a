/// A position in logical pixels, origin at the viewport's top-left.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

/// A single touch/pointer input event as delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub position: Point,
}

impl PointerEvent {
    pub fn down(position: Point) -> Self {
        Self {
            kind: PointerEventKind::Down,
            position,
        }
    }

    pub fn moved(position: Point) -> Self {
        Self {
            kind: PointerEventKind::Move,
            position,
        }
    }

    pub fn up(position: Point) -> Self {
        Self {
            kind: PointerEventKind::Up,
            position,
        }
    }

    pub fn cancel(position: Point) -> Self {
        Self {
            kind: PointerEventKind::Cancel,
            position,
        }
    }
}
