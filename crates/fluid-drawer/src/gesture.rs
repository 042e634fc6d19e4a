//! Drag-to-dismiss gesture recognition for the handle strip.
//!
//! Thresholds are in logical pixels, matched to the stock behavior:
//! distance-based only, no velocity or fling detection.

use fluid_drawer_core::Point;

/// Downward travel past which a release dismisses the drawer instead of
/// settling back.
pub const DISMISS_DRAG_DISTANCE: f32 = 200.0;

/// Tween length in milliseconds for enter/exit and snap-back animations.
pub const SETTLE_DURATION_MILLIS: u64 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DragPhase {
    Idle,
    /// Pointer went down in the touch strip; every move re-evaluates the
    /// claim test until the sequence is claimed or released.
    Tracking,
    Claimed,
}

/// What the recognizer decided about a move event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum MoveDecision {
    /// The sequence just became a claimed downward drag.
    Claim { dy: f32 },
    /// Already claimed; keep tracking the offset.
    Track { dy: f32 },
    /// Not (yet) a vertical downward drag; let it pass through.
    PassThrough,
}

/// What the recognizer decided about a release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ReleaseDecision {
    /// Claimed drag exceeded the dismiss distance.
    Dismiss,
    /// Claimed drag released short of the threshold; settle back to rest.
    SettleBack,
    /// The sequence was never claimed.
    Pass,
}

/// Tracks a single touch sequence starting in the handle strip and turns
/// it into an open/dismiss decision.
pub(crate) struct DragRecognizer {
    phase: DragPhase,
    origin: Point,
    dy: f32,
}

impl DragRecognizer {
    pub(crate) fn new() -> Self {
        Self {
            phase: DragPhase::Idle,
            origin: Point::default(),
            dy: 0.0,
        }
    }

    pub(crate) fn begin(&mut self, origin: Point) {
        self.phase = DragPhase::Tracking;
        self.origin = origin;
        self.dy = 0.0;
    }

    pub(crate) fn on_move(&mut self, position: Point) -> MoveDecision {
        let dx = position.x - self.origin.x;
        let dy = position.y - self.origin.y;
        match self.phase {
            DragPhase::Idle => MoveDecision::PassThrough,
            DragPhase::Tracking => {
                let vertical = dx.abs() < dy.abs();
                let downward = dy > 0.0;
                if vertical && downward {
                    self.phase = DragPhase::Claimed;
                    self.dy = dy;
                    MoveDecision::Claim { dy }
                } else {
                    MoveDecision::PassThrough
                }
            }
            DragPhase::Claimed => {
                self.dy = dy;
                MoveDecision::Track { dy }
            }
        }
    }

    pub(crate) fn on_release(&mut self) -> ReleaseDecision {
        let decision = match self.phase {
            DragPhase::Claimed if self.dy > DISMISS_DRAG_DISTANCE => ReleaseDecision::Dismiss,
            DragPhase::Claimed => ReleaseDecision::SettleBack,
            _ => ReleaseDecision::Pass,
        };
        self.reset();
        decision
    }

    pub(crate) fn cancel(&mut self) {
        self.reset();
    }

    pub(crate) fn is_claimed(&self) -> bool {
        self.phase == DragPhase::Claimed
    }

    pub(crate) fn is_tracking(&self) -> bool {
        self.phase != DragPhase::Idle
    }

    fn reset(&mut self) {
        self.phase = DragPhase::Idle;
        self.dy = 0.0;
    }
}

#[cfg(test)]
#[path = "tests/gesture_tests.rs"]
mod tests;
