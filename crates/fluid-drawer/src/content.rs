use fluid_drawer_core::PointerEvent;

/// Opaque panel body supplied by the caller.
///
/// The drawer forwards every pointer event it does not claim (panel-body
/// touches, and handle-strip sequences the drag recognizer rejected) so
/// underlying touch targets stay reachable. A `Cancel` is forwarded when
/// the recognizer claims a sequence mid-gesture.
pub trait DrawerContent {
    fn on_pointer_event(&mut self, event: &PointerEvent);
}

/// Content that ignores all input.
pub struct EmptyContent;

impl DrawerContent for EmptyContent {
    fn on_pointer_event(&mut self, _event: &PointerEvent) {}
}
