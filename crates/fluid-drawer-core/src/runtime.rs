use crate::frame_clock::FrameClock;
use crate::platform::RuntimeScheduler;
use rustc_hash::FxHashSet;
use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::Rc;

/// Identifier for a registered frame callback, used for cancellation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameCallbackId(u64);

type FrameCallback = Box<dyn FnOnce(u64)>;

struct RuntimeInner {
    next_id: u64,
    pending: SmallVec<[(FrameCallbackId, FrameCallback); 4]>,
    /// Ids cancelled after their batch was taken for draining.
    cancelled: FxHashSet<FrameCallbackId>,
    scheduler: Option<Rc<dyn RuntimeScheduler>>,
}

/// Cloneable handle to the single-threaded frame-callback runtime.
///
/// Callbacks are one-shot: each registration fires at most once, on the
/// next `drain_frame_callbacks`. Animations keep themselves alive by
/// re-registering from inside their callback; those re-registrations run
/// on the following drain, never the current one.
#[derive(Clone)]
pub struct RuntimeHandle {
    inner: Rc<RefCell<RuntimeInner>>,
}

impl RuntimeHandle {
    pub fn new() -> Self {
        Self::with_scheduler(None)
    }

    /// Create a runtime that notifies `scheduler` whenever a callback is
    /// registered, so the host knows a frame is wanted.
    pub fn with_scheduler(scheduler: Option<Rc<dyn RuntimeScheduler>>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(RuntimeInner {
                next_id: 0,
                pending: SmallVec::new(),
                cancelled: FxHashSet::default(),
                scheduler,
            })),
        }
    }

    pub fn register_frame_callback(
        &self,
        callback: impl FnOnce(u64) + 'static,
    ) -> Option<FrameCallbackId> {
        let (id, scheduler) = {
            let mut inner = self.inner.borrow_mut();
            let id = FrameCallbackId(inner.next_id);
            inner.next_id += 1;
            inner.pending.push((id, Box::new(callback)));
            (id, inner.scheduler.clone())
        };
        // Without a scheduler the host is expected to drain on its own
        // cadence; registration still succeeds.
        if let Some(scheduler) = scheduler {
            scheduler.schedule_frame();
        }
        Some(id)
    }

    pub fn cancel_frame_callback(&self, id: FrameCallbackId) {
        let mut inner = self.inner.borrow_mut();
        let before = inner.pending.len();
        inner.pending.retain(|(pending_id, _)| *pending_id != id);
        if inner.pending.len() == before {
            // Not pending: either already drained (no-op) or its batch is
            // mid-drain right now. Mark it so the drain skips it.
            inner.cancelled.insert(id);
        }
    }

    /// Run every callback registered before this call, passing the frame
    /// timestamp in nanoseconds. Returns the number of callbacks run.
    pub fn drain_frame_callbacks(&self, frame_time_nanos: u64) -> usize {
        let batch = {
            let mut inner = self.inner.borrow_mut();
            std::mem::take(&mut inner.pending)
        };
        let mut ran = 0;
        for (id, callback) in batch {
            if self.inner.borrow_mut().cancelled.remove(&id) {
                continue;
            }
            callback(frame_time_nanos);
            ran += 1;
        }
        self.inner.borrow_mut().cancelled.clear();
        ran
    }

    pub fn has_pending_frame_callbacks(&self) -> bool {
        !self.inner.borrow().pending.is_empty()
    }

    pub fn frame_clock(&self) -> FrameClock {
        FrameClock::new(self.clone())
    }
}

impl Default for RuntimeHandle {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/runtime_tests.rs"]
mod tests;
