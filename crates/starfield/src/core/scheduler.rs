use super::time::FrameClock;

/// Opaque handle for a scheduled frame (e.g. a `requestAnimationFrame` id).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub i32);

/// Host-provided frame scheduling.
///
/// The browser bridge implements this over `requestAnimationFrame`; tests use
/// [`ManualScheduler`] and fire frames by hand.
pub trait Scheduler {
    /// Ask the host to invoke the frame callback once more.
    /// Returns `None` if the host could not schedule.
    fn request_frame(&mut self) -> Option<FrameHandle>;

    /// Cancel a previously requested frame.
    fn cancel_frame(&mut self, handle: FrameHandle);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoopState {
    Idle,
    Running { pending: Option<FrameHandle> },
}

/// Self-rescheduling frame loop.
///
/// A frame runs as `begin_frame` (delta) → update/draw → `end_frame` (schedule next),
/// so the next frame is only requested once the current one has finished.
#[derive(Debug, Clone)]
pub struct FrameLoop {
    state: LoopState,
    clock: FrameClock,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self {
            state: LoopState::Idle,
            clock: FrameClock::new(),
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, LoopState::Running { .. })
    }

    /// Start the loop. Returns false if it was already running or the host
    /// could not schedule the first frame.
    pub fn start<S: Scheduler + ?Sized>(&mut self, scheduler: &mut S) -> bool {
        if self.is_running() {
            return false;
        }
        self.clock.reset();
        self.schedule_next(scheduler);
        self.is_running()
    }

    /// Stop the loop and cancel the pending frame. Returns false if already idle.
    pub fn stop<S: Scheduler + ?Sized>(&mut self, scheduler: &mut S) -> bool {
        match self.state {
            LoopState::Idle => false,
            LoopState::Running { pending } => {
                if let Some(handle) = pending {
                    scheduler.cancel_frame(handle);
                }
                self.state = LoopState::Idle;
                true
            }
        }
    }

    /// Called when a scheduled frame fires. Returns the delta to simulate,
    /// or `None` if the loop is stopped and the frame should be ignored.
    pub fn begin_frame(&mut self, now_ms: f64) -> Option<f32> {
        match self.state {
            LoopState::Idle => None,
            LoopState::Running { .. } => {
                self.state = LoopState::Running { pending: None };
                Some(self.clock.tick(now_ms))
            }
        }
    }

    /// Schedule the next frame after the current one has completed.
    pub fn end_frame<S: Scheduler + ?Sized>(&mut self, scheduler: &mut S) {
        if let LoopState::Running { pending: None } = self.state {
            self.schedule_next(scheduler);
        }
    }

    /// A loop with no frame on the way is stopped, so `start` can retry.
    fn schedule_next<S: Scheduler + ?Sized>(&mut self, scheduler: &mut S) {
        self.state = match scheduler.request_frame() {
            Some(handle) => LoopState::Running { pending: Some(handle) },
            None => {
                log::warn!("host could not schedule a frame, stopping the loop");
                LoopState::Idle
            }
        };
    }
}

impl Default for FrameLoop {
    fn default() -> Self {
        Self::new()
    }
}

/// Scheduler that only records requests. Frames are fired manually.
#[derive(Debug, Clone, Default)]
pub struct ManualScheduler {
    next_id: i32,
    requested: Vec<FrameHandle>,
    cancelled: Vec<FrameHandle>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// All handles ever requested, in order.
    pub fn requested(&self) -> &[FrameHandle] {
        &self.requested
    }

    /// All handles cancelled, in order.
    pub fn cancelled(&self) -> &[FrameHandle] {
        &self.cancelled
    }

    /// The most recent request, unless it was cancelled.
    pub fn pending(&self) -> Option<FrameHandle> {
        self.requested
            .last()
            .copied()
            .filter(|h| !self.cancelled.contains(h))
    }
}

impl Scheduler for ManualScheduler {
    fn request_frame(&mut self) -> Option<FrameHandle> {
        self.next_id += 1;
        let handle = FrameHandle(self.next_id);
        self.requested.push(handle);
        Some(handle)
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.cancelled.push(handle);
    }
}
