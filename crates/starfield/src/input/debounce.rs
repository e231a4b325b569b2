/// A requested viewport size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeRequest {
    pub width: f32,
    pub height: f32,
    pub dpr: f32,
}

/// Collapses bursts of resize notifications into one.
///
/// The latest request is released once `wait_ms` has passed without a newer one.
/// Driven by host timestamps and polled from the frame loop, so no timers.
#[derive(Debug, Clone)]
pub struct ResizeDebouncer {
    wait_ms: f64,
    pending: Option<(ResizeRequest, f64)>,
}

impl ResizeDebouncer {
    pub fn new(wait_ms: f64) -> Self {
        Self { wait_ms, pending: None }
    }

    pub fn push(&mut self, request: ResizeRequest, now_ms: f64) {
        self.pending = Some((request, now_ms));
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Release the pending request if it has settled.
    pub fn poll(&mut self, now_ms: f64) -> Option<ResizeRequest> {
        match self.pending {
            Some((request, at)) if now_ms - at >= self.wait_ms => {
                self.pending = None;
                Some(request)
            }
            _ => None,
        }
    }

    /// Release the pending request regardless of timing.
    pub fn flush(&mut self) -> Option<ResizeRequest> {
        self.pending.take().map(|(request, _)| request)
    }
}
