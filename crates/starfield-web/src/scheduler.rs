use js_sys::Function;
use starfield::{FrameHandle, Scheduler};
use web_sys::Window;

/// `Scheduler` over `requestAnimationFrame`.
///
/// `callback` is the JS function of the frame closure; the closure itself is
/// kept alive by the caller for as long as frames may fire.
pub struct RafScheduler {
    window: Window,
    callback: Function,
}

impl RafScheduler {
    pub fn new(window: Window, callback: Function) -> Self {
        Self { window, callback }
    }
}

impl Scheduler for RafScheduler {
    fn request_frame(&mut self) -> Option<FrameHandle> {
        match self.window.request_animation_frame(&self.callback) {
            Ok(id) => Some(FrameHandle(id)),
            Err(err) => {
                log::warn!("requestAnimationFrame failed: {:?}", err);
                None
            }
        }
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if let Err(err) = self.window.cancel_animation_frame(handle.0) {
            log::warn!("cancelAnimationFrame({}) failed: {:?}", handle.0, err);
        }
    }
}
