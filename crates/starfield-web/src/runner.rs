use starfield::Starfield;
use web_sys::Window;

use crate::canvas::WebCanvas;
use crate::scheduler::RafScheduler;

/// Wires the engine to a browser canvas and `requestAnimationFrame`.
///
/// The crate keeps one of these in a `thread_local!` and exports free
/// functions via `#[wasm_bindgen]`, since the frame closure needs to reach it.
pub struct StarfieldRunner {
    engine: Starfield,
    canvas: WebCanvas,
    scheduler: RafScheduler,
    window: Window,
}

impl StarfieldRunner {
    pub fn new(engine: Starfield, canvas: WebCanvas, scheduler: RafScheduler, window: Window) -> Self {
        Self { engine, canvas, scheduler, window }
    }

    pub fn engine(&self) -> &Starfield {
        &self.engine
    }

    /// Size the scene to the window right now (no debounce).
    pub fn fit_to_window(&mut self) {
        let (width, height, dpr) = self.window_metrics();
        self.engine.resize_surface(&mut self.canvas, width, height, dpr);
    }

    /// Handle a host resize notification. While the loop runs, bursts are
    /// debounced and applied by the frame; otherwise the resize is immediate.
    pub fn resize(&mut self, width: f32, height: f32, dpr: f32) {
        if self.engine.is_running() {
            let now = self.now_ms();
            self.engine.request_resize(width, height, dpr, now);
        } else {
            self.engine.resize_surface(&mut self.canvas, width, height, dpr);
        }
    }

    /// Pointer and touch input write the parallax target immediately.
    pub fn set_pointer_target(&mut self, x: f32, y: f32) {
        self.engine.set_pointer_target(x, y);
    }

    pub fn set_orientation(&mut self, gamma: Option<f32>, beta: Option<f32>) {
        self.engine.set_orientation(gamma, beta);
    }

    pub fn start(&mut self) {
        self.engine.start(&mut self.scheduler);
    }

    /// Stop the loop. A resize still waiting on its debounce is applied now.
    pub fn stop(&mut self) {
        self.engine.stop(&mut self.scheduler);
        self.engine.flush_resize(&mut self.canvas);
    }

    /// Frame callback body, given the rAF timestamp.
    pub fn frame(&mut self, now_ms: f64) {
        self.engine.frame(now_ms, &mut self.scheduler, &mut self.canvas);
    }

    fn now_ms(&self) -> f64 {
        self.window.performance().map(|p| p.now()).unwrap_or(0.0)
    }

    fn window_metrics(&self) -> (f32, f32, f32) {
        let width = self.window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        let height = self.window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        let dpr = self.window.device_pixel_ratio();
        (width as f32, height as f32, dpr as f32)
    }
}
