//! Browser bindings for the starfield engine.
//!
//! One scene per page: the runner lives in a `thread_local!` and the page
//! talks to it through the `starfield_*` exports below.

pub mod canvas;
pub mod device;
pub mod runner;
pub mod scheduler;

use std::cell::RefCell;

use starfield::{Starfield, StarfieldConfig, StarfieldError};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlCanvasElement;

pub use canvas::WebCanvas;
pub use device::detect_device;
pub use runner::StarfieldRunner;
pub use scheduler::RafScheduler;

thread_local! {
    static RUNNER: RefCell<Option<StarfieldRunner>> = const { RefCell::new(None) };
    static FRAME_CALLBACK: RefCell<Option<Closure<dyn FnMut(f64)>>> = const { RefCell::new(None) };
}

/// Run `f` against the runner. `None` before `starfield_init` (or after dispose).
fn with_runner<R>(f: impl FnOnce(&mut StarfieldRunner) -> R) -> Option<R> {
    RUNNER.with(|cell| match cell.try_borrow_mut() {
        Ok(mut borrow) => borrow.as_mut().map(f),
        Err(_) => {
            log::warn!("starfield runner already borrowed");
            None
        }
    })
}

/// Stop and drop the current scene, if any. Later exports become no-ops.
fn detach_runner() {
    starfield_stop();
    RUNNER.with(|cell| cell.borrow_mut().take());
}

/// JS function for the shared rAF closure, creating the closure on first use.
fn frame_callback() -> js_sys::Function {
    FRAME_CALLBACK.with(|cell| {
        let mut slot = cell.borrow_mut();
        let closure = slot.get_or_insert_with(|| {
            Closure::wrap(Box::new(|now_ms: f64| {
                with_runner(|r| r.frame(now_ms));
            }) as Box<dyn FnMut(f64)>)
        });
        closure.as_ref().unchecked_ref::<js_sys::Function>().clone()
    })
}

/// Attach the starfield to the `<canvas>` with id `canvas_id` and size it to
/// the window. `config_json` overrides the device-tuned defaults.
///
/// Nothing here is fatal to the page: a missing canvas or 2D context leaves
/// it without a starfield, and a malformed config falls back to defaults.
#[wasm_bindgen]
pub fn starfield_init(canvas_id: &str, config_json: Option<String>) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    // Re-init replaces the scene, even when the new surface turns out to be missing.
    detach_runner();

    let Some(window) = web_sys::window() else {
        log::warn!("starfield: no window");
        return Ok(());
    };

    let element = window
        .document()
        .and_then(|doc| doc.get_element_by_id(canvas_id))
        .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok());
    let Some(element) = element else {
        log::warn!("starfield: {}", StarfieldError::MissingSurface(canvas_id.to_string()));
        return Ok(());
    };

    let canvas = match WebCanvas::new(element) {
        Ok(canvas) => canvas,
        Err(err) => {
            log::warn!("starfield: {}", err);
            return Ok(());
        }
    };

    let tier = detect_device(&window).tier();
    let mut config = match config_json.as_deref().map(StarfieldConfig::from_json) {
        Some(Ok(config)) => config,
        Some(Err(err)) => {
            log::warn!("starfield: {}, using defaults", err);
            StarfieldConfig::for_tier(tier)
        }
        None => StarfieldConfig::for_tier(tier),
    };
    if config.seed.is_none() {
        config.seed = Some((js_sys::Math::random() * u32::MAX as f64) as u64);
    }

    let scheduler = RafScheduler::new(window.clone(), frame_callback());
    let mut runner = StarfieldRunner::new(Starfield::new(config), canvas, scheduler, window);
    runner.fit_to_window();

    RUNNER.with(|cell| *cell.borrow_mut() = Some(runner));
    log::info!("starfield: initialized on #{}", canvas_id);
    Ok(())
}

/// Window size in CSS pixels plus device pixel ratio.
#[wasm_bindgen]
pub fn starfield_resize(width: f32, height: f32, dpr: f32) {
    with_runner(|r| r.resize(width, height, dpr));
}

#[wasm_bindgen]
pub fn starfield_pointer_move(x: f32, y: f32) {
    with_runner(|r| r.set_pointer_target(x, y));
}

#[wasm_bindgen]
pub fn starfield_touch_move(x: f32, y: f32) {
    with_runner(|r| r.set_pointer_target(x, y));
}

/// `deviceorientation` angles in degrees; either may be null.
#[wasm_bindgen]
pub fn starfield_orientation(gamma: Option<f64>, beta: Option<f64>) {
    let gamma = gamma.map(|g| g as f32);
    let beta = beta.map(|b| b as f32);
    with_runner(|r| r.set_orientation(gamma, beta));
}

#[wasm_bindgen]
pub fn starfield_start() {
    with_runner(|r| r.start());
}

#[wasm_bindgen]
pub fn starfield_stop() {
    with_runner(|r| r.stop());
}

#[wasm_bindgen]
pub fn starfield_is_running() -> bool {
    with_runner(|r| r.engine().is_running()).unwrap_or(false)
}

/// Stop the loop and drop the scene and its frame closure.
#[wasm_bindgen]
pub fn starfield_dispose() {
    detach_runner();
    FRAME_CALLBACK.with(|cell| cell.borrow_mut().take());
    log::info!("starfield: disposed");
}
