use starfield::DeviceProfile;
use wasm_bindgen::JsValue;
use web_sys::Window;

/// Read hardware hints from `navigator`.
/// `deviceMemory` isn't in every browser (or in web-sys), so it's read reflectively.
pub fn detect_device(window: &Window) -> DeviceProfile {
    let navigator = window.navigator();

    let cores = navigator.hardware_concurrency();
    let cores = (cores.is_finite() && cores > 0.0).then_some(cores as u32);

    let memory_gb = js_sys::Reflect::get(&navigator, &JsValue::from_str("deviceMemory"))
        .ok()
        .and_then(|v| v.as_f64())
        .map(|gb| gb as f32);

    let mobile = navigator
        .user_agent()
        .map(|ua| DeviceProfile::is_mobile_user_agent(&ua))
        .unwrap_or(false);

    let device = DeviceProfile { memory_gb, cores, mobile };
    log::info!(
        "device: mobile={} memory={:?}GB cores={:?} tier={:?}",
        device.mobile,
        device.memory_gb,
        device.cores,
        device.tier()
    );
    device
}
