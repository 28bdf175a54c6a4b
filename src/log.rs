//! Console diagnostics. Off wasm32 these are no-ops so native tests never
//! call into JS.

#[cfg(target_arch = "wasm32")]
pub fn info(msg: &str) {
    web_sys::console::log_1(&format!("skill-gap-demo: {msg}").into());
}

#[cfg(target_arch = "wasm32")]
pub fn warn(msg: &str) {
    web_sys::console::warn_1(&format!("skill-gap-demo: {msg}").into());
}

#[cfg(not(target_arch = "wasm32"))]
pub fn info(_msg: &str) {}

#[cfg(not(target_arch = "wasm32"))]
pub fn warn(_msg: &str) {}
