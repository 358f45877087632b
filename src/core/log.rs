//! Console logging that works in wasm and native test builds.
//!
//! The JS host surfaces `console.warn` / `console.error`; native builds
//! fall back to stderr so the degraded paths stay visible under test.

/// Non-fatal problem: the call degrades to a no-op.
pub fn warn(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::warn_1(&msg.into());
    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("[paxel] warn: {}", msg);
}

/// Invalid request: the operation is aborted with no state change.
pub fn error(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::error_1(&msg.into());
    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("[paxel] error: {}", msg);
}
