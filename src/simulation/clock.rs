//! Wall-clock access for the frame driver.

pub(crate) struct Clock;

impl Clock {
    /// Milliseconds since an arbitrary epoch; only deltas matter.
    pub(crate) fn now_ms() -> f64 {
        #[cfg(target_arch = "wasm32")]
        {
            js_sys::Date::now()
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            use std::time::{SystemTime, UNIX_EPOCH};
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|elapsed| elapsed.as_secs_f64() * 1000.0)
                .unwrap_or(0.0)
        }
    }
}
