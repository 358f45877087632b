use crate::core::log;

use super::EngineCore;

/// Fixed steps above this rate would outpace the render cadence.
pub(super) const MAX_FPS: u32 = 30;

pub(super) fn set_fps(core: &mut EngineCore, fps: u32) {
    if fps == 0 || fps > MAX_FPS {
        log::warn(&format!("the fps limit is 1..={}", MAX_FPS));
        return;
    }
    core.target_fps = fps;
}

pub(super) fn set_loop_duration(core: &mut EngineCore, seconds: f64) {
    core.looper.set_loop_after(seconds * 1000.0);
}

pub(super) fn set_default_color(core: &mut EngineCore, color: &str) {
    core.default_color = color.to_string();
}
