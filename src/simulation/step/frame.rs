//! Frame driver: run-state machine and the fixed-step accumulator.
//!
//! The host schedules one call to `advance` per rendered frame. Delta
//! time is clamped so a backgrounded tab cannot trigger a huge catch-up
//! jump, and the accumulator is drained by reset - at most one fixed
//! step runs per frame, the remainder is discarded.

use super::{step, EngineCore};

/// Run state of the frame driver.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {
    Stopped,
    Running,
}

pub(super) const MAX_FRAME_DELTA_MS: f64 = 200.0;

pub(super) fn start(core: &mut EngineCore, now_ms: f64) {
    if core.state == RunState::Running {
        return;
    }

    core.state = RunState::Running;
    core.last_time_ms = now_ms;
    core.looper.init();
}

pub(super) fn stop(core: &mut EngineCore) {
    if core.state == RunState::Stopped {
        return;
    }

    // The host cancels its scheduled callback; from here on `advance`
    // refuses to run until the next `start`.
    core.state = RunState::Stopped;
}

pub(super) fn reset(core: &mut EngineCore) {
    core.looper.reset_timer();

    for layer in core.layers.iter_mut() {
        for particle in layer.particles.iter_mut() {
            particle.restore_home();
            particle.set_freeze(false);
        }
    }
}

pub(super) fn advance(core: &mut EngineCore, now_ms: f64) -> bool {
    if core.state != RunState::Running {
        return false;
    }

    let delta = now_ms - core.last_time_ms;
    core.last_time_ms = now_ms;
    core.accumulator_ms += delta.min(MAX_FRAME_DELTA_MS);

    if core.accumulator_ms < core.frame_duration_ms() {
        return false;
    }

    let elapsed = core.accumulator_ms;
    step::fixed_step(core, elapsed);
    core.accumulator_ms = 0.0;
    core.steps += 1;

    true
}
