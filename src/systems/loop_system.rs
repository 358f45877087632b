//! Periodic loop: a countdown that resets registered layers to their
//! authored state.
//!
//! `check_loop` is the single point where destroyed (invisible + frozen)
//! particles are resurrected.

use crate::layers::registry::LayerRegistry;
use crate::systems::SystemKind;

pub const DEFAULT_LOOP_AFTER_MS: f64 = 2000.0;

pub struct LoopSystem {
    loop_after: f64,
    loop_timer: f64,
}

impl Default for LoopSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl LoopSystem {
    pub fn new() -> Self {
        Self {
            loop_after: DEFAULT_LOOP_AFTER_MS,
            loop_timer: 0.0,
        }
    }

    /// Arm the timer unless it is already counting down.
    pub fn init(&mut self) {
        if self.loop_timer <= 0.0 {
            self.reset_timer();
        }
    }

    /// Consume elapsed simulation time.
    pub fn update(&mut self, delta_ms: f64) {
        self.loop_timer -= delta_ms;
    }

    /// Fire the loop once the timer has elapsed: every particle of every
    /// loop-enabled layer returns home, unfrozen and visible again, and
    /// the timer rearms.
    pub fn check_loop(&mut self, layers: &mut LayerRegistry) -> bool {
        if self.loop_timer > 0.0 {
            return false;
        }

        for layer in layers.iter_mut() {
            if !layer.is_registered(SystemKind::Loop) {
                continue;
            }
            for particle in layer.particles.iter_mut() {
                particle.restore_home();
                particle.set_freeze(false);
                particle.set_visible(true);
            }
        }

        self.reset_timer();
        true
    }

    pub fn reset_timer(&mut self) {
        self.loop_timer = self.loop_after;
    }

    pub fn set_loop_after(&mut self, after_ms: f64) {
        self.loop_after = after_ms;
    }

    pub fn loop_after(&self) -> f64 {
        self.loop_after
    }

    pub fn timer(&self) -> f64 {
        self.loop_timer
    }
}
