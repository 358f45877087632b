use crate::layers::registry::LayerRegistry;
use crate::systems::{CollisionSystem, ForceSystem, LoopSystem};

use super::config::EngineConfig;
use super::frame::RunState;
use super::{commands, EngineCore, LayerSystemsConfig, RenderBuffers};

pub(super) fn create_engine_core(config: EngineConfig) -> EngineCore {
    let mut core = EngineCore {
        grid: config.grid,
        layers: LayerRegistry::new(),
        forces: ForceSystem::new(),
        collisions: CollisionSystem::new(),
        looper: LoopSystem::new(),
        state: RunState::Stopped,
        last_time_ms: 0.0,
        accumulator_ms: 0.0,
        target_fps: config.target_fps,
        default_color: config.default_color,
        steps: 0,
        render: RenderBuffers {
            positions: Vec::new(),
            sizes: Vec::new(),
            colors: Vec::new(),
            count: 0,
        },
    };

    core.looper.set_loop_after(config.loop_after_ms);
    commands::add_layer(&mut core, &config.default_layer, LayerSystemsConfig::default());

    core
}
