//! Engine core - orchestration only.
//!
//! Authoring commands live in commands/, the frame driver and the fixed
//! step in step/, render extraction in render/. The wasm facade wraps
//! this struct 1:1; nothing here touches the DOM or the GPU.

use crate::layers::registry::LayerRegistry;
use crate::spatial::grid::GridOptions;
use crate::systems::collision::CollisionOptionsUpdate;
use crate::systems::{CollisionSystem, ForceSystem, LoopSystem, SystemKind};

#[path = "init/config.rs"]
mod config;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "commands/commands.rs"]
mod commands;
#[path = "step/frame.rs"]
mod frame;
#[path = "step/step.rs"]
mod step;
#[path = "render/render_extract.rs"]
mod render_extract;
mod clock;
mod facade;

pub use config::{EngineConfig, LayerSystemsConfig};
pub use facade::PaxelEngine;
pub use frame::RunState;

pub(crate) use clock::Clock;

/// Flat per-particle buffers handed to the instanced renderer.
pub(crate) struct RenderBuffers {
    positions: Vec<f32>,
    sizes: Vec<f32>,
    colors: Vec<f32>,
    count: usize,
}

/// The paint-and-simulate engine
pub struct EngineCore {
    grid: GridOptions,
    layers: LayerRegistry,

    forces: ForceSystem,
    collisions: CollisionSystem,
    looper: LoopSystem,

    // Frame driver
    state: RunState,
    last_time_ms: f64,
    accumulator_ms: f64,
    target_fps: u32,

    default_color: String,

    // State
    steps: u64,

    render: RenderBuffers,
}

impl EngineCore {
    /// Create an engine from an in-memory configuration.
    pub fn new(config: EngineConfig) -> Self {
        init::create_engine_core(config)
    }

    /// Create an engine from a JSON configuration bundle.
    pub fn from_config_json(json: &str) -> Result<Self, String> {
        let config = EngineConfig::from_json(json)?;
        Ok(Self::new(config))
    }

    pub fn grid(&self) -> GridOptions {
        self.grid
    }

    /// Swap the grid options in place. Existing particles keep the size
    /// they were authored with.
    pub fn set_grid_options(&mut self, grid: GridOptions) {
        self.grid = grid;
    }

    pub fn particle_count(&self) -> usize {
        self.layers.total_particle_count()
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    pub(crate) fn frame_duration_ms(&self) -> f64 {
        1000.0 / self.target_fps as f64
    }

    // === Authoring: cells ===

    /// Paint a cell on the active layer (or on `target` after activating it).
    pub fn paint_cell(&mut self, row: i32, column: i32, color: Option<&str>, target: Option<&str>) {
        commands::paint_cell(self, row, column, color, target);
    }

    /// Erase a cell; false when the cell was empty.
    pub fn erase_cell(&mut self, row: i32, column: i32, target: Option<&str>) -> bool {
        commands::erase_cell(self, row, column, target)
    }

    /// Paint the cell under a pixel position.
    pub fn paint_at(&mut self, x: f32, y: f32, color: Option<&str>, target: Option<&str>) {
        commands::paint_at(self, x, y, color, target);
    }

    /// Erase the cell under a pixel position.
    pub fn erase_at(&mut self, x: f32, y: f32, target: Option<&str>) -> bool {
        commands::erase_at(self, x, y, target)
    }

    /// Slot of the particle keyed at (row, column) on the active layer.
    pub fn cell_index(&self, row: i32, column: i32) -> Option<usize> {
        self.layers
            .get(self.layers.active_name())
            .and_then(|layer| layer.cell_index(row, column))
    }

    // === Authoring: layers ===

    /// Create a layer and opt it into the configured systems.
    pub fn add_layer(&mut self, name: &str, systems: LayerSystemsConfig) -> bool {
        commands::add_layer(self, name, systems)
    }

    /// Remove a layer and purge its per-system configuration.
    pub fn remove_layer(&mut self, name: &str) -> Option<usize> {
        commands::remove_layer(self, name)
    }

    pub fn layer_names(&self) -> Vec<String> {
        self.layers.names()
    }

    pub fn active_layer(&self) -> &str {
        self.layers.active_name()
    }

    pub fn set_active_layer(&mut self, name: &str) -> bool {
        self.layers.set_active(name)
    }

    pub fn set_layer_visibility(&mut self, name: &str, visible: bool) {
        self.layers.set_visible(name, visible);
    }

    pub fn change_layer_order(&mut self, name: &str, to_index: usize) {
        self.layers.change_order(name, to_index);
    }

    pub fn clear_layer(&mut self, name: &str) -> bool {
        self.layers.clear_layer(name)
    }

    pub fn clear_all_layers(&mut self) {
        self.layers.clear_all();
    }

    // === Authoring: physics ===

    /// Insert or overwrite a named force (grid units per fixed step).
    pub fn create_force(&mut self, name: &str, x: f32, y: f32) {
        commands::create_force(self, name, x, y);
    }

    pub fn remove_force(&mut self, name: &str) -> bool {
        self.forces.remove_force(name)
    }

    /// Opt a layer in or out of the force system.
    pub fn apply_force(&mut self, layer: &str, apply: bool) {
        commands::apply_system(self, layer, SystemKind::Force, apply);
    }

    pub fn set_force_on_layer(&mut self, layer: &str, force: &str) {
        commands::set_force_on_layer(self, layer, force);
    }

    pub fn remove_force_from_layer(&mut self, layer: &str, force: &str) {
        commands::remove_force_from_layer(self, layer, force);
    }

    /// Opt a layer in or out of the collision system.
    pub fn apply_collision(&mut self, layer: &str, apply: bool) {
        commands::apply_system(self, layer, SystemKind::Collision, apply);
    }

    pub fn set_layer_collision(&mut self, layer: &str, update: CollisionOptionsUpdate) {
        commands::set_layer_collision(self, layer, update);
    }

    /// Opt a layer in or out of the loop system.
    pub fn apply_loop(&mut self, layer: &str, apply: bool) {
        commands::apply_system(self, layer, SystemKind::Loop, apply);
    }

    /// Seconds before the loop system resets its layers.
    pub fn set_loop_duration(&mut self, seconds: f64) {
        settings::set_loop_duration(self, seconds);
    }

    pub fn set_fps(&mut self, fps: u32) {
        settings::set_fps(self, fps);
    }

    pub fn set_default_color(&mut self, color: &str) {
        settings::set_default_color(self, color);
    }

    // === Motion ===

    /// Stopped -> Running; records the start time and arms the loop timer.
    pub fn start(&mut self, now_ms: f64) {
        frame::start(self, now_ms);
    }

    /// Running -> Stopped; further frames are refused until `start`.
    pub fn stop(&mut self) {
        frame::stop(self);
    }

    /// Restore every particle of every layer to its home position and
    /// unfreeze it, in either run state. Visibility is loop business.
    pub fn reset(&mut self) {
        frame::reset(self);
    }

    /// One scheduled frame: accumulate clamped delta time and run at most
    /// one fixed step. Returns whether a step ran; the host renders every
    /// frame regardless.
    pub fn advance(&mut self, now_ms: f64) -> bool {
        frame::advance(self, now_ms)
    }

    // === Render handoff ===

    /// Pack the visible particles into flat buffers; returns the count.
    pub fn render_collect(&mut self) -> usize {
        render_extract::render_collect(self)
    }

    pub fn render_count(&self) -> usize {
        self.render.count
    }

    /// Pointer to x,y pairs (for the JS Float32Array view)
    pub fn positions_ptr(&self) -> *const f32 {
        self.render.positions.as_ptr()
    }

    pub fn positions_len(&self) -> usize {
        self.render.positions.len()
    }

    /// Pointer to w,h pairs
    pub fn sizes_ptr(&self) -> *const f32 {
        self.render.sizes.as_ptr()
    }

    pub fn sizes_len(&self) -> usize {
        self.render.sizes.len()
    }

    /// Pointer to r,g,b,a quads
    pub fn colors_ptr(&self) -> *const f32 {
        self.render.colors.as_ptr()
    }

    pub fn colors_len(&self) -> usize {
        self.render.colors.len()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
