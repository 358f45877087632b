use wasm_bindgen::prelude::*;

use crate::spatial::grid::GridOptions;
use crate::systems::collision::CollisionOptionsUpdate;

use super::{Clock, EngineConfig, EngineCore, LayerSystemsConfig};

#[wasm_bindgen]
pub struct PaxelEngine {
    core: EngineCore,
}

#[wasm_bindgen]
impl PaxelEngine {
    /// Create an engine with the default 32x32 grid and one layer.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            core: EngineCore::new(EngineConfig::default()),
        }
    }

    /// Create an engine from a JSON configuration bundle.
    pub fn from_config(json: String) -> Result<PaxelEngine, JsValue> {
        let core = EngineCore::from_config_json(&json).map_err(|e| JsValue::from_str(&e))?;
        Ok(Self { core })
    }

    #[wasm_bindgen(getter)]
    pub fn rows(&self) -> u32 {
        self.core.grid().rows
    }

    #[wasm_bindgen(getter)]
    pub fn columns(&self) -> u32 {
        self.core.grid().columns
    }

    #[wasm_bindgen(getter)]
    pub fn cell_size(&self) -> u32 {
        self.core.grid().cell_size
    }

    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> usize {
        self.core.particle_count()
    }

    #[wasm_bindgen(getter)]
    pub fn steps(&self) -> u64 {
        self.core.steps()
    }

    #[wasm_bindgen(getter)]
    pub fn is_running(&self) -> bool {
        self.core.is_running()
    }

    pub fn set_grid_options(&mut self, rows: u32, columns: u32, cell_size: u32) {
        self.core.set_grid_options(GridOptions {
            rows,
            columns,
            cell_size,
        });
    }

    // === DRAW ===

    /// Paint a cell; omitted color falls back to the default draw color,
    /// a target layer activates it first.
    pub fn put_pixel(
        &mut self,
        row: i32,
        column: i32,
        color: Option<String>,
        target_layer: Option<String>,
    ) {
        self.core
            .paint_cell(row, column, color.as_deref(), target_layer.as_deref());
    }

    pub fn remove_pixel(&mut self, row: i32, column: i32, target_layer: Option<String>) -> bool {
        self.core.erase_cell(row, column, target_layer.as_deref())
    }

    /// Paint the cell under a pixel position (pointer coordinates).
    pub fn draw_at(
        &mut self,
        x: f32,
        y: f32,
        color: Option<String>,
        target_layer: Option<String>,
    ) {
        self.core
            .paint_at(x, y, color.as_deref(), target_layer.as_deref());
    }

    pub fn remove_at(&mut self, x: f32, y: f32, target_layer: Option<String>) -> bool {
        self.core.erase_at(x, y, target_layer.as_deref())
    }

    /// Slot of the cell on the active layer, -1 when empty.
    pub fn get_cell_index(&self, row: i32, column: i32) -> i32 {
        match self.core.cell_index(row, column) {
            Some(slot) => slot as i32,
            None => -1,
        }
    }

    pub fn set_default_color(&mut self, color: String) {
        self.core.set_default_color(&color);
    }

    // === LAYERS ===

    /// Add a layer opted into every system.
    pub fn add_layer(&mut self, name: String) -> bool {
        self.core.add_layer(&name, LayerSystemsConfig::default())
    }

    /// Add a layer with a JSON systems config, e.g. `{"force":true,"loop":false}`.
    pub fn add_layer_with_systems(
        &mut self,
        name: String,
        systems_json: String,
    ) -> Result<bool, JsValue> {
        let systems =
            LayerSystemsConfig::from_json(&systems_json).map_err(|e| JsValue::from_str(&e))?;
        Ok(self.core.add_layer(&name, systems))
    }

    /// Remove a layer; returns the slot it occupied, -1 when unknown.
    pub fn remove_layer(&mut self, name: String) -> i32 {
        match self.core.remove_layer(&name) {
            Some(at) => at as i32,
            None => -1,
        }
    }

    pub fn get_layers(&self) -> Vec<String> {
        self.core.layer_names()
    }

    pub fn get_active_layer(&self) -> String {
        self.core.active_layer().to_string()
    }

    pub fn set_active_layer(&mut self, name: String) -> bool {
        self.core.set_active_layer(&name)
    }

    pub fn set_layer_visibility(&mut self, name: String, visible: bool) {
        self.core.set_layer_visibility(&name, visible);
    }

    pub fn change_layer_order(&mut self, name: String, to_index: usize) {
        self.core.change_layer_order(&name, to_index);
    }

    pub fn clear_layer(&mut self, name: String) -> bool {
        self.core.clear_layer(&name)
    }

    pub fn clear_all_layers(&mut self) {
        self.core.clear_all_layers();
    }

    // === PHYSICS ===

    /// Add or overwrite a force; the vector is in grid units per step.
    pub fn create_force(&mut self, name: String, x: f32, y: f32) {
        self.core.create_force(&name, x, y);
    }

    pub fn remove_force(&mut self, name: String) -> bool {
        self.core.remove_force(&name)
    }

    pub fn apply_force(&mut self, layer: String, apply: Option<bool>) {
        self.core.apply_force(&layer, apply.unwrap_or(true));
    }

    pub fn set_force_on_layer(&mut self, layer: String, force: String) {
        self.core.set_force_on_layer(&layer, &force);
    }

    pub fn remove_force_from_layer(&mut self, layer: String, force: String) {
        self.core.remove_force_from_layer(&layer, &force);
    }

    pub fn apply_collision(&mut self, layer: String, apply: Option<bool>) {
        self.core.apply_collision(&layer, apply.unwrap_or(true));
    }

    /// Merge collision options from JSON, e.g.
    /// `{"colliders":["walls"],"stopOnBounds":true}`.
    pub fn set_layer_collision(
        &mut self,
        layer: String,
        options_json: String,
    ) -> Result<(), JsValue> {
        let update: CollisionOptionsUpdate =
            serde_json::from_str(&options_json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.core.set_layer_collision(&layer, update);
        Ok(())
    }

    pub fn apply_loop(&mut self, layer: String, apply: Option<bool>) {
        self.core.apply_loop(&layer, apply.unwrap_or(true));
    }

    /// Seconds before the simulation loops.
    pub fn set_loop_duration(&mut self, seconds: f64) {
        self.core.set_loop_duration(seconds);
    }

    // === MOTION ===

    pub fn set_fps(&mut self, fps: u32) {
        self.core.set_fps(fps);
    }

    pub fn start(&mut self) {
        self.core.start(Clock::now_ms());
    }

    pub fn stop(&mut self) {
        self.core.stop();
    }

    pub fn reset(&mut self) {
        self.core.reset();
    }

    /// One rAF tick; `now_ms` is the callback timestamp. Returns whether
    /// a fixed step ran. Draw every frame either way.
    pub fn frame(&mut self, now_ms: f64) -> bool {
        self.core.advance(now_ms)
    }

    // === RENDER HANDOFF ===

    /// Repack the visible particles; returns the instance count.
    pub fn render_collect(&mut self) -> usize {
        self.core.render_collect()
    }

    pub fn render_count(&self) -> usize {
        self.core.render_count()
    }

    /// Pointer to x,y pairs (view as Float32Array of positions_len)
    pub fn positions_ptr(&self) -> *const f32 {
        self.core.positions_ptr()
    }

    pub fn positions_len(&self) -> usize {
        self.core.positions_len()
    }

    /// Pointer to w,h pairs
    pub fn sizes_ptr(&self) -> *const f32 {
        self.core.sizes_ptr()
    }

    pub fn sizes_len(&self) -> usize {
        self.core.sizes_len()
    }

    /// Pointer to r,g,b,a quads
    pub fn colors_ptr(&self) -> *const f32 {
        self.core.colors_ptr()
    }

    pub fn colors_len(&self) -> usize {
        self.core.colors_len()
    }
}

impl Default for PaxelEngine {
    fn default() -> Self {
        Self::new()
    }
}
