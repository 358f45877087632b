//! Authoring commands: painting, layer CRUD, system wiring.
//!
//! A bad name degrades any command to a logged no-op, never an abort.

use crate::core::log;
use crate::systems::collision::CollisionOptionsUpdate;
use crate::systems::SystemKind;

use super::{EngineCore, LayerSystemsConfig};

pub(super) fn paint_cell(
    core: &mut EngineCore,
    row: i32,
    column: i32,
    color: Option<&str>,
    target: Option<&str>,
) {
    if let Some(target) = target {
        core.layers.set_active(target);
    }

    let color = color.unwrap_or(&core.default_color).to_string();
    let grid = core.grid;

    let Some(layer) = core.layers.active_mut() else {
        log::error("cannot paint: no active layer");
        return;
    };
    layer.set_cell(&grid, row, column, &color);
}

pub(super) fn erase_cell(
    core: &mut EngineCore,
    row: i32,
    column: i32,
    target: Option<&str>,
) -> bool {
    if let Some(target) = target {
        core.layers.set_active(target);
    }

    let grid = core.grid;
    let Some(layer) = core.layers.active_mut() else {
        log::error("cannot erase: no active layer");
        return false;
    };
    layer.remove_cell(&grid, row, column)
}

pub(super) fn paint_at(
    core: &mut EngineCore,
    x: f32,
    y: f32,
    color: Option<&str>,
    target: Option<&str>,
) {
    let (row, column) = core.grid.cell_at(x, y);
    paint_cell(core, row, column, color, target);
}

pub(super) fn erase_at(core: &mut EngineCore, x: f32, y: f32, target: Option<&str>) -> bool {
    let (row, column) = core.grid.cell_at(x, y);
    erase_cell(core, row, column, target)
}

pub(super) fn add_layer(core: &mut EngineCore, name: &str, systems: LayerSystemsConfig) -> bool {
    if name.is_empty() {
        log::warn("cannot add layer with an empty name");
        return false;
    }
    if core.layers.get(name).is_some() {
        log::warn(&format!("cannot add layer with name of existing layer: {}", name));
        return false;
    }

    let layer = core.layers.create(name);
    layer.apply(SystemKind::Force, systems.force);
    layer.apply(SystemKind::Loop, systems.looping);
    layer.apply(SystemKind::Collision, systems.collision);
    true
}

pub(super) fn remove_layer(core: &mut EngineCore, name: &str) -> Option<usize> {
    let removed = core.layers.drop_layer(name)?;

    // The systems key side tables by layer name; purge them so a future
    // layer with the same name starts clean.
    core.forces.forget_layer(name);
    core.collisions.forget_layer(name);

    Some(removed)
}

pub(super) fn create_force(core: &mut EngineCore, name: &str, x: f32, y: f32) {
    core.forces
        .upsert_force(name, crate::domain::vec2::Vec2::new(x, y));
}

pub(super) fn apply_system(core: &mut EngineCore, layer: &str, system: SystemKind, apply: bool) {
    let Some(layer) = core.layers.get_mut(layer) else {
        log::error(&format!("cannot apply {:?} to layer: {}", system, layer));
        return;
    };
    layer.apply(system, apply);
}

pub(super) fn set_force_on_layer(core: &mut EngineCore, layer: &str, force: &str) {
    if core.layers.get(layer).is_none() {
        log::warn(&format!("cannot find layer: {}", layer));
        return;
    }
    core.forces.add_force_to_layer(layer, force);
}

pub(super) fn remove_force_from_layer(core: &mut EngineCore, layer: &str, force: &str) {
    core.forces.remove_force_from_layer(layer, force);
}

pub(super) fn set_layer_collision(
    core: &mut EngineCore,
    layer: &str,
    update: CollisionOptionsUpdate,
) {
    if core.layers.get(layer).is_none() {
        log::warn(&format!("cannot find layer: {}", layer));
        return;
    }
    core.collisions.set_layer_options(layer, update);
}
