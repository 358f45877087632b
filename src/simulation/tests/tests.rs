use super::*;
use crate::domain::vec2::Vec2;

fn engine_with_layers(names: &[&str]) -> EngineCore {
    let mut config = EngineConfig::default();
    config.default_layer = names[0].to_string();

    let mut core = EngineCore::new(config);
    for name in &names[1..] {
        assert!(core.add_layer(name, LayerSystemsConfig::default()));
    }
    core
}

#[test]
fn paint_query_erase_round_trip() {
    // 32x32 grid, cellSize 20 (the defaults).
    let mut core = engine_with_layers(&["a"]);

    core.paint_cell(0, 0, Some("#ff0000"), None);
    assert_eq!(core.cell_index(0, 0), Some(0));
    assert_eq!(core.particle_count(), 1);

    assert!(core.erase_cell(0, 0, None));
    assert_eq!(core.cell_index(0, 0), None);
    assert_eq!(core.particle_count(), 0);

    // Erasing again fails without side effects.
    assert!(!core.erase_cell(0, 0, None));
}

#[test]
fn duplicate_and_empty_layer_names_are_rejected() {
    let mut core = engine_with_layers(&["a"]);

    assert!(!core.add_layer("a", LayerSystemsConfig::default()));
    assert!(!core.add_layer("", LayerSystemsConfig::default()));
    assert_eq!(core.layer_names(), vec!["a"]);
}

#[test]
fn removing_a_layer_purges_its_system_configuration() {
    let mut core = engine_with_layers(&["a", "b"]);

    core.create_force("wind", 1.0, 0.0);
    core.set_force_on_layer("b", "wind");
    core.apply_collision("b", true);

    assert_eq!(core.remove_layer("b"), Some(1));
    assert_eq!(core.remove_layer("b"), None);

    // A recreated layer with the same name starts clean.
    assert!(core.add_layer("b", LayerSystemsConfig::default()));
    assert!(core.forces.layer_forces("b").is_empty());
    assert!(core.collisions.layer_options("b").is_none());
}

#[test]
fn force_moves_only_the_assigned_layer() {
    let mut core = engine_with_layers(&["a", "b"]);

    core.paint_cell(5, 5, Some("#ff0000"), None);
    core.paint_cell(10, 10, Some("#00ff00"), Some("b"));

    core.create_force("wind", 1.0, 0.0);
    core.set_force_on_layer("a", "wind");

    core.start(0.0);
    assert!(core.advance(100.0));

    // One fixed step: +cellSize in x for every particle of "a".
    let a = &core.layers.get("a").unwrap().particles[0];
    assert_eq!(a.position(), Vec2::new(120.0, 100.0));

    let b = &core.layers.get("b").unwrap().particles[0];
    assert_eq!(b.position(), Vec2::new(200.0, 200.0));
}

#[test]
fn hidden_layers_are_not_simulated() {
    let mut core = engine_with_layers(&["a"]);

    core.paint_cell(5, 5, Some("#ff0000"), None);
    core.create_force("wind", 1.0, 0.0);
    core.set_force_on_layer("a", "wind");
    core.set_layer_visibility("a", false);

    core.start(0.0);
    assert!(core.advance(100.0));

    let p = &core.layers.get("a").unwrap().particles[0];
    assert_eq!(p.position(), Vec2::new(100.0, 100.0));
}

#[test]
fn frame_driver_accumulates_before_stepping() {
    let mut core = engine_with_layers(&["a"]);
    core.start(0.0);

    // Default 15 fps -> 66.67 ms per fixed step.
    assert!(!core.advance(30.0));
    assert!(!core.advance(60.0));
    assert!(core.advance(90.0));
    assert_eq!(core.steps(), 1);

    // The accumulator drained to zero; the remainder was discarded.
    assert!(!core.advance(120.0));
    assert_eq!(core.steps(), 1);
}

#[test]
fn stall_deltas_are_clamped() {
    let mut core = engine_with_layers(&["a"]);
    core.set_loop_duration(1.0);

    core.start(0.0);
    assert!(core.advance(10_000.0));

    // Only the 200 ms clamp reached the loop timer, so it did not fire.
    assert_eq!(core.looper.timer(), 800.0);
}

#[test]
fn start_and_stop_are_idempotent() {
    let mut core = engine_with_layers(&["a"]);

    // Stopped engines refuse frames.
    assert!(!core.advance(1000.0));

    core.start(0.0);
    core.start(50.0); // no-op: the original start time stands

    assert!(core.advance(70.0));

    core.stop();
    core.stop();
    assert!(!core.is_running());
    assert!(!core.advance(2000.0));
}

#[test]
fn reset_restores_home_in_any_run_state() {
    let mut core = engine_with_layers(&["a"]);

    core.paint_cell(5, 5, Some("#ff0000"), None);
    core.create_force("wind", 1.0, 1.0);
    core.set_force_on_layer("a", "wind");

    core.start(0.0);
    assert!(core.advance(100.0));
    core.stop();

    core.reset();

    let p = &core.layers.get("a").unwrap().particles[0];
    assert_eq!(p.position(), Vec2::new(100.0, 100.0));
    assert!(!p.is_freezed());
}

#[test]
fn destroy_wins_over_loop_on_collision() {
    let mut core = engine_with_layers(&["mover", "walls"]);

    core.paint_cell(0, 0, Some("#ff0000"), None);
    core.paint_cell(0, 2, Some("#0000ff"), Some("walls"));

    core.create_force("push", 1.0, 0.0);
    core.set_force_on_layer("mover", "push");
    core.set_layer_collision(
        "mover",
        crate::systems::collision::CollisionOptionsUpdate {
            colliders: Some(vec!["walls".to_string()]),
            destroy_on_collision: Some(true),
            loop_on_collision: Some(true),
            ..Default::default()
        },
    );

    core.start(0.0);
    assert!(core.advance(100.0)); // x: 0 -> 20, no overlap yet
    assert!(core.advance(200.0)); // candidate x=40 overlaps the wall

    let p = &core.layers.get("mover").unwrap().particles[0];
    assert!(!p.is_visible());
    assert!(p.is_freezed());
    // Destroyed in place, never looped home.
    assert_eq!(p.position(), Vec2::new(20.0, 0.0));
}

#[test]
fn unconfigured_collision_layers_pass_through() {
    let mut core = engine_with_layers(&["mover", "walls"]);

    core.paint_cell(0, 1, Some("#ff0000"), None);
    core.paint_cell(0, 2, Some("#0000ff"), Some("walls"));

    core.create_force("push", 1.0, 0.0);
    core.set_force_on_layer("mover", "push");
    // Collision is enabled by default but no options were configured.

    core.start(0.0);
    assert!(core.advance(100.0));

    let p = &core.layers.get("mover").unwrap().particles[0];
    assert_eq!(p.position(), Vec2::new(40.0, 0.0));
    assert!(!p.is_freezed());
}

#[test]
fn bounds_stop_clamps_and_freezes() {
    let mut core = engine_with_layers(&["mover"]);

    core.paint_cell(0, 0, Some("#ff0000"), None);
    core.create_force("left", -1.0, 0.0);
    core.set_force_on_layer("mover", "left");
    core.set_layer_collision(
        "mover",
        crate::systems::collision::CollisionOptionsUpdate {
            stop_on_bounds: Some(true),
            ..Default::default()
        },
    );

    core.start(0.0);
    assert!(core.advance(100.0));

    let p = &core.layers.get("mover").unwrap().particles[0];
    assert_eq!(p.position(), Vec2::new(0.0, 0.0));
    assert!(p.is_freezed());
    assert!(p.is_visible());
}

#[test]
fn loop_resets_and_resurrects_registered_layers() {
    let mut core = engine_with_layers(&["mover", "walls"]);

    core.paint_cell(0, 0, Some("#ff0000"), None);
    core.paint_cell(0, 2, Some("#0000ff"), Some("walls"));

    core.create_force("push", 1.0, 0.0);
    core.set_force_on_layer("mover", "push");
    core.set_layer_collision(
        "mover",
        crate::systems::collision::CollisionOptionsUpdate {
            colliders: Some(vec!["walls".to_string()]),
            destroy_on_collision: Some(true),
            ..Default::default()
        },
    );
    core.set_loop_duration(0.3);

    core.start(0.0);
    assert!(core.advance(100.0));
    assert!(core.advance(200.0)); // destroyed here
    assert!(!core.layers.get("mover").unwrap().particles[0].is_visible());

    assert!(core.advance(300.0)); // loop timer hits zero

    let p = &core.layers.get("mover").unwrap().particles[0];
    assert!(p.is_visible());
    assert!(!p.is_freezed());
    assert_eq!(p.position(), Vec2::new(0.0, 0.0));
}

#[test]
fn render_collect_packs_visible_particles_only() {
    let mut core = engine_with_layers(&["a", "b"]);

    core.paint_cell(0, 0, Some("#ff0000"), None);
    core.paint_cell(1, 1, Some("#00ff00"), Some("b"));
    core.set_layer_visibility("b", false);

    assert_eq!(core.render_collect(), 1);
    assert_eq!(core.render_count(), 1);
    assert_eq!(core.positions_len(), 2);
    assert_eq!(core.sizes_len(), 2);
    assert_eq!(core.colors_len(), 4);

    // Red, opaque, at the cell origin with the cell size.
    assert_eq!(core.render.positions, vec![0.0, 0.0]);
    assert_eq!(core.render.sizes, vec![20.0, 20.0]);
    assert_eq!(core.render.colors, vec![1.0, 0.0, 0.0, 1.0]);
}

#[test]
fn config_json_builds_a_working_engine() {
    let mut core = EngineCore::from_config_json(
        r##"{
            "grid": {"rows": 8, "columns": 8, "cellSize": 10},
            "defaultLayer": "ink",
            "defaultColor": "#123456",
            "targetFps": 10,
            "loopAfterMs": 500.0
        }"##,
    )
    .unwrap();

    assert_eq!(core.grid().cell_size, 10);
    assert_eq!(core.active_layer(), "ink");

    // Painting without a color uses the configured default.
    core.paint_cell(0, 0, None, None);
    assert_eq!(core.layers.get("ink").unwrap().particles[0].color(), "#123456");

    // 10 fps -> 100 ms fixed step.
    core.start(0.0);
    assert!(!core.advance(99.0));
    assert!(core.advance(100.0));
}
