#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use paxel_engine::PaxelEngine;

#[wasm_bindgen_test]
fn facade_paints_and_renders() {
    let mut engine = PaxelEngine::new();

    engine.put_pixel(0, 0, Some("#ff0000".to_string()), None);
    assert_eq!(engine.get_cell_index(0, 0), 0);

    assert_eq!(engine.render_collect(), 1);
    assert_eq!(engine.positions_len(), 2);
    assert_eq!(engine.colors_len(), 4);

    assert!(engine.remove_pixel(0, 0, None));
    assert_eq!(engine.get_cell_index(0, 0), -1);
}

#[wasm_bindgen_test]
fn facade_runs_the_motion_state_machine() {
    let mut engine = PaxelEngine::new();

    engine.put_pixel(5, 5, None, None);
    engine.create_force("wind", 1.0, 0.0);
    engine.set_force_on_layer("layer-1".to_string(), "wind".to_string());

    assert!(!engine.is_running());
    engine.start();
    assert!(engine.is_running());

    engine.stop();
    engine.reset();
    assert!(!engine.is_running());
    assert_eq!(engine.get_cell_index(5, 5), 0);
}
