//! In-memory engine configuration, loadable from a JSON bundle.

use serde::Deserialize;

use crate::spatial::grid::GridOptions;

pub(super) const DEFAULT_LAYER: &str = "layer-1";
pub(super) const DEFAULT_DRAW_COLOR: &str = "#000000";
pub(super) const DEFAULT_TARGET_FPS: u32 = 15;

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineConfig {
    pub grid: GridOptions,
    pub default_layer: String,
    pub default_color: String,
    pub target_fps: u32,
    pub loop_after_ms: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            grid: GridOptions::default(),
            default_layer: DEFAULT_LAYER.to_string(),
            default_color: DEFAULT_DRAW_COLOR.to_string(),
            target_fps: DEFAULT_TARGET_FPS,
            loop_after_ms: crate::systems::loop_system::DEFAULT_LOOP_AFTER_MS,
        }
    }
}

impl EngineConfig {
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| e.to_string())
    }
}

/// Which systems a new layer opts into. Defaults to all three.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayerSystemsConfig {
    pub force: bool,
    #[serde(rename = "loop")]
    pub looping: bool,
    pub collision: bool,
}

impl Default for LayerSystemsConfig {
    fn default() -> Self {
        Self {
            force: true,
            looping: true,
            collision: true,
        }
    }
}

impl LayerSystemsConfig {
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_parses_with_partial_fields() {
        let config = EngineConfig::from_json(
            r#"{"grid": {"rows": 16, "columns": 8, "cellSize": 10}, "targetFps": 20}"#,
        )
        .unwrap();

        assert_eq!(config.grid.rows, 16);
        assert_eq!(config.grid.columns, 8);
        assert_eq!(config.grid.cell_size, 10);
        assert_eq!(config.target_fps, 20);
        assert_eq!(config.default_layer, DEFAULT_LAYER);
    }

    #[test]
    fn bad_config_reports_the_parse_error() {
        assert!(EngineConfig::from_json("{not json").is_err());
    }

    #[test]
    fn layer_systems_accept_the_loop_key() {
        let systems =
            LayerSystemsConfig::from_json(r#"{"force": false, "loop": false}"#).unwrap();
        assert!(!systems.force);
        assert!(!systems.looping);
        assert!(systems.collision);
    }
}
