//! # Configuration
//!
//! Presentation settings shared by the GUI and the terminal front end.
//! Nothing here records the selected mode or offsets; every session starts
//! from `UiState::new()`.
//!
//! Config files are JSON. Every field has a default, so a file may set only
//! what it needs:
//!
//! ```json
//! { "dark_theme": true, "preview": { "height": 360.0 } }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{VisualizerError, VisualizerResult};
use crate::layout::PreviewGeometry;

/// Environment variable naming a config file
pub const CONFIG_ENV_VAR: &str = "POSITION_VISUALIZER_CONFIG";

/// Presentation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualizerConfig {
    pub preview: PreviewGeometry,
    pub window_width: f32,
    pub window_height: f32,
    pub dark_theme: bool,
    /// CSS pixels per terminal column
    pub cell_width_px: f32,
    /// CSS pixels per terminal row
    pub cell_height_px: f32,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            preview: PreviewGeometry::default(),
            window_width: 900.0,
            window_height: 960.0,
            dark_theme: false,
            cell_width_px: 8.0,
            cell_height_px: 16.0,
        }
    }
}

/// Config path from `POSITION_VISUALIZER_CONFIG`, if set and non-empty
pub fn config_path_from_env() -> Option<PathBuf> {
    std::env::var_os(CONFIG_ENV_VAR)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

/// Parse config JSON
pub fn parse_config(json: &str, origin: &str) -> VisualizerResult<VisualizerConfig> {
    let config: VisualizerConfig = serde_json::from_str(json)
        .map_err(|e| VisualizerError::config_error(origin, e.to_string()))?;
    validate(&config, origin)?;
    Ok(config)
}

/// Load config from a file. A missing file gives the defaults.
pub fn load_config(path: &Path) -> VisualizerResult<VisualizerConfig> {
    let origin = path.display().to_string();

    let json = match std::fs::read_to_string(path) {
        Ok(json) => json,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            log::info!("config file {} not found, using defaults", origin);
            return Ok(VisualizerConfig::default());
        }
        Err(e) => return Err(VisualizerError::config_error(origin, e.to_string())),
    };

    let config = parse_config(&json, &origin)?;
    log::info!("loaded config from {}", origin);
    Ok(config)
}

/// Load from the env var path, or defaults when unset
pub fn load_from_env() -> VisualizerResult<VisualizerConfig> {
    match config_path_from_env() {
        Some(path) => load_config(&path),
        None => Ok(VisualizerConfig::default()),
    }
}

/// Accepted range for each size, inclusive
const SIZE_LIMITS: [(&str, f32, f32); 6] = [
    ("preview.height", 1.0, 4096.0),
    ("preview.box_size", 1.0, 4096.0),
    ("window_width", 1.0, 16384.0),
    ("window_height", 1.0, 16384.0),
    ("cell_width_px", 1.0, 256.0),
    ("cell_height_px", 1.0, 256.0),
];

fn validate(config: &VisualizerConfig, origin: &str) -> VisualizerResult<()> {
    let values = [
        config.preview.height,
        config.preview.box_size,
        config.window_width,
        config.window_height,
        config.cell_width_px,
        config.cell_height_px,
    ];
    for ((field, min, max), value) in SIZE_LIMITS.into_iter().zip(values) {
        // NaN fails the range check too
        if !(min..=max).contains(&value) {
            return Err(VisualizerError::config_error(
                origin,
                format!("{} must be between {} and {}, got {}", field, min, max, value),
            ));
        }
    }
    let padding = config.preview.padding;
    if !(0.0..=config.preview.height / 2.0).contains(&padding) {
        return Err(VisualizerError::config_error(
            origin,
            format!(
                "preview.padding must be between 0 and half the preview height, got {}",
                padding
            ),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = VisualizerConfig::default();
        assert_eq!(config.preview.height, 300.0);
        assert_eq!(config.preview.box_size, 128.0);
        assert!(!config.dark_theme);
    }

    #[test]
    fn test_partial_json() {
        let json = r#"{ "dark_theme": true, "preview": { "height": 360.0 } }"#;
        let config = parse_config(json, "inline").unwrap();
        assert!(config.dark_theme);
        assert_eq!(config.preview.height, 360.0);
        assert_eq!(config.preview.padding, 16.0);
        assert_eq!(config.window_width, 900.0);
    }

    #[test]
    fn test_malformed_json() {
        let err = parse_config("{ not json", "bad.json").unwrap_err();
        assert_eq!(err.error_code(), "CONFIG_ERROR");
        assert!(err.to_string().contains("bad.json"));
    }

    #[test]
    fn test_rejects_non_positive_sizes() {
        let err = parse_config(r#"{ "cell_width_px": 0.0 }"#, "inline").unwrap_err();
        assert!(err.to_string().contains("cell_width_px"));
    }

    #[test]
    fn test_rejects_degenerate_sizes() {
        for json in [
            r#"{ "cell_width_px": 1e-30 }"#,
            r#"{ "cell_height_px": 0.5 }"#,
            r#"{ "preview": { "height": 1e30 } }"#,
            r#"{ "preview": { "box_size": 100000.0 } }"#,
            r#"{ "preview": { "padding": -1.0 } }"#,
            r#"{ "preview": { "padding": 200.0 } }"#,
        ] {
            let err = parse_config(json, "inline").unwrap_err();
            assert_eq!(err.error_code(), "CONFIG_ERROR", "accepted {}", json);
        }
    }

    #[test]
    fn test_accepts_range_edges() {
        let json = r#"{
            "cell_width_px": 1.0,
            "cell_height_px": 256.0,
            "preview": { "padding": 0.0 }
        }"#;
        assert!(parse_config(json, "inline").is_ok());
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let path = std::env::temp_dir().join("position-visualizer-config-that-does-not-exist.json");
        let config = load_config(&path).unwrap();
        assert_eq!(config, VisualizerConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir()
            .join(format!("position-visualizer-{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "window_width": 1200.0 }"#).unwrap();
        let config = load_config(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(config.window_width, 1200.0);
    }
}
