//! Configuration operations

use super::config_data::PerceptionConfig;
use crate::error::{PerceptionError, PerceptionResult};
use crate::occupancy::{map_dimensions, validate_map_extents};
use crate::projection::validate_depth_parameters;
use std::path::Path;

/// Parse a config from TOML text and validate it
pub fn parse_config(text: &str) -> PerceptionResult<PerceptionConfig> {
    let config: PerceptionConfig = toml::from_str(text)?;
    validate_config(&config)?;
    Ok(config)
}

/// Read, parse and validate a config file
pub fn load_config(path: impl AsRef<Path>) -> PerceptionResult<PerceptionConfig> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|e| PerceptionError::ConfigLoad {
        path: path.display().to_string(),
        error: e.to_string(),
    })?;

    log::debug!("[load_config] Loaded {}", path.display());
    parse_config(&text)
}

/// Validate configuration parameters
pub fn validate_config(config: &PerceptionConfig) -> PerceptionResult<()> {
    validate_map_extents(&config.map)?;
    validate_depth_parameters(&config.depth)?;

    let [nx, ny, nz] = map_dimensions(&config.map);
    log::info!(
        "[PerceptionConfig] Validation: map {}x{}x{} cells of {}, focal_length={}, pixel_scale={}, {} probes per frame",
        nx,
        ny,
        nz,
        config.map.cell_size,
        config.depth.focal_length,
        config.depth.pixel_scale,
        nx * ny
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = parse_config("").expect("defaults are valid");
        assert_eq!(config, PerceptionConfig::default());
        assert_eq!(config.map.cell_size, 100);
        assert_eq!(config.depth.focal_length, 24.0);
        assert_eq!(config.search.max_cost, 1_000_000);
        assert!(config.sampling.parallel);
    }

    #[test]
    fn test_partial_sections_override_defaults() {
        let config = parse_config(
            r#"
            [map]
            x_max = 2000
            y_max = 50
            z_max = 5000
            cell_size = 25

            [depth]
            camera_displacement = 120.0

            [search]
            search_offset = { x = -100, y = 0 }
            neighbourhood_radii = { x = 7, y = 7 }

            [sampling]
            parallel = false
            worker_threads = 2
            "#,
        )
        .expect("valid config");

        assert_eq!(config.map.cell_size, 25);
        assert_eq!(map_dimensions(&config.map), [160, 4, 200]);
        assert_eq!(config.depth.camera_displacement, 120.0);
        assert_eq!(config.depth.pixel_scale, 0.00694);
        assert_eq!(config.search.search_offset.x, -100);
        assert_eq!(config.search.neighbourhood_radii.x, 7);
        assert_eq!(config.search.search_radii.x, 250);
        assert!(!config.sampling.parallel);
        assert_eq!(config.sampling.worker_threads, 2);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = parse_config("[map]\ncell_size = 0\n").unwrap_err();
        assert!(matches!(err, PerceptionError::InvalidConfig { ref field, .. } if field == "map.cell_size"));

        let err = parse_config("[depth]\nfocal_length = -24.0\n").unwrap_err();
        assert!(matches!(err, PerceptionError::InvalidConfig { ref field, .. } if field == "depth.focal_length"));

        let err = parse_config("[map]\nz_max = 0\n").unwrap_err();
        assert!(matches!(err, PerceptionError::InvalidConfig { .. }));
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let err = parse_config("[map\nx_max = ").unwrap_err();
        assert!(matches!(err, PerceptionError::ParseError { .. }));

        let err = parse_config("[map]\nx_max = \"wide\"\n").unwrap_err();
        assert!(matches!(err, PerceptionError::ParseError { .. }));
    }

    #[test]
    fn test_load_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "[map]\nx_max = 4800\ny_max = 500\nz_max = 10000").expect("write config");

        let config = load_config(file.path()).expect("valid config");
        assert_eq!(config.map.x_max, 4800);
    }

    #[test]
    fn test_missing_file_reports_path() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("missing.toml");

        match load_config(&path) {
            Err(PerceptionError::ConfigLoad { path: reported, .. }) => {
                assert!(reported.ends_with("missing.toml"));
            }
            other => panic!("expected ConfigLoad error, got {:?}", other),
        }
    }
}
