use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::Algorithm;

/// Errors produced while loading a settings file.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Unable to read settings file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Unable to parse settings file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Run settings, fixed for the lifetime of a run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Pixels per cell side
    pub cell_size: u32,
    /// Milliseconds between generations, 0 steps every frame
    pub step_interval_ms: u64,
    /// Probability a cell starts alive
    pub initial_density: f64,
    /// Toroidal topology when true, bounded otherwise
    pub wrap: bool,
    /// Age cap used for coloring
    pub max_age: u8,
    /// Fixed RNG seed, OS entropy when absent
    pub seed: Option<u64>,
    pub algorithm: Algorithm,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cell_size: 16,
            step_interval_ms: 1000,
            initial_density: 0.18,
            wrap: true,
            max_age: 30,
            seed: None,
            algorithm: Algorithm::Serial,
        }
    }
}

impl Config {
    /// Load settings from a JSON file. Missing fields take their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Clamp every field into its valid range, warning about each change.
    pub fn sanitized(mut self) -> Self {
        if self.cell_size == 0 {
            log::warn!("cell_size 0 is invalid, using 1");
            self.cell_size = 1;
        }
        if self.max_age == 0 {
            log::warn!("max_age 0 is invalid, using 1");
            self.max_age = 1;
        }
        if self.initial_density.is_nan() {
            log::warn!("initial_density is NaN, using 0");
            self.initial_density = 0.0;
        } else if !(0.0..=1.0).contains(&self.initial_density) {
            let clamped = self.initial_density.clamp(0.0, 1.0);
            log::warn!("initial_density {} out of range, using {}", self.initial_density, clamped);
            self.initial_density = clamped;
        }
        self
    }

    /// Cell side length in pixels as used by the renderer
    pub fn cell_px(&self) -> f32 {
        self.cell_size.max(1) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.cell_size, 16);
        assert_eq!(config.step_interval_ms, 1000);
        assert_eq!(config.initial_density, 0.18);
        assert!(config.wrap);
        assert_eq!(config.max_age, 30);
        assert_eq!(config.algorithm, Algorithm::Serial);
    }

    #[test]
    fn test_sanitized_clamps() {
        let config = Config {
            cell_size: 0,
            max_age: 0,
            initial_density: 1.7,
            ..Default::default()
        }
        .sanitized();
        assert_eq!(config.cell_size, 1);
        assert_eq!(config.max_age, 1);
        assert_eq!(config.initial_density, 1.0);

        let config = Config { initial_density: -0.5, ..Default::default() }.sanitized();
        assert_eq!(config.initial_density, 0.0);
        let config = Config { initial_density: f64::NAN, ..Default::default() }.sanitized();
        assert_eq!(config.initial_density, 0.0);
    }

    #[test]
    fn test_sanitized_keeps_valid_values() {
        let config = Config { max_age: 255, step_interval_ms: 0, ..Default::default() };
        assert_eq!(config.clone().sanitized(), config);
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "cell_size": 8, "wrap": false, "algorithm": "parallel" }}"#).unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.cell_size, 8);
        assert!(!config.wrap);
        assert_eq!(config.algorithm, Algorithm::Parallel);
        assert_eq!(config.max_age, 30);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::load(&dir.path().join("nope.json"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_load_invalid_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ cell_size: ").unwrap();
        assert!(matches!(Config::load(file.path()), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_load_rejects_out_of_type_max_age() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "max_age": 300 }}"#).unwrap();
        assert!(matches!(Config::load(file.path()), Err(ConfigError::Parse { .. })));
    }
}
