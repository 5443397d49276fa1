//! JSON configuration loading.
//!
//! Config structs derive `Deserialize` with `#[serde(default)]`, so a file
//! only needs the fields it overrides.

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Invalid {path}: {reason}")]
    Invalid { path: PathBuf, reason: String },
}

/// Range checks that serde cannot express.
pub trait Validate {
    /// Describe the first bad value, if any.
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

/// Parse a config from a JSON string.
pub fn from_json_str<T: DeserializeOwned>(json: &str) -> Result<T, serde_json::Error> {
    serde_json::from_str(json)
}

pub fn to_json_string<T: Serialize>(config: &T) -> Result<String, ConfigError> {
    Ok(serde_json::to_string_pretty(config)?)
}

/// Load and validate a config file.
pub fn load_json<T: DeserializeOwned + Validate>(path: &Path) -> Result<T, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config: T = from_json_str(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    config.validate().map_err(|reason| ConfigError::Invalid {
        path: path.to_path_buf(),
        reason,
    })?;
    Ok(config)
}

/// Load from `path` when given, otherwise use defaults.
pub fn load_or_default<T: DeserializeOwned + Default + Validate>(path: Option<&Path>) -> Result<T, ConfigError> {
    match path {
        Some(path) => {
            let config = load_json(path)?;
            log::info!("Loaded config from {}", path.display());
            Ok(config)
        }
        None => Ok(T::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    #[serde(default)]
    struct Sample {
        speed: f32,
        name: String,
    }

    impl Validate for Sample {
        fn validate(&self) -> Result<(), String> {
            if self.speed < 0.0 {
                return Err(format!("speed must not be negative, got {}", self.speed));
            }
            Ok(())
        }
    }

    fn write_temp(name: &str, json: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("volley-{}-{}.json", name, std::process::id()));
        std::fs::write(&path, json).unwrap();
        path
    }

    #[test]
    fn test_missing_path_is_default() {
        let sample: Sample = load_or_default(None).unwrap();
        assert_eq!(sample, Sample::default());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_json::<Sample>(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_partial_json() {
        let sample: Sample = from_json_str(r#"{ "speed": 2.5 }"#).unwrap();
        assert_eq!(sample.speed, 2.5);
        assert_eq!(sample.name, "");
    }

    #[test]
    fn test_load_validates() {
        let good = write_temp("good", r#"{ "speed": 2.5 }"#);
        let sample: Sample = load_json(&good).unwrap();
        assert_eq!(sample.speed, 2.5);

        let bad = write_temp("bad", r#"{ "speed": -1.0 }"#);
        let err = load_or_default::<Sample>(Some(&bad)).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));

        let _ = std::fs::remove_file(good);
        let _ = std::fs::remove_file(bad);
    }
}
