//! Presentational config loading.
//!
//! # Responsibility
//! - Read host-supplied card config from JSON text or a JSON file.
//! - Reject configs that fail `PresentationalConfig::validate()`.
//!
//! # Invariants
//! - A config returned from this module has always passed validation.
//! - Loading never panics; every failure maps to `ConfigError`.

use crate::model::showcase::{ConfigValidationError, PresentationalConfig};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Failure while loading presentational config.
#[derive(Debug)]
pub enum ConfigError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse(serde_json::Error),
    Validation(ConfigValidationError),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read config `{}`: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "invalid config JSON: {err}"),
            Self::Validation(err) => write!(f, "invalid config: {err}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            Self::Validation(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

impl From<ConfigValidationError> for ConfigError {
    fn from(value: ConfigValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Parses and validates config from JSON text.
pub fn parse_config(text: &str) -> ConfigResult<PresentationalConfig> {
    let config: PresentationalConfig = serde_json::from_str(text)?;
    config.validate()?;
    Ok(config)
}

/// Reads, parses and validates config from a JSON file.
pub fn load_config(path: impl AsRef<Path>) -> ConfigResult<PresentationalConfig> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    match parse_config(&text) {
        Ok(config) => {
            info!(
                "event=config_load module=config status=ok features={}",
                config.features.len()
            );
            Ok(config)
        }
        Err(err) => {
            warn!("event=config_load module=config status=error error={err}");
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_config, ConfigError};
    use crate::model::showcase::ConfigValidationError;

    #[test]
    fn parse_config_accepts_four_field_shape() {
        let config = parse_config(
            r#"{
                "title": "Card",
                "icon": "*",
                "description": "desc",
                "features": [{ "icon": "+", "name": "Fast", "value": "Yes" }]
            }"#,
        )
        .unwrap();
        assert_eq!(config.title, "Card");
        assert_eq!(config.features.len(), 1);
        assert_eq!(config.features[0].value, "Yes");
    }

    #[test]
    fn parse_config_rejects_unknown_fields() {
        let err = parse_config(
            r#"{ "title": "t", "icon": "", "description": "", "features": [], "extra": 1 }"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)), "unexpected error: {err}");
    }

    #[test]
    fn parse_config_runs_validation() {
        let err = parse_config(r#"{ "title": " ", "icon": "", "description": "", "features": [] }"#)
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Validation(ConfigValidationError::EmptyTitle)
        ));
    }
}
