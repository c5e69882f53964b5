//! Presentational config model.
//!
//! # Responsibility
//! - Carry the four host-supplied fields rendered by the showcase card.
//! - Provide the built-in demo config used when the host supplies none.
//!
//! # Invariants
//! - `title` is non-blank after validation.
//! - Every feature `name` is non-blank after validation.
//! - Feature order is display order.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// One feature tile shown by the card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureDescriptor {
    pub icon: String,
    pub name: String,
    pub value: String,
}

impl FeatureDescriptor {
    pub fn new(icon: impl Into<String>, name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            icon: icon.into(),
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Static input for the presentational card renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PresentationalConfig {
    pub title: String,
    pub icon: String,
    pub description: String,
    pub features: Vec<FeatureDescriptor>,
}

/// Declaration-level validation error for presentational config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValidationError {
    EmptyTitle,
    EmptyFeatureName { index: usize },
}

impl Display for ConfigValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "title cannot be empty"),
            Self::EmptyFeatureName { index } => {
                write!(f, "feature #{index} has an empty name")
            }
        }
    }
}

impl Error for ConfigValidationError {}

impl PresentationalConfig {
    /// Built-in config shown when the host does not supply one.
    pub fn demo() -> Self {
        Self {
            title: "⚛️ Stateless Component".to_string(),
            icon: "📦".to_string(),
            description: "Component without internal state. Receives data through its \
                          config and only displays it. Pure: it does not affect other \
                          parts of the application."
                .to_string(),
            features: vec![
                FeatureDescriptor::new("✅", "Simple", "100% Props"),
                FeatureDescriptor::new("🎯", "Pure", "No State"),
                FeatureDescriptor::new("♻️", "Reusable", "Reusable"),
            ],
        }
    }

    /// Validates declaration-level invariants.
    ///
    /// Icons, description and feature values may be empty; they render as-is.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.title.trim().is_empty() {
            return Err(ConfigValidationError::EmptyTitle);
        }
        if let Some(index) = self
            .features
            .iter()
            .position(|feature| feature.name.trim().is_empty())
        {
            return Err(ConfigValidationError::EmptyFeatureName { index });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigValidationError, FeatureDescriptor, PresentationalConfig};

    #[test]
    fn demo_config_is_valid_with_three_features() {
        let config = PresentationalConfig::demo();
        assert!(config.validate().is_ok());
        let names = config
            .features
            .iter()
            .map(|feature| feature.name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["Simple", "Pure", "Reusable"]);
    }

    #[test]
    fn validate_rejects_blank_title() {
        let mut config = PresentationalConfig::demo();
        config.title = "   ".to_string();
        assert_eq!(config.validate(), Err(ConfigValidationError::EmptyTitle));
    }

    #[test]
    fn validate_reports_first_blank_feature_name() {
        let mut config = PresentationalConfig::demo();
        config.features.push(FeatureDescriptor::new("x", "", "y"));
        config.features.push(FeatureDescriptor::new("x", " ", "y"));
        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::EmptyFeatureName { index: 3 })
        );
    }

    #[test]
    fn empty_feature_list_is_allowed() {
        let mut config = PresentationalConfig::demo();
        config.features.clear();
        assert!(config.validate().is_ok());
    }
}
