//! Presentational card renderer.

use crate::model::showcase::PresentationalConfig;
use std::fmt::Write;

pub const CARD_TIP: &str = "💡 Tip: this card depends only on its config. It keeps no state \
                            and always shows the same thing for the same config.";

/// Renders the showcase card for `config`.
///
/// Layout: `icon title`, blank line, description, blank line, one
/// `icon name: value` line per feature in input order, blank line, tip.
pub fn render_showcase(config: &PresentationalConfig) -> String {
    let mut out = String::new();
    // Writing into a `String` cannot fail.
    let _ = writeln!(out, "{} {}", config.icon, config.title);
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", config.description);
    let _ = writeln!(out);
    for feature in &config.features {
        let _ = writeln!(out, "  {} {}: {}", feature.icon, feature.name, feature.value);
    }
    if !config.features.is_empty() {
        let _ = writeln!(out);
    }
    let _ = writeln!(out, "{CARD_TIP}");
    out
}

#[cfg(test)]
mod tests {
    use super::{render_showcase, CARD_TIP};
    use crate::model::showcase::{FeatureDescriptor, PresentationalConfig};

    #[test]
    fn card_starts_with_icon_and_title() {
        let rendered = render_showcase(&PresentationalConfig::demo());
        assert!(rendered.starts_with("📦 ⚛️ Stateless Component\n"));
        assert!(rendered.trim_end().ends_with(CARD_TIP));
    }

    #[test]
    fn card_without_features_has_no_feature_block() {
        let config = PresentationalConfig {
            title: "T".to_string(),
            icon: "I".to_string(),
            description: "D".to_string(),
            features: Vec::new(),
        };
        assert_eq!(render_showcase(&config), format!("I T\n\nD\n\n{CARD_TIP}\n"));
    }

    #[test]
    fn feature_line_shape() {
        let mut config = PresentationalConfig::demo();
        config.features = vec![FeatureDescriptor::new("+", "Fast", "Yes")];
        assert!(render_showcase(&config).contains("\n  + Fast: Yes\n"));
    }
}
