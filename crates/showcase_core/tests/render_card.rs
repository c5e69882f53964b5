use showcase_core::{render_showcase, FeatureDescriptor, PresentationalConfig};

#[test]
fn equal_configs_render_identically() {
    let first = PresentationalConfig::demo();
    let second = first.clone();

    assert_eq!(render_showcase(&first), render_showcase(&second));
    assert_eq!(render_showcase(&first), render_showcase(&first));
}

#[test]
fn features_render_in_input_order() {
    let config = PresentationalConfig {
        title: "Order".to_string(),
        icon: "#".to_string(),
        description: "check ordering".to_string(),
        features: vec![
            FeatureDescriptor::new("3", "Zeta", "last alphabetically"),
            FeatureDescriptor::new("1", "Alpha", "first alphabetically"),
            FeatureDescriptor::new("2", "Mid", "middle"),
        ],
    };

    let rendered = render_showcase(&config);
    let zeta = rendered.find("Zeta").unwrap();
    let alpha = rendered.find("Alpha").unwrap();
    let mid = rendered.find("Mid").unwrap();
    assert!(zeta < alpha && alpha < mid);
}

#[test]
fn rendering_does_not_mutate_config() {
    let config = PresentationalConfig::demo();
    let before = config.clone();
    let _ = render_showcase(&config);
    assert_eq!(config, before);
}

#[test]
fn structural_change_changes_output() {
    let config = PresentationalConfig::demo();
    let mut changed = config.clone();
    changed.features[1].value = "Still No State".to_string();

    assert_ne!(render_showcase(&config), render_showcase(&changed));
    assert!(render_showcase(&changed).contains("Pure: Still No State"));
}
