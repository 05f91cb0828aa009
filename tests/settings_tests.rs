//! Viewer Settings Tests
//!
//! Tests for:
//! - Defaults and JSON overrides
//! - Validation of palette and classifier table
//! - Color controls bound through settings

use glam::Vec3;
use house_viewer::errors::{ConfigError, Error};
use house_viewer::resources::color::{parse_hex, to_hex};
use house_viewer::settings::ControlBinding;
use house_viewer::ui::ColorControls;
use house_viewer::{Category, ViewerSettings};

// ============================================================================
// Defaults & Parsing
// ============================================================================

#[test]
fn default_palette_covers_named_categories() {
    let settings = ViewerSettings::default();
    let palette = settings.palette_colors().unwrap();

    let categories: Vec<Category> = palette.iter().map(|(c, _)| *c).collect();
    assert_eq!(
        categories,
        [Category::Walls, Category::Roof, Category::Doors, Category::Windows]
    );
    assert_eq!(to_hex(palette[1].1), "#8c4512");
    assert!(settings.validate().is_ok());
}

#[test]
fn empty_json_yields_defaults() {
    let settings = ViewerSettings::from_json_str("{}").unwrap();
    assert_eq!(settings, ViewerSettings::default());
}

#[test]
fn partial_json_overrides_only_given_fields() {
    let settings = ViewerSettings::from_json_str(
        r##"{
            "palette": { "roof": "#8B4513" },
            "apply_palette_on_load": false,
            "orbit": { "damping_factor": 0.2 }
        }"##,
    )
    .unwrap();

    // A palette map replaces the default palette as a whole.
    assert_eq!(settings.palette.len(), 1);
    assert_eq!(settings.palette_colors().unwrap()[0], (Category::Roof, parse_hex("#8b4513").unwrap()));
    assert!(!settings.apply_palette_on_load);
    assert!((settings.orbit.damping_factor - 0.2).abs() < f32::EPSILON);
    assert!((settings.orbit.initial_radius - 15.0).abs() < f32::EPSILON);
    assert_eq!(settings.orbit.target(), Vec3::new(0.0, 1.0, 0.0));
}

#[test]
fn classifier_rules_can_be_replaced() {
    let settings = ViewerSettings::from_json_str(
        r#"{
            "classifier": {
                "rules": [
                    { "category": "roof", "keywords": ["Thatch"], "slot_index": 0 }
                ],
                "sole_leaf_fallback": false
            }
        }"#,
    )
    .unwrap();

    assert_eq!(settings.classifier.rules.len(), 1);
    assert_eq!(settings.classifier.rules[0].category, Category::Roof);
    assert!(!settings.classifier.sole_leaf_fallback);
    assert_eq!(settings.classifier.composite.min_slots, 4);
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn bad_palette_color_is_rejected() {
    let err = ViewerSettings::from_json_str(r#"{ "palette": { "walls": "beige" } }"#).unwrap_err();
    assert!(matches!(
        err,
        Error::Config(ConfigError::PaletteColor { category: Category::Walls, .. })
    ));
}

#[test]
fn unknown_palette_category_is_a_parse_error() {
    let err = ViewerSettings::from_json_str(r##"{ "palette": { "porch": "#ffffff" } }"##).unwrap_err();
    assert!(matches!(err, Error::Settings(_)));
}

#[test]
fn invalid_rule_table_is_rejected() {
    let err = ViewerSettings::from_json_str(
        r#"{ "classifier": { "rules": [ { "category": "other", "keywords": ["x"] } ] } }"#,
    )
    .unwrap_err();
    assert!(matches!(err, Error::Config(ConfigError::RuleForDefaultCategory)));
}

#[test]
fn missing_settings_file_is_an_io_error() {
    let err = ViewerSettings::from_path("does/not/exist/viewer.json").unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

// ============================================================================
// Color Controls
// ============================================================================

#[test]
fn default_controls_resolve_to_categories() {
    let settings = ViewerSettings::default();
    let controls = ColorControls::new(&settings.controls);

    assert_eq!(controls.category_of("roof-color"), Some(Category::Roof));
    assert_eq!(controls.controls_for(Category::Windows), vec!["window-color"]);
    assert_eq!(
        controls.resolve("wall-color", "#ff0000"),
        Some((Category::Walls, Vec3::new(1.0, 0.0, 0.0)))
    );
}

#[test]
fn unknown_control_and_bad_value_are_ignored() {
    let controls = ColorControls::new(&ViewerSettings::default().controls);

    assert_eq!(controls.resolve("chimney-color", "#ff0000"), None);
    assert_eq!(controls.resolve("roof-color", "not a color"), None);
    assert_eq!(controls.resolve("roof-color", "#+f+f+f"), None);
}

#[test]
fn later_binding_wins() {
    let controls = ColorControls::new(&[
        ControlBinding::new("accent", Category::Doors),
        ControlBinding::new("accent", Category::Windows),
    ]);
    assert_eq!(controls.category_of("accent"), Some(Category::Windows));
}
