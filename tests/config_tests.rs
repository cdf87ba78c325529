// Host-side tests for tuning constants and configuration overrides.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod config {
        include!("../src/core/config.rs");
    }
}

use crate::core::config::*;
use crate::core::constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_are_within_reasonable_bounds() {
    assert!(DOT_SPACING > 0.0);
    assert!(BASE_RADIUS > 0.0);
    assert!(INTERACTION_RADIUS > DOT_SPACING);
    assert!(BASE_OPACITY_MIN >= 0.0 && BASE_OPACITY_MAX <= 1.0);
    assert!(BASE_OPACITY_MIN < BASE_OPACITY_MAX);
    assert!(OPACITY_SPEED_MIN > 0.0 && OPACITY_SPEED_SPAN > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn spring_constants_have_logical_relationships() {
    // Ring trails, dot follows tightly.
    assert!(RING_STIFFNESS < DOT_STIFFNESS);
    assert!(SPRING_SUBSTEP_SEC < MAX_FRAME_DT_SEC);
    assert!(SPRING_REST_DELTA > 0.0 && SPRING_REST_SPEED > 0.0);
}

#[test]
fn defaults_validate() {
    assert_eq!(BackgroundConfig::default().validate(), Ok(()));
    assert_eq!(BackgroundConfig::default().dot_spacing, DOT_SPACING);
}

#[test]
fn overrides_apply_on_top_of_defaults() {
    let config = BackgroundConfig::default()
        .with_overrides([("dot-spacing", "24"), ("interaction-radius", " 150.5 ")])
        .expect("valid overrides");
    assert_eq!(config.dot_spacing, 24.0);
    assert_eq!(config.interaction_radius, 150.5);
    assert_eq!(config.opacity_min, BASE_OPACITY_MIN);
}

#[test]
fn no_overrides_is_identity() {
    let config = BackgroundConfig::default()
        .with_overrides(std::iter::empty())
        .expect("defaults are valid");
    assert_eq!(config, BackgroundConfig::default());
}

#[test]
fn non_numeric_override_is_rejected() {
    let err = BackgroundConfig::default()
        .with_overrides([("dot-spacing", "wide")])
        .unwrap_err();
    assert_eq!(
        err,
        ConfigError::NotANumber {
            key: "dot-spacing".into(),
            value: "wide".into()
        }
    );
}

#[test]
fn non_positive_sizes_are_rejected() {
    for key in ["dot-spacing", "interaction-radius", "dot-radius"] {
        let err = BackgroundConfig::default()
            .with_overrides([(key, "0")])
            .unwrap_err();
        assert!(matches!(err, ConfigError::NotPositive { .. }), "{key}: {err}");
    }
}

#[test]
fn tiny_dot_spacing_is_rejected() {
    for raw in ["0.0000001", "0.5", "3.9"] {
        let err = BackgroundConfig::default()
            .with_overrides([("dot-spacing", raw)])
            .unwrap_err();
        assert!(matches!(err, ConfigError::SpacingTooSmall { .. }), "{raw}: {err}");
    }
    let ok = BackgroundConfig::default()
        .with_overrides([("dot-spacing", "4")])
        .unwrap();
    assert_eq!(ok.dot_spacing, MIN_DOT_SPACING);
}

#[test]
fn inverted_opacity_range_is_rejected() {
    let err = BackgroundConfig::default()
        .with_overrides([("opacity-min", "0.6"), ("opacity-max", "0.4")])
        .unwrap_err();
    assert!(matches!(err, ConfigError::OpacityRange { .. }));

    let err = BackgroundConfig::default()
        .with_overrides([("opacity-max", "1.5")])
        .unwrap_err();
    assert!(matches!(err, ConfigError::OpacityRange { .. }));
}

#[test]
fn unknown_key_is_rejected() {
    let err = BackgroundConfig::default()
        .with_overrides([("dot-colour", "1")])
        .unwrap_err();
    assert_eq!(err, ConfigError::UnknownKey("dot-colour".into()));
    assert_eq!(err.to_string(), "unknown setting `dot-colour`");
}

#[test]
fn every_listed_key_is_accepted() {
    for key in BackgroundConfig::OVERRIDE_KEYS {
        let value = if key.starts_with("opacity") { "0.2" } else { "12" };
        assert!(
            BackgroundConfig::default()
                .with_overrides([(key, value)])
                .is_ok(),
            "{key} rejected"
        );
    }
}

#[test]
fn log_level_parsing_falls_back_to_info() {
    assert_eq!(parse_log_level(None), log::Level::Info);
    assert_eq!(parse_log_level(Some("debug")), log::Level::Debug);
    assert_eq!(parse_log_level(Some(" WARN ")), log::Level::Warn);
    assert_eq!(parse_log_level(Some("loud")), log::Level::Info);
}
