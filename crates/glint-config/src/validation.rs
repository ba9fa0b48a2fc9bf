//! Configuration validation.
//!
//! Collects every problem into a single `ConfigError`.

use crate::schema::GlintConfig;
use glint_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &GlintConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_tag(&mut errors, "device_visibility_tag", &config.device_visibility_tag);
    validate_tag(&mut errors, "mobile_scale_tag", &config.mobile_scale_tag);

    let scaling = &config.mobile_scaling;
    validate_positive(
        &mut errors,
        "mobile_scaling.reference_viewport_width",
        scaling.reference_viewport_width,
    );
    validate_positive(
        &mut errors,
        "mobile_scaling.target_factor_at_reference_width",
        scaling.target_factor_at_reference_width,
    );
    validate_positive(&mut errors, "mobile_scaling.min_scale_factor", scaling.min_scale_factor);
    validate_positive(&mut errors, "mobile_scaling.max_scale_factor", scaling.max_scale_factor);
    if scaling.min_scale_factor > scaling.max_scale_factor {
        errors.push(format!(
            "mobile_scaling.min_scale_factor = {} exceeds max_scale_factor = {}",
            scaling.min_scale_factor, scaling.max_scale_factor
        ));
    }

    for (button, code) in &config.controller_button_mappings {
        if code.trim().is_empty() {
            errors.push(format!("controller_button_mappings.{button} is empty"));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_tag(errors: &mut Vec<String>, name: &str, value: &str) {
    if value.trim().is_empty() {
        errors.push(format!("{name} must not be empty"));
    }
}

fn validate_positive(errors: &mut Vec<String>, name: &str, value: f64) {
    if !value.is_finite() || value <= 0.0 {
        errors.push(format!("{name} = {value} must be a positive number"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn error_text(config: &GlintConfig) -> String {
        match validate(config) {
            Err(ConfigError::ValidationError(msg)) => msg,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn defaults_are_valid() {
        assert!(validate(&GlintConfig::default()).is_ok());
    }

    #[test]
    fn empty_tag_rejected() {
        let mut config = GlintConfig::default();
        config.device_visibility_tag = "  ".into();
        assert!(error_text(&config).contains("device_visibility_tag must not be empty"));
    }

    #[test]
    fn non_positive_reference_width_rejected() {
        let mut config = GlintConfig::default();
        config.mobile_scaling.reference_viewport_width = 0.0;
        assert!(error_text(&config).contains("reference_viewport_width"));
    }

    #[test]
    fn nan_factor_rejected() {
        let mut config = GlintConfig::default();
        config.mobile_scaling.target_factor_at_reference_width = f64::NAN;
        assert!(error_text(&config).contains("target_factor_at_reference_width"));
    }

    #[test]
    fn inverted_bounds_rejected() {
        let mut config = GlintConfig::default();
        config.mobile_scaling.min_scale_factor = 3.0;
        config.mobile_scaling.max_scale_factor = 1.0;
        assert!(error_text(&config).contains("exceeds max_scale_factor"));
    }

    #[test]
    fn empty_button_code_rejected() {
        let mut config = GlintConfig::default();
        config
            .controller_button_mappings
            .insert("Home".into(), String::new());
        assert!(error_text(&config).contains("controller_button_mappings.Home"));
    }

    #[test]
    fn all_errors_collected() {
        let mut config = GlintConfig::default();
        config.mobile_scale_tag = String::new();
        config.mobile_scaling.max_scale_factor = -1.0;
        let msg = error_text(&config);
        assert!(msg.contains("mobile_scale_tag"));
        assert!(msg.contains("max_scale_factor"));
        assert!(msg.contains("; "));
    }
}
