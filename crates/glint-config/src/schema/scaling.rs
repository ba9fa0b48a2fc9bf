//! Mobile scaling configuration types.

use serde::{Deserialize, Serialize};

/// How tagged widgets shrink or grow on mobile.
///
/// The effective factor is
/// `clamp(target_factor_at_reference_width * reference_viewport_width / viewport_width,
/// min_scale_factor, max_scale_factor)` and a widget's scale becomes its
/// original scale divided by that factor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MobileScalingConfig {
    pub reference_viewport_width: f64,
    pub target_factor_at_reference_width: f64,
    pub min_scale_factor: f64,
    pub max_scale_factor: f64,
}

impl Default for MobileScalingConfig {
    fn default() -> Self {
        Self {
            reference_viewport_width: 1920.0,
            target_factor_at_reference_width: 1.0,
            min_scale_factor: 0.75,
            max_scale_factor: 2.0,
        }
    }
}
