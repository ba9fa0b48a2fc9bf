//! Configuration schema types for Glint.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod controller;
mod scaling;

pub use controller::*;
pub use scaling::*;

use glint_common::Priority;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Root configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlintConfig {
    /// Tag marking widgets whose visibility follows the device category.
    pub device_visibility_tag: String,
    /// Tag marking widgets rescaled on mobile.
    pub mobile_scale_tag: String,
    pub mobile_scaling: MobileScalingConfig,
    /// Named priority tiers exposed to UI code.
    pub ui_priorities: BTreeMap<String, Priority>,
    pub controller_button_mappings: BTreeMap<String, String>,
}

impl Default for GlintConfig {
    fn default() -> Self {
        Self {
            device_visibility_tag: "DeviceVisibility".into(),
            mobile_scale_tag: "MobileScale".into(),
            mobile_scaling: MobileScalingConfig::default(),
            ui_priorities: default_priorities(),
            controller_button_mappings: default_button_mappings(),
        }
    }
}

/// The built-in tiers keyed by name.
pub fn default_priorities() -> BTreeMap<String, Priority> {
    Priority::tiers()
        .into_iter()
        .map(|(name, priority)| (name.to_string(), priority))
        .collect()
}
