//! Partial configuration merged one level deep onto the defaults.
//!
//! Scalars overwrite, `mobile_scaling` merges field by field, and the two
//! maps merge key by key, so an override naming a single priority tier
//! keeps every other built-in tier.

use std::collections::BTreeMap;

use glint_common::Priority;
use serde::{Deserialize, Serialize};

use crate::schema::{GlintConfig, MobileScalingConfig};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MobileScalingOverrides {
    pub reference_viewport_width: Option<f64>,
    pub target_factor_at_reference_width: Option<f64>,
    pub min_scale_factor: Option<f64>,
    pub max_scale_factor: Option<f64>,
}

impl MobileScalingOverrides {
    fn apply(self, scaling: &mut MobileScalingConfig) {
        if let Some(v) = self.reference_viewport_width {
            scaling.reference_viewport_width = v;
        }
        if let Some(v) = self.target_factor_at_reference_width {
            scaling.target_factor_at_reference_width = v;
        }
        if let Some(v) = self.min_scale_factor {
            scaling.min_scale_factor = v;
        }
        if let Some(v) = self.max_scale_factor {
            scaling.max_scale_factor = v;
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigOverrides {
    pub device_visibility_tag: Option<String>,
    pub mobile_scale_tag: Option<String>,
    pub mobile_scaling: Option<MobileScalingOverrides>,
    pub ui_priorities: Option<BTreeMap<String, Priority>>,
    pub controller_button_mappings: Option<BTreeMap<String, String>>,
}

impl ConfigOverrides {
    pub fn with_device_visibility_tag(mut self, tag: impl Into<String>) -> Self {
        self.device_visibility_tag = Some(tag.into());
        self
    }

    pub fn with_mobile_scale_tag(mut self, tag: impl Into<String>) -> Self {
        self.mobile_scale_tag = Some(tag.into());
        self
    }

    pub fn with_mobile_scaling(mut self, scaling: MobileScalingOverrides) -> Self {
        self.mobile_scaling = Some(scaling);
        self
    }

    pub fn with_priority(mut self, name: impl Into<String>, priority: impl Into<Priority>) -> Self {
        self.ui_priorities
            .get_or_insert_with(BTreeMap::new)
            .insert(name.into(), priority.into());
        self
    }

    pub fn with_button_mapping(mut self, button: impl Into<String>, code: impl Into<String>) -> Self {
        self.controller_button_mappings
            .get_or_insert_with(BTreeMap::new)
            .insert(button.into(), code.into());
        self
    }

    /// Merge onto a base config.
    pub fn apply(self, config: &mut GlintConfig) {
        if let Some(tag) = self.device_visibility_tag {
            config.device_visibility_tag = tag;
        }
        if let Some(tag) = self.mobile_scale_tag {
            config.mobile_scale_tag = tag;
        }
        if let Some(scaling) = self.mobile_scaling {
            scaling.apply(&mut config.mobile_scaling);
        }
        if let Some(priorities) = self.ui_priorities {
            config.ui_priorities.extend(priorities);
        }
        if let Some(mappings) = self.controller_button_mappings {
            config.controller_button_mappings.extend(mappings);
        }
    }

    /// Merge onto the built-in defaults.
    pub fn into_config(self) -> GlintConfig {
        let mut config = GlintConfig::default();
        self.apply(&mut config);
        config
    }
}
