//! Mobile scaling rule for tagged widgets.

use glint_common::DeviceCategory;
use glint_config::MobileScalingConfig;
use tracing::warn;

use crate::host::{AttributeValue, Widget, ORIGINAL_SCALE_ATTR};

/// Divisor applied to a widget's original scale on mobile.
///
/// A non-positive viewport width skips the width term and clamps the target
/// factor alone.
pub fn mobile_factor(viewport_width: f64, scaling: &MobileScalingConfig) -> f64 {
    let raw = if viewport_width > 0.0 {
        scaling.target_factor_at_reference_width
            * (scaling.reference_viewport_width / viewport_width)
    } else {
        scaling.target_factor_at_reference_width
    };
    // Not `clamp`: inverted bounds must not panic.
    raw.max(scaling.min_scale_factor).min(scaling.max_scale_factor)
}

/// Read the cached original scale, caching the current one on first sight.
pub fn original_scale(widget: &dyn Widget, current: f64) -> f64 {
    if let Some(original) = widget.attribute(ORIGINAL_SCALE_ATTR).and_then(|v| v.as_f64()) {
        return original;
    }
    widget.set_attribute(ORIGINAL_SCALE_ATTR, AttributeValue::Number(current));
    current
}

/// Apply the rule to one widget. `viewport_width` is only consulted on
/// mobile. Returns `false` when the widget has no scale child.
pub fn apply(
    widget: &dyn Widget,
    category: DeviceCategory,
    viewport_width: impl FnOnce() -> f64,
    scaling: &MobileScalingConfig,
) -> bool {
    let Some(child) = widget.scale_child() else {
        warn!(widget = %widget.name(), "mobile-scaled widget has no scale transform child");
        return false;
    };

    let current = child.scale();
    let original = original_scale(widget, current);
    let target = if category == DeviceCategory::Mobile {
        original / mobile_factor(viewport_width(), scaling)
    } else {
        original
    };

    if current != target {
        child.set_scale(target);
    }
    true
}
