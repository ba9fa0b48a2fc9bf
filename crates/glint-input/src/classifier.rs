//! Device classification.
//!
//! [`classify`] derives a category from a capability snapshot. The
//! [`DeviceClassifier`] state machine applies the narrower per-event rules
//! and only reports a [`DeviceChange`] when the category actually moves.

use glint_common::{DeviceCategory, DeviceChange, InputCapabilities, InputKind};
use tracing::{debug, info};

/// Precedence: Controller > Hybrid > Mobile > PC.
pub fn classify(caps: &InputCapabilities) -> DeviceCategory {
    if caps.primary_gamepad_connected() {
        DeviceCategory::Controller
    } else {
        classify_without_gamepad(caps)
    }
}

fn classify_without_gamepad(caps: &InputCapabilities) -> DeviceCategory {
    if caps.touch_enabled && (caps.keyboard_enabled || caps.mouse_enabled) {
        DeviceCategory::Hybrid
    } else if caps.touch_enabled {
        DeviceCategory::Mobile
    } else {
        DeviceCategory::Pc
    }
}

/// Category implied by the most recent input kind, if any.
///
/// Touch only counts as hybrid when both keyboard and mouse are present.
pub fn target_for_input(kind: InputKind, caps: &InputCapabilities) -> Option<DeviceCategory> {
    match kind {
        InputKind::Gamepad(_) => Some(DeviceCategory::Controller),
        InputKind::Touch => {
            if caps.keyboard_enabled && caps.mouse_enabled {
                Some(DeviceCategory::Hybrid)
            } else {
                Some(DeviceCategory::Mobile)
            }
        }
        k if k.is_keyboard_or_mouse() => {
            if caps.touch_enabled {
                Some(DeviceCategory::Hybrid)
            } else {
                Some(DeviceCategory::Pc)
            }
        }
        _ => None,
    }
}

/// Tracks the current device category.
#[derive(Debug, Default)]
pub struct DeviceClassifier {
    current: Option<DeviceCategory>,
}

impl DeviceClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// `None` until [`initialize`](Self::initialize) runs.
    pub fn current(&self) -> Option<DeviceCategory> {
        self.current
    }

    /// Initial classification. Always reports a change with `old: None`.
    pub fn initialize(&mut self, caps: &InputCapabilities) -> DeviceChange {
        let new = classify(caps);
        self.current = Some(new);
        info!(device = %new, "initial device classification");
        DeviceChange { new, old: None }
    }

    pub fn last_input_type_changed(
        &mut self,
        kind: InputKind,
        caps: &InputCapabilities,
    ) -> Option<DeviceChange> {
        let target = target_for_input(kind, caps)?;
        self.transition(target)
    }

    /// Re-derive after a gamepad connected or disconnected.
    ///
    /// A connected primary gamepad wins. Leaving Controller only happens
    /// once no gamepad at all remains, and the fallback comes from the live
    /// touch/keyboard/mouse flags rather than the category held before.
    pub fn gamepad_connectivity_changed(
        &mut self,
        caps: &InputCapabilities,
    ) -> Option<DeviceChange> {
        if caps.primary_gamepad_connected() {
            return self.transition(DeviceCategory::Controller);
        }
        if self.current == Some(DeviceCategory::Controller) && !caps.any_gamepad_connected() {
            return self.transition(classify_without_gamepad(caps));
        }
        None
    }

    fn transition(&mut self, target: DeviceCategory) -> Option<DeviceChange> {
        if self.current == Some(target) {
            debug!(device = %target, "device unchanged");
            return None;
        }
        let old = self.current.replace(target);
        info!(
            from = old.map(|c| c.as_str()).unwrap_or("none"),
            to = %target,
            "device changed"
        );
        Some(DeviceChange { new: target, old })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_common::GamepadId;

    fn caps(touch: bool, keyboard: bool, mouse: bool, primary: bool) -> InputCapabilities {
        let caps = InputCapabilities {
            touch_enabled: touch,
            keyboard_enabled: keyboard,
            mouse_enabled: mouse,
            ..Default::default()
        };
        if primary {
            caps.with_gamepad(GamepadId::PRIMARY)
        } else {
            caps
        }
    }

    #[test]
    fn classify_precedence_exhaustive() {
        for bits in 0..16u8 {
            let (t, k, m, g) = (bits & 1 != 0, bits & 2 != 0, bits & 4 != 0, bits & 8 != 0);
            let expected = if g {
                DeviceCategory::Controller
            } else if t && (k || m) {
                DeviceCategory::Hybrid
            } else if t {
                DeviceCategory::Mobile
            } else {
                DeviceCategory::Pc
            };
            assert_eq!(classify(&caps(t, k, m, g)), expected, "t={t} k={k} m={m} g={g}");
        }
    }

    #[test]
    fn classify_touch_keyboard_mouse_is_hybrid() {
        assert_eq!(classify(&caps(true, true, true, false)), DeviceCategory::Hybrid);
    }

    #[test]
    fn classify_primary_gamepad_is_controller() {
        assert_eq!(classify(&caps(false, true, true, true)), DeviceCategory::Controller);
    }

    #[test]
    fn classify_secondary_gamepad_only_is_not_controller() {
        let c = InputCapabilities::desktop().with_gamepad(GamepadId(2));
        assert_eq!(classify(&c), DeviceCategory::Pc);
    }

    #[test]
    fn initialize_reports_no_old_category() {
        let mut classifier = DeviceClassifier::new();
        assert_eq!(classifier.current(), None);
        let change = classifier.initialize(&InputCapabilities::touch());
        assert_eq!(
            change,
            DeviceChange {
                new: DeviceCategory::Mobile,
                old: None
            }
        );
        assert_eq!(classifier.current(), Some(DeviceCategory::Mobile));
    }

    #[test]
    fn gamepad_input_moves_to_controller() {
        let c = InputCapabilities::desktop();
        let mut classifier = DeviceClassifier::new();
        classifier.initialize(&c);

        let change = classifier
            .last_input_type_changed(InputKind::Gamepad(GamepadId(2)), &c)
            .unwrap();
        assert_eq!(change.new, DeviceCategory::Controller);
        assert_eq!(change.old, Some(DeviceCategory::Pc));
    }

    #[test]
    fn touch_input_needs_keyboard_and_mouse_for_hybrid() {
        let mut c = caps(true, true, false, false);
        assert_eq!(target_for_input(InputKind::Touch, &c), Some(DeviceCategory::Mobile));
        c.mouse_enabled = true;
        assert_eq!(target_for_input(InputKind::Touch, &c), Some(DeviceCategory::Hybrid));
    }

    #[test]
    fn keyboard_input_with_touch_is_hybrid() {
        let c = caps(true, true, false, false);
        assert_eq!(target_for_input(InputKind::Keyboard, &c), Some(DeviceCategory::Hybrid));
        let c = caps(false, true, false, false);
        assert_eq!(target_for_input(InputKind::MouseMovement, &c), Some(DeviceCategory::Pc));
    }

    #[test]
    fn other_input_never_transitions() {
        let c = InputCapabilities::desktop();
        let mut classifier = DeviceClassifier::new();
        classifier.initialize(&c);
        assert_eq!(classifier.last_input_type_changed(InputKind::Other, &c), None);
        assert_eq!(classifier.current(), Some(DeviceCategory::Pc));
    }

    #[test]
    fn same_target_is_not_a_transition() {
        let c = InputCapabilities::desktop();
        let mut classifier = DeviceClassifier::new();
        classifier.initialize(&c);
        assert_eq!(classifier.last_input_type_changed(InputKind::Keyboard, &c), None);
        assert_eq!(classifier.last_input_type_changed(InputKind::MouseWheel, &c), None);
    }

    #[test]
    fn primary_connect_prefers_controller() {
        let mut classifier = DeviceClassifier::new();
        classifier.initialize(&InputCapabilities::desktop());

        let c = InputCapabilities::desktop().with_gamepad(GamepadId::PRIMARY);
        let change = classifier.gamepad_connectivity_changed(&c).unwrap();
        assert_eq!(change.new, DeviceCategory::Controller);

        // Already controller: no repeat.
        assert_eq!(classifier.gamepad_connectivity_changed(&c), None);
    }

    #[test]
    fn full_disconnect_falls_back_to_live_flags() {
        let mut classifier = DeviceClassifier::new();
        classifier.initialize(&InputCapabilities::desktop().with_gamepad(GamepadId::PRIMARY));
        assert_eq!(classifier.current(), Some(DeviceCategory::Controller));

        // Touch appeared while in controller mode.
        let c = caps(true, true, true, false);
        let change = classifier.gamepad_connectivity_changed(&c).unwrap();
        assert_eq!(change.new, DeviceCategory::Hybrid);
        assert_eq!(change.old, Some(DeviceCategory::Controller));
    }

    #[test]
    fn partial_disconnect_stays_controller() {
        let mut classifier = DeviceClassifier::new();
        classifier.initialize(&InputCapabilities::desktop().with_gamepad(GamepadId::PRIMARY));

        let c = InputCapabilities::desktop().with_gamepad(GamepadId(2));
        assert_eq!(classifier.gamepad_connectivity_changed(&c), None);
        assert_eq!(classifier.current(), Some(DeviceCategory::Controller));
    }

    #[test]
    fn secondary_connect_outside_controller_is_ignored() {
        let mut classifier = DeviceClassifier::new();
        classifier.initialize(&InputCapabilities::touch());
        let c = InputCapabilities::touch().with_gamepad(GamepadId(3));
        assert_eq!(classifier.gamepad_connectivity_changed(&c), None);
        assert_eq!(classifier.current(), Some(DeviceCategory::Mobile));
    }
}
