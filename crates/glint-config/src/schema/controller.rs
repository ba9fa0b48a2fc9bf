//! Default controller button mapping.

use std::collections::BTreeMap;

/// Button id (as written on a widget's `ControllerButton` attribute) to
/// host input code.
pub fn default_button_mappings() -> BTreeMap<String, String> {
    [
        ("A", "ButtonA"),
        ("B", "ButtonB"),
        ("X", "ButtonX"),
        ("Y", "ButtonY"),
        ("LB", "ButtonL1"),
        ("RB", "ButtonR1"),
        ("LT", "ButtonL2"),
        ("RT", "ButtonR2"),
        ("L3", "ButtonL3"),
        ("R3", "ButtonR3"),
        ("Start", "ButtonStart"),
        ("Select", "ButtonSelect"),
        ("DPadUp", "DPadUp"),
        ("DPadDown", "DPadDown"),
        ("DPadLeft", "DPadLeft"),
        ("DPadRight", "DPadRight"),
    ]
    .into_iter()
    .map(|(button, code)| (button.to_string(), code.to_string()))
    .collect()
}
