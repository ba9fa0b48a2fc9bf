use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Dominant input modality of the current session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeviceCategory {
    #[serde(rename = "PC")]
    Pc,
    Mobile,
    Controller,
    Hybrid,
}

impl DeviceCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceCategory::Pc => "PC",
            DeviceCategory::Mobile => "Mobile",
            DeviceCategory::Controller => "Controller",
            DeviceCategory::Hybrid => "Hybrid",
        }
    }
}

impl fmt::Display for DeviceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Host gamepad slot. Slot 1 is the primary gamepad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GamepadId(pub u8);

impl GamepadId {
    pub const PRIMARY: GamepadId = GamepadId(1);
}

impl fmt::Display for GamepadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Gamepad{}", self.0)
    }
}

/// Kind of the most recent input reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputKind {
    Keyboard,
    MouseButton,
    MouseMovement,
    MouseWheel,
    Touch,
    Gamepad(GamepadId),
    /// Focus changes, text input, motion sensors. Never changes the device.
    Other,
}

impl InputKind {
    pub fn is_keyboard_or_mouse(&self) -> bool {
        matches!(
            self,
            InputKind::Keyboard
                | InputKind::MouseButton
                | InputKind::MouseMovement
                | InputKind::MouseWheel
        )
    }
}

/// Snapshot of what the host reports as available input hardware.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputCapabilities {
    pub touch_enabled: bool,
    pub keyboard_enabled: bool,
    pub mouse_enabled: bool,
    pub connected_gamepads: BTreeSet<GamepadId>,
}

impl InputCapabilities {
    /// Keyboard and mouse, nothing else.
    pub fn desktop() -> Self {
        Self {
            keyboard_enabled: true,
            mouse_enabled: true,
            ..Self::default()
        }
    }

    /// Touch only.
    pub fn touch() -> Self {
        Self {
            touch_enabled: true,
            ..Self::default()
        }
    }

    pub fn with_gamepad(mut self, id: GamepadId) -> Self {
        self.connected_gamepads.insert(id);
        self
    }

    pub fn primary_gamepad_connected(&self) -> bool {
        self.connected_gamepads.contains(&GamepadId::PRIMARY)
    }

    pub fn any_gamepad_connected(&self) -> bool {
        !self.connected_gamepads.is_empty()
    }
}
