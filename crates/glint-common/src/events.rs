use serde::{Deserialize, Serialize};

use crate::types::{DeviceCategory, GamepadId, InputKind};

/// Notifications raised by the host input source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum InputEvent {
    LastInputTypeChanged(InputKind),
    GamepadConnected(GamepadId),
    GamepadDisconnected(GamepadId),
}

/// An accepted device transition. `old` is `None` for the initial
/// classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceChange {
    pub new: DeviceCategory,
    pub old: Option<DeviceCategory>,
}
