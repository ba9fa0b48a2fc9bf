//! In-memory input host for tests and the simulator.

use std::sync::{Mutex, PoisonError};

use glint_common::{GamepadId, InputCapabilities};

use crate::host::InputHost;

#[derive(Debug, Default)]
pub struct MemoryInput {
    caps: Mutex<InputCapabilities>,
}

impl MemoryInput {
    pub fn new(caps: InputCapabilities) -> Self {
        Self {
            caps: Mutex::new(caps),
        }
    }

    pub fn set(&self, caps: InputCapabilities) {
        *self.caps.lock().unwrap_or_else(PoisonError::into_inner) = caps;
    }

    pub fn connect_gamepad(&self, id: GamepadId) {
        self.caps
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .connected_gamepads
            .insert(id);
    }

    pub fn disconnect_gamepad(&self, id: GamepadId) {
        self.caps
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .connected_gamepads
            .remove(&id);
    }
}

impl InputHost for MemoryInput {
    fn capabilities(&self) -> InputCapabilities {
        self.caps
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gamepads_connect_and_disconnect() {
        let host = MemoryInput::new(InputCapabilities::desktop());
        host.connect_gamepad(GamepadId::PRIMARY);
        assert!(host.capabilities().primary_gamepad_connected());
        host.disconnect_gamepad(GamepadId::PRIMARY);
        assert!(!host.capabilities().any_gamepad_connected());
    }

    #[test]
    fn set_replaces_snapshot() {
        let host = MemoryInput::default();
        host.set(InputCapabilities::touch());
        assert!(host.capabilities().touch_enabled);
    }
}
