//! Host input events, presentation refresh and device subscriptions.

use glint_common::{CallbackResult, DeviceCategory, DeviceChange, InputEvent};
use glint_input::Connection;
use tracing::debug;

use super::core::{lock, UiContext};

impl UiContext {
    /// Feed one host input notification through the classifier.
    ///
    /// On a transition the presentation is refreshed before this returns
    /// and every device subscriber is handed to the dispatcher. Gamepad
    /// events re-read the host's capabilities, which must already reflect
    /// the connect or disconnect.
    pub fn handle_input_event(&self, event: InputEvent) -> Option<DeviceChange> {
        let session = self.session("handle_input_event")?;
        let caps = self.host.input.capabilities();

        // Held through refresh so presentation follows transitions in order.
        let mut classifier = lock(&session.classifier);
        let change = match event {
            InputEvent::LastInputTypeChanged(kind) => {
                classifier.last_input_type_changed(kind, &caps)
            }
            InputEvent::GamepadConnected(id) => {
                debug!(gamepad = %id, "gamepad connected");
                classifier.gamepad_connectivity_changed(&caps)
            }
            InputEvent::GamepadDisconnected(id) => {
                debug!(gamepad = %id, "gamepad disconnected");
                classifier.gamepad_connectivity_changed(&caps)
            }
        }?;

        session.presentation.refresh(change.new);
        let notified = self.signal.emit(change, self.host.dispatcher.as_ref());
        debug!(notified, "device change dispatched");
        Some(change)
    }

    /// Re-apply the presentation for the current device, e.g. after the
    /// host tagged new widgets.
    pub fn refresh_ui_state(&self) {
        let Some(session) = self.session("refresh_ui_state") else {
            return;
        };
        let classifier = lock(&session.classifier);
        if let Some(current) = classifier.current() {
            session.presentation.refresh(current);
        }
    }

    /// Subscribe to device changes. The callback receives `(new, old)` and
    /// runs on the host's dispatcher, never inline.
    ///
    /// Subscribing needs no session: a callback connected before `init`
    /// receives the initial classification with `old = None`.
    pub fn on_device_changed<F>(&self, callback: F) -> Connection
    where
        F: Fn(DeviceCategory, Option<DeviceCategory>) -> CallbackResult + Send + Sync + 'static,
    {
        self.signal.connect(callback)
    }
}
