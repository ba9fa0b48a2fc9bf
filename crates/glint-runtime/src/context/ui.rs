//! UI arbitration through the context.

use glint_arbiter::{ActiveUi, UiController};
use glint_common::{CallbackResult, GlintError, Priority, Result};

use super::core::UiContext;

impl UiContext {
    /// Register a UI. Fails with `NotInitialized` before `init` and with
    /// an arbiter error for a blank name.
    pub fn register_ui<O, C>(
        &self,
        name: impl Into<String>,
        priority: impl Into<Priority>,
        open: O,
        close: C,
    ) -> Result<UiController>
    where
        O: Fn() -> CallbackResult + Send + Sync + 'static,
        C: Fn() -> CallbackResult + Send + Sync + 'static,
    {
        let session = self
            .session("register_ui")
            .ok_or(GlintError::NotInitialized)?;
        Ok(session.arbiter.register_ui(name, priority, open, close)?)
    }

    pub fn controller(&self, name: &str) -> Option<UiController> {
        self.session("controller")?.arbiter.controller(name)
    }

    pub fn open_ui(&self, name: &str) {
        if let Some(session) = self.session("open_ui") {
            session.arbiter.open_ui(name);
        }
    }

    pub fn close_ui(&self, name: &str) {
        if let Some(session) = self.session("close_ui") {
            session.arbiter.close_ui(name);
        }
    }

    pub fn toggle_ui(&self, name: &str) {
        if let Some(session) = self.session("toggle_ui") {
            session.arbiter.toggle_ui(name);
        }
    }

    pub fn is_ui_open(&self, name: &str) -> bool {
        self.session("is_ui_open")
            .is_some_and(|session| session.arbiter.is_ui_open(name))
    }

    pub fn close_all_uis(&self) {
        if let Some(session) = self.session("close_all_uis") {
            session.arbiter.close_all();
        }
    }

    /// Open UIs in open order.
    pub fn active_uis(&self) -> Vec<ActiveUi> {
        self.session("active_uis")
            .map(|session| session.arbiter.active_uis())
            .unwrap_or_default()
    }
}
