//! Registration and active-set types.

use std::collections::HashMap;
use std::sync::Arc;

use glint_common::{CallbackResult, Priority};
use serde::Serialize;

/// An open or close action supplied at registration.
pub type UiAction = Arc<dyn Fn() -> CallbackResult + Send + Sync>;

pub(crate) struct Registration {
    pub(crate) name: String,
    pub(crate) priority: Priority,
    pub(crate) open: UiAction,
    pub(crate) close: UiAction,
}

#[derive(Clone)]
pub(crate) struct ActiveEntry {
    pub(crate) name: String,
    pub(crate) priority: Priority,
    pub(crate) close: UiAction,
}

/// Public view of an open UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActiveUi {
    pub name: String,
    pub priority: Priority,
}

#[derive(Default)]
pub(crate) struct State {
    pub(crate) registry: HashMap<String, Arc<Registration>>,
    /// Open UIs in the order they were opened.
    pub(crate) active: Vec<ActiveEntry>,
}

impl State {
    pub(crate) fn is_active(&self, name: &str) -> bool {
        self.active.iter().any(|e| e.name == name)
    }
}

/// A serialized mutation.
#[derive(Debug)]
pub(crate) enum Op {
    Open(String),
    Close(String),
    Toggle(String),
    CloseAll,
    /// Close-all followed by forgetting every registration.
    Clear,
}
