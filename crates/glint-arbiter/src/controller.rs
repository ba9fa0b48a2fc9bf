use std::fmt;
use std::sync::Arc;

use glint_common::Priority;

use crate::arbiter::types::Op;
use crate::arbiter::Inner;

/// Handle for one registered UI.
#[derive(Clone)]
pub struct UiController {
    name: String,
    priority: Priority,
    inner: Arc<Inner>,
}

impl UiController {
    pub(crate) fn new(name: String, priority: Priority, inner: Arc<Inner>) -> Self {
        Self {
            name,
            priority,
            inner,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    /// Evict every open UI of strictly lower priority, run the open action,
    /// and mark this UI open. No-op if already open.
    pub fn open(&self) {
        self.inner.run(Op::Open(self.name.clone()));
    }

    /// Run the close action and mark this UI closed, even if the action
    /// fails. No-op if not open.
    pub fn close(&self) {
        self.inner.run(Op::Close(self.name.clone()));
    }

    pub fn toggle(&self) {
        self.inner.run(Op::Toggle(self.name.clone()));
    }

    pub fn is_open(&self) -> bool {
        self.inner.is_open(&self.name)
    }
}

impl fmt::Debug for UiController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UiController")
            .field("name", &self.name)
            .field("priority", &self.priority)
            .field("open", &self.is_open())
            .finish()
    }
}
