//! The UiArbiter owns the registry and the active set.

mod gate;
mod operations;
pub(crate) mod types;


pub use types::{ActiveUi, UiAction};

use std::sync::{Arc, Mutex};

use glint_common::{ArbiterError, CallbackResult, Priority};
use tracing::{info, warn};

use crate::controller::UiController;
use gate::{lock, Gate};
use types::{Op, Registration, State};

#[derive(Default)]
pub(crate) struct Inner {
    state: Mutex<State>,
    gate: Gate,
}

impl Inner {
    pub(crate) fn run(&self, op: Op) {
        self.gate.run(op, |op| self.apply(op));
    }

    pub(crate) fn is_open(&self, name: &str) -> bool {
        lock(&self.state).is_active(name)
    }
}

/// Tracks named, priority-ranked UIs and which of them are open.
///
/// Cloning yields another handle to the same arbiter.
#[derive(Clone, Default)]
pub struct UiArbiter {
    inner: Arc<Inner>,
}

impl UiArbiter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a UI under a unique name.
    ///
    /// A blank name is rejected. Registering a name twice logs a warning and
    /// returns the controller of the first registration unchanged.
    pub fn register_ui<O, C>(
        &self,
        name: impl Into<String>,
        priority: impl Into<Priority>,
        open: O,
        close: C,
    ) -> Result<UiController, ArbiterError>
    where
        O: Fn() -> CallbackResult + Send + Sync + 'static,
        C: Fn() -> CallbackResult + Send + Sync + 'static,
    {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ArbiterError::InvalidName(name));
        }
        let priority = priority.into();

        let mut state = lock(&self.inner.state);
        if let Some(existing) = state.registry.get(&name) {
            warn!(ui = %name, "ui already registered, returning existing controller");
            return Ok(UiController::new(
                existing.name.clone(),
                existing.priority,
                Arc::clone(&self.inner),
            ));
        }

        state.registry.insert(
            name.clone(),
            Arc::new(Registration {
                name: name.clone(),
                priority,
                open: Arc::new(open),
                close: Arc::new(close),
            }),
        );
        info!(ui = %name, %priority, "registered ui");
        Ok(UiController::new(name, priority, Arc::clone(&self.inner)))
    }

    pub fn controller(&self, name: &str) -> Option<UiController> {
        let state = lock(&self.inner.state);
        state.registry.get(name).map(|r| {
            UiController::new(r.name.clone(), r.priority, Arc::clone(&self.inner))
        })
    }

    fn lookup(&self, name: &str, verb: &str) -> Option<UiController> {
        let controller = self.controller(name);
        if controller.is_none() {
            warn!(ui = name, "cannot {verb} unregistered ui");
        }
        controller
    }

    pub fn open_ui(&self, name: &str) {
        if let Some(controller) = self.lookup(name, "open") {
            controller.open();
        }
    }

    pub fn close_ui(&self, name: &str) {
        if let Some(controller) = self.lookup(name, "close") {
            controller.close();
        }
    }

    pub fn toggle_ui(&self, name: &str) {
        if let Some(controller) = self.lookup(name, "toggle") {
            controller.toggle();
        }
    }

    pub fn is_ui_open(&self, name: &str) -> bool {
        self.lookup(name, "query")
            .is_some_and(|controller| controller.is_open())
    }

    /// Close every open UI. The active set is empty afterwards even if some
    /// close actions fail.
    pub fn close_all(&self) {
        self.inner.run(Op::CloseAll);
    }

    /// Open UIs in the order they were opened.
    pub fn active_uis(&self) -> Vec<ActiveUi> {
        lock(&self.inner.state)
            .active
            .iter()
            .map(|e| ActiveUi {
                name: e.name.clone(),
                priority: e.priority,
            })
            .collect()
    }

    /// Registered names, sorted.
    pub fn registered_names(&self) -> Vec<String> {
        let mut names: Vec<String> = lock(&self.inner.state).registry.keys().cloned().collect();
        names.sort();
        names
    }

    /// Close everything and forget every registration in one gated
    /// mutation. Controllers handed out earlier become inert.
    pub fn clear(&self) {
        self.inner.run(Op::Clear);
    }
}
