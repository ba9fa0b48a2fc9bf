//! The mutations themselves. Only called with the gate held.

use glint_common::guard;
use tracing::{debug, info, warn};

use super::gate::lock;
use super::types::{ActiveEntry, Op};
use super::Inner;

impl Inner {
    pub(crate) fn apply(&self, op: Op) {
        match op {
            Op::Open(name) => self.open(&name),
            Op::Close(name) => self.close(&name),
            Op::Toggle(name) => {
                if lock(&self.state).is_active(&name) {
                    self.close(&name);
                } else {
                    self.open(&name);
                }
            }
            Op::CloseAll => self.close_all(),
            Op::Clear => {
                self.close_all();
                let mut state = lock(&self.state);
                let forgotten = state.registry.len();
                state.registry.clear();
                info!(forgotten, "cleared ui registry");
            }
        }
    }

    fn open(&self, name: &str) {
        let (registration, victims) = {
            let state = lock(&self.state);
            let Some(registration) = state.registry.get(name).cloned() else {
                warn!(ui = name, "open requested for unregistered ui");
                return;
            };
            if state.is_active(name) {
                debug!(ui = name, "already open");
                return;
            }
            let victims: Vec<ActiveEntry> = state
                .active
                .iter()
                .filter(|e| e.priority < registration.priority)
                .cloned()
                .collect();
            (registration, victims)
        };

        for victim in victims {
            let _ = guard::invoke(&format!("close {}", victim.name), || (victim.close)());
            lock(&self.state).active.retain(|e| e.name != victim.name);
            info!(
                ui = %victim.name,
                priority = %victim.priority,
                by = name,
                "evicted lower priority ui"
            );
        }

        let _ = guard::invoke(&format!("open {name}"), || (registration.open)());
        lock(&self.state).active.push(ActiveEntry {
            name: registration.name.clone(),
            priority: registration.priority,
            close: registration.close.clone(),
        });
        info!(ui = name, priority = %registration.priority, "opened");
    }

    fn close(&self, name: &str) {
        let entry = lock(&self.state)
            .active
            .iter()
            .find(|e| e.name == name)
            .cloned();
        let Some(entry) = entry else {
            debug!(ui = name, "not open");
            return;
        };

        let _ = guard::invoke(&format!("close {name}"), || (entry.close)());
        lock(&self.state).active.retain(|e| e.name != name);
        info!(ui = name, "closed");
    }

    fn close_all(&self) {
        let entries = lock(&self.state).active.clone();
        for entry in &entries {
            let _ = guard::invoke(&format!("close {}", entry.name), || (entry.close)());
        }
        lock(&self.state).active.clear();
        info!(count = entries.len(), "closed all uis");
    }
}
