//! Device-changed subscriptions.

use std::sync::{Arc, Mutex, PoisonError, Weak};

use glint_common::guard;
use glint_common::{CallbackResult, DeviceCategory, DeviceChange, Dispatcher};
use tracing::debug;

/// Receives `(new, old)`; `old` is `None` for the initial classification.
pub type DeviceCallback =
    Arc<dyn Fn(DeviceCategory, Option<DeviceCategory>) -> CallbackResult + Send + Sync>;

#[derive(Default)]
struct Slots {
    next_id: u64,
    entries: Vec<(u64, DeviceCallback)>,
}

/// Ordered list of device-changed callbacks.
#[derive(Clone, Default)]
pub struct DeviceSignal {
    slots: Arc<Mutex<Slots>>,
}

impl DeviceSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a callback. Callbacks are notified in connection order.
    pub fn connect<F>(&self, callback: F) -> Connection
    where
        F: Fn(DeviceCategory, Option<DeviceCategory>) -> CallbackResult + Send + Sync + 'static,
    {
        let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        slots.next_id += 1;
        let id = slots.next_id;
        slots.entries.push((id, Arc::new(callback)));
        debug!(subscriber = id, "device subscriber connected");
        Connection {
            id,
            slots: Arc::downgrade(&self.slots),
        }
    }

    pub fn len(&self) -> usize {
        self.slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entries
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every subscriber.
    pub fn clear(&self) {
        self.slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entries
            .clear();
    }

    /// Submit one task per subscriber, in connection order. Each task
    /// isolates its callback's failure. Returns the number submitted.
    pub fn emit(&self, change: DeviceChange, dispatcher: &dyn Dispatcher) -> usize {
        let entries: Vec<(u64, DeviceCallback)> = self
            .slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entries
            .clone();

        for (id, callback) in &entries {
            let callback = Arc::clone(callback);
            let label = format!("device subscriber #{id}");
            dispatcher.submit(Box::new(move || {
                let _ = guard::invoke(&label, || callback(change.new, change.old));
            }));
        }
        entries.len()
    }
}

/// Handle returned by [`DeviceSignal::connect`].
///
/// Dropping the handle keeps the subscription alive; call
/// [`disconnect`](Connection::disconnect) to remove it.
#[derive(Debug, Clone)]
pub struct Connection {
    id: u64,
    slots: Weak<Mutex<Slots>>,
}

impl Connection {
    pub fn disconnect(&self) {
        if let Some(slots) = self.slots.upgrade() {
            let mut slots = slots.lock().unwrap_or_else(PoisonError::into_inner);
            let before = slots.entries.len();
            slots.entries.retain(|(id, _)| *id != self.id);
            if slots.entries.len() != before {
                debug!(subscriber = self.id, "device subscriber disconnected");
            }
        }
    }

    pub fn is_connected(&self) -> bool {
        self.slots.upgrade().is_some_and(|slots| {
            slots
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .entries
                .iter()
                .any(|(id, _)| *id == self.id)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_common::QueueDispatcher;

    fn change(new: DeviceCategory, old: Option<DeviceCategory>) -> DeviceChange {
        DeviceChange { new, old }
    }

    #[test]
    fn emits_in_connection_order() {
        let signal = DeviceSignal::new();
        let dispatcher = QueueDispatcher::new();
        let log = Arc::new(Mutex::new(Vec::new()));

        for tag in ["first", "second", "third"] {
            let log = Arc::clone(&log);
            signal.connect(move |new, old| {
                log.lock().unwrap().push((tag, new, old));
                Ok(())
            });
        }

        let submitted = signal.emit(change(DeviceCategory::Mobile, None), &dispatcher);
        assert_eq!(submitted, 3);
        assert!(log.lock().unwrap().is_empty(), "delivery must be deferred");

        dispatcher.run_pending();
        let log = log.lock().unwrap();
        assert_eq!(
            *log,
            vec![
                ("first", DeviceCategory::Mobile, None),
                ("second", DeviceCategory::Mobile, None),
                ("third", DeviceCategory::Mobile, None),
            ]
        );
    }

    #[test]
    fn failing_subscriber_does_not_stop_others() {
        let signal = DeviceSignal::new();
        let dispatcher = QueueDispatcher::new();
        let hits = Arc::new(Mutex::new(0));

        signal.connect(|_, _| Err("subscriber failed".into()));
        signal.connect(|_, _| panic!("subscriber panicked"));
        let h = Arc::clone(&hits);
        signal.connect(move |_, _| {
            *h.lock().unwrap() += 1;
            Ok(())
        });

        signal.emit(
            change(DeviceCategory::Pc, Some(DeviceCategory::Mobile)),
            &dispatcher,
        );
        assert_eq!(dispatcher.run_pending(), 3);
        assert_eq!(*hits.lock().unwrap(), 1);
    }

    #[test]
    fn disconnect_removes_only_that_subscriber() {
        let signal = DeviceSignal::new();
        let a = signal.connect(|_, _| Ok(()));
        let b = signal.connect(|_, _| Ok(()));
        assert_eq!(signal.len(), 2);

        a.disconnect();
        assert!(!a.is_connected());
        assert!(b.is_connected());
        assert_eq!(signal.len(), 1);

        // Idempotent.
        a.disconnect();
        assert_eq!(signal.len(), 1);
    }

    #[test]
    fn dropping_connection_keeps_subscription() {
        let signal = DeviceSignal::new();
        drop(signal.connect(|_, _| Ok(())));
        assert_eq!(signal.len(), 1);
    }

    #[test]
    fn clear_disconnects_everyone() {
        let signal = DeviceSignal::new();
        let conn = signal.connect(|_, _| Ok(()));
        signal.clear();
        assert!(signal.is_empty());
        assert!(!conn.is_connected());
    }
}
