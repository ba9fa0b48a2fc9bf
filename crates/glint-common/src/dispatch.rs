//! Fire-and-forget task submission.
//!
//! Device-changed subscribers never run inline with the transition that
//! triggered them. The runtime hands each notification to a [`Dispatcher`]
//! as an independent [`Task`]; submission order is subscriber order.

use std::collections::VecDeque;
use std::panic::{self, AssertUnwindSafe};
use std::sync::{Mutex, PoisonError};

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::error;

pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// Runs submitted tasks independently of the submitter.
pub trait Dispatcher: Send + Sync {
    fn submit(&self, task: Task);
}

/// Queues tasks until the owner drains them with [`run_pending`].
///
/// Suits hosts with a single scheduling context (a frame loop) and
/// deterministic tests.
///
/// [`run_pending`]: QueueDispatcher::run_pending
#[derive(Default)]
pub struct QueueDispatcher {
    queue: Mutex<VecDeque<Task>>,
}

impl QueueDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tasks waiting to run.
    pub fn pending(&self) -> usize {
        self.queue
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Run queued tasks in submission order, including tasks submitted
    /// while draining. Returns how many ran.
    pub fn run_pending(&self) -> usize {
        let mut ran = 0;
        loop {
            let next = self
                .queue
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .pop_front();
            let Some(task) = next else {
                return ran;
            };
            if panic::catch_unwind(AssertUnwindSafe(task)).is_err() {
                error!("dispatched task panicked");
            }
            ran += 1;
        }
    }
}

impl Dispatcher for QueueDispatcher {
    fn submit(&self, task: Task) {
        self.queue
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(task);
    }
}

/// Runs every task on the tokio blocking pool so a slow subscriber never
/// holds up the others.
pub struct TokioDispatcher {
    handle: Handle,
    in_flight: Mutex<Vec<JoinHandle<()>>>,
}

impl TokioDispatcher {
    pub fn new(handle: Handle) -> Self {
        Self {
            handle,
            in_flight: Mutex::new(Vec::new()),
        }
    }

    /// Bind to the runtime of the calling context, if any.
    pub fn current() -> Option<Self> {
        Handle::try_current().ok().map(Self::new)
    }

    /// Wait for every task submitted so far to finish.
    pub async fn settle(&self) {
        let handles = std::mem::take(
            &mut *self
                .in_flight
                .lock()
                .unwrap_or_else(PoisonError::into_inner),
        );
        for handle in handles {
            if let Err(e) = handle.await {
                if e.is_panic() {
                    error!("dispatched task panicked");
                }
            }
        }
    }
}

impl Dispatcher for TokioDispatcher {
    fn submit(&self, task: Task) {
        let handle = self.handle.spawn_blocking(task);
        let mut in_flight = self
            .in_flight
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        in_flight.retain(|h| !h.is_finished());
        in_flight.push(handle);
    }
}
