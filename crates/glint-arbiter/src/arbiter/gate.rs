//! Mutation serialization.
//!
//! Every open/close/toggle/close-all/clear runs while holding the gate. A
//! mutation issued by an open or close action on the thread that already
//! holds the gate is queued instead and runs, in order, before the outer
//! mutation releases the gate.

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::thread::{self, ThreadId};

use tracing::debug;

use super::types::Op;

pub(crate) fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}

#[derive(Default)]
pub(crate) struct Gate {
    held: Mutex<()>,
    owner: Mutex<Option<ThreadId>>,
    deferred: Mutex<VecDeque<Op>>,
}

/// Clears the owner even if `apply` unwinds.
struct OwnerReset<'a>(&'a Mutex<Option<ThreadId>>);

impl Drop for OwnerReset<'_> {
    fn drop(&mut self) {
        *lock(self.0) = None;
    }
}

impl Gate {
    pub(crate) fn run(&self, op: Op, mut apply: impl FnMut(Op)) {
        let me = thread::current().id();
        if *lock(&self.owner) == Some(me) {
            debug!(?op, "deferring mutation issued from a ui action");
            lock(&self.deferred).push_back(op);
            return;
        }

        let _held = lock(&self.held);
        *lock(&self.owner) = Some(me);
        let _reset = OwnerReset(&self.owner);

        apply(op);
        loop {
            let next = lock(&self.deferred).pop_front();
            match next {
                Some(op) => apply(op),
                None => break,
            }
        }
    }
}
