//! Failure isolation for user-supplied callbacks.
//!
//! Open/close actions and device subscribers run through [`invoke`], which
//! turns both returned errors and panics into a logged [`CallbackFailure`].
//! Nothing a callback does can unwind into the caller's bookkeeping.

use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use tracing::error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// What user callbacks return.
pub type CallbackResult = std::result::Result<(), BoxError>;

/// A callback that returned `Err` or panicked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallbackFailure {
    Error(String),
    Panic(String),
}

impl fmt::Display for CallbackFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CallbackFailure::Error(msg) => write!(f, "returned error: {msg}"),
            CallbackFailure::Panic(msg) => write!(f, "panicked: {msg}"),
        }
    }
}

/// Run `f`, logging and capturing any failure under `label`.
pub fn invoke<F>(label: &str, f: F) -> Result<(), CallbackFailure>
where
    F: FnOnce() -> CallbackResult,
{
    let failure = match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(Ok(())) => return Ok(()),
        Ok(Err(e)) => CallbackFailure::Error(e.to_string()),
        Err(payload) => CallbackFailure::Panic(panic_message(payload.as_ref())),
    };
    error!(callback = label, "callback {failure}");
    Err(failure)
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
