//! Priority-based arbitration between named UI windows.
//!
//! Opening a UI evicts every open UI of strictly lower priority; equal
//! priorities coexist. All mutations are serialized through one gate.

pub mod arbiter;
pub mod controller;

pub use arbiter::{ActiveUi, UiAction, UiArbiter};
pub use controller::UiController;
