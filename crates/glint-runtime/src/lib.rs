//! One explicit context per host that ties device classification, tagged
//! presentation and UI arbitration together.
//!
//! A [`UiContext`] is created with its host bindings, initialized once with
//! configuration overrides, and disposed explicitly. Calls made before
//! `init` log a warning and return a neutral value.

mod context;

pub use context::{HostBindings, InitOptions, UiContext};

pub use glint_arbiter::{ActiveUi, UiController};
pub use glint_input::Connection;
