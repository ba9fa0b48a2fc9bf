//! The UiContext and its lifecycle.
//!
//! The impl is split by concern: construction and accessors in `core`,
//! `init` and `dispose` in `lifecycle`, input events and presentation in
//! `input`, arbiter delegation in `ui`.

mod core;
mod input;
mod lifecycle;
mod ui;


pub use self::core::{HostBindings, InitOptions, UiContext};
