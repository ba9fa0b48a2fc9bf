//! Glint configuration.
//!
//! Built-in defaults cover every option. Callers supply a
//! [`ConfigOverrides`] (in code or from a TOML file) that is merged one
//! level deep onto the defaults, then validated.
//!
//! ```rust,no_run
//! use glint_config::{toml_loader, validation};
//!
//! let overrides = toml_loader::load_default_overrides().expect("unreadable config");
//! let config = overrides.into_config();
//! validation::validate(&config).expect("invalid config");
//! ```

pub mod overrides;
pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use overrides::{ConfigOverrides, MobileScalingOverrides};
pub use schema::{GlintConfig, MobileScalingConfig};
