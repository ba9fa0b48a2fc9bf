//! TOML config file loading.

mod loader;
mod paths;


#[cfg(test)]
use loader::overrides_or_default;
pub use loader::{load_default_overrides, load_from_str, load_overrides_from_path};
pub use paths::default_config_path;
