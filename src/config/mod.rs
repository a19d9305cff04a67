//! Probe configuration loading and resolution.
mod apply;
mod loader;
pub mod types;

#[cfg(test)]
mod test_support;

pub use apply::resolve_settings;
pub use loader::load_config_file;
pub use types::{BindTarget, ConfigFile, ProbeSettings};
