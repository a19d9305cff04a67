//! CLI argument types and parsing helpers.
mod cli;
mod defaults;
pub(crate) mod parsers;
mod types;

#[cfg(test)]
mod test_support;

pub use cli::ProbeArgs;
pub use types::PositiveUsize;

pub(crate) use defaults::{
    DEFAULT_BATCH_SIZE, DEFAULT_RUNS, DEFAULT_USER_AGENT, DEFAULT_WAIT_FROM_MS, DEFAULT_WAIT_TO_MS,
};
