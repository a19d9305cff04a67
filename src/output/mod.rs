//! Rotating NDJSON result files.
mod naming;
mod rotator;


pub(crate) use naming::log_file_name;
pub use rotator::OutputRotator;
