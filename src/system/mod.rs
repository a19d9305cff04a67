pub(crate) mod clock;
pub mod logger;
