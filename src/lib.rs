//! Core library for the `fetchpoll` probe.
//!
//! The binary repeatedly fetches one of a configured set of URLs, measures
//! size, speed, latency and status, and appends one JSON record per fetch to
//! result files that rotate after a fixed batch size. The probe stops after a
//! configured number of batches.
pub mod args;
pub mod config;
pub mod entry;
pub mod error;
pub mod http;
pub mod output;
pub mod probe;
pub mod system;
