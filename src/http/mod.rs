//! Transport capability, client construction and the timed fetch.
mod client;
mod fetch;
mod tls;
mod transport;

#[cfg(test)]
pub(crate) mod test_support;

pub use client::{ClientOptions, build_client};
pub use fetch::{FetchOutcome, fetch_once};
pub use transport::{BodyStream, ReqwestTransport, Transport, TransportResponse};
