use std::time::Duration;

use futures_util::StreamExt;
use tokio::time::Instant;
use tracing::info;

use crate::error::{BoxError, FetchError};
use crate::probe::speed_mib_per_sec;

use super::transport::{BodyStream, Transport, TransportResponse};

/// Status code recorded when no response head was received.
pub const NO_STATUS: i32 = -1;

/// Raw result of one timed fetch.
#[derive(Debug)]
pub struct FetchOutcome {
    pub bytes: u64,
    pub elapsed: Duration,
    pub status_code: i32,
    pub error: Option<FetchError>,
}

impl FetchOutcome {
    #[must_use]
    pub const fn request_failed(error: FetchError) -> Self {
        Self {
            bytes: 0,
            elapsed: Duration::ZERO,
            status_code: NO_STATUS,
            error: Some(error),
        }
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// Fetches `url` once, draining and discarding the body.
///
/// Never fails: transport and body errors are folded into the outcome. A body
/// error keeps the bytes and time spent before it.
pub async fn fetch_once<T>(transport: &T, url: &str) -> FetchOutcome
where
    T: Transport + ?Sized,
{
    info!("Start fetching {:?}", url);
    let start = Instant::now();

    let TransportResponse {
        status,
        content_length,
        body,
    } = match transport.get(url).await {
        Ok(response) => response,
        Err(source) => {
            return FetchOutcome::request_failed(FetchError::Request {
                url: url.to_owned(),
                source,
            });
        }
    };

    info!("Status code: {}", status);
    match content_length {
        Some(length) => info!("Content length: {}", length),
        None => info!("Content length: unknown"),
    }

    let (bytes, body_error) = drain_body(body).await;
    let elapsed = start.elapsed();
    let elapsed_secs = elapsed.as_secs_f64();

    info!(
        "Speed: {:.6} MiB/s, elapsed: {:.6} seconds",
        speed_mib_per_sec(bytes, elapsed_secs),
        elapsed_secs
    );
    info!("Done fetching {:?}", url);

    FetchOutcome {
        bytes,
        elapsed,
        status_code: i32::from(status),
        error: body_error.map(|source| FetchError::Body {
            url: url.to_owned(),
            bytes,
            source,
        }),
    }
}

async fn drain_body(mut body: BodyStream) -> (u64, Option<BoxError>) {
    let mut total: u64 = 0;
    while let Some(chunk) = body.next().await {
        match chunk {
            Ok(bytes) => {
                total = total.saturating_add(u64::try_from(bytes.len()).unwrap_or(u64::MAX));
            }
            Err(err) => return (total, Some(err)),
        }
    }
    (total, None)
}
