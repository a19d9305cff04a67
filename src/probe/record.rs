use serde::{Deserialize, Serialize};

use crate::http::FetchOutcome;
use crate::system::clock::unix_nanos;

const BYTES_PER_MIB: f64 = 1024.0 * 1024.0;

/// One probe result, serialized as a single NDJSON line.
///
/// The JSON keys match the result schema consumed by the measurement
/// platform (`Success`, `Size`, `Speed`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatRecord {
    #[serde(rename = "Success")]
    pub success: bool,
    #[serde(rename = "Size")]
    pub bytes: u64,
    #[serde(rename = "Speed")]
    pub speed_mib_s: f64,
    #[serde(rename = "Elapsed")]
    pub elapsed_secs: f64,
    #[serde(rename = "StatusCode")]
    pub status_code: i32,
    #[serde(rename = "Now")]
    pub timestamp_nanos: u64,
    #[serde(rename = "URL")]
    pub url: String,
    #[serde(rename = "Message")]
    pub message: String,
}

impl StatRecord {
    /// Builds a record stamped with the current time.
    #[must_use]
    pub fn from_outcome(url: &str, outcome: &FetchOutcome) -> Self {
        Self::build(url, outcome, unix_nanos())
    }

    #[must_use]
    pub fn build(url: &str, outcome: &FetchOutcome, timestamp_nanos: u64) -> Self {
        let elapsed_secs = outcome.elapsed.as_secs_f64();
        Self {
            success: outcome.error.is_none(),
            bytes: outcome.bytes,
            speed_mib_s: speed_mib_per_sec(outcome.bytes, elapsed_secs),
            elapsed_secs,
            status_code: outcome.status_code,
            timestamp_nanos,
            url: url.to_owned(),
            message: outcome
                .error
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_default(),
        }
    }

    /// Serializes the record as one newline-terminated JSON object.
    ///
    /// # Errors
    ///
    /// Returns the serializer error; records hold only plain data, so this
    /// does not happen in practice.
    pub fn to_json_line(&self) -> Result<String, serde_json::Error> {
        let mut line = serde_json::to_string(self)?;
        line.push('\n');
        Ok(line)
    }
}

/// Transfer speed in MiB/s; `0.0` when no time elapsed.
#[must_use]
pub fn speed_mib_per_sec(bytes: u64, elapsed_secs: f64) -> f64 {
    if elapsed_secs > 0.0 {
        bytes as f64 / elapsed_secs / BYTES_PER_MIB
    } else {
        0.0
    }
}
