use chrono::Utc;

/// Nanoseconds since the Unix epoch; `0` for clocks set before 1970.
pub(crate) fn unix_nanos() -> u64 {
    Utc::now()
        .timestamp_nanos_opt()
        .and_then(|nanos| u64::try_from(nanos).ok())
        .unwrap_or_default()
}

pub(crate) fn unix_secs() -> i64 {
    Utc::now().timestamp()
}
