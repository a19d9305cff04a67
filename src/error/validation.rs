use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("URL list was empty.")]
    UrlListEmpty,
    #[error("Invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("Invalid jitter window [{from_ms}, {to_ms}) ms. WaitTo must be greater than WaitFrom.")]
    InvalidJitterWindow { from_ms: u64, to_ms: u64 },
    #[error("Binding to interface '{name}' is not supported on this platform. Use a local IP address.")]
    InterfaceBindingUnsupported { name: String },
    #[error("Interface '{name}' does not exist.")]
    UnknownInterface { name: String },
    #[error("HTTP/3 support is not enabled in this build. Rebuild with --features http3 and set RUSTFLAGS=\"--cfg reqwest_unstable\".")]
    Http3Unavailable,
    #[error("Invalid boolean '{value}'. Expected true/false, yes/no, on/off, or 1/0.")]
    InvalidBoolean { value: String },
    #[error("Duration must not be empty.")]
    DurationEmpty,
    #[error("Invalid duration '{value}'.")]
    InvalidDurationFormat { value: String },
    #[error("Invalid duration '{value}': {source}")]
    InvalidDurationNumber {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("Duration overflow.")]
    DurationOverflow,
    #[error("Invalid duration unit '{unit}'.")]
    InvalidDurationUnit { unit: String },
    #[error("Duration must be > 0.")]
    DurationZero,
    #[error("Value must be >= {min}.")]
    ValueTooSmall { min: u64 },
    #[error("Invalid value: {source}")]
    InvalidNumber {
        #[source]
        source: std::num::ParseIntError,
    },
    #[cfg(test)]
    #[error("Test expectation failed: {message}")]
    TestExpectation { message: &'static str },
    #[cfg(test)]
    #[error("Test expectation failed: {message}: {value}")]
    TestExpectationValue {
        message: &'static str,
        value: String,
    },
}
