use clap::Parser;
use std::time::Duration;

use super::defaults::{
    DEFAULT_CONFIG_PATH, DEFAULT_FILE_PREFIX, DEFAULT_OUTPUT_DIR, DEFAULT_TIMEOUT,
};
use super::parsers::{parse_bool_env, parse_duration_arg};

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Periodic active HTTP probe - timed fetches of randomly chosen targets, jittered pacing, and rotating NDJSON result files."
)]
pub struct ProbeArgs {
    /// Path to the probe config file (JSON, or TOML with a .toml extension)
    #[arg(long, env = "FETCHPOLL_CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    pub config: String,

    /// Directory receiving result files and the default log file
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    pub odir: String,

    /// PEM bundle of trusted CA certificates. Without it certificate verification is disabled.
    #[arg(long)]
    pub certs: Option<String>,

    /// Log file path ('-' logs to stdout). Defaults to a per-run file in --odir.
    #[arg(long = "log-file")]
    pub log_file: Option<String>,

    /// Overall request timeout (supports ms/s/m/h)
    #[arg(
        long = "timeout",
        default_value = DEFAULT_TIMEOUT,
        value_parser = parse_duration_arg
    )]
    pub request_timeout: Duration,

    /// Prefix for result and log file names
    #[arg(long, default_value = DEFAULT_FILE_PREFIX)]
    pub prefix: String,

    /// Speak HTTP/3 with prior knowledge (requires the http3 build feature)
    #[arg(long)]
    pub http3: bool,

    /// Enable verbose logging (sets log level to debug unless overridden by FETCHPOLL_LOG/RUST_LOG)
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Disable color output
    #[arg(long = "no-color", env = "NO_COLOR", value_parser = parse_bool_env)]
    pub no_color: bool,
}
