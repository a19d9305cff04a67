pub(crate) const DEFAULT_CONFIG_PATH: &str = "/monroe/config";
pub(crate) const DEFAULT_OUTPUT_DIR: &str = "./tmp/";
pub(crate) const DEFAULT_FILE_PREFIX: &str = "fetchpoll";
pub(crate) const DEFAULT_TIMEOUT: &str = "30s";

pub(crate) const DEFAULT_WAIT_FROM_MS: u64 = 1000;
pub(crate) const DEFAULT_WAIT_TO_MS: u64 = 2000;
pub(crate) const DEFAULT_BATCH_SIZE: usize = 256;
pub(crate) const DEFAULT_RUNS: usize = 4;

pub(crate) const DEFAULT_USER_AGENT: &str = concat!("fetchpoll/", env!("CARGO_PKG_VERSION"));
