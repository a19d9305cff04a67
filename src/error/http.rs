use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("Failed to read certificate bundle '{path}': {source}")]
    ReadCerts {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid certificate bundle '{path}': {source}")]
    InvalidCerts {
        path: PathBuf,
        #[source]
        source: reqwest::Error,
    },
    #[error("Certificate bundle '{path}' contained no certificates.")]
    EmptyCerts { path: PathBuf },
    #[error("Failed to build HTTP client: {source}")]
    BuildClientFailed {
        #[source]
        source: reqwest::Error,
    },
}
