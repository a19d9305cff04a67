use std::path::Path;

use reqwest::{Certificate, ClientBuilder};
use tracing::{info, warn};

use crate::error::{AppError, AppResult, HttpError};

/// Trusts only the certificates in `certs`, or disables verification when no
/// bundle is configured.
pub(super) fn apply_trust(builder: ClientBuilder, certs: Option<&Path>) -> AppResult<ClientBuilder> {
    let Some(path) = certs else {
        warn!("No certificate bundle configured: TLS certificate verification is DISABLED (insecure mode).");
        return Ok(builder
            .danger_accept_invalid_certs(true)
            .danger_accept_invalid_hostnames(true));
    };

    let roots = load_bundle(path)?;
    info!(
        "Trusting {} certificate(s) from {}",
        roots.len(),
        path.display()
    );
    Ok(roots
        .into_iter()
        .fold(builder.tls_built_in_root_certs(false), |builder, cert| {
            builder.add_root_certificate(cert)
        }))
}

pub(super) fn load_bundle(path: &Path) -> AppResult<Vec<Certificate>> {
    let pem = std::fs::read(path).map_err(|err| {
        AppError::http(HttpError::ReadCerts {
            path: path.to_path_buf(),
            source: err,
        })
    })?;
    let roots = Certificate::from_pem_bundle(&pem).map_err(|err| {
        AppError::http(HttpError::InvalidCerts {
            path: path.to_path_buf(),
            source: err,
        })
    })?;
    if roots.is_empty() {
        return Err(AppError::http(HttpError::EmptyCerts {
            path: path.to_path_buf(),
        }));
    }
    Ok(roots)
}

pub(super) fn apply_protocol(builder: ClientBuilder, http3: bool) -> AppResult<ClientBuilder> {
    if !http3 {
        return Ok(builder);
    }
    #[cfg(feature = "http3")]
    {
        Ok(builder.http3_prior_knowledge())
    }
    #[cfg(not(feature = "http3"))]
    {
        drop(builder);
        Err(AppError::validation(
            crate::error::ValidationError::Http3Unavailable,
        ))
    }
}
