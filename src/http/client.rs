use std::path::PathBuf;
use std::time::Duration;

use reqwest::{Client, ClientBuilder};
use tracing::{error, info};

use crate::args::DEFAULT_USER_AGENT;
use crate::config::BindTarget;
use crate::error::{AppError, AppResult, HttpError, ValidationError};

use super::tls::{apply_protocol, apply_trust};

/// Everything needed to build the shared probe client.
#[derive(Debug, Clone)]
pub struct ClientOptions {
    pub timeout: Duration,
    pub bind: Option<BindTarget>,
    pub certs: Option<PathBuf>,
    pub http3: bool,
}

/// Builds the HTTP client used for every probe.
///
/// # Errors
///
/// Returns an error when the bind target is unusable, the certificate bundle
/// cannot be loaded, or the client fails to build.
pub fn build_client(options: &ClientOptions) -> AppResult<Client> {
    let mut builder = Client::builder()
        .timeout(options.timeout)
        .user_agent(DEFAULT_USER_AGENT);

    if let Some(bind) = options.bind.as_ref() {
        builder = apply_bind(builder, bind)?;
        info!("Using {}", bind);
    }

    builder = apply_trust(builder, options.certs.as_deref())?;
    builder = apply_protocol(builder, options.http3)?;

    builder.build().map_err(|err| {
        error!("Failed to build HTTP client: {}", err);
        AppError::http(HttpError::BuildClientFailed { source: err })
    })
}

fn apply_bind(builder: ClientBuilder, bind: &BindTarget) -> AppResult<ClientBuilder> {
    match bind {
        BindTarget::Address(addr) => Ok(builder.local_address(*addr)),
        BindTarget::Interface(name) => bind_interface(builder, name),
    }
}

#[cfg(any(target_os = "android", target_os = "fuchsia", target_os = "linux"))]
fn bind_interface(builder: ClientBuilder, name: &str) -> AppResult<ClientBuilder> {
    ensure_interface_exists(name)?;
    Ok(builder.interface(name))
}

#[cfg(not(any(target_os = "android", target_os = "fuchsia", target_os = "linux")))]
fn bind_interface(builder: ClientBuilder, name: &str) -> AppResult<ClientBuilder> {
    drop(builder);
    Err(AppError::validation(
        ValidationError::InterfaceBindingUnsupported {
            name: name.to_owned(),
        },
    ))
}

#[cfg(target_os = "linux")]
fn ensure_interface_exists(name: &str) -> AppResult<()> {
    if std::path::Path::new("/sys/class/net").join(name).exists() {
        return Ok(());
    }
    Err(AppError::validation(ValidationError::UnknownInterface {
        name: name.to_owned(),
    }))
}

#[cfg(any(target_os = "android", target_os = "fuchsia"))]
const fn ensure_interface_exists(_name: &str) -> AppResult<()> {
    Ok(())
}
