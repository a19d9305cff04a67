use url::Url;

use crate::args::{
    DEFAULT_BATCH_SIZE, DEFAULT_RUNS, DEFAULT_WAIT_FROM_MS, DEFAULT_WAIT_TO_MS, PositiveUsize,
};
use crate::error::{AppError, AppResult, ValidationError};
use crate::probe::JitterWindow;

use super::types::{BindTarget, ConfigFile, ProbeSettings};

/// Resolves a raw config into validated probe settings.
///
/// # Errors
///
/// Returns an error when the URL list is empty or contains an invalid URL, or
/// when the jitter window is empty.
pub fn resolve_settings(config: &ConfigFile) -> AppResult<ProbeSettings> {
    let urls = split_urls(config.urls.as_deref().unwrap_or_default())?;

    let wait_from = non_zero_or(config.wait_from, DEFAULT_WAIT_FROM_MS);
    let wait_to = non_zero_or(config.wait_to, DEFAULT_WAIT_TO_MS);
    let jitter = JitterWindow::new(wait_from, wait_to).map_err(AppError::validation)?;

    let batch_size = PositiveUsize::try_from(non_zero_or(config.collect, DEFAULT_BATCH_SIZE))?;
    let runs = PositiveUsize::try_from(non_zero_or(config.runs, DEFAULT_RUNS))?;

    let bind = config
        .iface_name
        .as_deref()
        .map(str::trim)
        .filter(|hint| !hint.is_empty())
        .map(BindTarget::from_hint);

    Ok(ProbeSettings {
        urls,
        jitter,
        batch_size,
        runs,
        bind,
        node_id: config
            .node_id
            .as_deref()
            .map(str::trim)
            .unwrap_or_default()
            .to_owned(),
    })
}

fn non_zero_or<T>(value: Option<T>, default: T) -> T
where
    T: Default + PartialEq,
{
    value.filter(|value| *value != T::default()).unwrap_or(default)
}

/// Splits the semicolon-joined target list, dropping blank entries.
pub(crate) fn split_urls(raw: &str) -> AppResult<Vec<String>> {
    let mut urls = Vec::new();
    for entry in raw.split(';').map(str::trim).filter(|entry| !entry.is_empty()) {
        Url::parse(entry).map_err(|err| {
            AppError::validation(ValidationError::InvalidUrl {
                url: entry.to_owned(),
                source: err,
            })
        })?;
        urls.push(entry.to_owned());
    }
    if urls.is_empty() {
        return Err(AppError::validation(ValidationError::UrlListEmpty));
    }
    Ok(urls)
}
