use std::path::{Path, PathBuf};

use tokio::fs::{File, OpenOptions};
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

use crate::error::OutputError;
use crate::system::clock::unix_nanos;

use super::naming::result_file_name;

/// Name collisions are resolved by bumping the timestamp this many times.
const MAX_NAME_ATTEMPTS: u64 = 64;

#[derive(Debug)]
struct OpenFile {
    path: PathBuf,
    file: File,
}

/// Owns the currently open result file and replaces it on rotation.
#[derive(Debug)]
pub struct OutputRotator {
    dir: PathBuf,
    prefix: String,
    node_id: String,
    current: Option<OpenFile>,
}

impl OutputRotator {
    /// Opens the first result file in `dir`.
    ///
    /// # Errors
    ///
    /// Returns `OutputError::Open` when no file can be created in `dir`.
    pub async fn open(
        dir: impl Into<PathBuf>,
        prefix: &str,
        node_id: &str,
    ) -> Result<Self, OutputError> {
        let mut rotator = Self {
            dir: dir.into(),
            prefix: prefix.to_owned(),
            node_id: node_id.to_owned(),
            current: None,
        };
        rotator.open_next().await?;
        Ok(rotator)
    }

    /// Adopts an already open `file` as the current output.
    #[cfg(test)]
    pub(crate) fn from_file(
        dir: impl Into<PathBuf>,
        prefix: &str,
        node_id: &str,
        path: PathBuf,
        file: File,
    ) -> Self {
        Self {
            dir: dir.into(),
            prefix: prefix.to_owned(),
            node_id: node_id.to_owned(),
            current: Some(OpenFile { path, file }),
        }
    }

    #[must_use]
    pub fn current_path(&self) -> Option<&Path> {
        self.current.as_ref().map(|open| open.path.as_path())
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.current.is_some()
    }

    /// Appends one serialized record (already newline-terminated).
    ///
    /// # Errors
    ///
    /// Returns `OutputError::Closed` without an open file, or
    /// `OutputError::Write` when the write or flush fails.
    pub async fn write_line(&mut self, line: &str) -> Result<(), OutputError> {
        let open = self.current.as_mut().ok_or(OutputError::Closed)?;
        let result = match open.file.write_all(line.as_bytes()).await {
            Ok(()) => open.file.flush().await,
            Err(err) => Err(err),
        };
        result.map_err(|err| OutputError::Write {
            path: open.path.clone(),
            source: err,
        })
    }

    /// Closes the current file; no-op when already closed.
    pub async fn close(&mut self) {
        if let Some(mut open) = self.current.take() {
            if let Err(err) = open.file.flush().await {
                warn!("Failed to flush {}: {}", open.path.display(), err);
            }
            debug!("Closed output file {}", open.path.display());
        }
    }

    /// Closes the current file and opens a fresh one.
    ///
    /// # Errors
    ///
    /// Returns `OutputError::Open` when the new file cannot be created; the
    /// rotator is left closed.
    pub async fn rotate(&mut self) -> Result<&Path, OutputError> {
        self.close().await;
        self.open_next().await
    }

    async fn open_next(&mut self) -> Result<&Path, OutputError> {
        let base = unix_nanos();
        let mut attempt: u64 = 0;
        let open = loop {
            let name = result_file_name(&self.prefix, base.saturating_add(attempt), &self.node_id);
            let path = self.dir.join(name);
            match create_append_only(&path).await {
                Ok(file) => break OpenFile { path, file },
                Err(err)
                    if err.kind() == std::io::ErrorKind::AlreadyExists
                        && attempt.saturating_add(1) < MAX_NAME_ATTEMPTS =>
                {
                    attempt = attempt.saturating_add(1);
                }
                Err(err) => return Err(OutputError::Open { path, source: err }),
            }
        };
        debug!("Opened output file {}", open.path.display());
        Ok(self.current.insert(open).path.as_path())
    }
}

async fn create_append_only(path: &Path) -> std::io::Result<File> {
    let mut options = OpenOptions::new();
    options.append(true).create_new(true);
    #[cfg(unix)]
    options.mode(0o600);
    options.open(path).await
}
