use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};

pub(crate) fn write_config(dir: &Path, name: &str, content: &str) -> AppResult<PathBuf> {
    let path = dir.join(name);
    std::fs::write(&path, content).map_err(AppError::from)?;
    Ok(path)
}
