//! Backup and atomic persistence for the compose file
//!
//! A timestamped backup copy is written alongside the original before any
//! mutation, and the new content lands via write-to-temp-then-rename in the
//! same directory, so no partial write is ever externally visible.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::{Result, TowerupError};

/// Sibling backup path: `<name>.backup.<YYYYMMDD-HHMMSS>`.
pub fn backup_path(file: &Path) -> PathBuf {
    let stamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
    let name = file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "docker-compose.yml".to_string());
    file.with_file_name(format!("{name}.backup.{stamp}"))
}

/// Copy the file to its backup path before touching it.
pub fn create_backup(file: &Path) -> Result<PathBuf> {
    let backup = backup_path(file);
    fs::copy(file, &backup).map_err(|e| TowerupError::BackupFailed {
        path: file.display().to_string(),
        reason: e.to_string(),
    })?;
    Ok(backup)
}

/// Put the backup content back over the original.
pub fn restore_backup(backup: &Path, file: &Path) -> Result<()> {
    fs::copy(backup, file).map_err(|e| TowerupError::FileWriteFailed {
        path: file.display().to_string(),
        reason: e.to_string(),
    })?;
    Ok(())
}

/// Read the whole compose file.
pub fn read_file(file: &Path) -> Result<String> {
    fs::read_to_string(file).map_err(|e| TowerupError::FileReadFailed {
        path: file.display().to_string(),
        reason: e.to_string(),
    })
}

/// Replace the file's content atomically (temp file + rename, same directory).
pub fn write_atomic(file: &Path, content: &str) -> Result<()> {
    let write_failed = |reason: String| TowerupError::FileWriteFailed {
        path: file.display().to_string(),
        reason,
    };

    let dir = file
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| write_failed(e.to_string()))?;
    tmp.write_all(content.as_bytes())
        .map_err(|e| write_failed(e.to_string()))?;
    tmp.persist(file).map_err(|e| write_failed(e.to_string()))?;
    Ok(())
}
