use crate::error::{Result, StoreError};
use crate::paths;
use std::fs;
use std::path::{Path, PathBuf};

pub fn backup_to(data_file: &Path, path: &Path) -> Result<()> {
    paths::ensure_parent_dir(path)?;
    let target = canonicalize_path(path)?;
    let source = canonicalize_path(data_file)?;
    if source == target || is_same_file_identity(&target, &source)? {
        return Err(StoreError::InvalidBackupPath(path.to_path_buf()));
    }
    fs::copy(&source, &target)?;
    paths::restrict_file_permissions(&target)?;
    Ok(())
}

fn canonicalize_path(path: &Path) -> Result<PathBuf> {
    if path.exists() {
        return Ok(fs::canonicalize(path)?);
    }
    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let parent = fs::canonicalize(parent)?;
    let file_name = path
        .file_name()
        .ok_or_else(|| StoreError::InvalidBackupPath(path.to_path_buf()))?;
    Ok(parent.join(file_name))
}

#[cfg(unix)]
fn is_same_file_identity(target: &Path, source: &Path) -> Result<bool> {
    use std::os::unix::fs::MetadataExt;
    if !target.exists() || !source.exists() {
        return Ok(false);
    }
    let target_meta = fs::metadata(target)?;
    let source_meta = fs::metadata(source)?;
    Ok(target_meta.dev() == source_meta.dev() && target_meta.ino() == source_meta.ino())
}

#[cfg(not(unix))]
fn is_same_file_identity(_target: &Path, _source: &Path) -> Result<bool> {
    Ok(false)
}
