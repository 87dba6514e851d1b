use crate::error::{Result, StoreError};
use chrono::Local;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "fitbuddy";
const DATA_FILENAME: &str = "fitbuddy.json";
const BACKUP_DIR: &str = "backups";

pub fn data_dir() -> Result<PathBuf> {
    if let Some(dir) = env::var_os("XDG_DATA_HOME") {
        let path = PathBuf::from(dir);
        if path.as_os_str().is_empty() {
            return Err(StoreError::InvalidDataPath(path));
        }
        return Ok(path.join(APP_DIR));
    }

    let home = dirs::home_dir().ok_or(StoreError::MissingHomeDir)?;
    Ok(home.join(".local").join("share").join(APP_DIR))
}

pub fn ensure_data_dir() -> Result<PathBuf> {
    let dir = data_dir()?;
    if !dir.exists() {
        fs::create_dir_all(&dir)?;
    }
    restrict_dir_permissions(&dir)?;
    Ok(dir)
}

pub fn data_file_path() -> Result<PathBuf> {
    Ok(ensure_data_dir()?.join(DATA_FILENAME))
}

pub fn data_file_in(dir: &Path) -> PathBuf {
    dir.join(DATA_FILENAME)
}

/// Picks the explicit path (flag, then config) or falls back to the data dir.
pub fn resolve_data_file(explicit: Option<PathBuf>) -> Result<PathBuf> {
    match explicit {
        Some(path) => {
            if path.as_os_str().is_empty() || path.file_name().is_none() {
                return Err(StoreError::InvalidDataPath(path));
            }
            Ok(path)
        }
        None => data_file_path(),
    }
}

pub fn backup_path_for(data_file: &Path) -> Result<PathBuf> {
    let parent = parent_dir(data_file);
    let stamp = Local::now().format("%Y%m%d-%H%M%S");
    Ok(parent
        .join(BACKUP_DIR)
        .join(format!("fitbuddy-{stamp}.json")))
}

pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    let parent = parent_dir(path);
    if !parent.exists() {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

fn parent_dir(path: &Path) -> &Path {
    path.parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."))
}

#[cfg(unix)]
fn restrict_dir_permissions(dir: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    let perms = fs::Permissions::from_mode(0o700);
    fs::set_permissions(dir, perms)?;
    Ok(())
}

#[cfg(not(unix))]
fn restrict_dir_permissions(_dir: &Path) -> Result<()> {
    Ok(())
}

#[cfg(unix)]
pub(crate) fn restrict_file_permissions(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    if path.exists() {
        let perms = fs::Permissions::from_mode(0o600);
        fs::set_permissions(path, perms)?;
    }
    Ok(())
}

#[cfg(not(unix))]
pub(crate) fn restrict_file_permissions(_path: &Path) -> Result<()> {
    Ok(())
}
