pub mod backup;
pub mod error;
pub mod format;
pub mod paths;

use crate::error::Result;
use fitbuddy_core::Person;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

/// Whole-file JSON storage for the aggregate.
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn open(path: &Path) -> Result<Self> {
        paths::ensure_parent_dir(path)?;
        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A missing data file loads as an empty aggregate.
    pub fn load(&self) -> Result<Person> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "data file missing, starting empty");
                return Ok(Person::new());
            }
            Err(err) => return Err(err.into()),
        };
        let person = format::decode(&contents, &self.path)?;
        debug!(path = %self.path.display(), days = person.day_list().len(), "data file loaded");
        Ok(person)
    }

    /// Replaces the data file in one step; readers never see a partial write.
    pub fn save(&self, person: &Person) -> Result<()> {
        let encoded = format::encode(person, &self.path)?;
        let dir = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(encoded.as_bytes())?;
        tmp.write_all(b"\n")?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|err| err.error)?;
        paths::restrict_file_permissions(&self.path)?;
        debug!(path = %self.path.display(), "data file saved");
        Ok(())
    }

    pub fn backup_to(&self, path: &Path) -> Result<()> {
        backup::backup_to(&self.path, path)
    }
}
