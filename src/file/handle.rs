//! BSM file handle
//!
//! Owns a store loaded from a path and writes it back on demand.

use std::io;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::{BsmError, Result};
use crate::store::Store;

/// A store bound to a file on disk
#[derive(Debug)]
pub struct BsmFile {
    path: PathBuf,
    store: Store,
    config: Config,
}

impl BsmFile {
    /// Open a file and load its contents
    ///
    /// A missing file yields an empty store when `config.create_if_missing`
    /// is set; otherwise the I/O error is returned. Nothing is written until
    /// `save()` is called.
    pub fn open(path: impl Into<PathBuf>, config: Config) -> Result<Self> {
        let path = path.into();

        let store = match std::fs::read(&path) {
            Ok(bytes) => super::decode_file(&bytes)?,
            Err(e) if e.kind() == io::ErrorKind::NotFound && config.create_if_missing => {
                tracing::debug!(path = %path.display(), "file missing, starting empty");
                Store::new()
            }
            Err(e) => return Err(BsmError::Io(e)),
        };

        tracing::info!(path = %path.display(), keys = store.len(), "opened bsm file");

        Ok(Self {
            path,
            store,
            config,
        })
    }

    /// Re-read the file from disk
    ///
    /// Clears the store first if `clear_on_load` is set, otherwise merges the
    /// file's entries over the current ones. On failure the store is unchanged.
    pub fn reload(&mut self) -> Result<()> {
        let bytes = std::fs::read(&self.path)?;

        let loaded = super::decode_file(&bytes)?;
        if self.config.clear_on_load {
            self.store = loaded;
        } else {
            self.store.extend(loaded);
        }

        tracing::debug!(path = %self.path.display(), keys = self.store.len(), "reloaded");
        Ok(())
    }

    /// Encode the store and write it to the file
    pub fn save(&self) -> Result<()> {
        super::write_store(&self.path, &self.store)?;
        tracing::info!(path = %self.path.display(), keys = self.store.len(), "saved bsm file");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut Store {
        &mut self.store
    }

    pub fn into_store(self) -> Store {
        self.store
    }
}
