//! Configuration for BSM files
//!
//! Controls how a [`BsmFile`](crate::file::BsmFile) loads from disk.

/// Options for opening and reloading a `.bsm` file
#[derive(Debug, Clone)]
pub struct Config {
    /// Empty the in-memory store before reloading from disk.
    /// When false, a reload merges file contents over the current entries.
    pub clear_on_load: bool,

    /// Start with an empty store when the file does not exist yet.
    /// When false, opening a missing file is an I/O error.
    pub create_if_missing: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            clear_on_load: true,
            create_if_missing: false,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Clear the store before each reload
    pub fn clear_on_load(mut self, clear: bool) -> Self {
        self.config.clear_on_load = clear;
        self
    }

    /// Treat a missing file as an empty store
    pub fn create_if_missing(mut self, create: bool) -> Self {
        self.config.create_if_missing = create;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
