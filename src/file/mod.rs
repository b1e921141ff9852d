//! File Module
//!
//! Whole-buffer persistence for stores.
//!
//! ## Responsibilities
//! - Read an entire file into memory and decode it
//! - Encode a store and write it in one call
//! - Pair a path with a store for load / reload / save cycles
//!
//! The codec never touches the filesystem; everything here is a thin layer
//! over `std::fs::read` and `std::fs::write`. Partial writes are not
//! recovered.
//!
//! ## Empty Files
//! An empty store encodes to the single byte `0x00`, which the decoder
//! rejects as truncated. Every read path in this module accepts a file whose
//! contents are exactly `[0x00]` as an empty store, so a store saved after
//! its last key was deleted can still be opened.

mod handle;

pub use handle::BsmFile;

use std::fs;
use std::path::Path;

use crate::codec;
use crate::error::Result;
use crate::store::Store;

/// Contents of a saved empty store
const EMPTY_FILE: [u8; 1] = [0x00];

/// Read and decode the file at `path`
pub fn read_store(path: impl AsRef<Path>) -> Result<Store> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "read file");
    decode_file(&bytes)
}

/// Decode file contents, accepting the single-byte empty store
pub(crate) fn decode_file(bytes: &[u8]) -> Result<Store> {
    if bytes == EMPTY_FILE {
        return Ok(Store::new());
    }
    codec::decode(bytes)
}

/// Encode `store` and write it to `path`, replacing any existing file
pub fn write_store(path: impl AsRef<Path>, store: &Store) -> Result<()> {
    let path = path.as_ref();
    let bytes = codec::encode(store)?;
    fs::write(path, &bytes)?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "wrote file");
    Ok(())
}
