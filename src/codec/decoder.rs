//! Decoder
//!
//! Rebuilds a Store from bytes in a single pass over the key table, checking
//! every data-region reference against the end of the buffer.

use crate::error::{BsmError, Result};
use crate::store::Store;

use super::{DataRef, EntryPayload, TableEntry, ENTRY_SIZE, HEADER_SIZE, MIN_ENCODED_SIZE};

/// Decode bytes into a new Store
///
/// Any error aborts the whole decode; no partially populated store escapes.
pub fn decode(bytes: &[u8]) -> Result<Store> {
    if bytes.len() < MIN_ENCODED_SIZE {
        return Err(truncated(MIN_ENCODED_SIZE, bytes.len()));
    }

    let key_count = bytes[0] as usize;
    let data_start = HEADER_SIZE + key_count * ENTRY_SIZE;
    if bytes.len() < data_start {
        return Err(truncated(data_start, bytes.len()));
    }

    let mut store = Store::new();

    for record in bytes[HEADER_SIZE..data_start].chunks_exact(ENTRY_SIZE) {
        let entry = TableEntry::read_from(record)?;
        let name = entry.name();
        tracing::trace!(key = %name, kind = %entry.kind(), "decoding entry");

        match entry.payload {
            EntryPayload::Int(v) => store.set_int(name, v),
            EntryPayload::Float(v) => store.set_float(name, v),
            EntryPayload::String(data_ref) => {
                let slice = data_slice(bytes, data_start, &name, data_ref)?;
                let text = String::from_utf8_lossy(slice).into_owned();
                store.set_string(name, text);
            }
            EntryPayload::Raw(data_ref) => {
                let slice = data_slice(bytes, data_start, &name, data_ref)?;
                store.set_raw(name, slice.to_vec());
            }
        }
    }

    tracing::debug!(
        keys = store.len(),
        total_bytes = bytes.len(),
        "decoded store"
    );

    Ok(store)
}

/// Decode bytes and merge the result into `store`, overwriting on conflict
///
/// `store` is left untouched when decoding fails.
pub fn decode_into(store: &mut Store, bytes: &[u8]) -> Result<()> {
    let decoded = decode(bytes)?;
    store.extend(decoded);
    Ok(())
}

/// Resolve a data-region reference, requiring `data_start + offset + length <= len`
fn data_slice<'a>(
    bytes: &'a [u8],
    data_start: usize,
    name: &str,
    data_ref: DataRef,
) -> Result<&'a [u8]> {
    let start = data_start + data_ref.offset as usize;
    let end = data_start + data_ref.end();

    if end > bytes.len() {
        tracing::warn!(
            key = name,
            offset = data_ref.offset,
            length = data_ref.length,
            "data reference out of bounds"
        );
        return Err(BsmError::OutOfBounds {
            name: name.to_string(),
            offset: data_ref.offset,
            length: data_ref.length,
            available: bytes.len() - data_start,
        });
    }

    Ok(&bytes[start..end])
}

fn truncated(needed: usize, actual: usize) -> BsmError {
    tracing::warn!(needed, actual, "truncated input");
    BsmError::Truncated { needed, actual }
}
