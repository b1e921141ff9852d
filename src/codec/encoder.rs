//! Encoder
//!
//! Serializes a Store into header + key table + data region.

use bytes::{BufMut, Bytes, BytesMut};

use crate::error::{BsmError, Result};
use crate::store::{Store, Value};

use super::{DataRef, EntryPayload, TableEntry, ENTRY_SIZE, HEADER_SIZE, MAX_DATA_SIZE, MAX_KEYS};

/// Exact size of `encode(store)` output
pub fn encoded_len(store: &Store) -> usize {
    HEADER_SIZE + store.len() * ENTRY_SIZE + store.data_size()
}

/// Encode a store to bytes
///
/// Entries are written in the store's iteration order; String and Raw
/// payloads are appended to the data region in the same order. Fails before
/// producing any output if the store cannot be represented.
///
/// # Errors
/// - `TooManyKeys` when the store holds more than 255 keys
/// - `PayloadTooLarge` when a single String/Raw value exceeds 65535 bytes
/// - `DataRegionOverflow` when all String/Raw values together exceed 65535 bytes
///
/// The last two limits are enforced here rather than letting the u16
/// offset/length fields wrap into a file that cannot be decoded.
pub fn encode(store: &Store) -> Result<Bytes> {
    let key_count = store.len();
    if key_count > MAX_KEYS {
        tracing::warn!(key_count, "refusing to encode store with too many keys");
        return Err(BsmError::TooManyKeys(key_count));
    }

    let data_size = store.data_size();
    let mut table = Vec::with_capacity(key_count);
    let mut data = BytesMut::with_capacity(data_size.min(MAX_DATA_SIZE));

    for (name, value) in store {
        let payload = match value {
            Value::Int(v) => EntryPayload::Int(*v),
            Value::Float(v) => EntryPayload::Float(*v),
            Value::String(s) => {
                EntryPayload::String(append_data(&mut data, name, s.as_bytes(), data_size)?)
            }
            Value::Raw(r) => EntryPayload::Raw(append_data(&mut data, name, r, data_size)?),
            Value::Null => continue,
        };
        tracing::trace!(key = name, kind = %payload.kind(), "encoding entry");
        table.push(TableEntry::new(name, payload));
    }

    let mut out = BytesMut::with_capacity(HEADER_SIZE + table.len() * ENTRY_SIZE + data.len());
    out.put_u8(table.len() as u8);
    for entry in &table {
        entry.write_to(&mut out);
    }
    out.put(data);

    tracing::debug!(
        keys = table.len(),
        data_bytes = data_size,
        total_bytes = out.len(),
        "encoded store"
    );

    Ok(out.freeze())
}

/// Append a payload to the data region and return its reference
fn append_data(data: &mut BytesMut, name: &str, payload: &[u8], total: usize) -> Result<DataRef> {
    if payload.len() > MAX_DATA_SIZE {
        return Err(BsmError::PayloadTooLarge {
            name: name.to_string(),
            size: payload.len(),
        });
    }
    if data.len() + payload.len() > MAX_DATA_SIZE {
        return Err(BsmError::DataRegionOverflow(total));
    }

    let data_ref = DataRef {
        offset: data.len() as u16,
        length: payload.len() as u16,
    };
    data.put_slice(payload);

    Ok(data_ref)
}
