//! Key table entries
//!
//! One fixed 21-byte record per key. The trailing four bytes are either an
//! inline value or a reference into the data region, depending on the tag.

use bytes::{Buf, BufMut};

use crate::error::{BsmError, Result};
use crate::store::ValueKind;

use super::{ENTRY_SIZE, NAME_SIZE};

/// Location of a String/Raw payload inside the data region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataRef {
    pub offset: u16,
    pub length: u16,
}

impl DataRef {
    /// Exclusive end of the payload, relative to the data region start
    pub fn end(&self) -> usize {
        self.offset as usize + self.length as usize
    }
}

/// Tag-dependent contents of an entry's last four bytes
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EntryPayload {
    Int(i32),
    Float(f32),
    String(DataRef),
    Raw(DataRef),
}

impl EntryPayload {
    pub fn kind(&self) -> ValueKind {
        match self {
            EntryPayload::Int(_) => ValueKind::Int,
            EntryPayload::Float(_) => ValueKind::Float,
            EntryPayload::String(_) => ValueKind::String,
            EntryPayload::Raw(_) => ValueKind::Raw,
        }
    }

    fn write_to<B: BufMut>(&self, buf: &mut B) {
        match self {
            EntryPayload::Int(v) => buf.put_i32_le(*v),
            EntryPayload::Float(v) => buf.put_u32_le(v.to_bits()),
            EntryPayload::String(r) | EntryPayload::Raw(r) => {
                buf.put_u16_le(r.offset);
                buf.put_u16_le(r.length);
            }
        }
    }

    fn read_from<B: Buf>(kind: ValueKind, buf: &mut B) -> Self {
        match kind {
            ValueKind::Int => EntryPayload::Int(buf.get_i32_le()),
            ValueKind::Float => EntryPayload::Float(f32::from_bits(buf.get_u32_le())),
            ValueKind::String => EntryPayload::String(read_data_ref(buf)),
            ValueKind::Raw => EntryPayload::Raw(read_data_ref(buf)),
        }
    }
}

fn read_data_ref<B: Buf>(buf: &mut B) -> DataRef {
    let offset = buf.get_u16_le();
    let length = buf.get_u16_le();
    DataRef { offset, length }
}

fn logical_name(field: &[u8; NAME_SIZE]) -> String {
    let end = field.iter().position(|&b| b == 0).unwrap_or(NAME_SIZE);
    String::from_utf8_lossy(&field[..end]).into_owned()
}

/// A decoded or to-be-encoded key table record
#[derive(Debug, Clone, PartialEq)]
pub struct TableEntry {
    /// Name field exactly as stored, NUL-padded
    pub name: [u8; NAME_SIZE],
    pub payload: EntryPayload,
}

impl TableEntry {
    /// Build an entry, truncating or NUL-padding `name` to 16 bytes
    pub fn new(name: &str, payload: EntryPayload) -> Self {
        let bytes = name.as_bytes();
        let len = bytes.len().min(NAME_SIZE);
        if bytes.len() > NAME_SIZE {
            tracing::trace!(key = name, "key name truncated to {} bytes", NAME_SIZE);
        }

        let mut field = [0u8; NAME_SIZE];
        field[..len].copy_from_slice(&bytes[..len]);

        Self {
            name: field,
            payload,
        }
    }

    /// Logical name: everything before the first NUL, or all 16 bytes
    ///
    /// Invalid UTF-8 (e.g. a multi-byte character cut by truncation) is
    /// replaced with U+FFFD.
    pub fn name(&self) -> String {
        logical_name(&self.name)
    }

    pub fn kind(&self) -> ValueKind {
        self.payload.kind()
    }

    /// Append the 21-byte record to `buf`
    pub fn write_to<B: BufMut>(&self, buf: &mut B) {
        buf.put_slice(&self.name);
        buf.put_u8(self.kind() as u8);
        self.payload.write_to(buf);
    }

    /// Parse one record from the first 21 bytes of `bytes`
    pub fn read_from(mut bytes: &[u8]) -> Result<Self> {
        if bytes.len() < ENTRY_SIZE {
            return Err(BsmError::Truncated {
                needed: ENTRY_SIZE,
                actual: bytes.len(),
            });
        }

        let mut name = [0u8; NAME_SIZE];
        bytes.copy_to_slice(&mut name);

        let tag = bytes.get_u8();
        let kind = match ValueKind::try_from(tag) {
            Ok(kind) => kind,
            Err(tag) => {
                return Err(BsmError::UnknownType {
                    name: logical_name(&name),
                    tag,
                })
            }
        };

        let payload = EntryPayload::read_from(kind, &mut bytes);
        Ok(Self { name, payload })
    }
}
