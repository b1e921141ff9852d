//! Codec Module
//!
//! Translates a [`Store`](crate::Store) to and from the BSM byte layout.
//!
//! ## File Format
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ Header (1 byte)                                         │
//! │   KeyCount: u8                                          │
//! ├─────────────────────────────────────────────────────────┤
//! │ Key Table (21 bytes × KeyCount)                         │
//! │   [Name: 16, NUL-padded][Tag: u8][Payload: 4]           │
//! │   Int:        i32 (LE)                                  │
//! │   Float:      f32 bits (LE)                             │
//! │   String/Raw: DataOffset u16 (LE) | DataLength u16 (LE) │
//! ├─────────────────────────────────────────────────────────┤
//! │ Data Region (variable)                                  │
//! │   String/Raw payloads, concatenated in table order      │
//! │   (offsets are relative to the start of this region)    │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! Tags: 0 = Int, 1 = Float, 2 = String, 3 = Raw.

mod decoder;
mod encoder;
mod entry;

pub use decoder::{decode, decode_into};
pub use encoder::{encode, encoded_len};
pub use entry::{DataRef, EntryPayload, TableEntry};

// =============================================================================
// Shared Constants (used by encoder, decoder, entry)
// =============================================================================

/// Header size: KeyCount (1)
pub const HEADER_SIZE: usize = 1;

/// Encoded key name width, NUL-padded
pub const NAME_SIZE: usize = 16;

/// Table entry size: Name (16) + Tag (1) + Payload (4)
pub const ENTRY_SIZE: usize = NAME_SIZE + 1 + 4;

/// Smallest buffer the decoder accepts: header plus one table entry
pub const MIN_ENCODED_SIZE: usize = HEADER_SIZE + ENTRY_SIZE;

/// Largest key count representable by the header byte
pub const MAX_KEYS: usize = u8::MAX as usize;

/// Largest data region addressable by a u16 offset/length pair
pub const MAX_DATA_SIZE: usize = u16::MAX as usize;
