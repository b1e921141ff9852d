//! Error types for BSM
//!
//! Provides a unified error type for codec, file and configuration failures.

use thiserror::Error;

/// Result type alias using BsmError
pub type Result<T> = std::result::Result<T, BsmError>;

/// Unified error type for BSM operations
#[derive(Debug, Error)]
pub enum BsmError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Decode Errors
    // -------------------------------------------------------------------------
    #[error("Truncated input: expected at least {needed} bytes, got {actual}")]
    Truncated { needed: usize, actual: usize },

    #[error(
        "Key '{name}' references data out of bounds: offset {offset} + length {length} exceeds {available} available bytes"
    )]
    OutOfBounds {
        name: String,
        offset: u16,
        length: u16,
        available: usize,
    },

    #[error("Key '{name}' has unknown type tag: 0x{tag:02x}")]
    UnknownType { name: String, tag: u8 },

    // -------------------------------------------------------------------------
    // Encode Errors
    // -------------------------------------------------------------------------
    #[error("Too many keys: {0} (max 255)")]
    TooManyKeys(usize),

    #[error("Value for key '{name}' is too large: {size} bytes (max 65535)")]
    PayloadTooLarge { name: String, size: usize },

    #[error("Data region too large: {0} bytes (max 65535)")]
    DataRegionOverflow(usize),

    // -------------------------------------------------------------------------
    // Lookup Errors
    // -------------------------------------------------------------------------
    #[error("Key not found: {0}")]
    KeyNotFound(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}
