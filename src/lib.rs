//! # BSM
//!
//! A compact binary key-value container:
//! - Named values of four kinds: Int, Float, String, Raw
//! - Fixed 21-byte key table entries followed by a data region
//! - Bounds-checked decoding that never returns a partial store
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     BsmFile / CLI                            │
//! │             (read all bytes / write all bytes)               │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                        Codec                                 │
//! │              encode(&Store) / decode(&[u8])                  │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!                       ▼
//!               ┌───────────────┐
//!               │     Store     │
//!               │  (BTreeMap)   │
//!               └───────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use bsm::{codec, Store};
//!
//! let mut store = Store::new();
//! store.set_int("test_int", 1234);
//! store.set_string("test_string", "Hello, world!");
//!
//! let bytes = codec::encode(&store).unwrap();
//! let decoded = codec::decode(&bytes).unwrap();
//!
//! assert_eq!(decoded.get_int("test_int"), 1234);
//! assert_eq!(decoded.get_string("test_string"), "Hello, world!");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod store;
pub mod codec;
pub mod file;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{BsmError, Result};
pub use config::Config;
pub use store::{Store, Value, ValueKind};
pub use codec::{decode, encode};
pub use file::{read_store, write_store, BsmFile};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of the bsm crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
