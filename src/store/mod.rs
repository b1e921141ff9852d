//! Store Module
//!
//! In-memory mapping from key name to typed value.
//!
//! ## Responsibilities
//! - Typed setters that insert or overwrite (last write wins)
//! - Lookups that degrade to `Null` or the kind's zero value
//! - Deterministic iteration for the encoder
//!
//! ## Data Structure Choice
//! Using a BTreeMap keyed by name:
//! - Lexical iteration order, so the same store always encodes to the same bytes
//! - Names are not validated here; the encoder truncates them to 16 bytes

mod table;
mod value;

pub use table::{Iter, Store};
pub use value::{Value, ValueKind};
