//! Reversible mappings between application objects and text nodes.
//!
//! An indexing system only understands text. This crate turns objects into
//! [`TextNode`](onm_types::TextNode)s for indexing and recovers the original
//! object when a node comes back (for example as a search hit).
//!
//! # Strategies
//!
//! All strategies implement the [`ObjectNodeMapping`] trait:
//!
//! - [`HashKeyedMapping`] -- table keyed by a BLAKE3-derived hash of each
//!   object's string form, persistable to a single bincode file
//!
//! # Design Rules
//!
//! 1. An object's string form is its identity: equal forms share one slot and
//!    the latest insertion wins.
//! 2. Node metadata never takes part in a lookup.
//! 3. Validation runs on every object added and every object recovered.
//! 4. Persistence writes a full snapshot; loading trusts the snapshot and
//!    skips validation.
//! 5. All errors are propagated, never silently ignored.

pub mod codec;
pub mod config;
pub mod error;
pub mod hash_keyed;
pub mod traits;

// Re-export primary types at crate root for ergonomic imports.
pub use codec::TableCodec;
pub use config::PersistConfig;
pub use error::{MappingError, MappingResult};
pub use hash_keyed::{HashKeyedMapping, MappableObject};
pub use traits::ObjectNodeMapping;
