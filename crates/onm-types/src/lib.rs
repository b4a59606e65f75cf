//! Foundation types for the object/node mapping (ONM) workspace.
//!
//! This crate provides the identity, text, and path types shared by every
//! mapping strategy. Every other ONM crate depends on `onm-types`.
//!
//! # Key Types
//!
//! - [`ObjectKey`] — 64-bit identity key derived from an object's string form
//! - [`TextNode`] — text-bearing unit consumed by indexing systems
//! - [`MetadataMode`] — controls which metadata `TextNode::get_content` renders
//! - [`ObjectValue`] — closed, serializable value set for heterogeneous objects
//! - [`concat_dirs`] — directory/filename joining rule for persisted files

pub mod error;
pub mod key;
pub mod node;
pub mod storage;
pub mod value;

pub use error::TypeError;
pub use key::ObjectKey;
pub use node::{MetadataMode, TextNode};
pub use storage::{concat_dirs, DEFAULT_MAPPING_FILENAME, DEFAULT_PERSIST_DIR};
pub use value::ObjectValue;
