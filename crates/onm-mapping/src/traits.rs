use std::path::{Path, PathBuf};

use onm_types::TextNode;

use crate::config::PersistConfig;
use crate::error::{MappingError, MappingResult};

/// Reversible mapping between application objects and text nodes.
///
/// All strategies must satisfy these invariants:
/// - `to_node` is deterministic: an unchanged object always yields the same
///   node content.
/// - `from_node(to_node(o))` returns `o` for every registered `o`, barring a
///   key collision with another registered object.
/// - Every object entering the table through `add_object` and every object
///   leaving it through `from_node` passes `validate_object`.
/// - Mapping instances are single-owner; mutation takes `&mut self` and no
///   internal locking is done.
pub trait ObjectNodeMapping {
    /// The application object type.
    type Object;

    /// Build a mapping seeded with `objects`.
    ///
    /// Strategies that cannot be bulk-initialised may return an empty mapping
    /// and rely on `add_object`.
    fn from_objects(objects: Vec<Self::Object>) -> MappingResult<Self>
    where
        Self: Sized;

    /// Reject malformed objects. The default accepts everything.
    fn validate_object(&self, _object: &Self::Object) -> MappingResult<()> {
        Ok(())
    }

    /// Validate `object`, then insert it.
    fn add_object(&mut self, object: Self::Object) -> MappingResult<()> {
        self.validate_object(&object)?;
        self.insert_object(object)
    }

    /// Strategy-specific table mutation. Callers should use `add_object`.
    fn insert_object(&mut self, object: Self::Object) -> MappingResult<()>;

    /// Produce the text node for one object.
    fn to_node(&self, object: &Self::Object) -> TextNode;

    /// Produce one node per object, in input order.
    fn to_nodes(&self, objects: &[Self::Object]) -> Vec<TextNode> {
        objects.iter().map(|obj| self.to_node(obj)).collect()
    }

    /// Recover the object behind `node`, validating it before returning.
    ///
    /// Returns `MappingError::NotFound` if no registered object matches.
    fn from_node(&self, node: &TextNode) -> MappingResult<Self::Object> {
        let object = self.lookup_node(node)?;
        self.validate_object(&object)?;
        Ok(object)
    }

    /// Recover the object whose node text is `text`.
    fn from_text(&self, text: &str) -> MappingResult<Self::Object> {
        self.from_node(&TextNode::new(text))
    }

    /// Strategy-specific reverse lookup. Callers should use `from_node`.
    fn lookup_node(&self, node: &TextNode) -> MappingResult<Self::Object>;

    /// Write the mapping state to `persist_dir/filename` and return the path.
    ///
    /// The default fails with `MappingError::Unsupported`.
    fn persist(&self, _persist_dir: &Path, _filename: &str) -> MappingResult<PathBuf> {
        Err(MappingError::Unsupported("persist"))
    }

    /// Rebuild a mapping from a file written by `persist`.
    ///
    /// The default fails with `MappingError::Unsupported`.
    fn from_persist_dir(_persist_dir: &Path, _filename: &str) -> MappingResult<Self>
    where
        Self: Sized,
    {
        Err(MappingError::Unsupported("from_persist_dir"))
    }

    /// `persist` using the configured directory and filename.
    fn persist_with(&self, config: &PersistConfig) -> MappingResult<PathBuf> {
        self.persist(&config.persist_dir, &config.mapping_filename)
    }

    /// `from_persist_dir` using the configured directory and filename.
    fn from_persist_config(config: &PersistConfig) -> MappingResult<Self>
    where
        Self: Sized,
    {
        Self::from_persist_dir(&config.persist_dir, &config.mapping_filename)
    }
}
