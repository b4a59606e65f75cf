use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use onm_types::{concat_dirs, MetadataMode, ObjectKey, TextNode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::codec::TableCodec;
use crate::error::{MappingError, MappingResult};
use crate::traits::ObjectNodeMapping;

/// Objects a [`HashKeyedMapping`] can hold.
///
/// `Display` is the object's string form: it becomes the node text and is
/// hashed into the object's [`ObjectKey`]. The serde bounds are the
/// persistence contract.
pub trait MappableObject: fmt::Display + Clone + Serialize + DeserializeOwned {}

impl<T> MappableObject for T where T: fmt::Display + Clone + Serialize + DeserializeOwned {}

/// Mapping keyed by a hash of each object's string form.
///
/// Objects whose string forms are equal (or whose keys collide) share a
/// table slot; the most recent insertion wins.
pub struct HashKeyedMapping<T> {
    table: HashMap<ObjectKey, T>,
}

impl<T> HashKeyedMapping<T> {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self {
            table: HashMap::new(),
        }
    }

    /// Number of objects in the table.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns `true` if no object has been registered.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Returns `true` if an object is registered under `key`.
    pub fn contains_key(&self, key: &ObjectKey) -> bool {
        self.table.contains_key(key)
    }

    /// The object registered under `key`, if any.
    pub fn get(&self, key: &ObjectKey) -> Option<&T> {
        self.table.get(key)
    }

    /// All keys in ascending order.
    pub fn keys(&self) -> Vec<ObjectKey> {
        let mut keys: Vec<ObjectKey> = self.table.keys().copied().collect();
        keys.sort();
        keys
    }

    /// The underlying table.
    pub fn table(&self) -> &HashMap<ObjectKey, T> {
        &self.table
    }

    /// Replace the whole table without validating its entries.
    pub fn set_table(&mut self, table: HashMap<ObjectKey, T>) {
        self.table = table;
    }
}

impl<T: fmt::Display> HashKeyedMapping<T> {
    /// The key `object` is stored under.
    pub fn key_of(object: &T) -> ObjectKey {
        ObjectKey::of_display(object)
    }
}

impl<T> Default for HashKeyedMapping<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: MappableObject> ObjectNodeMapping for HashKeyedMapping<T> {
    type Object = T;

    fn from_objects(objects: Vec<T>) -> MappingResult<Self> {
        let mut mapping = Self::new();
        for obj in &objects {
            mapping.validate_object(obj)?;
        }
        mapping.table = objects
            .into_iter()
            .map(|obj| (Self::key_of(&obj), obj))
            .collect();
        debug!(objects = mapping.len(), "hash-keyed mapping seeded");
        Ok(mapping)
    }

    fn insert_object(&mut self, object: T) -> MappingResult<()> {
        let key = Self::key_of(&object);
        let replaced = self.table.insert(key, object).is_some();
        debug!(%key, replaced, "object inserted");
        Ok(())
    }

    fn to_node(&self, object: &T) -> TextNode {
        TextNode::new(object.to_string())
    }

    fn lookup_node(&self, node: &TextNode) -> MappingResult<T> {
        let key = ObjectKey::of(&node.get_content(MetadataMode::None));
        self.table
            .get(&key)
            .cloned()
            .ok_or(MappingError::NotFound { key })
    }

    fn persist(&self, persist_dir: &Path, filename: &str) -> MappingResult<PathBuf> {
        fs::create_dir_all(persist_dir)?;
        let path = concat_dirs(persist_dir, filename);
        TableCodec::write_table(&path, &self.table)?;
        debug!(path = %path.display(), objects = self.len(), "mapping persisted");
        Ok(path)
    }

    fn from_persist_dir(persist_dir: &Path, filename: &str) -> MappingResult<Self> {
        let path = concat_dirs(persist_dir, filename);
        let table = TableCodec::read_table(&path)?;
        let mut mapping = Self::new();
        mapping.set_table(table);
        debug!(path = %path.display(), objects = mapping.len(), "mapping loaded");
        Ok(mapping)
    }
}

impl<T> fmt::Debug for HashKeyedMapping<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashKeyedMapping")
            .field("object_count", &self.table.len())
            .finish()
    }
}
