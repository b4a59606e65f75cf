//! On-disk format of a persisted mapping table.
//!
//! A table file is the bincode encoding of the whole `ObjectKey -> object`
//! map, with no framing or header. It is a Rust-native format: readers must
//! decode it with the same object type that wrote it.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use onm_types::ObjectKey;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::error::{MappingError, MappingResult};

/// Codec for persisted mapping tables.
pub struct TableCodec;

impl TableCodec {
    /// Encode a table to bytes. `path` is only used for error context.
    pub fn encode<T: Serialize>(
        table: &HashMap<ObjectKey, T>,
        path: &Path,
    ) -> MappingResult<Vec<u8>> {
        bincode::serialize(table).map_err(|e| MappingError::Encode {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Decode a table from bytes. `path` is only used for error context.
    pub fn decode<T: DeserializeOwned>(
        data: &[u8],
        path: &Path,
    ) -> MappingResult<HashMap<ObjectKey, T>> {
        bincode::deserialize(data).map_err(|e| MappingError::Decode {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Encode `table` and write it to `path` as a full snapshot.
    ///
    /// The table is encoded before the file is touched, so an encoding
    /// failure leaves any existing file unchanged.
    pub fn write_table<T: Serialize>(
        path: &Path,
        table: &HashMap<ObjectKey, T>,
    ) -> MappingResult<()> {
        let bytes = Self::encode(table, path)?;
        fs::write(path, &bytes)?;
        debug!(path = %path.display(), entries = table.len(), bytes = bytes.len(), "mapping table written");
        Ok(())
    }

    /// Read and decode the table stored at `path`.
    pub fn read_table<T: DeserializeOwned>(path: &Path) -> MappingResult<HashMap<ObjectKey, T>> {
        let bytes = fs::read(path).map_err(|e| MappingError::Decode {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let table: HashMap<ObjectKey, T> = Self::decode(&bytes, path)?;
        debug!(path = %path.display(), entries = table.len(), "mapping table read");
        Ok(table)
    }
}
