use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Which metadata `TextNode::get_content` renders ahead of the text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MetadataMode {
    /// Every metadata entry.
    All,
    /// Metadata visible to embedding models.
    Embed,
    /// Metadata visible to language models.
    Llm,
    /// No metadata; the raw text only.
    None,
}

/// A text-bearing unit consumed by an indexing system.
///
/// Mapping strategies produce nodes with no metadata and always read nodes
/// back through [`MetadataMode::None`], so metadata attached downstream never
/// affects lookups.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextNode {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub metadata: BTreeMap<String, String>,
    #[serde(default)]
    pub excluded_embed_metadata_keys: Vec<String>,
    #[serde(default)]
    pub excluded_llm_metadata_keys: Vec<String>,
}

impl TextNode {
    /// Create a node holding `text` with a fresh id and no metadata.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7().to_string(),
            text: text.into(),
            metadata: BTreeMap::new(),
            excluded_embed_metadata_keys: Vec::new(),
            excluded_llm_metadata_keys: Vec::new(),
        }
    }

    /// Attach a metadata entry.
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Hide a metadata key from embedding content.
    pub fn exclude_from_embed(mut self, key: impl Into<String>) -> Self {
        self.excluded_embed_metadata_keys.push(key.into());
        self
    }

    /// Hide a metadata key from language-model content.
    pub fn exclude_from_llm(mut self, key: impl Into<String>) -> Self {
        self.excluded_llm_metadata_keys.push(key.into());
        self
    }

    /// Render the node content.
    ///
    /// With visible metadata the output is `key: value` lines sorted by key,
    /// a blank line, then the text. Without visible metadata it is the text.
    pub fn get_content(&self, mode: MetadataMode) -> String {
        let metadata = self.metadata_str(mode);
        if metadata.is_empty() {
            self.text.clone()
        } else {
            format!("{metadata}\n\n{}", self.text)
        }
    }

    /// Render the visible metadata as `key: value` lines.
    pub fn metadata_str(&self, mode: MetadataMode) -> String {
        let excluded: &[String] = match mode {
            MetadataMode::None => return String::new(),
            MetadataMode::All => &[],
            MetadataMode::Embed => &self.excluded_embed_metadata_keys,
            MetadataMode::Llm => &self.excluded_llm_metadata_keys,
        };
        self.metadata
            .iter()
            .filter(|(k, _)| !excluded.contains(k))
            .map(|(k, v)| format!("{k}: {v}"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
