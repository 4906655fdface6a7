use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::registry::RegistryError;
use crate::types::TransformerDefinition;

/// Ordered catalog of known transformers.
///
/// Order is the display order of pickers and is preserved by
/// [`search`](Self::search).
///
/// # Example
///
/// ```
/// use liquidvar::TransformerRegistry;
///
/// let registry = TransformerRegistry::builtin();
/// assert_eq!(registry.get("upcase").map(|d| d.label.as_str()), Some("Uppercase"));
/// assert!(registry.get("nope").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransformerRegistry {
    definitions: Vec<TransformerDefinition>,
}

impl TransformerRegistry {
    /// Build a registry from definitions.
    ///
    /// Returns an error if two definitions share an id.
    pub fn new(definitions: Vec<TransformerDefinition>) -> Result<Self, RegistryError> {
        let mut seen = HashSet::new();
        for def in &definitions {
            if !seen.insert(def.id.as_str()) {
                return Err(RegistryError::DuplicateId { id: def.id.clone() });
            }
        }
        Ok(Self { definitions })
    }

    /// The built-in transformer catalog.
    pub fn builtin() -> Self {
        Self {
            definitions: liquidvar_catalog::TRANSFORMERS
                .iter()
                .map(TransformerDefinition::from)
                .collect(),
        }
    }

    /// Parse a registry from a JSON array of definitions.
    pub fn from_json_str(json: &str) -> Result<Self, RegistryError> {
        let definitions: Vec<TransformerDefinition> = serde_json::from_str(json)?;
        Self::new(definitions)
    }

    /// Load a registry from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RegistryError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| RegistryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&content)
    }

    /// Get a definition by id.
    pub fn get(&self, id: &str) -> Option<&TransformerDefinition> {
        self.definitions.iter().find(|def| def.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// All definitions in registry order.
    pub fn definitions(&self) -> &[TransformerDefinition] {
        &self.definitions
    }

    /// All ids in registry order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.definitions.iter().map(|def| def.id.as_str())
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Definitions whose id, label or description contains `query`,
    /// ignoring case. An empty query matches everything.
    pub fn search(&self, query: &str) -> Vec<&TransformerDefinition> {
        let needle = query.trim().to_lowercase();
        self.definitions
            .iter()
            .filter(|def| {
                needle.is_empty()
                    || def.id.to_lowercase().contains(&needle)
                    || def.label.to_lowercase().contains(&needle)
                    || def.description.to_lowercase().contains(&needle)
            })
            .collect()
    }
}
