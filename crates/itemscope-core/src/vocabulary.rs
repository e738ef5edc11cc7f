//! Vocabulary resolution: mapping an item type to the schema that governs it.

use crate::schema::{PropertySpec, Schema, TypeTag};
use itemscope_canonical::{PropertyName, TypeId, VocabId};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

/// Vocabulary id of the schema used for unrecognized types.
pub const GENERIC_VOCABULARY: &str = "generic";

/// Resolves item types to schemas.
///
/// Resolution is total: implementations return a usable default schema for
/// types they do not know instead of failing.
pub trait VocabularyResolver {
    /// Returns the schema for `item_type`.
    fn find(&self, item_type: &TypeId) -> &Schema;
}

/// Errors raised while building a [`VocabularyRegistry`].
#[derive(Error, Debug)]
pub enum VocabularyError {
    /// A definition includes a vocabulary that was not registered before it.
    #[error("vocabulary '{vocabulary}' includes unknown vocabulary '{include}'")]
    UnknownInclude {
        /// Including vocabulary.
        vocabulary: VocabId,
        /// Missing included vocabulary.
        include: VocabId,
    },
    /// The same vocabulary id was registered twice.
    #[error("vocabulary '{0}' is already registered")]
    Duplicate(VocabId),
    /// The `itemtype` pattern did not compile.
    #[error("invalid itemtype pattern for '{vocabulary}': {source}")]
    InvalidPattern {
        /// Vocabulary owning the pattern.
        vocabulary: VocabId,
        /// Regex compilation error.
        #[source]
        source: regex::Error,
    },
    /// The vocabulary document could not be parsed.
    #[error("malformed vocabulary document: {0}")]
    Malformed(#[from] serde_json::Error),
    /// The vocabulary document could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Declarative form of a vocabulary, as loaded from JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyDefinition {
    /// Vocabulary identity.
    pub id: VocabId,
    /// Pattern matched against the whole item type; when absent the type
    /// must equal `id`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub itemtype: Option<String>,
    /// Previously registered vocabularies whose properties are inherited.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub include: Vec<VocabId>,
    /// Explicitly declared properties.
    #[serde(default)]
    pub properties: BTreeMap<PropertyName, PropertySpec>,
    /// Fallback spec for undeclared properties.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wildcard: Option<PropertySpec>,
}

#[derive(Debug, Deserialize)]
struct VocabularyDocument {
    vocabularies: Vec<VocabularyDefinition>,
}

#[derive(Debug)]
struct Entry {
    pattern: Option<String>,
    itemtype: Option<Regex>,
    schema: Schema,
}

impl Entry {
    fn matches(&self, item_type: &TypeId) -> bool {
        match &self.itemtype {
            Some(re) => re.is_match(item_type.as_str()),
            None => self.schema.vocabulary.as_str() == item_type.as_str(),
        }
    }
}

/// Ordered set of vocabularies with a default for unknown types.
///
/// The first registered vocabulary that matches a type wins.
#[derive(Debug)]
pub struct VocabularyRegistry {
    entries: Vec<Entry>,
    default: Schema,
}

impl Default for VocabularyRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl VocabularyRegistry {
    /// Creates an empty registry whose default schema accepts any property
    /// with any number of values of any type.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            default: generic_schema(),
        }
    }

    /// Replaces the schema returned for unknown types.
    pub fn with_default(mut self, schema: Schema) -> Self {
        self.default = schema;
        self
    }

    /// Loads a registry from a `{"vocabularies": [...]}` JSON document.
    pub fn from_json(value: serde_json::Value) -> Result<Self, VocabularyError> {
        let document: VocabularyDocument = serde_json::from_value(value)?;
        let mut registry = Self::new();
        for definition in document.vocabularies {
            registry.register(definition)?;
        }
        Ok(registry)
    }

    /// Loads a registry from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, VocabularyError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(serde_json::from_str(&text)?)
    }

    /// Registers a vocabulary, flattening its includes into its schema.
    pub fn register(&mut self, definition: VocabularyDefinition) -> Result<(), VocabularyError> {
        let VocabularyDefinition {
            id,
            itemtype,
            include,
            properties,
            wildcard,
        } = definition;

        if self.get(&id).is_some() {
            return Err(VocabularyError::Duplicate(id));
        }

        let pattern = itemtype;
        let itemtype = pattern
            .as_deref()
            .map(|pattern| Regex::new(&format!("^(?:{})$", pattern)))
            .transpose()
            .map_err(|source| VocabularyError::InvalidPattern {
                vocabulary: id.clone(),
                source,
            })?;

        let mut schema = Schema::new(id.clone());
        for included in &include {
            let parent = self
                .get(included)
                .ok_or_else(|| VocabularyError::UnknownInclude {
                    vocabulary: id.clone(),
                    include: included.clone(),
                })?;
            for (name, spec) in &parent.properties {
                schema.properties.insert(name.clone(), spec.clone());
            }
            if schema.wildcard.is_none() {
                schema.wildcard = parent.wildcard.clone();
            }
        }
        schema.properties.extend(properties);
        if wildcard.is_some() {
            schema.wildcard = wildcard;
        }

        tracing::debug!(vocabulary = %id, "registered vocabulary");
        self.entries.push(Entry {
            pattern,
            itemtype,
            schema,
        });
        Ok(())
    }

    /// Returns the schema registered under `id`.
    pub fn get(&self, id: &VocabId) -> Option<&Schema> {
        self.entries
            .iter()
            .map(|entry| &entry.schema)
            .find(|schema| &schema.vocabulary == id)
    }

    /// Schema used for unknown types.
    pub fn default_schema(&self) -> &Schema {
        &self.default
    }

    /// Registered schemas with their itemtype patterns, in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&Schema, Option<&str>)> {
        self.entries
            .iter()
            .map(|entry| (&entry.schema, entry.pattern.as_deref()))
    }

    /// Number of registered vocabularies.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when no vocabulary is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl VocabularyResolver for VocabularyRegistry {
    fn find(&self, item_type: &TypeId) -> &Schema {
        match self.entries.iter().find(|entry| entry.matches(item_type)) {
            Some(entry) => &entry.schema,
            None => {
                tracing::debug!(item_type = %item_type, "no vocabulary matched, using default");
                &self.default
            }
        }
    }
}

fn generic_schema() -> Schema {
    Schema::new(GENERIC_VOCABULARY).with_wildcard(PropertySpec::many([TypeTag::Any]))
}
