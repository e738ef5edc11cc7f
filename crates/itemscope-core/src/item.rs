//! Validated, immutable items.

use crate::errors::CoreError;
use itemscope_canonical::{Canonicalizer, GlobalId, PropertyName, TypeId, VocabId};
use serde::Serialize;
use serde_json::{json, Map, Value};
use std::collections::BTreeMap;
use std::fmt;

/// A property value that passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ValidatedValue {
    /// Text, either as written or in its datatype's canonical form.
    Text(String),
    /// Nested validated item, owned by the enclosing item.
    Item(Item),
}

impl ValidatedValue {
    /// Returns the text, if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ValidatedValue::Text(s) => Some(s),
            ValidatedValue::Item(_) => None,
        }
    }

    /// Returns the nested item, if this is an item value.
    pub fn as_item(&self) -> Option<&Item> {
        match self {
            ValidatedValue::Item(item) => Some(item),
            ValidatedValue::Text(_) => None,
        }
    }

    fn to_plain(&self) -> Value {
        match self {
            ValidatedValue::Text(s) => Value::String(s.clone()),
            ValidatedValue::Item(item) => item.to_plain(),
        }
    }
}

/// Item validated against its vocabulary.
///
/// Items are only built by the validator and never change afterwards. No
/// property in [`Item::properties`] has an empty value list. Equality is
/// structural: vocabulary, type, id, and properties, with each property's
/// values compared in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    vocabulary: VocabId,
    #[serde(rename = "type")]
    item_type: TypeId,
    id: Option<GlobalId>,
    properties: BTreeMap<PropertyName, Vec<ValidatedValue>>,
}

impl Item {
    pub(crate) fn new(
        vocabulary: VocabId,
        item_type: TypeId,
        id: Option<GlobalId>,
        properties: BTreeMap<PropertyName, Vec<ValidatedValue>>,
    ) -> Self {
        debug_assert!(properties.values().all(|values| !values.is_empty()));
        Self {
            vocabulary,
            item_type,
            id,
            properties,
        }
    }

    /// Vocabulary the item type resolved to.
    pub fn vocabulary(&self) -> &VocabId {
        &self.vocabulary
    }

    /// Item type as declared in the document.
    pub fn item_type(&self) -> &TypeId {
        &self.item_type
    }

    /// Global identifier, if any.
    pub fn id(&self) -> Option<&GlobalId> {
        self.id.as_ref()
    }

    /// Validated properties.
    pub fn properties(&self) -> &BTreeMap<PropertyName, Vec<ValidatedValue>> {
        &self.properties
    }

    /// Values of one property.
    pub fn property(&self, name: &str) -> Option<&[ValidatedValue]> {
        self.properties
            .get(&PropertyName::new(name))
            .map(Vec::as_slice)
    }

    /// Plain nested JSON form: `{vocabulary, type, id, properties}` with
    /// nested items expanded recursively.
    pub fn to_plain(&self) -> Value {
        let properties: Map<String, Value> = self
            .properties
            .iter()
            .map(|(name, values)| {
                let values = values.iter().map(ValidatedValue::to_plain).collect();
                (name.to_string(), Value::Array(values))
            })
            .collect();

        json!({
            "vocabulary": self.vocabulary.as_str(),
            "type": self.item_type.as_str(),
            "id": self.id.as_ref().map(GlobalId::as_str),
            "properties": properties,
        })
    }

    /// Compact JSON rendering of [`Item::to_plain`]; key order is deterministic.
    pub fn to_display_string(&self) -> String {
        self.to_plain().to_string()
    }

    /// RFC 8785 canonical JSON of [`Item::to_plain`].
    pub fn to_canonical_json(&self) -> Result<String, CoreError> {
        Ok(Canonicalizer::new().canonicalize(&self.to_plain())?)
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_display_string())
    }
}
