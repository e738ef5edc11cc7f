//! Vocabulary schemas: per-property cardinality and accepted types.

use itemscope_canonical::{DatatypeTag, PropertyName, VocabId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// How many values a property may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cardinality {
    /// Exactly one value.
    #[serde(rename = "one")]
    ExactlyOne,
    /// Any number of values.
    #[serde(rename = "many")]
    Many,
}

impl Cardinality {
    /// Returns true when `count` values satisfy this cardinality.
    pub fn matches(self, count: usize) -> bool {
        match self {
            Cardinality::ExactlyOne => count == 1,
            Cardinality::Many => true,
        }
    }
}

/// Type accepted for a property value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeTag {
    /// Accepts any text or item.
    Any,
    /// Text recognized by the named datatype.
    Datatype(DatatypeTag),
    /// An item whose resolved vocabulary is this identifier.
    Vocabulary(VocabId),
}

impl TypeTag {
    /// Shorthand for a datatype tag.
    pub fn datatype(tag: impl Into<DatatypeTag>) -> Self {
        TypeTag::Datatype(tag.into())
    }

    /// Shorthand for a vocabulary tag.
    pub fn vocabulary(id: impl Into<VocabId>) -> Self {
        TypeTag::Vocabulary(id.into())
    }
}

/// Cardinality plus accepted types of one property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertySpec {
    /// Allowed number of values.
    pub num: Cardinality,
    /// Accepted types, tested in declaration order.
    #[serde(deserialize_with = "dedup_types")]
    pub types: Vec<TypeTag>,
}

impl PropertySpec {
    /// Creates a spec; repeated tags are dropped, first occurrence wins.
    pub fn new(num: Cardinality, types: impl IntoIterator<Item = TypeTag>) -> Self {
        Self {
            num,
            types: dedup(types),
        }
    }

    /// `ExactlyOne` spec.
    pub fn one(types: impl IntoIterator<Item = TypeTag>) -> Self {
        Self::new(Cardinality::ExactlyOne, types)
    }

    /// `Many` spec.
    pub fn many(types: impl IntoIterator<Item = TypeTag>) -> Self {
        Self::new(Cardinality::Many, types)
    }

    /// Returns true when the spec lists [`TypeTag::Any`].
    pub fn accepts_any(&self) -> bool {
        self.types.contains(&TypeTag::Any)
    }
}

fn dedup(types: impl IntoIterator<Item = TypeTag>) -> Vec<TypeTag> {
    let mut out: Vec<TypeTag> = Vec::new();
    for tag in types {
        if !out.contains(&tag) {
            out.push(tag);
        }
    }
    out
}

fn dedup_types<'de, D>(deserializer: D) -> Result<Vec<TypeTag>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Vec::<TypeTag>::deserialize(deserializer).map(dedup)
}

/// Property rules of one vocabulary.
///
/// Lookup is two-tier: an explicit declaration for the property name, or
/// else the wildcard spec. The wildcard lives outside the property map, so
/// no property name can collide with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    /// Identity of the vocabulary this schema belongs to.
    pub vocabulary: VocabId,
    /// Explicitly declared properties.
    #[serde(default)]
    pub properties: BTreeMap<PropertyName, PropertySpec>,
    /// Fallback for undeclared properties; `None` drops them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wildcard: Option<PropertySpec>,
}

impl Schema {
    /// Creates a schema with no properties and no wildcard.
    pub fn new(vocabulary: impl Into<VocabId>) -> Self {
        Self {
            vocabulary: vocabulary.into(),
            properties: BTreeMap::new(),
            wildcard: None,
        }
    }

    /// Declares a property.
    pub fn with_property(mut self, name: impl Into<PropertyName>, spec: PropertySpec) -> Self {
        self.properties.insert(name.into(), spec);
        self
    }

    /// Sets the wildcard spec.
    pub fn with_wildcard(mut self, spec: PropertySpec) -> Self {
        self.wildcard = Some(spec);
        self
    }

    /// Spec that governs `name`: the explicit declaration, else the wildcard.
    pub fn spec_for(&self, name: &PropertyName) -> Option<&PropertySpec> {
        self.properties.get(name).or(self.wildcard.as_ref())
    }

    /// Spec under which `count` values of `name` are accepted, if any.
    pub fn accepting_spec(&self, name: &PropertyName, count: usize) -> Option<&PropertySpec> {
        self.spec_for(name).filter(|spec| spec.num.matches(count))
    }
}
