//! Raw item scopes as handed over by the document parser.

use crate::errors::CoreError;
use itemscope_canonical::{GlobalId, PropertyName, TypeId};
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// A single raw property value: text, or a nested item scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RawValue {
    /// Text content of the property element.
    Text(String),
    /// Nested, not yet validated item scope.
    Scope(RawItemScope),
}

/// Unvalidated item scope produced by the upstream parser.
///
/// JSON shape:
///
/// ```json
/// {"type": "http://schema.org/Person", "id": "urn:x", "properties": {"name": ["Ann"]}}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RawItemScope {
    /// Declared item type.
    #[serde(rename = "type")]
    pub item_type: TypeId,
    /// Optional global identifier.
    pub id: Option<GlobalId>,
    /// Property name to ordered raw values.
    pub properties: BTreeMap<PropertyName, Vec<RawValue>>,
}

impl RawItemScope {
    /// Creates an empty scope of the given type.
    pub fn new(item_type: impl Into<TypeId>) -> Self {
        Self {
            item_type: item_type.into(),
            id: None,
            properties: BTreeMap::new(),
        }
    }

    /// Sets the global identifier.
    pub fn with_id(mut self, id: impl Into<GlobalId>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Appends a text value to a property.
    pub fn with_text(mut self, name: impl Into<PropertyName>, text: impl Into<String>) -> Self {
        self.properties
            .entry(name.into())
            .or_default()
            .push(RawValue::Text(text.into()));
        self
    }

    /// Appends a nested scope to a property.
    pub fn with_scope(mut self, name: impl Into<PropertyName>, scope: RawItemScope) -> Self {
        self.properties
            .entry(name.into())
            .or_default()
            .push(RawValue::Scope(scope));
        self
    }

    /// Parses a scope from its JSON form, failing fast on any shape violation.
    pub fn from_json(value: &Value) -> Result<Self, CoreError> {
        parse_scope(value, "root")
    }

    /// Parses either a single scope or an array of scopes.
    pub fn many_from_json(value: &Value) -> Result<Vec<Self>, CoreError> {
        match value {
            Value::Array(items) => items
                .iter()
                .enumerate()
                .map(|(idx, item)| parse_scope(item, &format!("[{}]", idx)))
                .collect(),
            other => Ok(vec![Self::from_json(other)?]),
        }
    }
}

fn malformed(path: &str, reason: impl Into<String>) -> CoreError {
    CoreError::MalformedInput {
        path: path.to_string(),
        reason: reason.into(),
    }
}

fn parse_scope(value: &Value, path: &str) -> Result<RawItemScope, CoreError> {
    let object = value
        .as_object()
        .ok_or_else(|| malformed(path, "expected an object"))?;

    let type_path = format!("{}.type", path);
    let item_type = match object.get("type") {
        Some(Value::String(s)) if !s.is_empty() => TypeId::new(s.clone()),
        Some(Value::String(_)) => return Err(malformed(&type_path, "type is empty")),
        Some(_) => return Err(malformed(&type_path, "type must be a string")),
        None => return Err(malformed(&type_path, "missing type")),
    };

    let id_path = format!("{}.id", path);
    let id = match object.get("id") {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) if !s.is_empty() => Some(GlobalId::new(s.clone())),
        Some(Value::String(_)) => return Err(malformed(&id_path, "id is empty")),
        Some(_) => return Err(malformed(&id_path, "id must be a string or null")),
    };

    let props_path = format!("{}.properties", path);
    let properties = match object.get("properties") {
        None | Some(Value::Null) => BTreeMap::new(),
        Some(Value::Object(map)) => parse_properties(map, &props_path)?,
        Some(_) => return Err(malformed(&props_path, "properties must be an object")),
    };

    Ok(RawItemScope {
        item_type,
        id,
        properties,
    })
}

fn parse_properties(
    map: &Map<String, Value>,
    path: &str,
) -> Result<BTreeMap<PropertyName, Vec<RawValue>>, CoreError> {
    let mut properties = BTreeMap::new();
    for (name, values) in map {
        let prop_path = format!("{}.{}", path, name);
        if name.is_empty() {
            return Err(malformed(path, "property name is empty"));
        }
        let values = values
            .as_array()
            .ok_or_else(|| malformed(&prop_path, "property values must be an array"))?;
        let mut parsed = Vec::with_capacity(values.len());
        for (idx, value) in values.iter().enumerate() {
            let value_path = format!("{}[{}]", prop_path, idx);
            parsed.push(match value {
                Value::String(s) => RawValue::Text(s.clone()),
                Value::Object(_) => RawValue::Scope(parse_scope(value, &value_path)?),
                _ => {
                    return Err(malformed(
                        &value_path,
                        "value must be a string or an item scope",
                    ))
                }
            });
        }
        properties.insert(PropertyName::new(name.clone()), parsed);
    }
    Ok(properties)
}
