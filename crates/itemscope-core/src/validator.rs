//! Schema-driven validation of raw item scopes.

use crate::datatype::{BuiltinDatatypes, DatatypeRecognizer};
use crate::errors::CoreError;
use crate::item::{Item, ValidatedValue};
use crate::schema::TypeTag;
use crate::scope::{RawItemScope, RawValue};
use crate::vocabulary::VocabularyResolver;
use itemscope_canonical::DatatypeTag;
use std::collections::BTreeMap;

/// Default limit on item scope nesting.
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// What to store for text accepted by a datatype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Coercion {
    /// Keep the text as written; extraction only confirms the datatype.
    #[default]
    Preserve,
    /// Replace the text with the datatype's canonical form.
    Canonical,
}

/// Options for item validation.
#[derive(Debug, Clone)]
pub struct ValidateOptions {
    /// Maximum nesting depth; the top-level scope has depth 1 (default: 32).
    pub max_depth: usize,
    /// Text coercion mode (default: [`Coercion::Preserve`]).
    pub coercion: Coercion,
}

impl Default for ValidateOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            coercion: Coercion::Preserve,
        }
    }
}

/// Validates raw item scopes against the vocabularies of a resolver.
///
/// Properties the schema does not accept and values of the wrong type are
/// dropped silently. The only failures are excessive nesting and malformed
/// input, both of which abort the whole call.
///
/// # Example
///
/// ```rust
/// use itemscope_core::{PropertySpec, RawItemScope, Schema, TypeTag, Validator, VocabularyResolver};
/// use itemscope_canonical::TypeId;
///
/// struct One(Schema);
///
/// impl VocabularyResolver for One {
///     fn find(&self, _item_type: &TypeId) -> &Schema {
///         &self.0
///     }
/// }
///
/// let resolver = One(
///     Schema::new("Person").with_property("name", PropertySpec::one([TypeTag::datatype("text")])),
/// );
/// let raw = RawItemScope::new("Person").with_text("name", "Ann").with_text("age", "3");
///
/// let item = Validator::new(&resolver).validate(&raw)?;
/// assert_eq!(item.property("name").unwrap()[0].as_text(), Some("Ann"));
/// assert!(item.property("age").is_none());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct Validator<'a, R, D = BuiltinDatatypes> {
    resolver: &'a R,
    datatypes: D,
    options: ValidateOptions,
}

impl<'a, R: VocabularyResolver> Validator<'a, R, BuiltinDatatypes> {
    /// Creates a validator using the built-in datatypes and default options.
    pub fn new(resolver: &'a R) -> Self {
        Self {
            resolver,
            datatypes: BuiltinDatatypes,
            options: ValidateOptions::default(),
        }
    }
}

impl<'a, R: VocabularyResolver, D: DatatypeRecognizer> Validator<'a, R, D> {
    /// Replaces the datatype recognizer.
    pub fn with_datatypes<E: DatatypeRecognizer>(self, datatypes: E) -> Validator<'a, R, E> {
        Validator {
            resolver: self.resolver,
            datatypes,
            options: self.options,
        }
    }

    /// Replaces the validation options.
    pub fn with_options(mut self, options: ValidateOptions) -> Self {
        self.options = options;
        self
    }

    /// Current options.
    pub fn options(&self) -> &ValidateOptions {
        &self.options
    }

    /// Validates one top-level item scope.
    pub fn validate(&self, raw: &RawItemScope) -> Result<Item, CoreError> {
        self.validate_scope(raw, 1)
    }

    /// Validates independent top-level scopes, stopping at the first failure.
    pub fn validate_all(&self, raws: &[RawItemScope]) -> Result<Vec<Item>, CoreError> {
        raws.iter().map(|raw| self.validate(raw)).collect()
    }

    fn validate_scope(&self, raw: &RawItemScope, depth: usize) -> Result<Item, CoreError> {
        if depth > self.options.max_depth {
            return Err(CoreError::RecursionLimitExceeded {
                depth,
                max_depth: self.options.max_depth,
            });
        }
        if raw.item_type.is_empty() {
            return Err(CoreError::MalformedInput {
                path: format!("depth {}", depth),
                reason: "item type is empty".to_string(),
            });
        }

        let schema = self.resolver.find(&raw.item_type);
        let mut properties = BTreeMap::new();

        for (name, raw_values) in &raw.properties {
            if name.is_empty() {
                return Err(CoreError::MalformedInput {
                    path: format!("{}", raw.item_type),
                    reason: "property name is empty".to_string(),
                });
            }
            let spec = match schema.accepting_spec(name, raw_values.len()) {
                Some(spec) => spec,
                None => {
                    tracing::debug!(
                        vocabulary = %schema.vocabulary,
                        property = %name,
                        count = raw_values.len(),
                        "property not accepted by schema"
                    );
                    continue;
                }
            };

            let values = self.validate_values(&spec.types, raw_values, depth)?;
            if values.is_empty() {
                tracing::debug!(property = %name, "no value survived type checks");
                continue;
            }
            properties.insert(name.clone(), values);
        }

        Ok(Item::new(
            schema.vocabulary.clone(),
            raw.item_type.clone(),
            raw.id.clone(),
            properties,
        ))
    }

    fn validate_values(
        &self,
        types: &[TypeTag],
        raw_values: &[RawValue],
        depth: usize,
    ) -> Result<Vec<ValidatedValue>, CoreError> {
        let mut values = Vec::with_capacity(raw_values.len());
        for raw in raw_values {
            let candidate = match raw {
                RawValue::Scope(scope) => ValidatedValue::Item(self.validate_scope(scope, depth + 1)?),
                RawValue::Text(text) => ValidatedValue::Text(text.clone()),
            };
            if let Some(value) = self.check_type(types, candidate) {
                values.push(value);
            }
        }
        Ok(values)
    }

    fn check_type(&self, types: &[TypeTag], candidate: ValidatedValue) -> Option<ValidatedValue> {
        match candidate {
            ValidatedValue::Item(item) => {
                let accepted = types.iter().any(|tag| match tag {
                    TypeTag::Any => true,
                    TypeTag::Vocabulary(id) => id == item.vocabulary(),
                    TypeTag::Datatype(_) => false,
                });
                if accepted {
                    Some(ValidatedValue::Item(item))
                } else {
                    tracing::debug!(vocabulary = %item.vocabulary(), "nested item rejected");
                    None
                }
            }
            ValidatedValue::Text(text) => {
                let resolved = types.iter().find_map(|tag| match tag {
                    TypeTag::Datatype(datatype) if self.datatypes.is_valid(datatype, &text) => {
                        Some(datatype)
                    }
                    _ => None,
                });
                match resolved {
                    Some(datatype) => self.coerce(datatype, text),
                    None if types.contains(&TypeTag::Any) => Some(ValidatedValue::Text(text)),
                    None => {
                        tracing::debug!(text = %text, "text value rejected");
                        None
                    }
                }
            }
        }
    }

    fn coerce(&self, datatype: &DatatypeTag, text: String) -> Option<ValidatedValue> {
        match self.datatypes.extract(datatype, &text) {
            Ok(value) => {
                tracing::trace!(datatype = %datatype, ?value, "extracted semantic value");
                match self.options.coercion {
                    Coercion::Preserve => Some(ValidatedValue::Text(text)),
                    Coercion::Canonical => Some(ValidatedValue::Text(value.canonical_form())),
                }
            }
            Err(err) => {
                tracing::warn!(datatype = %datatype, error = %err, "recognized text failed extraction");
                None
            }
        }
    }
}
