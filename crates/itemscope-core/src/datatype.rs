//! Datatype recognition seam between the validator and datatype extractors.

use itemscope_canonical::{DatatypeTag, SemanticValue, ValidationError};

/// Tests text against datatypes and extracts their semantic values.
///
/// Both operations are pure. `extract` is only called after `is_valid`
/// returned true for the same tag and text.
pub trait DatatypeRecognizer {
    /// Returns true when `text` is a valid instance of `tag`.
    fn is_valid(&self, tag: &DatatypeTag, text: &str) -> bool;

    /// Extracts the semantic value of `text` as `tag`.
    fn extract(&self, tag: &DatatypeTag, text: &str) -> Result<SemanticValue, ValidationError>;
}

/// Recognizer for the built-in datatypes (`text`, `url`, `email`, `date`,
/// `datetime`, `number`, `integer`, `boolean`).
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinDatatypes;

impl DatatypeRecognizer for BuiltinDatatypes {
    fn is_valid(&self, tag: &DatatypeTag, text: &str) -> bool {
        SemanticValue::recognizes(tag, text)
    }

    fn extract(&self, tag: &DatatypeTag, text: &str) -> Result<SemanticValue, ValidationError> {
        SemanticValue::extract(tag, text)
    }
}
