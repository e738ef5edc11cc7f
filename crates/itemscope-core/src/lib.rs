//! Validation and normalization of parsed microdata item scopes.
//!
//! This crate provides:
//! - Raw item scopes as produced by a document parser
//! - Vocabulary schemas with per-property cardinality and accepted types
//! - A vocabulary registry that resolves item types to schemas
//! - The validator that turns raw scopes into immutable [`Item`]s
//!
//! Core invariants:
//! - Validation is pure and synchronous; input is never mutated
//! - Unknown types resolve to a default schema instead of failing
//! - Rejected properties and values are omitted, never reported as errors
//! - A validated item never holds a property with no values
//! - Nested scopes are validated into items before their type is checked
//!
#![deny(missing_docs)]

/// Datatype recognizer seam.
pub mod datatype;
/// Error types for core operations.
pub mod errors;
/// Validated items and their plain/canonical forms.
pub mod item;
/// Vocabulary schemas.
pub mod schema;
/// Raw item scopes.
pub mod scope;
/// Item validation.
pub mod validator;
/// Vocabulary resolution and the registry.
pub mod vocabulary;

pub use datatype::{BuiltinDatatypes, DatatypeRecognizer};
pub use errors::CoreError;
pub use item::{Item, ValidatedValue};
pub use schema::{Cardinality, PropertySpec, Schema, TypeTag};
pub use scope::{RawItemScope, RawValue};
pub use validator::{Coercion, ValidateOptions, Validator, DEFAULT_MAX_DEPTH};
pub use vocabulary::{
    VocabularyDefinition, VocabularyError, VocabularyRegistry, VocabularyResolver,
    GENERIC_VOCABULARY,
};
