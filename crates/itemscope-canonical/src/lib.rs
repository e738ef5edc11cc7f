//! Canonical primitives shared by the itemscope validator.
//!
//! This crate holds the pieces that have no knowledge of vocabularies or
//! item validation: validated identifier newtypes, the built-in semantic
//! datatypes recognized in property text, and the canonical JSON renderer
//! used to produce stable output for validated items.
//!
#![deny(missing_docs)]

/// Canonical JSON rendering (RFC 8785).
pub mod canonicalizer;
/// Built-in semantic datatypes and their canonical forms.
pub mod datatypes;
/// Identifier newtypes for types, vocabularies, properties, and datatypes.
pub mod identifiers;
/// Validation errors for canonical primitives.
pub mod validation;

pub use canonicalizer::{CanonicalizationError, Canonicalizer};
pub use datatypes::SemanticValue;
pub use identifiers::{DatatypeTag, GlobalId, PropertyName, TypeId, VocabId};
pub use validation::ValidationError;
