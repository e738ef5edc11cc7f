//! Validate command implementation.

use crate::input;
use itemscope_core::{Coercion, RawItemScope, ValidateOptions, Validator};

pub fn run(
    input: Option<String>,
    vocabularies: Option<String>,
    max_depth: usize,
    coerce: bool,
    canonical: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let registry = input::load_registry(vocabularies)?;
    let value = input::read_json(input)?;
    let scopes = RawItemScope::many_from_json(&value)?;

    let options = ValidateOptions {
        max_depth,
        coercion: if coerce {
            Coercion::Canonical
        } else {
            Coercion::Preserve
        },
    };
    let validator = Validator::new(&registry).with_options(options);
    let items = validator.validate_all(&scopes)?;
    tracing::info!(count = items.len(), "validated items");

    for item in &items {
        if canonical {
            println!("{}", item.to_canonical_json()?);
        } else {
            println!("{}", item);
        }
    }

    Ok(())
}
