//! Resolve command implementation.

use crate::input;
use itemscope_canonical::TypeId;
use itemscope_core::VocabularyResolver;

pub fn run(
    item_type: String,
    vocabularies: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let registry = input::load_registry(vocabularies)?;
    let item_type =
        TypeId::parse(item_type).map_err(|e| format!("Invalid item type: {}", e))?;

    let schema = registry.find(&item_type);
    println!("{}", serde_json::to_string_pretty(schema)?);

    Ok(())
}
