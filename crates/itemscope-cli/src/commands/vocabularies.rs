//! Vocabularies command implementation.

use crate::input;
use crate::output;
use serde_json::json;

pub fn run(registry: String, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let registry = input::load_registry(Some(registry))?;

    // Output header if table format
    if !json {
        output::print_table_header();
    }

    for (schema, itemtype) in registry.iter() {
        if json {
            let line = json!({
                "vocabulary": schema.vocabulary,
                "itemtype": itemtype,
                "properties": schema.properties.keys().collect::<Vec<_>>(),
                "wildcard": schema.wildcard,
            });
            println!("{}", serde_json::to_string(&line)?);
        } else {
            println!("{}", output::format_table_row(schema, itemtype));
        }
    }

    Ok(())
}
