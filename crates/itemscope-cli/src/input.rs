//! Input loading shared by commands.

use itemscope_core::VocabularyRegistry;
use serde_json::Value;
use std::io::{self, Read};

/// Reads JSON from a file, or from stdin when no path is given.
pub fn read_json(input: Option<String>) -> Result<Value, Box<dyn std::error::Error>> {
    let json_str = if let Some(path) = input {
        std::fs::read_to_string(&path)
            .map_err(|e| format!("Failed to read file {}: {}", path, e))?
    } else {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    };

    let value = serde_json::from_str(&json_str).map_err(|e| format!("Invalid JSON: {}", e))?;
    Ok(value)
}

/// Loads a vocabulary registry, or an empty one when no path is given.
pub fn load_registry(
    path: Option<String>,
) -> Result<VocabularyRegistry, Box<dyn std::error::Error>> {
    match path {
        Some(path) => {
            let registry = VocabularyRegistry::from_path(&path)
                .map_err(|e| format!("Failed to load vocabularies {}: {}", path, e))?;
            tracing::info!(path = %path, count = registry.len(), "loaded vocabularies");
            Ok(registry)
        }
        None => Ok(VocabularyRegistry::new()),
    }
}
