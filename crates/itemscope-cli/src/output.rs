//! Output formatting utilities.

use itemscope_core::Schema;

/// Formats a vocabulary as a simple table row.
pub fn format_table_row(schema: &Schema, itemtype: Option<&str>) -> String {
    let wildcard = match &schema.wildcard {
        Some(spec) => format!("{:?}", spec.num),
        None => "-".to_string(),
    };

    format!(
        "{:<44} {:<30} {:<10} {}",
        truncate(schema.vocabulary.as_str(), 44),
        truncate(itemtype.unwrap_or("-"), 30),
        schema.properties.len(),
        wildcard
    )
}

/// Prints table header.
#[allow(clippy::print_literal)]
pub fn print_table_header() {
    println!(
        "{:<44} {:<30} {:<10} {}",
        "VOCABULARY", "ITEMTYPE", "PROPERTIES", "WILDCARD"
    );
    println!("{}", "-".repeat(100));
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
