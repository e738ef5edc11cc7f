use itemscope_canonical::{datatypes::SemanticValue, Canonicalizer, DatatypeTag};
use serde_json::json;

fn main() {
    let canonicalizer = Canonicalizer::new();
    let birth_date = SemanticValue::extract(&DatatypeTag::new("date"), "1815-12-10")
        .expect("valid date")
        .canonical_form();
    let item = json!({
        "vocabulary": "http://schema.org/Person",
        "type": "http://schema.org/Person",
        "id": null,
        "properties": {
            "name": ["Ada Lovelace"],
            "birthDate": [birth_date]
        }
    });

    match canonicalizer.canonicalize(&item) {
        Ok(text) => {
            println!("{}", text);
        }
        Err(err) => {
            eprintln!("canonicalization failed: {}", err);
            std::process::exit(1);
        }
    }
}
