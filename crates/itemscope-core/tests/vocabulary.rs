use itemscope_canonical::{PropertyName, TypeId, VocabId};
use itemscope_core::{
    Cardinality, PropertySpec, TypeTag, VocabularyError, VocabularyRegistry, VocabularyResolver,
    GENERIC_VOCABULARY,
};
use serde_json::json;
use std::io::Write;

fn make_document() -> serde_json::Value {
    json!({
        "vocabularies": [
            {
                "id": "http://schema.org/Thing",
                "properties": {
                    "name": { "num": "one", "types": [{ "datatype": "text" }] },
                    "url": { "num": "many", "types": [{ "datatype": "url" }] }
                },
                "wildcard": { "num": "many", "types": ["any"] }
            },
            {
                "id": "http://schema.org/Person",
                "itemtype": "https?://schema\\.org/Person",
                "include": ["http://schema.org/Thing"],
                "properties": {
                    "name": { "num": "many", "types": [{ "datatype": "text" }] }
                }
            }
        ]
    })
}

fn resolve<'a>(registry: &'a VocabularyRegistry, item_type: &str) -> &'a VocabId {
    &registry.find(&TypeId::new(item_type)).vocabulary
}

#[test]
fn test_exact_id_match_without_pattern() {
    let registry = VocabularyRegistry::from_json(make_document()).unwrap();
    assert_eq!(
        resolve(&registry, "http://schema.org/Thing").as_str(),
        "http://schema.org/Thing"
    );
}

#[test]
fn test_itemtype_pattern_matches_whole_type() {
    let registry = VocabularyRegistry::from_json(make_document()).unwrap();
    assert_eq!(
        resolve(&registry, "https://schema.org/Person").as_str(),
        "http://schema.org/Person"
    );
    assert_eq!(
        resolve(&registry, "http://schema.org/PersonX").as_str(),
        GENERIC_VOCABULARY
    );
}

#[test]
fn test_unknown_type_gets_generic_wildcard_schema() {
    let registry = VocabularyRegistry::from_json(make_document()).unwrap();
    let schema = registry.find(&TypeId::new("urn:unknown"));
    assert_eq!(schema.vocabulary.as_str(), GENERIC_VOCABULARY);
    assert!(schema.properties.is_empty());
    let wildcard = schema.wildcard.as_ref().unwrap();
    assert_eq!(wildcard.num, Cardinality::Many);
    assert!(wildcard.accepts_any());
}

#[test]
fn test_include_merges_properties_and_wildcard() {
    let registry = VocabularyRegistry::from_json(make_document()).unwrap();
    let person = registry
        .get(&VocabId::new("http://schema.org/Person"))
        .unwrap();

    // own declaration overrides the included one
    let name = person.spec_for(&PropertyName::new("name")).unwrap();
    assert_eq!(name.num, Cardinality::Many);
    assert!(person.properties.contains_key(&PropertyName::new("url")));
    assert!(person.wildcard.is_some());
}

#[test]
fn test_accepting_spec_prefers_explicit_declaration() {
    let registry = VocabularyRegistry::from_json(make_document()).unwrap();
    let thing = registry.get(&VocabId::new("http://schema.org/Thing")).unwrap();
    let name = PropertyName::new("name");

    assert!(thing.accepting_spec(&name, 1).is_some());
    assert!(thing.accepting_spec(&name, 2).is_none());
    assert!(thing
        .accepting_spec(&PropertyName::new("colour"), 2)
        .is_some());
}

#[test]
fn test_unknown_include_is_rejected() {
    let err = VocabularyRegistry::from_json(json!({
        "vocabularies": [
            { "id": "Child", "include": ["Parent"] }
        ]
    }))
    .unwrap_err();
    assert!(matches!(err, VocabularyError::UnknownInclude { .. }));
}

#[test]
fn test_duplicate_vocabulary_is_rejected() {
    let err = VocabularyRegistry::from_json(json!({
        "vocabularies": [ { "id": "A" }, { "id": "A" } ]
    }))
    .unwrap_err();
    assert!(matches!(err, VocabularyError::Duplicate(id) if id.as_str() == "A"));
}

#[test]
fn test_invalid_pattern_is_rejected() {
    let err = VocabularyRegistry::from_json(json!({
        "vocabularies": [ { "id": "A", "itemtype": "(" } ]
    }))
    .unwrap_err();
    assert!(matches!(err, VocabularyError::InvalidPattern { .. }));
}

#[test]
fn test_malformed_document_is_rejected() {
    let err = VocabularyRegistry::from_json(json!({
        "vocabularies": [ { "id": "A", "properties": { "p": { "num": "several", "types": [] } } } ]
    }))
    .unwrap_err();
    assert!(matches!(err, VocabularyError::Malformed(_)));
}

#[test]
fn test_type_tags_deduplicate_in_declaration_order() {
    let spec: PropertySpec = serde_json::from_value(json!({
        "num": "many",
        "types": [{ "datatype": "date" }, "any", { "datatype": "date" }, { "vocabulary": "V" }]
    }))
    .unwrap();
    assert_eq!(
        spec.types,
        vec![
            TypeTag::datatype("date"),
            TypeTag::Any,
            TypeTag::vocabulary("V")
        ]
    );
}

#[test]
fn test_registry_loads_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{}", make_document()).unwrap();

    let registry = VocabularyRegistry::from_path(file.path()).unwrap();
    assert_eq!(registry.len(), 2);
    let ids: Vec<&str> = registry
        .iter()
        .map(|(schema, _)| schema.vocabulary.as_str())
        .collect();
    assert_eq!(ids, vec!["http://schema.org/Thing", "http://schema.org/Person"]);
}
