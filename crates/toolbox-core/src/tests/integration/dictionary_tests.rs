#![cfg(test)]

use crate::config::ConfigData;
use crate::value_provider::{
    DictionaryProvider, MapDictionary, Value, ValueContext, ValueProviderError, ValueProviderRegistry,
};

use super::common::{setup_test_storage, DICTIONARY_URL};

fn registry_with_dictionary() -> (ValueProviderRegistry, ValueContext) {
    let storage = setup_test_storage();
    let config = ConfigData::load(&storage, DICTIONARY_URL).expect("Failed to load dictionary document");

    let mut context = ValueContext::new();
    context.set_dictionary("settings", MapDictionary::from(&config));

    let mut registry = ValueProviderRegistry::with_builtins();
    registry.register("dictionary", DictionaryProvider::new("settings"));
    (registry, context)
}

#[test]
fn test_dictionary_document_feeds_provider() {
    let (registry, context) = registry_with_dictionary();

    let region = registry
        .evaluate("dictionary", &context, &[Value::from("region")])
        .expect("region lookup");
    assert_eq!(region, Value::from("eu-west-1"));

    let retries = registry
        .evaluate("dictionary", &context, &[Value::from("retries")])
        .expect("retries lookup");
    assert_eq!(retries.as_int(), 3);

    let tags = registry
        .evaluate("dictionary", &context, &[Value::from("tags")])
        .expect("tags lookup");
    assert!(matches!(tags, Value::Json(serde_json::Value::Array(_))));
}

#[test]
fn test_optional_and_required_lookups() {
    let (registry, context) = registry_with_dictionary();

    let optional = registry
        .evaluate("dictionary", &context, &[Value::from("missing")])
        .expect("single-argument lookup soft-misses");
    assert!(optional.is_null());

    let required = registry.evaluate("dictionary", &context, &[Value::from("missing"), Value::from(true)]);
    assert!(matches!(required, Err(ValueProviderError::KeyNotFound { .. })));
}

#[test]
fn test_dictionary_value_cast_through_registry() {
    let (registry, context) = registry_with_dictionary();

    let verbose = registry
        .evaluate("dictionary", &context, &[Value::from("verbose")])
        .expect("verbose lookup");
    let cast = registry
        .evaluate("cast", &context, &[Value::from("string"), verbose])
        .expect("cast to string");
    assert_eq!(cast, Value::from("true"));
}
