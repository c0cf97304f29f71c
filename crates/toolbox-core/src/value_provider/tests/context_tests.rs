use crate::value_provider::{Dictionary, MapDictionary, ValueContext};

#[test]
fn test_shared_data() {
    let mut context = ValueContext::new();
    context.set_data("counter", 5u32);

    assert!(context.contains("counter"));
    assert_eq!(context.get_data::<u32>("counter"), Some(&5));
    assert_eq!(context.get_data::<String>("counter"), None, "Wrong type should not downcast");

    if let Some(counter) = context.get_data_mut::<u32>("counter") {
        *counter += 1;
    }
    assert_eq!(context.get_data::<u32>("counter"), Some(&6));

    assert!(context.remove("counter"));
    assert!(!context.contains("counter"));
}

#[test]
fn test_dictionary_storage() {
    let mut context = ValueContext::new();
    let dictionary: MapDictionary = [("name", "toolbox")].into_iter().collect();
    context.set_dictionary("vars", dictionary);

    let stored = context.dictionary("vars").expect("Dictionary should be stored");
    assert!(stored.exists("name"));
    assert!(context.dictionary("other").is_none());

    // Plain data under a key is not a dictionary
    context.set_data("plain", 1i64);
    assert!(context.dictionary("plain").is_none());
}
