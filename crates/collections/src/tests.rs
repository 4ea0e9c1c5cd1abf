use super::*;

/// Convenience function to collect the values of a standard collection.
fn values(collection: &StandardCollection) -> Vec<Value> {
    collection.values().cloned().collect()
}

#[test]
fn push_unshift_shift_scenario() {
    let mut collection = StandardCollection::new();
    collection
        .push("a".into())
        .push("b".into())
        .unshift("z".into());
    assert_eq!(
        values(&collection),
        vec![Value::from("z"), Value::from("a"), Value::from("b")]
    );
    assert_eq!(collection.shift(), Some(Value::from("z")));
    assert_eq!(collection.count(), 2);
}

#[test]
fn title_lookup_scenario() {
    let mut collection = StandardCollection::new();
    collection.set("title", "Dune".into());
    assert_eq!(collection.get("title"), Some(&Value::from("Dune")));
    let default = Value::from("N/A");
    assert_eq!(collection.get_or("missing", &default), &default);
    assert!(collection.exists("title"));
    assert!(!collection.exists("missing"));
}

#[test]
fn missing_keys_default_to_null() {
    let collection = StandardCollection::new();
    let null = Value::Null;
    assert_eq!(collection.get_or(3, &null), &Value::Null);
    assert_eq!(collection.get("anything").cloned().unwrap_or_default(), Value::Null);
}

#[test]
fn null_values_are_present() {
    let mut collection = StandardCollection::new();
    collection.set("nothing", Value::Null).set(0, Value::Null);
    assert!(collection.exists("nothing"));
    assert!(collection.exists(0));
    assert_eq!(collection.get("nothing"), Some(&Value::Null));
    assert_eq!(collection.len(), 2);
}

#[test]
fn every_value_shape_round_trips_through_set_and_get() {
    let shared = Object::new(BookRecord::new("Dune", "Frank Herbert", 1965));
    let samples = vec![
        Value::Null,
        Value::from(false),
        Value::from(i64::MIN),
        Value::from(2.5),
        Value::from("text"),
        Value::from(vec![Value::from(1), Value::from("x")]),
        Value::from(shared.clone()),
    ];
    let mut collection = StandardCollection::new();
    for (n, sample) in samples.iter().enumerate() {
        collection.set(n as i64, sample.clone());
        collection.set(format!("key-{}", n), sample.clone());
    }
    for (n, sample) in samples.iter().enumerate() {
        assert_eq!(collection.get(n as i64), Some(sample));
        assert_eq!(collection.get(format!("key-{}", n)), Some(sample));
    }
    let object = collection
        .get(6)
        .and_then(Value::as_object)
        .and_then(Object::downcast_ref::<BookRecord>)
        .map(Book::title);
    assert_eq!(object, Some("Dune"));
    assert_eq!(collection.get(6).and_then(Value::as_object), Some(&shared));
}

#[test]
fn nested_arrays_are_collections() {
    let mut inner = StandardCollection::new();
    inner.set("name", "inner".into());
    let mut outer = StandardCollection::new();
    outer.push(inner.into());
    if let Some(array) = outer.get_mut(0).and_then(Value::as_array_mut) {
        array.push(1.into());
    }
    let inner = outer.get(0).and_then(Value::as_array).unwrap();
    assert_eq!(inner.get("name"), Some(&Value::from("inner")));
    assert_eq!(inner.get(0), Some(&Value::from(1)));
}

#[test]
fn clear_and_pop_on_empty() {
    let mut collection = vec![1i64, 2, 3]
        .into_iter()
        .map(Value::from)
        .collect::<StandardCollection>();
    assert_eq!(collection.pop(), Some(Value::from(3)));
    collection.clear();
    assert!(collection.is_empty());
    assert_eq!(collection.count(), 0);
    assert_eq!(collection.pop(), None);
    assert_eq!(collection.shift(), None);
    assert_eq!(collection.count(), 0);
}
