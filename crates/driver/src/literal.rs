use crate::Error;
use collections::{
    Key,
    StandardCollection,
    Value,
};
use serde_json::Value as Json;

/// Converts a JSON argument into a collection key.
///
/// # Errors
///
/// If the argument is neither an `i64` nor a string.
pub fn into_key(line: usize, json: Json) -> Result<Key, Error> {
    match json {
        Json::Number(number) => {
            match number.as_i64() {
                Some(index) => Ok(Key::Index(index)),
                None => {
                    Err(Error::InvalidKey {
                        line,
                        key: number.to_string(),
                    })
                }
            }
        }
        Json::String(name) => Ok(Key::from(name)),
        other => {
            Err(Error::InvalidKey {
                line,
                key: other.to_string(),
            })
        }
    }
}

/// Converts a JSON argument into a collection value.
///
/// JSON objects turn into arrays with the object's member names as keys.
pub fn into_value(json: Json) -> Value {
    match json {
        Json::Null => Value::Null,
        Json::Bool(value) => Value::Bool(value),
        Json::Number(number) => {
            match number.as_i64() {
                Some(value) => Value::Int(value),
                None => Value::Float(number.as_f64().unwrap_or(f64::NAN)),
            }
        }
        Json::String(value) => Value::String(value),
        Json::Array(values) => Value::Array(values.into_iter().map(into_value).collect()),
        Json::Object(members) => {
            let mut array = StandardCollection::with_capacity(members.len());
            for (name, value) in members {
                array.set(name, into_value(value));
            }
            Value::Array(array)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn keys_convert() {
        assert_eq!(into_key(1, json!(3)).unwrap(), Key::Index(3));
        assert_eq!(into_key(1, json!("title")).unwrap(), Key::from("title"));
        assert_eq!(into_key(1, json!("12")).unwrap(), Key::Index(12));
        for invalid in [json!(1.5), json!(null), json!([1]), json!(u64::MAX)] {
            match into_key(4, invalid) {
                Err(Error::InvalidKey { line: 4, .. }) => (),
                other => panic!("unexpected key conversion: {:?}", other),
            }
        }
    }

    #[test]
    fn values_convert() {
        assert_eq!(into_value(json!(null)), Value::Null);
        assert_eq!(into_value(json!(true)), Value::Bool(true));
        assert_eq!(into_value(json!(-4)), Value::Int(-4));
        assert_eq!(into_value(json!(0.25)), Value::Float(0.25));
        assert_eq!(into_value(json!("Dune")), Value::from("Dune"));
        assert_eq!(into_value(json!([1, "a"])), Value::from(vec![Value::from(1), Value::from("a")]));
    }

    #[test]
    fn objects_keep_member_order() {
        let value = into_value(json!({ "z": 1, "a": 2, "7": 3 }));
        let array = value.as_array().unwrap();
        let keys = array.keys().cloned().collect::<Vec<_>>();
        assert_eq!(keys, vec![Key::from("z"), Key::from("a"), Key::Index(7)]);
        assert_eq!(array.next_index(), 8);
    }
}
