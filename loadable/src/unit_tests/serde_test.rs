use super::{all_states, TestLoadable};
use crate::Value;
use serde_json::json;

#[test]
fn test_serialize_shape() {
    let loadable = TestLoadable::succeed(3).to_loading();
    let json = serde_json::to_value(&loadable).unwrap();
    assert_eq!(
        json,
        json!({
            "content": { "Succeeded": 3 },
            "refreshing": true,
        })
    );

    let json = serde_json::to_value(TestLoadable::not_asked()).unwrap();
    assert_eq!(json, json!({ "content": "Empty", "refreshing": false }));
}

#[test]
fn test_deserialize_every_state() {
    for state in all_states() {
        let text = serde_json::to_string(&state).unwrap();
        let back: TestLoadable = serde_json::from_str(&text).unwrap();
        assert_eq!(back, state);
    }
}

#[test]
fn test_value_serialize() {
    let value: Value<String, i32> = Value::Failed("down".to_string());
    assert_eq!(serde_json::to_value(value).unwrap(), json!({ "Failed": "down" }));
}
