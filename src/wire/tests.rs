use super::{AnnotationKey, MessageId, WireMessage, WireValue};
use chrono::{TimeZone, Utc};
use serde_json::json;
use std::collections::HashMap;
use uuid::Uuid;

#[test]
fn test_payload_joins_chunks() {
    let msg = WireMessage {
        data: vec![b"hel".to_vec(), b"lo".to_vec()],
        ..Default::default()
    };
    assert_eq!(msg.payload(), b"hello".to_vec());
}

#[test]
fn test_payload_of_empty_body() {
    let msg = WireMessage::default();
    assert!(msg.payload().is_empty());
}

#[test]
fn test_wire_value_display() {
    let ts = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap();
    assert_eq!(WireValue::Long(-7).to_string(), "-7");
    assert_eq!(WireValue::Bool(true).to_string(), "true");
    assert_eq!(WireValue::Symbol("abc".into()).to_string(), "abc");
    assert_eq!(WireValue::Binary(vec![0x0a, 0xff]).to_string(), "0aff");
    assert_eq!(WireValue::Timestamp(ts).to_string(), "2024-03-01T12:30:00Z");
    assert_eq!(WireValue::Null.to_string(), "null");
}

#[test]
fn test_as_str_accepts_string_and_symbol() {
    assert_eq!(WireValue::from("a").as_str(), Some("a"));
    assert_eq!(WireValue::Symbol("b".into()).as_str(), Some("b"));
    assert_eq!(WireValue::Ulong(1).as_str(), None);
}

#[test]
fn test_message_id_display() {
    let id = Uuid::parse_str("6b1d2f3e-0c4a-4e5b-9a7d-112233445566").unwrap();
    assert_eq!(
        MessageId::Uuid(id).to_string(),
        "6b1d2f3e-0c4a-4e5b-9a7d-112233445566"
    );
    assert_eq!(MessageId::Ulong(42).to_string(), "42");
}

#[test]
fn test_annotation_key_json_form() {
    let mut annotations = HashMap::new();
    annotations.insert(AnnotationKey::Code(17), WireValue::from("x"));
    let encoded = serde_json::to_value(&annotations).unwrap();
    assert_eq!(encoded, json!({ "17": { "string": "x" } }));

    let decoded: HashMap<AnnotationKey, WireValue> =
        serde_json::from_value(json!({ "iothub-message-source": { "string": "Telemetry" } }))
            .unwrap();
    assert!(decoded.contains_key(&AnnotationKey::symbol("iothub-message-source")));
}

#[test]
fn test_wire_message_from_json() {
    let msg: WireMessage = serde_json::from_value(json!({
        "data": [[104, 105]],
        "properties": {
            "to": "/devices/dev1/messages/devicebound",
            "message_id": { "string": "m-1" }
        },
        "application_properties": { "foo": { "string": "bar" } }
    }))
    .unwrap();

    assert_eq!(msg.payload(), b"hi".to_vec());
    let props = msg.properties.unwrap();
    assert_eq!(props.message_id, Some(MessageId::from("m-1")));
    assert!(props.user_id.is_empty());
    assert!(msg.annotations.is_empty());
    assert_eq!(msg.application_properties["foo"], WireValue::from("bar"));
}
