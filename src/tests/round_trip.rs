use crate::config::MapperSettings;
use crate::diagnostics::MemorySink;
use crate::domain::DomainMessage;
use crate::mapper::annotation::{CONNECTION_DEVICE_ID, ENQUEUED_TIME, MESSAGE_SOURCE};
use crate::mapper::{Mapper, map_from_wire, map_to_wire};
use crate::wire::{AnnotationKey, HeaderProperties, MessageId, WireMessage, WireValue};
use chrono::{TimeZone, Utc};
use std::sync::Arc;
use std::thread;
use uuid::Uuid;

fn sample_domain() -> DomainMessage {
    let mut msg = DomainMessage::new(vec![0u8, 1, 2, 255]);
    msg.originator_id = "iothubowner".to_string();
    msg.message_id = "0b7e1c4e".to_string();
    msg.correlation_id = "req-17".to_string();
    msg.recipient = "/devices/thermostat/messages/devicebound".to_string();
    msg.expiry_time = Some(Utc.with_ymd_and_hms(2030, 6, 1, 0, 0, 0).unwrap());
    msg.properties.insert("unit".to_string(), "celsius".to_string());
    msg.properties.insert("empty".to_string(), String::new());
    msg
}

#[test]
fn domain_survives_outbound_then_inbound() {
    let original = sample_domain();
    let restored = map_from_wire(&map_to_wire(&original)).unwrap();

    assert_eq!(restored.payload, original.payload);
    assert_eq!(restored.originator_id, original.originator_id);
    assert_eq!(restored.message_id, original.message_id);
    assert_eq!(restored.correlation_id, original.correlation_id);
    assert_eq!(restored.recipient, original.recipient);
    assert_eq!(restored.expiry_time, original.expiry_time);
    assert_eq!(restored.properties, original.properties);
}

#[test]
fn domain_without_expiry_survives_round_trip() {
    let mut original = sample_domain();
    original.expiry_time = None;
    let restored = map_from_wire(&map_to_wire(&original)).unwrap();
    assert!(restored.expiry_time.is_none());
}

#[test]
fn wire_round_trip_loses_hub_metadata_and_uuid_variant() {
    let correlation = Uuid::new_v4();
    let mut wire = WireMessage {
        data: vec![b"telemetry".to_vec()],
        properties: Some(HeaderProperties {
            to: Some("/messages/events".to_string()),
            user_id: b"dev1".to_vec(),
            message_id: Some(MessageId::from("m-9")),
            correlation_id: Some(MessageId::Uuid(correlation)),
            absolute_expiry_time: None,
        }),
        ..Default::default()
    };
    wire.annotations.insert(
        AnnotationKey::symbol(ENQUEUED_TIME),
        WireValue::Timestamp(Utc::now()),
    );
    wire.annotations.insert(
        AnnotationKey::symbol(CONNECTION_DEVICE_ID),
        WireValue::from("dev1"),
    );
    wire.annotations.insert(
        AnnotationKey::symbol(MESSAGE_SOURCE),
        WireValue::from("Telemetry"),
    );

    let back = map_to_wire(&map_from_wire(&wire).unwrap());

    assert_ne!(back, wire);
    assert!(back.annotations.is_empty());
    let header = back.properties.unwrap();
    assert_eq!(
        header.correlation_id,
        Some(MessageId::String(correlation.hyphenated().to_string()))
    );
    assert_eq!(header.message_id, Some(MessageId::from("m-9")));
    assert_eq!(back.data, wire.data);
}

#[test]
fn shared_mapper_across_threads() {
    let sink = Arc::new(MemorySink::new());
    let mapper = Arc::new(Mapper::new(MapperSettings::default(), sink.clone()));

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let mapper = mapper.clone();
            thread::spawn(move || {
                let mut msg = sample_domain();
                msg.message_id = format!("m-{i}");
                let wire = mapper.to_wire(&msg);
                let back = mapper.from_wire(&wire).unwrap();
                assert_eq!(back.message_id, format!("m-{i}"));
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }
    assert!(sink.is_empty());
}

#[test]
fn json_documents_translate_like_typed_values() {
    let wire: WireMessage = serde_json::from_str(
        r#"{
            "data": [[116, 101, 115, 116]],
            "annotations": {
                "iothub-message-source": { "string": "Telemetry" },
                "x-opt-offset": { "long": 1024 }
            },
            "application_properties": { "foo": { "string": "bar" } }
        }"#,
    )
    .unwrap();

    let msg = map_from_wire(&wire).unwrap();
    assert_eq!(msg.payload, b"test".to_vec());
    assert_eq!(msg.message_source, "Telemetry");
    assert_eq!(msg.properties["x-opt-offset"], "1024");
    assert_eq!(msg.properties["foo"], "bar");
    assert_eq!(msg.properties.len(), 2);
}
