use std::collections::HashMap;

use crate::domain::DomainMessage;
use crate::mapper::Mapper;
use crate::mapper::coerce;
use crate::wire::{HeaderProperties, MessageId, WireMessage, WireValue};

impl Mapper {
    /// Converts a `DomainMessage` into an AMQP message ready to send.
    ///
    /// Hub-assigned fields (`enqueued_time`, `connection_*`, `message_source`)
    /// have no outbound form and are not written; the annotation map stays empty.
    pub fn to_wire(&self, msg: &DomainMessage) -> WireMessage {
        let application_properties: HashMap<String, WireValue> = msg
            .properties
            .iter()
            .map(|(k, v)| (k.clone(), WireValue::String(v.clone())))
            .collect();

        WireMessage {
            data: vec![msg.payload.clone()],
            properties: Some(HeaderProperties {
                to: Some(msg.recipient.clone()),
                user_id: msg.originator_id.as_bytes().to_vec(),
                message_id: Some(MessageId::String(msg.message_id.clone())),
                correlation_id: Some(MessageId::String(msg.correlation_id.clone())),
                absolute_expiry_time: Some(coerce::expiry_to_wire(msg.expiry_time)),
            }),
            annotations: HashMap::new(),
            application_properties,
        }
    }
}
