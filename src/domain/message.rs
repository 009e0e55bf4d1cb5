use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A device-to-cloud or cloud-to-device message.
///
/// Fields from `enqueued_time` through `message_source` are stamped by the hub
/// and only ever populated on the receive path.
///
/// # Fields
///
/// - `payload` - The message body as one contiguous buffer.
/// - `originator_id` - Identity of the sender (the AMQP `user-id`).
/// - `message_id` / `correlation_id` - Identifiers used to correlate requests and replies.
/// - `recipient` - Destination address.
/// - `expiry_time` - Absolute expiry, if the sender set one.
/// - `enqueued_time` - When the hub accepted the message.
/// - `connection_device_id` / `connection_device_generation_id` - Identity of the
///   device connection the message arrived on.
/// - `connection_auth_method` - How that connection authenticated.
/// - `message_source` - Routing origin, e.g. `Telemetry` or `twinChangeEvents`.
/// - `properties` - Application properties plus any annotation the mapper
///   could not place in a dedicated field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomainMessage {
    pub payload: Vec<u8>,
    pub originator_id: String,
    pub message_id: String,
    pub correlation_id: String,
    pub recipient: String,
    pub expiry_time: Option<DateTime<Utc>>,
    pub enqueued_time: Option<DateTime<Utc>>,
    pub connection_device_id: String,
    pub connection_device_generation_id: String,
    pub connection_auth_method: Option<ConnectionAuthMethod>,
    pub message_source: String,
    pub properties: HashMap<String, String>,
}

impl DomainMessage {
    pub fn new(payload: impl Into<Vec<u8>>) -> Self {
        Self {
            payload: payload.into(),
            ..Default::default()
        }
    }
}

/// Authentication details of the device connection, as reported by the hub in
/// the `iothub-connection-auth-method` annotation.
///
/// ```json
/// {"scope":"device","type":"sas","issuer":"iothub","acceptingIpFilterRule":null}
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConnectionAuthMethod {
    pub scope: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub issuer: String,
    pub accepting_ip_filter_rule: Option<serde_json::Value>,
}
