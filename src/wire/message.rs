use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::wire::value::{AnnotationKey, WireValue};

/// An AMQP message as received from, or handed to, the transport.
///
/// # Fields
///
/// - `data` - The body sections. The broker may split a payload across several chunks.
/// - `properties` - The immutable header properties, absent when the sender set none.
/// - `annotations` - Broker-assigned delivery and routing metadata.
/// - `application_properties` - Caller-defined metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WireMessage {
    #[serde(default)]
    pub data: Vec<Vec<u8>>,
    #[serde(default)]
    pub properties: Option<HeaderProperties>,
    #[serde(default)]
    pub annotations: HashMap<AnnotationKey, WireValue>,
    #[serde(default)]
    pub application_properties: HashMap<String, WireValue>,
}

impl WireMessage {
    /// All body chunks joined into one buffer.
    pub fn payload(&self) -> Vec<u8> {
        self.data.concat()
    }
}

/// The fixed AMQP properties section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HeaderProperties {
    #[serde(default)]
    pub to: Option<String>,
    #[serde(default)]
    pub user_id: Vec<u8>,
    #[serde(default)]
    pub message_id: Option<MessageId>,
    #[serde(default)]
    pub correlation_id: Option<MessageId>,
    #[serde(default)]
    pub absolute_expiry_time: Option<DateTime<Utc>>,
}

/// The types AMQP permits for `message-id` and `correlation-id`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageId {
    String(String),
    Uuid(Uuid),
    Ulong(u64),
    Binary(Vec<u8>),
}

impl MessageId {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::String(_) => "string",
            Self::Uuid(_) => "uuid",
            Self::Ulong(_) => "ulong",
            Self::Binary(_) => "binary",
        }
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => f.write_str(s),
            Self::Uuid(u) => write!(f, "{}", u.hyphenated()),
            Self::Ulong(n) => write!(f, "{n}"),
            Self::Binary(bytes) => {
                for b in bytes {
                    write!(f, "{b:02x}")?;
                }
                Ok(())
            }
        }
    }
}

impl From<&str> for MessageId {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<Uuid> for MessageId {
    fn from(u: Uuid) -> Self {
        Self::Uuid(u)
    }
}
