//! Type coercions shared by both directions.

use chrono::{DateTime, Utc};

use crate::wire::{MessageId, WireValue};

/// Timestamp written when a message has no expiry. Read back as "no expiry".
pub const ZERO_TIMESTAMP: DateTime<Utc> = DateTime::<Utc>::UNIX_EPOCH;

pub fn expiry_from_wire(t: Option<DateTime<Utc>>) -> Option<DateTime<Utc>> {
    t.filter(|t| *t != ZERO_TIMESTAMP)
}

pub fn expiry_to_wire(t: Option<DateTime<Utc>>) -> DateTime<Utc> {
    t.unwrap_or(ZERO_TIMESTAMP)
}

/// Correlation ids may be strings or UUIDs; anything else yields `None`.
pub fn correlation_id_string(id: &MessageId) -> Option<String> {
    match id {
        MessageId::String(s) => Some(s.clone()),
        MessageId::Uuid(u) => Some(u.hyphenated().to_string()),
        MessageId::Ulong(_) | MessageId::Binary(_) => None,
    }
}

/// Application properties are string-only in the domain model.
pub fn application_property_string(value: &WireValue) -> String {
    match value {
        WireValue::String(s) => s.clone(),
        _ => String::new(),
    }
}
