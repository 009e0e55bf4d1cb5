use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

/// Key of a message annotation.
///
/// AMQP allows annotation keys to be either symbols or numeric codes. IoT Hub
/// only ever sends symbols, but a numeric key must still survive the trip into
/// the domain property map.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AnnotationKey {
    Symbol(String),
    Code(u64),
}

impl AnnotationKey {
    pub fn symbol(name: impl Into<String>) -> Self {
        Self::Symbol(name.into())
    }

    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Self::Symbol(s) => Some(s.as_str()),
            Self::Code(_) => None,
        }
    }
}

impl fmt::Display for AnnotationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Symbol(s) => f.write_str(s),
            Self::Code(c) => write!(f, "{c}"),
        }
    }
}

impl From<&str> for AnnotationKey {
    fn from(s: &str) -> Self {
        Self::Symbol(s.to_string())
    }
}

// Annotation keys are written as plain strings so that the annotation map can
// be a JSON object. A key made only of digits reads back as a numeric code.
impl Serialize for AnnotationKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for AnnotationKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(match raw.parse::<u64>() {
            Ok(code) => Self::Code(code),
            Err(_) => Self::Symbol(raw),
        })
    }
}

/// A loosely typed value found in the annotation and application-property bags.
///
/// The set is closed on purpose: every consumer has to decide what to do with
/// each variant, instead of type-asserting on an opaque value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WireValue {
    Null,
    Bool(bool),
    Long(i64),
    Ulong(u64),
    Double(f64),
    String(String),
    Symbol(String),
    Timestamp(DateTime<Utc>),
    Uuid(Uuid),
    Binary(Vec<u8>),
}

impl WireValue {
    /// Returns the text of string-like values (`String` and `Symbol`).
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) | Self::Symbol(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_timestamp(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Timestamp(t) => Some(*t),
            _ => None,
        }
    }

    /// Short name of the variant, used in errors and diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Long(_) => "long",
            Self::Ulong(_) => "ulong",
            Self::Double(_) => "double",
            Self::String(_) => "string",
            Self::Symbol(_) => "symbol",
            Self::Timestamp(_) => "timestamp",
            Self::Uuid(_) => "uuid",
            Self::Binary(_) => "binary",
        }
    }
}

impl fmt::Display for WireValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Long(n) => write!(f, "{n}"),
            Self::Ulong(n) => write!(f, "{n}"),
            Self::Double(n) => write!(f, "{n}"),
            Self::String(s) | Self::Symbol(s) => f.write_str(s),
            Self::Timestamp(t) => f.write_str(&t.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
            Self::Uuid(u) => write!(f, "{}", u.hyphenated()),
            Self::Binary(bytes) => {
                for b in bytes {
                    write!(f, "{b:02x}")?;
                }
                Ok(())
            }
        }
    }
}

impl From<&str> for WireValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for WireValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}
