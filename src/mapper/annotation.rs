use crate::wire::AnnotationKey;

pub const ENQUEUED_TIME: &str = "iothub-enqueuedtime";
pub const CONNECTION_DEVICE_ID: &str = "iothub-connection-device-id";
pub const CONNECTION_AUTH_GENERATION_ID: &str = "iothub-connection-auth-generation-id";
pub const CONNECTION_AUTH_METHOD: &str = "iothub-connection-auth-method";
pub const MESSAGE_SOURCE: &str = "iothub-message-source";

/// Annotations stamped by IoT Hub that map onto dedicated message fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReservedAnnotation {
    EnqueuedTime,
    ConnectionDeviceId,
    ConnectionAuthGenerationId,
    ConnectionAuthMethod,
    MessageSource,
}

impl ReservedAnnotation {
    pub const ALL: [ReservedAnnotation; 5] = [
        Self::EnqueuedTime,
        Self::ConnectionDeviceId,
        Self::ConnectionAuthGenerationId,
        Self::ConnectionAuthMethod,
        Self::MessageSource,
    ];

    /// Matches a wire key exactly (case-sensitive). Numeric keys never match.
    pub fn from_key(key: &AnnotationKey) -> Option<Self> {
        match key.as_symbol()? {
            ENQUEUED_TIME => Some(Self::EnqueuedTime),
            CONNECTION_DEVICE_ID => Some(Self::ConnectionDeviceId),
            CONNECTION_AUTH_GENERATION_ID => Some(Self::ConnectionAuthGenerationId),
            CONNECTION_AUTH_METHOD => Some(Self::ConnectionAuthMethod),
            MESSAGE_SOURCE => Some(Self::MessageSource),
            _ => None,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Self::EnqueuedTime => ENQUEUED_TIME,
            Self::ConnectionDeviceId => CONNECTION_DEVICE_ID,
            Self::ConnectionAuthGenerationId => CONNECTION_AUTH_GENERATION_ID,
            Self::ConnectionAuthMethod => CONNECTION_AUTH_METHOD,
            Self::MessageSource => MESSAGE_SOURCE,
        }
    }
}
