use std::collections::HashMap;

use tracing::trace;

use crate::diagnostics::Diagnostic;
use crate::domain::{ConnectionAuthMethod, DomainMessage};
use crate::mapper::Mapper;
use crate::mapper::annotation::ReservedAnnotation;
use crate::mapper::coerce;
use crate::utils::error::{MappingError, Result};
use crate::wire::{HeaderProperties, MessageId, WireMessage, WireValue};

impl Mapper {
    /// Converts a received AMQP message into a `DomainMessage`.
    ///
    /// Loosely typed fields degrade instead of failing: a non-string message id
    /// or a non-timestamp enqueued time is dropped, an odd correlation id is
    /// dropped with a diagnostic, and an undecodable auth method ends up in
    /// `properties` as raw text. The only error is a reserved annotation that
    /// must be a string but is not, and only in strict mode.
    pub fn from_wire(&self, wire: &WireMessage) -> Result<DomainMessage> {
        let mut msg = DomainMessage {
            payload: wire.payload(),
            properties: HashMap::with_capacity(
                wire.application_properties.len() + self.settings.property_capacity_hint,
            ),
            ..Default::default()
        };

        if let Some(header) = &wire.properties {
            self.apply_header(header, &mut msg);
        }

        for (key, value) in &wire.annotations {
            match ReservedAnnotation::from_key(key) {
                Some(reserved) => self.apply_reserved(reserved, value, &mut msg)?,
                None => {
                    msg.properties.insert(key.to_string(), value.to_string());
                }
            }
        }

        // after annotations: an application property wins over a same-named annotation
        for (key, value) in &wire.application_properties {
            msg.properties
                .insert(key.clone(), coerce::application_property_string(value));
        }

        trace!(
            message_id = %msg.message_id,
            properties = msg.properties.len(),
            "mapped inbound message"
        );
        Ok(msg)
    }

    fn apply_header(&self, header: &HeaderProperties, msg: &mut DomainMessage) {
        msg.originator_id = String::from_utf8_lossy(&header.user_id).into_owned();

        if let Some(MessageId::String(id)) = &header.message_id {
            msg.message_id = id.clone();
        }

        if let Some(id) = &header.correlation_id {
            match coerce::correlation_id_string(id) {
                Some(id) => msg.correlation_id = id,
                None => self
                    .sink
                    .emit(Diagnostic::UnexpectedCorrelationId { found: id.kind() }),
            }
        }

        if let Some(to) = &header.to {
            msg.recipient = to.clone();
        }
        msg.expiry_time = coerce::expiry_from_wire(header.absolute_expiry_time);
    }

    fn apply_reserved(
        &self,
        reserved: ReservedAnnotation,
        value: &WireValue,
        msg: &mut DomainMessage,
    ) -> Result<()> {
        match reserved {
            ReservedAnnotation::EnqueuedTime => msg.enqueued_time = value.as_timestamp(),
            ReservedAnnotation::ConnectionDeviceId => {
                if let Some(s) = self.required_str(reserved, value, msg)? {
                    msg.connection_device_id = s;
                }
            }
            ReservedAnnotation::ConnectionAuthGenerationId => {
                if let Some(s) = self.required_str(reserved, value, msg)? {
                    msg.connection_device_generation_id = s;
                }
            }
            ReservedAnnotation::MessageSource => {
                if let Some(s) = self.required_str(reserved, value, msg)? {
                    msg.message_source = s;
                }
            }
            ReservedAnnotation::ConnectionAuthMethod => {
                match decode_auth_method(value) {
                    Ok(am) => msg.connection_auth_method = Some(am),
                    Err(reason) => {
                        self.sink.emit(Diagnostic::AuthMethodUndecodable { reason });
                        msg.properties
                            .insert(reserved.key().to_string(), value.to_string());
                    }
                }
            }
        }
        Ok(())
    }

    /// Returns the string value of an annotation that must be a string.
    ///
    /// On a type mismatch, strict mode fails the whole translation; otherwise the
    /// value is stringified into `properties` and `None` is returned.
    fn required_str(
        &self,
        reserved: ReservedAnnotation,
        value: &WireValue,
        msg: &mut DomainMessage,
    ) -> Result<Option<String>> {
        if let Some(s) = value.as_str() {
            return Ok(Some(s.to_string()));
        }
        if self.settings.strict_annotations {
            return Err(MappingError::MalformedAnnotation {
                key: reserved.key(),
                expected: "string",
                found: value.kind(),
            });
        }
        self.sink.emit(Diagnostic::MalformedAnnotation {
            key: reserved.key(),
            found: value.kind(),
        });
        msg.properties
            .insert(reserved.key().to_string(), value.to_string());
        Ok(None)
    }
}

fn decode_auth_method(value: &WireValue) -> std::result::Result<ConnectionAuthMethod, String> {
    let raw = value
        .as_str()
        .ok_or_else(|| format!("expected string, found {}", value.kind()))?;
    serde_json::from_str(raw).map_err(|e| e.to_string())
}
