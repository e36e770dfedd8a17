//! Binary message codec
//!
//! Encodes messages with bincode inside a small frame that carries the
//! concrete type name as an explicit tag. On decode the tag is compared
//! against the requested type before the payload is touched, so a
//! mismatch fails fast naming both sides.
//!
//! The frame layout is bincode's native field layout with no version
//! field: output is only meaningful to the same build of the same
//! process image. Cross-process or at-rest interchange should use
//! [`JsonMessageSerializer`](crate::json::JsonMessageSerializer) instead.

use std::sync::Arc;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use tracing::trace;

use types::Message;

use crate::error::{SerializationError, SerializationResult};
use crate::message::MessageSerializer;
use crate::registry::TypeRegistry;

/// Payload frame: explicit type tag plus the encoded message
#[derive(Debug, Serialize, Deserialize)]
struct BinaryFrame {
    type_name: String,
    payload: Vec<u8>,
}

/// Same-process binary codec backed by bincode
pub struct BinaryMessageSerializer {
    registry: Arc<TypeRegistry>,
}

impl BinaryMessageSerializer {
    pub fn new(registry: Arc<TypeRegistry>) -> Self {
        Self { registry }
    }
}

impl MessageSerializer for BinaryMessageSerializer {
    fn serialize(&self, message: &dyn Message) -> SerializationResult<String> {
        let entry = self.registry.entry_for_message(message).ok_or_else(|| {
            SerializationError::serialization(
                message.type_name(),
                format!("no codec entry registered for type {}", message.type_name()),
            )
        })?;

        let payload = (entry.encode_binary)(message)
            .map_err(|cause| SerializationError::serialization_caused_by(message.type_name(), cause))?;
        let frame = BinaryFrame {
            type_name: entry.type_name().to_string(),
            payload,
        };
        let bytes = bincode::serialize(&frame)
            .map_err(|cause| SerializationError::serialization_caused_by(message.type_name(), cause))?;

        trace!(type_name = message.type_name(), size = bytes.len(), "encoded binary message");
        Ok(BASE64.encode(bytes))
    }

    fn deserialize(&self, data: &str, wire_type: &str) -> SerializationResult<Arc<dyn Message>> {
        let bytes = BASE64
            .decode(data)
            .map_err(|cause| SerializationError::deserialization_caused_by(wire_type, cause))?;
        let frame: BinaryFrame = bincode::deserialize(&bytes)
            .map_err(|cause| SerializationError::deserialization_caused_by(wire_type, cause))?;

        if frame.type_name != wire_type {
            return Err(SerializationError::deserialization(
                wire_type,
                format!(
                    "expected an instance of {}, got {}",
                    wire_type, frame.type_name
                ),
            ));
        }

        let entry = self
            .registry
            .entry_for_type_name(&frame.type_name)
            .ok_or_else(|| {
                SerializationError::deserialization(
                    wire_type,
                    format!("no codec entry registered for type {}", wire_type),
                )
            })?;

        let message = (entry.decode_binary)(&frame.payload)
            .map_err(|cause| SerializationError::deserialization_caused_by(wire_type, cause))?;
        trace!(type_name = wire_type, "decoded binary message");
        Ok(message)
    }

    fn wire_type_of(&self, message: &dyn Message) -> SerializationResult<String> {
        // The binary frame is self-describing by concrete type name.
        Ok(message.type_name().to_string())
    }
}
