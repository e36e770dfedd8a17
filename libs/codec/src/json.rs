//! Reflective JSON message codec
//!
//! Encodes a message's fields as a JSON object under its registered wire
//! identifier. Decoding resolves the identifier back through the
//! [`TypeRegistry`] and reconstructs the typed value through the type's
//! `Deserialize` impl, which acts as the schema: missing, extra-invalid,
//! or wrong-shape fields surface serde's diagnostic wrapped in the codec
//! error. This is the interoperable codec variant; extend it first if
//! versioning is ever needed.

use std::sync::Arc;

use tracing::trace;

use types::Message;

use crate::error::{SerializationError, SerializationResult};
use crate::message::MessageSerializer;
use crate::registry::TypeRegistry;

/// Registry-driven JSON codec for message payloads
pub struct JsonMessageSerializer {
    registry: Arc<TypeRegistry>,
}

impl JsonMessageSerializer {
    pub fn new(registry: Arc<TypeRegistry>) -> Self {
        Self { registry }
    }
}

impl MessageSerializer for JsonMessageSerializer {
    fn serialize(&self, message: &dyn Message) -> SerializationResult<String> {
        let entry = self.registry.entry_for_message(message).ok_or_else(|| {
            SerializationError::serialization(
                message.type_name(),
                format!("no wire name registered for type {}", message.type_name()),
            )
        })?;

        let json = (entry.encode_json)(message)
            .map_err(|cause| SerializationError::serialization_caused_by(message.type_name(), cause))?;
        trace!(wire_name = entry.wire_name(), "encoded json message");
        Ok(json)
    }

    fn deserialize(&self, data: &str, wire_type: &str) -> SerializationResult<Arc<dyn Message>> {
        let entry = self.registry.entry_for_wire_name(wire_type).ok_or_else(|| {
            SerializationError::deserialization(
                wire_type,
                format!("no type registered for wire name '{}'", wire_type),
            )
        })?;

        let message = (entry.decode_json)(data)
            .map_err(|cause| SerializationError::deserialization_caused_by(wire_type, cause))?;
        trace!(wire_name = wire_type, "decoded json message");
        Ok(message)
    }

    fn wire_type_of(&self, message: &dyn Message) -> SerializationResult<String> {
        self.registry
            .wire_name_for(message)
            .map(str::to_string)
            .ok_or_else(|| {
                SerializationError::serialization(
                    message.type_name(),
                    format!("no wire name registered for type {}", message.type_name()),
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct OrderPlaced {
        order_id: String,
        quantity: u32,
    }

    fn registry() -> Arc<TypeRegistry> {
        let mut builder = TypeRegistry::builder();
        builder.register::<OrderPlaced>("order.placed").unwrap();
        Arc::new(builder.build())
    }

    fn serializer() -> JsonMessageSerializer {
        JsonMessageSerializer::new(registry())
    }

    #[test]
    fn round_trips_a_message() {
        let serializer = serializer();
        let message = OrderPlaced {
            order_id: "42".to_string(),
            quantity: 3,
        };

        let data = serializer.serialize(&message).unwrap();
        let restored = serializer.deserialize(&data, "order.placed").unwrap();
        let restored = restored
            .as_any()
            .downcast_ref::<OrderPlaced>()
            .expect("decoded message has the original type");
        assert_eq!(restored, &message);
    }

    #[test]
    fn serializes_public_fields_as_json() {
        let serializer = serializer();
        let message = OrderPlaced {
            order_id: "42".to_string(),
            quantity: 3,
        };
        let data = serializer.serialize(&message).unwrap();
        let value: serde_json::Value = serde_json::from_str(&data).unwrap();
        assert_eq!(value["order_id"], "42");
        assert_eq!(value["quantity"], 3);
    }

    #[test]
    fn wire_type_is_the_registered_identifier() {
        let serializer = serializer();
        let message = OrderPlaced {
            order_id: "42".to_string(),
            quantity: 3,
        };
        assert_eq!(serializer.wire_type_of(&message).unwrap(), "order.placed");
    }

    #[test]
    fn unregistered_type_fails_naming_the_type() {
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        struct Unregistered {
            value: u8,
        }

        let serializer = serializer();
        let err = serializer
            .serialize(&Unregistered { value: 1 })
            .unwrap_err();
        assert!(err.is_serialization());
        assert!(err.subject().contains("Unregistered"));
        assert!(err.reason().contains("Unregistered"));
    }

    #[test]
    fn unknown_wire_identifier_fails_naming_it() {
        let serializer = serializer();
        let err = serializer
            .deserialize("{}", "order.cancelled")
            .unwrap_err();
        assert!(err.is_deserialization());
        assert_eq!(err.subject(), "order.cancelled");
        assert!(err.reason().contains("order.cancelled"));
    }

    #[test]
    fn malformed_json_fails_with_cause() {
        let serializer = serializer();
        let err = serializer
            .deserialize("{not json", "order.placed")
            .unwrap_err();
        assert!(err.is_deserialization());
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn missing_field_fails_with_schema_diagnostic() {
        let serializer = serializer();
        let err = serializer
            .deserialize(r#"{"order_id":"42"}"#, "order.placed")
            .unwrap_err();
        assert!(err.is_deserialization());
        assert!(err.reason().contains("quantity"));
    }

    #[test]
    fn wrong_shape_field_fails() {
        let serializer = serializer();
        let err = serializer
            .deserialize(r#"{"order_id":"42","quantity":"three"}"#, "order.placed")
            .unwrap_err();
        assert!(err.is_deserialization());
    }
}
