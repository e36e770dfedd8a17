//! Envelope wire document codec
//!
//! [`DefaultEnvelopeSerializer`] composes an injected
//! [`MessageSerializer`] with envelope metadata encoding. The wire
//! document is one JSON object:
//!
//! ```json
//! {
//!   "message": "<payload text>",
//!   "messageType": "order.placed",
//!   "metadata": {"trace-id": "abc-123"},
//!   "sender": "/user/api",
//!   "target": "/user/orders/42",
//!   "requestId": "req-1"
//! }
//! ```
//!
//! The optional correlation fields are omitted entirely when absent, so
//! an explicit empty string survives a round trip unchanged. Metadata
//! keys keep their document order on both encode and decode.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::trace;

use types::{ActorPath, Envelope, Message, Metadata};

use crate::error::{SerializationError, SerializationResult};
use crate::message::MessageSerializer;

/// Subject tag for failures of the envelope document itself
const ENVELOPE_SUBJECT: &str = "Envelope";

/// Serializes and deserializes whole envelopes
pub trait EnvelopeSerializer: Send + Sync {
    /// Encode an envelope into its wire document bytes
    fn serialize(&self, envelope: &Envelope) -> SerializationResult<Vec<u8>>;

    /// Decode wire document bytes into a fresh envelope
    fn deserialize(&self, data: &[u8]) -> SerializationResult<Envelope>;
}

/// On-the-wire envelope document
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireDocument {
    message: String,
    message_type: String,
    metadata: Metadata,
    sender: String,
    target: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    request_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    correlation_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    causation_id: Option<String>,
}

/// Default envelope codec wrapping an injected message codec
pub struct DefaultEnvelopeSerializer {
    message_serializer: Arc<dyn MessageSerializer>,
}

impl DefaultEnvelopeSerializer {
    pub fn new(message_serializer: Arc<dyn MessageSerializer>) -> Self {
        Self { message_serializer }
    }
}

impl EnvelopeSerializer for DefaultEnvelopeSerializer {
    fn serialize(&self, envelope: &Envelope) -> SerializationResult<Vec<u8>> {
        // Message failures already name the message type; pass them through.
        let payload = self.message_serializer.serialize(envelope.message())?;
        let message_type = self.message_serializer.wire_type_of(envelope.message())?;

        let document = WireDocument {
            message: payload,
            message_type,
            metadata: envelope.metadata().clone(),
            sender: envelope.sender().to_string(),
            target: envelope.target().to_string(),
            request_id: envelope.request_id().map(str::to_string),
            correlation_id: envelope.correlation_id().map(str::to_string),
            causation_id: envelope.causation_id().map(str::to_string),
        };

        let bytes = serde_json::to_vec(&document).map_err(|cause| {
            SerializationError::serialization_with(
                envelope.message().type_name(),
                format!("failed to encode envelope: {}", cause),
                cause,
            )
        })?;
        trace!(
            message_type = %document.message_type,
            target = %document.target,
            size = bytes.len(),
            "encoded envelope"
        );
        Ok(bytes)
    }

    fn deserialize(&self, data: &[u8]) -> SerializationResult<Envelope> {
        let document: WireDocument = serde_json::from_slice(data).map_err(|cause| {
            SerializationError::deserialization_with(
                ENVELOPE_SUBJECT,
                format!("failed to decode envelope: {}", cause),
                cause,
            )
        })?;

        let message: Arc<dyn Message> = self
            .message_serializer
            .deserialize(&document.message, &document.message_type)?;

        let sender = ActorPath::from_string(&document.sender).map_err(|cause| {
            SerializationError::deserialization_with(
                ENVELOPE_SUBJECT,
                format!("invalid sender path '{}': {}", document.sender, cause),
                cause,
            )
        })?;
        let target = ActorPath::from_string(&document.target).map_err(|cause| {
            SerializationError::deserialization_with(
                ENVELOPE_SUBJECT,
                format!("invalid target path '{}': {}", document.target, cause),
                cause,
            )
        })?;

        trace!(message_type = %document.message_type, target = %document.target, "decoded envelope");
        Ok(Envelope::new(
            message,
            sender,
            target,
            document.metadata,
            document.request_id,
            document.correlation_id,
            document.causation_id,
        ))
    }
}
