//! Message serialization strategy boundary

use std::sync::Arc;

use types::Message;

use crate::error::SerializationResult;

/// Encodes and decodes a single message payload
///
/// Implementations are stateless after construction and safe for
/// unsynchronized concurrent use. Payloads are text so they embed
/// directly into the JSON envelope document; codecs producing raw bytes
/// are responsible for making their output string-safe.
pub trait MessageSerializer: Send + Sync {
    /// Encode a message into its payload text
    fn serialize(&self, message: &dyn Message) -> SerializationResult<String>;

    /// Decode payload text back into a typed message
    ///
    /// `wire_type` is the self-describing key recorded next to the
    /// payload, as produced by [`MessageSerializer::wire_type_of`].
    fn deserialize(&self, data: &str, wire_type: &str) -> SerializationResult<Arc<dyn Message>>;

    /// The self-describing type key recorded in the envelope document
    ///
    /// The binary codec reports the concrete Rust type name; the JSON
    /// codec reports the registered wire identifier.
    fn wire_type_of(&self, message: &dyn Message) -> SerializationResult<String>;
}
