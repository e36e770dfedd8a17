//! # Courier Wire-Format Codec
//!
//! ## Purpose
//!
//! This crate contains the "Rules" layer of the Courier actor messaging
//! system: everything needed to turn messages and their routing envelopes
//! into wire documents and back.
//! - Message type registry with stable wire identifiers
//! - Pluggable message codecs (binary and reflective JSON)
//! - Envelope document encoding/decoding
//! - Codec error taxonomy
//!
//! ## Architecture Role
//!
//! ```text
//! libs/types → [codec] → transport
//!     ↑           ↓          ↓
//! Pure Data   Wire Rules   Sockets
//! Structures  Encoding/    Connections
//! Envelope    Decoding
//! ```
//!
//! ## Usage
//!
//! Build the registry once at boot, freeze it, then share the codecs:
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use codec::{DefaultEnvelopeSerializer, EnvelopeSerializer, JsonMessageSerializer, TypeRegistry};
//! use serde::{Deserialize, Serialize};
//! use types::{ActorPath, Envelope};
//!
//! #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
//! struct OrderPlaced {
//!     order_id: String,
//! }
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut builder = TypeRegistry::builder();
//! builder.register::<OrderPlaced>("order.placed")?;
//! let registry = Arc::new(builder.build());
//!
//! let serializer =
//!     DefaultEnvelopeSerializer::new(Arc::new(JsonMessageSerializer::new(registry)));
//!
//! let envelope = Envelope::of(
//!     OrderPlaced { order_id: "42".to_string() },
//!     ActorPath::from_string("/user/api")?,
//!     ActorPath::from_string("/user/orders/42")?,
//! );
//! let bytes = serializer.serialize(&envelope)?;
//! assert_eq!(serializer.deserialize(&bytes)?, envelope);
//! # Ok(())
//! # }
//! ```
//!
//! ## What This Crate Does NOT Contain
//! - Transport or persistence logic
//! - Mailbox/scheduling behavior
//! - Schema evolution beyond exact field matching

pub mod binary;
pub mod envelope;
pub mod error;
pub mod json;
pub mod message;
pub mod registry;

pub use binary::BinaryMessageSerializer;
pub use envelope::{DefaultEnvelopeSerializer, EnvelopeSerializer};
pub use error::{ErrorCause, SerializationError, SerializationResult, TypeRegistryError};
pub use json::JsonMessageSerializer;
pub use message::MessageSerializer;
pub use registry::{TypeRegistry, TypeRegistryBuilder};
