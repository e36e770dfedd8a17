//! Routing envelopes
//!
//! An [`Envelope`] wraps one message together with the routing metadata
//! needed to move it between actors: sender and target addresses, an
//! insertion-ordered string metadata map, and optional correlation
//! identifiers. Envelopes are immutable values; the codec layer only ever
//! encodes them or constructs fresh equivalents on decode.

use std::sync::Arc;

use indexmap::IndexMap;

use crate::actor_path::ActorPath;
use crate::message::Message;

/// Insertion-ordered string metadata attached to an envelope
pub type Metadata = IndexMap<String, String>;

/// Immutable routing wrapper around a single message
#[derive(Debug, Clone)]
pub struct Envelope {
    message: Arc<dyn Message>,
    sender: ActorPath,
    target: ActorPath,
    metadata: Metadata,
    request_id: Option<String>,
    correlation_id: Option<String>,
    causation_id: Option<String>,
}

impl Envelope {
    /// Wrap a message with sender and target, no metadata
    pub fn of(message: impl Message, sender: ActorPath, target: ActorPath) -> Self {
        Self::new(Arc::new(message), sender, target, Metadata::new(), None, None, None)
    }

    /// Construct an envelope with every field populated
    pub fn new(
        message: Arc<dyn Message>,
        sender: ActorPath,
        target: ActorPath,
        metadata: Metadata,
        request_id: Option<String>,
        correlation_id: Option<String>,
        causation_id: Option<String>,
    ) -> Self {
        Self {
            message,
            sender,
            target,
            metadata,
            request_id,
            correlation_id,
            causation_id,
        }
    }

    /// Add one metadata entry, keeping insertion order
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Set the request correlation identifier
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }

    /// Set the correlation identifier
    pub fn with_correlation_id(mut self, correlation_id: impl Into<String>) -> Self {
        self.correlation_id = Some(correlation_id.into());
        self
    }

    /// Set the causation identifier
    pub fn with_causation_id(mut self, causation_id: impl Into<String>) -> Self {
        self.causation_id = Some(causation_id.into());
        self
    }

    /// The wrapped message
    pub fn message(&self) -> &dyn Message {
        self.message.as_ref()
    }

    /// Shared handle to the wrapped message
    pub fn message_handle(&self) -> Arc<dyn Message> {
        Arc::clone(&self.message)
    }

    /// Address the message came from
    pub fn sender(&self) -> &ActorPath {
        &self.sender
    }

    /// Address the message is routed to
    pub fn target(&self) -> &ActorPath {
        &self.target
    }

    /// Metadata entries in insertion order
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    pub fn correlation_id(&self) -> Option<&str> {
        self.correlation_id.as_deref()
    }

    pub fn causation_id(&self) -> Option<&str> {
        self.causation_id.as_deref()
    }
}

impl PartialEq for Envelope {
    fn eq(&self, other: &Self) -> bool {
        // IndexMap equality ignores order; envelope equality does not.
        self.message.eq_message(other.message.as_ref())
            && self.sender == other.sender
            && self.target == other.target
            && self.metadata.iter().eq(other.metadata.iter())
            && self.request_id == other.request_id
            && self.correlation_id == other.correlation_id
            && self.causation_id == other.causation_id
    }
}
