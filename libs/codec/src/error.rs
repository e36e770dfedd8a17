//! Codec-level errors for message and envelope processing
//!
//! Every failure surfaced by this crate carries the subject it concerns
//! (a message type name, a wire identifier, or `"Envelope"`), a reason
//! string, and - when an underlying mechanism failed - the original error
//! as `source()`. Registry conflicts are a separate configuration error,
//! not part of the serialization taxonomy.

use thiserror::Error;

/// A boxed lower-level failure retained for diagnostics
pub type ErrorCause = Box<dyn std::error::Error + Send + Sync>;

/// Serialization and deserialization failures
#[derive(Debug, Error)]
pub enum SerializationError {
    /// Encoding a message or envelope document failed
    #[error("failed to serialize {subject}: {reason}")]
    Serialization {
        /// Runtime type name of the value being encoded
        subject: String,
        reason: String,
        #[source]
        source: Option<ErrorCause>,
    },

    /// Decoding bytes into a message, envelope, or path failed
    #[error("failed to deserialize {subject}: {reason}")]
    Deserialization {
        /// Wire identifier, type name, or `"Envelope"`
        subject: String,
        reason: String,
        #[source]
        source: Option<ErrorCause>,
    },
}

impl SerializationError {
    /// Create a serialization error with a plain reason
    pub fn serialization(subject: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Serialization {
            subject: subject.into(),
            reason: reason.into(),
            source: None,
        }
    }

    /// Create a serialization error from an underlying failure
    pub fn serialization_caused_by(subject: impl Into<String>, cause: impl Into<ErrorCause>) -> Self {
        let cause = cause.into();
        Self::Serialization {
            subject: subject.into(),
            reason: cause.to_string(),
            source: Some(cause),
        }
    }

    /// Create a serialization error with its own reason plus the cause
    pub fn serialization_with(
        subject: impl Into<String>,
        reason: impl Into<String>,
        cause: impl Into<ErrorCause>,
    ) -> Self {
        Self::Serialization {
            subject: subject.into(),
            reason: reason.into(),
            source: Some(cause.into()),
        }
    }

    /// Create a deserialization error with a plain reason
    pub fn deserialization(subject: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Deserialization {
            subject: subject.into(),
            reason: reason.into(),
            source: None,
        }
    }

    /// Create a deserialization error from an underlying failure
    pub fn deserialization_caused_by(
        subject: impl Into<String>,
        cause: impl Into<ErrorCause>,
    ) -> Self {
        let cause = cause.into();
        Self::Deserialization {
            subject: subject.into(),
            reason: cause.to_string(),
            source: Some(cause),
        }
    }

    /// Create a deserialization error with its own reason plus the cause
    pub fn deserialization_with(
        subject: impl Into<String>,
        reason: impl Into<String>,
        cause: impl Into<ErrorCause>,
    ) -> Self {
        Self::Deserialization {
            subject: subject.into(),
            reason: reason.into(),
            source: Some(cause.into()),
        }
    }

    /// The message type name, wire identifier, or `"Envelope"` this error concerns
    pub fn subject(&self) -> &str {
        match self {
            Self::Serialization { subject, .. } | Self::Deserialization { subject, .. } => subject,
        }
    }

    /// Human-readable reason, without the subject prefix
    pub fn reason(&self) -> &str {
        match self {
            Self::Serialization { reason, .. } | Self::Deserialization { reason, .. } => reason,
        }
    }

    /// Whether this is a serialization (encode-side) failure
    pub fn is_serialization(&self) -> bool {
        matches!(self, Self::Serialization { .. })
    }

    /// Whether this is a deserialization (decode-side) failure
    pub fn is_deserialization(&self) -> bool {
        matches!(self, Self::Deserialization { .. })
    }
}

/// Result type for codec operations
pub type SerializationResult<T> = std::result::Result<T, SerializationError>;

/// Boot-time registry configuration errors
///
/// These indicate a wiring bug in registration code and are expected to
/// propagate unhandled rather than be caught and retried.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeRegistryError {
    /// The wire name is already bound to another type
    #[error("wire name '{wire_name}' is already registered to type {existing_type}")]
    WireNameTaken {
        wire_name: String,
        existing_type: &'static str,
    },

    /// The type is already bound to a wire name
    #[error("type {type_name} is already registered as '{wire_name}'")]
    TypeAlreadyRegistered {
        type_name: &'static str,
        wire_name: String,
    },
}
