//! Object-safe message traits
//!
//! [`Message`] is the trait every wire message satisfies. It is
//! blanket-implemented for any serde-serializable value type, so message
//! structs only need the usual derives:
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use types::MessageType;
//!
//! #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
//! struct OrderPlaced {
//!     order_id: String,
//! }
//!
//! impl MessageType for OrderPlaced {
//!     const WIRE_NAME: &'static str = "order.placed";
//! }
//! ```
//!
//! [`MessageType`] declares a stable wire name for a message type at
//! compile time; the codec registry reads it during boot registration.

use std::any::Any;
use std::fmt;

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Trait object boundary for wire messages
///
/// Blanket-implemented for every `T: Serialize + DeserializeOwned +
/// PartialEq + Debug + Send + Sync + 'static`; do not implement manually.
pub trait Message: Any + Send + Sync + fmt::Debug {
    /// Downcast access for type-directed dispatch
    fn as_any(&self) -> &dyn Any;

    /// Fully-qualified Rust type name of the concrete message
    fn type_name(&self) -> &'static str;

    /// Value equality across the trait-object boundary
    ///
    /// Returns `false` when `other` is a different concrete type.
    fn eq_message(&self, other: &dyn Message) -> bool;
}

impl<T> Message for T
where
    T: Any + Send + Sync + fmt::Debug + PartialEq + Serialize + DeserializeOwned,
{
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }

    fn eq_message(&self, other: &dyn Message) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .map_or(false, |other| self == other)
    }
}

/// Declares a stable wire-format type name for a message type
///
/// The registry's `register_declared` reads this constant instead of
/// scanning runtime metadata, so the binding is checked at compile time.
pub trait MessageType {
    /// Stable wire identifier, independent of the Rust type path
    const WIRE_NAME: &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Ping {
        seq: u64,
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Pong {
        seq: u64,
    }

    #[test]
    fn type_name_is_fully_qualified() {
        let ping = Ping { seq: 1 };
        assert!(Message::type_name(&ping).ends_with("tests::Ping"));
    }

    #[test]
    fn eq_message_compares_values() {
        let a = Ping { seq: 7 };
        let b = Ping { seq: 7 };
        let c = Ping { seq: 8 };
        assert!(a.eq_message(&b));
        assert!(!a.eq_message(&c));
    }

    #[test]
    fn eq_message_rejects_other_types() {
        let ping = Ping { seq: 7 };
        let pong = Pong { seq: 7 };
        assert!(!ping.eq_message(&pong));
    }
}
