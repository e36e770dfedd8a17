//! Message type registry
//!
//! Bidirectional mapping between concrete message types and their stable
//! wire-format identifiers. Each registration also captures monomorphized
//! encode/decode functions for both codec variants, so the serializers
//! never need runtime reflection: looking up a wire name yields everything
//! required to reconstruct the typed value.
//!
//! The registry follows a build-once discipline: populate a
//! [`TypeRegistryBuilder`] during single-threaded boot, then freeze it
//! with [`TypeRegistryBuilder::build`]. The frozen [`TypeRegistry`] has no
//! interior mutability and is shared across threads behind an `Arc`.

use std::any::TypeId;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use types::{Message, MessageType};

use crate::error::{ErrorCause, TypeRegistryError};

type EncodeJsonFn = Box<dyn Fn(&dyn Message) -> Result<String, ErrorCause> + Send + Sync>;
type DecodeJsonFn = Box<dyn Fn(&str) -> Result<Arc<dyn Message>, ErrorCause> + Send + Sync>;
type EncodeBinaryFn = Box<dyn Fn(&dyn Message) -> Result<Vec<u8>, ErrorCause> + Send + Sync>;
type DecodeBinaryFn = Box<dyn Fn(&[u8]) -> Result<Arc<dyn Message>, ErrorCause> + Send + Sync>;

/// One registered message type with its codec functions
pub(crate) struct TypeEntry {
    type_id: TypeId,
    type_name: &'static str,
    wire_name: String,
    pub(crate) encode_json: EncodeJsonFn,
    pub(crate) decode_json: DecodeJsonFn,
    pub(crate) encode_binary: EncodeBinaryFn,
    pub(crate) decode_binary: DecodeBinaryFn,
}

impl TypeEntry {
    pub(crate) fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub(crate) fn wire_name(&self) -> &str {
        &self.wire_name
    }
}

fn downcast<T: Message>(message: &dyn Message) -> Result<&T, ErrorCause> {
    message.as_any().downcast_ref::<T>().ok_or_else(|| {
        ErrorCause::from(format!(
            "message is {}, registry entry is for {}",
            message.type_name(),
            std::any::type_name::<T>()
        ))
    })
}

fn entry_of<T>(wire_name: String) -> TypeEntry
where
    T: Message + Serialize + DeserializeOwned,
{
    TypeEntry {
        type_id: TypeId::of::<T>(),
        type_name: std::any::type_name::<T>(),
        wire_name,
        encode_json: Box::new(|message| {
            let typed = downcast::<T>(message)?;
            serde_json::to_string(typed).map_err(ErrorCause::from)
        }),
        decode_json: Box::new(|data| {
            serde_json::from_str::<T>(data)
                .map(|value| Arc::new(value) as Arc<dyn Message>)
                .map_err(ErrorCause::from)
        }),
        encode_binary: Box::new(|message| {
            let typed = downcast::<T>(message)?;
            bincode::serialize(typed).map_err(ErrorCause::from)
        }),
        decode_binary: Box::new(|data| {
            bincode::deserialize::<T>(data)
                .map(|value| Arc::new(value) as Arc<dyn Message>)
                .map_err(ErrorCause::from)
        }),
    }
}

/// Mutable registration surface used during the boot phase
#[derive(Default)]
pub struct TypeRegistryBuilder {
    by_type_id: HashMap<TypeId, Arc<TypeEntry>>,
    by_wire_name: HashMap<String, Arc<TypeEntry>>,
    by_type_name: HashMap<&'static str, Arc<TypeEntry>>,
}

impl TypeRegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `T` to `wire_name` in both directions
    ///
    /// # Errors
    ///
    /// Returns [`TypeRegistryError::WireNameTaken`] when the wire name is
    /// already bound (including to `T` itself) and
    /// [`TypeRegistryError::TypeAlreadyRegistered`] when `T` already has a
    /// wire name. Both indicate a registration wiring bug; callers are
    /// expected to fail boot rather than recover.
    pub fn register<T>(
        &mut self,
        wire_name: impl Into<String>,
    ) -> Result<&mut Self, TypeRegistryError>
    where
        T: Message + Serialize + DeserializeOwned,
    {
        let wire_name = wire_name.into();
        if let Some(existing) = self.by_wire_name.get(&wire_name) {
            return Err(TypeRegistryError::WireNameTaken {
                wire_name,
                existing_type: existing.type_name,
            });
        }
        if let Some(existing) = self.by_type_id.get(&TypeId::of::<T>()) {
            return Err(TypeRegistryError::TypeAlreadyRegistered {
                type_name: existing.type_name,
                wire_name: existing.wire_name.clone(),
            });
        }

        let entry = Arc::new(entry_of::<T>(wire_name));
        debug!(
            wire_name = %entry.wire_name,
            type_name = entry.type_name,
            "registered message type"
        );
        self.by_wire_name
            .insert(entry.wire_name.clone(), Arc::clone(&entry));
        self.by_type_name.insert(entry.type_name, Arc::clone(&entry));
        self.by_type_id.insert(entry.type_id, entry);
        Ok(self)
    }

    /// Bind `T` under its compile-time declared wire name
    ///
    /// Reads [`MessageType::WIRE_NAME`]; a type without a declaration
    /// cannot satisfy the bound, so the missing-declaration case is a
    /// compile error rather than a runtime one.
    pub fn register_declared<T>(&mut self) -> Result<&mut Self, TypeRegistryError>
    where
        T: Message + MessageType + Serialize + DeserializeOwned,
    {
        self.register::<T>(T::WIRE_NAME)
    }

    /// Freeze the registry for concurrent read-only use
    pub fn build(self) -> TypeRegistry {
        TypeRegistry {
            by_type_id: self.by_type_id,
            by_wire_name: self.by_wire_name,
            by_type_name: self.by_type_name,
        }
    }
}

/// Frozen bijective map between message types and wire identifiers
///
/// All lookups are pure and return `None` for unregistered inputs; absent
/// is an ordinary result here, never an error.
pub struct TypeRegistry {
    by_type_id: HashMap<TypeId, Arc<TypeEntry>>,
    by_wire_name: HashMap<String, Arc<TypeEntry>>,
    by_type_name: HashMap<&'static str, Arc<TypeEntry>>,
}

impl TypeRegistry {
    /// Start a boot-phase registration builder
    pub fn builder() -> TypeRegistryBuilder {
        TypeRegistryBuilder::new()
    }

    /// Wire name registered for the message's concrete type
    pub fn wire_name_for(&self, message: &dyn Message) -> Option<&str> {
        self.by_type_id
            .get(&message.as_any().type_id())
            .map(|entry| entry.wire_name.as_str())
    }

    /// Wire name registered for `T`
    pub fn wire_name_of<T: Message>(&self) -> Option<&str> {
        self.by_type_id
            .get(&TypeId::of::<T>())
            .map(|entry| entry.wire_name.as_str())
    }

    /// Type descriptor registered under `wire_name`
    pub fn type_id_for(&self, wire_name: &str) -> Option<TypeId> {
        self.by_wire_name.get(wire_name).map(|entry| entry.type_id)
    }

    /// Rust type name registered under `wire_name`
    pub fn type_name_for(&self, wire_name: &str) -> Option<&'static str> {
        self.by_wire_name
            .get(wire_name)
            .map(|entry| entry.type_name)
    }

    pub(crate) fn entry_for_message(&self, message: &dyn Message) -> Option<&TypeEntry> {
        self.by_type_id
            .get(&message.as_any().type_id())
            .map(Arc::as_ref)
    }

    pub(crate) fn entry_for_wire_name(&self, wire_name: &str) -> Option<&TypeEntry> {
        self.by_wire_name.get(wire_name).map(Arc::as_ref)
    }

    pub(crate) fn entry_for_type_name(&self, type_name: &str) -> Option<&TypeEntry> {
        self.by_type_name.get(type_name).map(Arc::as_ref)
    }

    /// Number of registered message types
    pub fn len(&self) -> usize {
        self.by_type_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_type_id.is_empty()
    }
}

impl fmt::Debug for TypeRegistryBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeRegistryBuilder")
            .field("types", &self.by_wire_name.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl fmt::Debug for TypeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeRegistry")
            .field("types", &self.by_wire_name.keys().collect::<Vec<_>>())
            .finish()
    }
}
