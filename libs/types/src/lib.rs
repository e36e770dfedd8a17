//! Pure data structures for the Courier actor messaging system
//!
//! This crate contains the "Pure Data Structures" layer: actor addresses,
//! message envelopes, and the object-safe message traits the codec layer
//! builds on. It deliberately contains no encoding rules.
//!
//! ## Architecture Role
//!
//! ```text
//! libs/types → libs/codec → transport
//!     ↑            ↓            ↓
//! Pure Data    Wire Rules    Sockets
//! Structures   Encoding/     Connections
//! Envelope     Decoding
//! ActorPath
//! ```
//!
//! ## What This Crate Contains
//! - **ActorPath**: hierarchical textual actor addresses
//! - **Envelope**: immutable routing wrapper around a message
//! - **Message**: object-safe trait every wire message satisfies
//! - **MessageType**: static wire-name declaration for message types
//!
//! ## What This Crate Does NOT Contain
//! - Encoding/decoding logic (belongs in libs/codec)
//! - Mailbox or scheduling behavior (belongs in the runtime)

pub mod actor_path;
pub mod envelope;
pub mod message;

pub use actor_path::{ActorPath, ActorPathError};
pub use envelope::{Envelope, Metadata};
pub use message::{Message, MessageType};
