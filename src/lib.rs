//! A wire codec for the DHCP message format of RFC 2131.
//!
//! The decoder turns a raw byte buffer into a typed [`Message`]; the
//! [`Builder`] re-encodes structured fields into an exact byte buffer.
//! Field interpretation is strictly structural: the fixed 236-byte header
//! is sliced per the RFC 2131 layout table, the variable options span is
//! carried through as opaque bytes, and DHCP semantics (message types,
//! required options, leases) are left to the caller.
//!
//! Callers are expected to hand the codec the UDP payload of a frame on
//! the BOOTP ports; capture, demultiplexing and listener dispatch live
//! outside this crate.

pub mod constants;

mod error;
mod field;
mod message;
mod named;

pub use self::error::DecodeError;
pub use self::field::FieldValue;
pub use self::message::{Builder, Header, Message, Options};
pub use self::named::{NamedByte, NamedByteRegistry, HARDWARE_LENGTHS, HARDWARE_TYPES, OP_CODES};
