//! Enumerated byte values and their registries.
//!
//! The `op`, `htype` and `hlen` fields carry bytes whose meaning comes from
//! IANA assignments rather than from the wire layout. Each of those field
//! domains has a process-wide registry mapping a raw byte to a canonical
//! name. Lookups are total: an unregistered byte resolves to a transient
//! descriptor named with its hex rendering, so decoding never fails on an
//! exotic value.

use std::collections::HashMap;
use std::fmt;
use std::sync::RwLock;

use lazy_static::lazy_static;

/// A raw byte paired with its canonical display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedByte {
    value: u8,
    name: String,
}

impl NamedByte {
    pub fn new<S: Into<String>>(value: u8, name: S) -> Self {
        NamedByte {
            value,
            name: name.into(),
        }
    }

    /// The raw wire value.
    pub fn value(&self) -> u8 {
        self.value
    }

    /// The canonical name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for NamedByte {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A value-to-descriptor table for one field domain.
///
/// The table is shared process-wide and read-mostly, so it is guarded by a
/// [`RwLock`]; registrations from any thread are visible to all subsequent
/// lookups, last write wins.
pub struct NamedByteRegistry {
    table: RwLock<HashMap<u8, NamedByte>>,
}

impl NamedByteRegistry {
    /// Creates a registry pre-seeded with well-known assignments.
    pub fn seeded(entries: Vec<NamedByte>) -> Self {
        let mut table = HashMap::with_capacity(entries.len());
        for entry in entries {
            table.insert(entry.value(), entry);
        }
        NamedByteRegistry {
            table: RwLock::new(table),
        }
    }

    /// Resolves a raw byte to its descriptor.
    ///
    /// Never fails: a byte with no registration gets a transient descriptor
    /// whose name is its two-digit uppercase hex rendering, e.g. `0x3F`.
    pub fn lookup(&self, value: u8) -> NamedByte {
        let table = self.table.read().unwrap_or_else(|e| e.into_inner());
        match table.get(&value) {
            Some(entry) => entry.clone(),
            None => NamedByte::new(value, format!("0x{:02X}", value)),
        }
    }

    /// Inserts or overwrites a registration, returning the descriptor it
    /// displaced, if any.
    pub fn register(&self, entry: NamedByte) -> Option<NamedByte> {
        let mut table = self.table.write().unwrap_or_else(|e| e.into_inner());
        table.insert(entry.value(), entry)
    }
}

lazy_static! {
    /// The `op` field domain. RFC 2131: 1 = BOOTREQUEST, 2 = BOOTREPLY.
    pub static ref OP_CODES: NamedByteRegistry = NamedByteRegistry::seeded(vec![
        NamedByte::new(1, "BOOTREQUEST"),
        NamedByte::new(2, "BOOTREPLY"),
    ]);

    /// The `htype` field domain, from the ARP hardware type assignments
    /// (RFC 1700, "Assigned Numbers").
    pub static ref HARDWARE_TYPES: NamedByteRegistry = NamedByteRegistry::seeded(vec![
        NamedByte::new(1, "Ethernet (10Mb)"),
        NamedByte::new(6, "IEEE 802 Networks"),
        NamedByte::new(7, "ARCNET"),
        NamedByte::new(15, "Frame Relay"),
        NamedByte::new(16, "Asynchronous Transmission Mode"),
        NamedByte::new(20, "Serial Line"),
    ]);

    /// The `hlen` field domain. 6 is the MAC-48 length of 10mb ethernet.
    pub static ref HARDWARE_LENGTHS: NamedByteRegistry = NamedByteRegistry::seeded(vec![
        NamedByte::new(6, "10mb ethernet"),
    ]);
}
