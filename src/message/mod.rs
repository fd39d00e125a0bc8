//! The DHCP message: fixed header plus opaque options span.

mod builder;
mod deserializer;
mod serializer;

use std::fmt;
use std::net::Ipv4Addr;

use eui48::MacAddress;

use crate::constants::*;
use crate::field::{hex_string, FieldValue};
use crate::named::NamedByte;

pub use self::builder::Builder;

/// The 14 fixed-position fields of RFC 2131 figure 1, 236 bytes in total.
///
/// Each field keeps the raw bytes it was sliced from; the enumerated
/// fields additionally carry the descriptor their registry resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub(crate) op: NamedByte,
    pub(crate) htype: NamedByte,
    pub(crate) hlen: NamedByte,
    pub(crate) hops: FieldValue,
    pub(crate) xid: FieldValue,
    pub(crate) secs: FieldValue,
    pub(crate) flags: FieldValue,
    pub(crate) ciaddr: FieldValue,
    pub(crate) yiaddr: FieldValue,
    pub(crate) siaddr: FieldValue,
    pub(crate) giaddr: FieldValue,
    pub(crate) chaddr: FieldValue,
    pub(crate) sname: FieldValue,
    pub(crate) file: FieldValue,
}

impl Header {
    /// The fixed header size in bytes.
    pub fn len(&self) -> usize {
        OFFSET_OPTIONS
    }

    /// Message op code descriptor (1 = BOOTREQUEST, 2 = BOOTREPLY).
    pub fn op(&self) -> &NamedByte {
        &self.op
    }

    /// Hardware type descriptor.
    pub fn htype(&self) -> &NamedByte {
        &self.htype
    }

    /// Hardware address length descriptor.
    pub fn hlen(&self) -> &NamedByte {
        &self.hlen
    }

    /// Relay agent hop count.
    pub fn hops(&self) -> u8 {
        self.hops.as_u32() as u8
    }

    /// Transaction ID.
    pub fn xid(&self) -> u32 {
        self.xid.as_u32()
    }

    /// Seconds elapsed since the client began acquisition.
    pub fn secs(&self) -> u16 {
        self.secs.as_u32() as u16
    }

    /// The raw `flags` field.
    pub fn flags(&self) -> u16 {
        self.flags.as_u32() as u16
    }

    /// Whether the broadcast bit of `flags` is set.
    pub fn is_broadcast(&self) -> bool {
        self.flags() & FLAG_BROADCAST != 0
    }

    /// Client IP address.
    pub fn ciaddr(&self) -> Ipv4Addr {
        ipv4(&self.ciaddr)
    }

    /// 'your' (client) IP address.
    pub fn yiaddr(&self) -> Ipv4Addr {
        ipv4(&self.yiaddr)
    }

    /// Next-server IP address.
    pub fn siaddr(&self) -> Ipv4Addr {
        ipv4(&self.siaddr)
    }

    /// Relay agent IP address.
    pub fn giaddr(&self) -> Ipv4Addr {
        ipv4(&self.giaddr)
    }

    /// Client hardware address, read as MAC-48.
    pub fn chaddr(&self) -> MacAddress {
        match MacAddress::from_bytes(&self.chaddr.raw()[..eui48::EUI48LEN]) {
            Ok(address) => address,
            Err(_) => panic!("MacAddress::from_bytes must always succeed"),
        }
    }

    /// Server host name, truncated at the first NUL.
    pub fn sname(&self) -> String {
        self.sname.display()
    }

    /// Boot file name, truncated at the first NUL.
    pub fn file(&self) -> String {
        self.file.display()
    }
}

fn ipv4(field: &FieldValue) -> Ipv4Addr {
    let raw = field.raw();
    Ipv4Addr::new(raw[0], raw[1], raw[2], raw[3])
}

/// The variable-length trailer starting at offset 236.
///
/// The TLV content is deliberately uninterpreted; the span is only
/// validated for bounds and carried through encode/decode verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    raw: Vec<u8>,
}

impl Options {
    pub(crate) fn new(raw: Vec<u8>) -> Self {
        Options { raw }
    }

    /// The raw option bytes.
    pub fn raw(&self) -> &[u8] {
        &self.raw
    }

    pub fn len(&self) -> usize {
        self.raw.len()
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }
}

/// A decoded DHCP message.
///
/// Instances only come out of [`Message::decode`] or out of a
/// [`Builder`], which re-encodes and decodes again, so every live message
/// has passed bounds validation exactly once. Messages are never mutated
/// in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub(crate) header: Header,
    pub(crate) options: Option<Options>,
}

impl Message {
    /// The fixed header.
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// The options span, absent when the buffer ended at the fixed header.
    pub fn options(&self) -> Option<&Options> {
        self.options.as_ref()
    }

    /// Total message size in bytes.
    pub fn len(&self) -> usize {
        self.header.len() + self.options.as_ref().map_or(0, Options::len)
    }

    /// Captures the message fields into a mutable [`Builder`].
    pub fn builder(&self) -> Builder {
        Builder::from_message(self)
    }

    /// The fixed-width diagnostic report, one line per field.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

macro_rules! field_line (
    ($f:expr, $abbrev:expr, $label:expr, $field:expr) => (
        writeln!(
            $f,
            "  {:<9} {:<15}: {} ({})",
            $abbrev,
            $label,
            $field.display(),
            hex_string($field.raw()),
        )?;
    );
);

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let header = &self.header;
        writeln!(f, "[DHCP Packet ({} bytes)]", self.len())?;
        writeln!(
            f,
            "  {:<9} {:<15}: {} ({})",
            "(op)",
            "OP Code",
            header.op,
            hex_string(&[header.op.value()]),
        )?;
        writeln!(
            f,
            "  {:<9} {:<15}: {} ({})",
            "(htype)",
            "H/W Type",
            header.htype,
            hex_string(&[header.htype.value()]),
        )?;
        writeln!(
            f,
            "  {:<9} {:<15}: {} ({})",
            "(hlen)",
            "H/W Addr. Len",
            header.hlen,
            hex_string(&[header.hlen.value()]),
        )?;
        field_line!(f, "(hops)", "HOPS", header.hops);
        field_line!(f, "(xid)", "Transaction ID", header.xid);
        field_line!(f, "(sec)", "Seconds", header.secs);
        field_line!(f, "(flags)", "Flags", header.flags);
        field_line!(f, "(ciaddr)", "Client IP", header.ciaddr);
        field_line!(f, "(yiaddr)", "Your IP", header.yiaddr);
        field_line!(f, "(siaddr)", "Server IP", header.siaddr);
        field_line!(f, "(giaddr)", "Gateway IP", header.giaddr);
        field_line!(f, "(chaddr)", "Client H/W", header.chaddr);
        field_line!(f, "(sname)", "Server Name", header.sname);
        field_line!(f, "(file)", "Boot File Name", header.file);
        match &self.options {
            Some(options) => writeln!(
                f,
                "  {:<9} {:<15}: {} bytes, {}",
                "(options)",
                "Options",
                options.len(),
                hex_string(options.raw()),
            )?,
            None => writeln!(f, "  {:<9} {:<15}: 0 bytes", "(options)", "Options")?,
        }
        Ok(())
    }
}
