//! The mutable builder for re-encoding messages.

use std::net::Ipv4Addr;

use eui48::MacAddress;

use crate::constants::*;
use crate::field::FieldValue;
use crate::named::NamedByte;

use super::{Header, Message, Options};

/// A mutable copy of a message's fields.
///
/// Setters replace a field with a correctly sized raw-byte form, so a
/// built message can never carry a width the layout table does not allow.
/// `build` re-encodes the fields and decodes the result, keeping the
/// invariant that every live [`Message`] came out of a validated decode.
#[derive(Debug, Clone)]
pub struct Builder {
    op: NamedByte,
    htype: NamedByte,
    hlen: NamedByte,
    hops: FieldValue,
    xid: FieldValue,
    secs: FieldValue,
    flags: FieldValue,
    ciaddr: FieldValue,
    yiaddr: FieldValue,
    siaddr: FieldValue,
    giaddr: FieldValue,
    chaddr: FieldValue,
    sname: FieldValue,
    file: FieldValue,
    options: Option<Vec<u8>>,
}

impl Builder {
    pub(crate) fn from_message(message: &Message) -> Self {
        let header = &message.header;
        Builder {
            op: header.op.clone(),
            htype: header.htype.clone(),
            hlen: header.hlen.clone(),
            hops: header.hops.clone(),
            xid: header.xid.clone(),
            secs: header.secs.clone(),
            flags: header.flags.clone(),
            ciaddr: header.ciaddr.clone(),
            yiaddr: header.yiaddr.clone(),
            siaddr: header.siaddr.clone(),
            giaddr: header.giaddr.clone(),
            chaddr: header.chaddr.clone(),
            sname: header.sname.clone(),
            file: header.file.clone(),
            options: message.options.as_ref().map(|options| options.raw().to_vec()),
        }
    }

    pub fn op(mut self, op: NamedByte) -> Self {
        self.op = op;
        self
    }

    pub fn htype(mut self, htype: NamedByte) -> Self {
        self.htype = htype;
        self
    }

    pub fn hlen(mut self, hlen: NamedByte) -> Self {
        self.hlen = hlen;
        self
    }

    pub fn hops(mut self, hops: u8) -> Self {
        self.hops = FieldValue::integer(&[hops]);
        self
    }

    pub fn xid(mut self, xid: u32) -> Self {
        self.xid = FieldValue::integer(&xid.to_be_bytes());
        self
    }

    pub fn secs(mut self, secs: u16) -> Self {
        self.secs = FieldValue::integer(&secs.to_be_bytes());
        self
    }

    pub fn flags(mut self, flags: u16) -> Self {
        self.flags = FieldValue::integer(&flags.to_be_bytes());
        self
    }

    /// Sets or clears the broadcast bit, leaving the reserved bits alone.
    pub fn broadcast(mut self, is_broadcast: bool) -> Self {
        let flags = self.flags.as_u32() as u16;
        let flags = if is_broadcast {
            flags | FLAG_BROADCAST
        } else {
            flags & !FLAG_BROADCAST
        };
        self.flags = FieldValue::integer(&flags.to_be_bytes());
        self
    }

    pub fn ciaddr(mut self, ciaddr: Ipv4Addr) -> Self {
        self.ciaddr = FieldValue::ipv4(&ciaddr.octets());
        self
    }

    pub fn yiaddr(mut self, yiaddr: Ipv4Addr) -> Self {
        self.yiaddr = FieldValue::ipv4(&yiaddr.octets());
        self
    }

    pub fn siaddr(mut self, siaddr: Ipv4Addr) -> Self {
        self.siaddr = FieldValue::ipv4(&siaddr.octets());
        self
    }

    pub fn giaddr(mut self, giaddr: Ipv4Addr) -> Self {
        self.giaddr = FieldValue::ipv4(&giaddr.octets());
        self
    }

    /// Sets the client hardware address; the 6 MAC-48 bytes are followed
    /// by 10 bytes of padding.
    pub fn chaddr(mut self, chaddr: MacAddress) -> Self {
        let mut raw = [0u8; SIZE_HARDWARE_ADDRESS];
        raw[..eui48::EUI48LEN].copy_from_slice(chaddr.as_bytes());
        self.chaddr = FieldValue::mac(&raw);
        self
    }

    /// Sets the server host name, NUL-padded to 64 bytes and truncated
    /// beyond that.
    pub fn sname(mut self, sname: &str) -> Self {
        self.sname = FieldValue::text(&padded(sname, SIZE_SERVER_NAME));
        self
    }

    /// Sets the boot file name, NUL-padded to 128 bytes and truncated
    /// beyond that.
    pub fn file(mut self, file: &str) -> Self {
        self.file = FieldValue::text(&padded(file, SIZE_BOOT_FILENAME));
        self
    }

    /// Replaces the raw options span; an empty span clears it.
    pub fn options(mut self, options: Vec<u8>) -> Self {
        self.options = if options.is_empty() {
            None
        } else {
            Some(options)
        };
        self
    }

    /// Re-encodes the fields and decodes the result into a fresh message.
    pub fn build(self) -> Message {
        let staged = Message {
            header: Header {
                op: self.op,
                htype: self.htype,
                hlen: self.hlen,
                hops: self.hops,
                xid: self.xid,
                secs: self.secs,
                flags: self.flags,
                ciaddr: self.ciaddr,
                yiaddr: self.yiaddr,
                siaddr: self.siaddr,
                giaddr: self.giaddr,
                chaddr: self.chaddr,
                sname: self.sname,
                file: self.file,
            },
            options: self.options.map(Options::new),
        };
        let raw = staged.to_bytes();
        match Message::decode(&raw, 0, raw.len()) {
            Ok(message) => message,
            Err(_) => panic!("re-decoding an encoded message must always succeed"),
        }
    }
}

fn padded(text: &str, size: usize) -> Vec<u8> {
    let mut raw = vec![0u8; size];
    let taken = text.len().min(size);
    raw[..taken].copy_from_slice(&text.as_bytes()[..taken]);
    raw
}
