//! DHCP message serialization module.

use bytes::BufMut;

use super::Message;

impl Message {
    /// Re-encodes the message into the exact wire bytes.
    ///
    /// The raw-byte form of each of the 14 fixed fields is written in
    /// table order, followed by the raw options span. Field widths match
    /// the layout table by construction, so the output always decodes back
    /// to an equal message.
    pub fn to_bytes(&self) -> Vec<u8> {
        let header = &self.header;
        let mut dst = Vec::with_capacity(self.len());
        dst.put_u8(header.op.value());
        dst.put_u8(header.htype.value());
        dst.put_u8(header.hlen.value());
        dst.put(header.hops.raw());
        dst.put(header.xid.raw());
        dst.put(header.secs.raw());
        dst.put(header.flags.raw());
        dst.put(header.ciaddr.raw());
        dst.put(header.yiaddr.raw());
        dst.put(header.siaddr.raw());
        dst.put(header.giaddr.raw());
        dst.put(header.chaddr.raw());
        dst.put(header.sname.raw());
        dst.put(header.file.raw());
        if let Some(options) = &self.options {
            dst.put(options.raw());
        }
        dst
    }
}
