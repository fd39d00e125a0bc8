//! DHCP message deserialization module.

use log::trace;

use crate::constants::*;
use crate::error::DecodeError;
use crate::field::FieldValue;
use crate::named::{HARDWARE_LENGTHS, HARDWARE_TYPES, OP_CODES};

use super::{Header, Message, Options};

/// The byte span of one fixed field within the header region.
macro_rules! field_bytes (
    ($header:expr, $offset:expr, $size:expr) => (
        &$header[$offset..$offset + $size]
    );
);

impl Message {
    /// Decodes the `length` bytes of `data` starting at `offset`.
    ///
    /// # Errors
    /// [`DecodeError::OutOfBounds`] if `offset + length` exceeds the buffer,
    /// [`DecodeError::TooShort`] if `length` cannot hold the 236-byte fixed
    /// header, [`DecodeError::InvalidLength`] if the computed payload length
    /// is negative.
    pub fn decode(data: &[u8], offset: usize, length: usize) -> Result<Self, DecodeError> {
        let end = offset
            .checked_add(length)
            .filter(|&end| end <= data.len())
            .ok_or(DecodeError::OutOfBounds {
                buffer: data.len(),
                offset,
                length,
            })?;
        if length < OFFSET_OPTIONS {
            return Err(DecodeError::TooShort {
                required: OFFSET_OPTIONS,
                length,
            });
        }
        if data
            .len()
            .checked_sub(length)
            .and_then(|rest| rest.checked_sub(offset))
            .is_none()
        {
            return Err(DecodeError::InvalidLength {
                buffer: data.len(),
                offset,
                header: length,
            });
        }

        let raw = &data[offset..end];
        let header = Header {
            op: OP_CODES.lookup(raw[OFFSET_OP_CODE]),
            htype: HARDWARE_TYPES.lookup(raw[OFFSET_HARDWARE_TYPE]),
            hlen: HARDWARE_LENGTHS.lookup(raw[OFFSET_HARDWARE_ADDRESS_LENGTH]),
            hops: FieldValue::integer(field_bytes!(raw, OFFSET_HOPS, SIZE_HOPS)),
            xid: FieldValue::integer(field_bytes!(raw, OFFSET_TRANSACTION_ID, SIZE_TRANSACTION_ID)),
            secs: FieldValue::integer(field_bytes!(raw, OFFSET_SECONDS, SIZE_SECONDS)),
            flags: FieldValue::integer(field_bytes!(raw, OFFSET_FLAGS, SIZE_FLAGS)),
            ciaddr: FieldValue::ipv4(field_bytes!(raw, OFFSET_CLIENT_IP_ADDRESS, SIZE_IP_ADDRESS)),
            yiaddr: FieldValue::ipv4(field_bytes!(raw, OFFSET_YOUR_IP_ADDRESS, SIZE_IP_ADDRESS)),
            siaddr: FieldValue::ipv4(field_bytes!(raw, OFFSET_SERVER_IP_ADDRESS, SIZE_IP_ADDRESS)),
            giaddr: FieldValue::ipv4(field_bytes!(raw, OFFSET_GATEWAY_IP_ADDRESS, SIZE_IP_ADDRESS)),
            chaddr: FieldValue::mac(field_bytes!(
                raw,
                OFFSET_HARDWARE_ADDRESS,
                SIZE_HARDWARE_ADDRESS
            )),
            sname: FieldValue::text(field_bytes!(raw, OFFSET_SERVER_NAME, SIZE_SERVER_NAME)),
            file: FieldValue::text(field_bytes!(raw, OFFSET_BOOT_FILENAME, SIZE_BOOT_FILENAME)),
        };

        let trailer = &raw[OFFSET_OPTIONS..];
        let options = if trailer.is_empty() {
            None
        } else {
            Some(Options::new(trailer.to_vec()))
        };

        trace!(
            "decoded DHCP message: op={}, xid={}, options={} bytes",
            header.op,
            header.xid(),
            trailer.len(),
        );

        Ok(Message { header, options })
    }
}
