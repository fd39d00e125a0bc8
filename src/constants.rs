//! The fixed DHCP header layout (RFC 2131, figure 1 and table 1).

/// `op` field size in bytes.
pub const SIZE_OP_CODE: usize = 1;

/// `htype` field size in bytes.
pub const SIZE_HARDWARE_TYPE: usize = 1;

/// `hlen` field size in bytes.
pub const SIZE_HARDWARE_ADDRESS_LENGTH: usize = 1;

/// `hops` field size in bytes.
pub const SIZE_HOPS: usize = 1;

/// `xid` field size in bytes.
pub const SIZE_TRANSACTION_ID: usize = 4;

/// `secs` field size in bytes.
pub const SIZE_SECONDS: usize = 2;

/// `flags` field size in bytes.
pub const SIZE_FLAGS: usize = 2;

/// Size in bytes of each of the four IP address fields.
pub const SIZE_IP_ADDRESS: usize = 4;

/// `chaddr` field size in bytes. Only the first `hlen` bytes are
/// significant; the rest is padding.
pub const SIZE_HARDWARE_ADDRESS: usize = 16;

/// `sname` field size in bytes.
pub const SIZE_SERVER_NAME: usize = 64;

/// `file` field size in bytes.
pub const SIZE_BOOT_FILENAME: usize = 128;

/// The `op` field offset in bytes.
pub const OFFSET_OP_CODE: usize = 0;

/// The `htype` field offset in bytes.
pub const OFFSET_HARDWARE_TYPE: usize = OFFSET_OP_CODE + SIZE_OP_CODE;

/// The `hlen` field offset in bytes.
pub const OFFSET_HARDWARE_ADDRESS_LENGTH: usize = OFFSET_HARDWARE_TYPE + SIZE_HARDWARE_TYPE;

/// The `hops` field offset in bytes.
pub const OFFSET_HOPS: usize = OFFSET_HARDWARE_ADDRESS_LENGTH + SIZE_HARDWARE_ADDRESS_LENGTH;

/// The `xid` field offset in bytes.
pub const OFFSET_TRANSACTION_ID: usize = OFFSET_HOPS + SIZE_HOPS;

/// The `secs` field offset in bytes.
pub const OFFSET_SECONDS: usize = OFFSET_TRANSACTION_ID + SIZE_TRANSACTION_ID;

/// The `flags` field offset in bytes.
pub const OFFSET_FLAGS: usize = OFFSET_SECONDS + SIZE_SECONDS;

/// The `ciaddr` field offset in bytes.
pub const OFFSET_CLIENT_IP_ADDRESS: usize = OFFSET_FLAGS + SIZE_FLAGS;

/// The `yiaddr` field offset in bytes.
pub const OFFSET_YOUR_IP_ADDRESS: usize = OFFSET_CLIENT_IP_ADDRESS + SIZE_IP_ADDRESS;

/// The `siaddr` field offset in bytes.
pub const OFFSET_SERVER_IP_ADDRESS: usize = OFFSET_YOUR_IP_ADDRESS + SIZE_IP_ADDRESS;

/// The `giaddr` field offset in bytes.
pub const OFFSET_GATEWAY_IP_ADDRESS: usize = OFFSET_SERVER_IP_ADDRESS + SIZE_IP_ADDRESS;

/// The `chaddr` field offset in bytes.
pub const OFFSET_HARDWARE_ADDRESS: usize = OFFSET_GATEWAY_IP_ADDRESS + SIZE_IP_ADDRESS;

/// The `sname` field offset in bytes.
pub const OFFSET_SERVER_NAME: usize = OFFSET_HARDWARE_ADDRESS + SIZE_HARDWARE_ADDRESS;

/// The `file` field offset in bytes.
pub const OFFSET_BOOT_FILENAME: usize = OFFSET_SERVER_NAME + SIZE_SERVER_NAME;

/// The options span offset, which is also the fixed header size: 236 bytes.
pub const OFFSET_OPTIONS: usize = OFFSET_BOOT_FILENAME + SIZE_BOOT_FILENAME;

/// Only the leftmost bit of the `flags` field is used in DHCP.
///
/// https://tools.ietf.org/html/rfc2131#section-2
pub const FLAG_BROADCAST: u16 = 0b1000000000000000;

/// The magic number at the start of the options span.
pub const MAGIC_COOKIE: &[u8] = &[0x63, 0x82, 0x53, 0x63];
