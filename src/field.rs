//! Typed views over the raw bytes of a header field.
//!
//! Every field of a decoded message keeps the exact bytes it was sliced
//! from and derives its textual form from those bytes on demand, so the
//! display of a field is a pure function of its raw data.

use std::fmt;

/// A header field: the original byte span plus the rule for reading it.
///
/// The set of interpretations is closed since the fixed header only ever
/// contains these four kinds of data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// A big-endian unsigned integer of 1, 2 or 4 bytes.
    Integer(Vec<u8>),
    /// An IPv4 address, exactly 4 bytes, displayed as dotted decimal.
    Ipv4(Vec<u8>),
    /// A hardware address. The first `min(6, len)` bytes are displayed as
    /// colon-separated hex octets; the padding is retained but not shown.
    Mac(Vec<u8>),
    /// NUL-terminated text, displayed up to the first zero byte.
    Text(Vec<u8>),
}

impl FieldValue {
    /// Wraps an integer field.
    ///
    /// # Panics
    /// If the span is not 1, 2 or 4 bytes wide. Only the codec constructs
    /// these from the fixed layout table, so a mismatch is a programming
    /// error, not an input error.
    pub fn integer(raw: &[u8]) -> Self {
        assert!(
            raw.len() == 1 || raw.len() == 2 || raw.len() == 4,
            "integer fields are 1, 2 or 4 bytes wide, got {}",
            raw.len()
        );
        FieldValue::Integer(raw.to_vec())
    }

    /// Wraps an IPv4 address field.
    ///
    /// # Panics
    /// If the span is not exactly 4 bytes wide.
    pub fn ipv4(raw: &[u8]) -> Self {
        assert!(raw.len() == 4, "IPv4 fields are 4 bytes wide, got {}", raw.len());
        FieldValue::Ipv4(raw.to_vec())
    }

    /// Wraps a hardware address field.
    pub fn mac(raw: &[u8]) -> Self {
        FieldValue::Mac(raw.to_vec())
    }

    /// Wraps a NUL-terminated text field.
    pub fn text(raw: &[u8]) -> Self {
        FieldValue::Text(raw.to_vec())
    }

    /// The original bytes of the field.
    pub fn raw(&self) -> &[u8] {
        match self {
            FieldValue::Integer(raw)
            | FieldValue::Ipv4(raw)
            | FieldValue::Mac(raw)
            | FieldValue::Text(raw) => raw,
        }
    }

    /// The textual form of the field, derived from the raw bytes.
    pub fn display(&self) -> String {
        match self {
            FieldValue::Integer(_) => self.as_u32().to_string(),
            FieldValue::Ipv4(raw) => format!("{}.{}.{}.{}", raw[0], raw[1], raw[2], raw[3]),
            FieldValue::Mac(raw) => {
                let shown = &raw[..raw.len().min(6)];
                shown
                    .iter()
                    .map(|octet| format!("{:02X}", octet))
                    .collect::<Vec<_>>()
                    .join(":")
            }
            FieldValue::Text(raw) => {
                let terminated = match raw.iter().position(|&b| b == 0) {
                    Some(nul) => &raw[..nul],
                    None => &raw[..],
                };
                let text = String::from_utf8_lossy(terminated);
                if text.trim().is_empty() {
                    String::new()
                } else {
                    text.into_owned()
                }
            }
        }
    }

    /// The numeric value of an [`Integer`](FieldValue::Integer) field.
    ///
    /// # Panics
    /// If the field is not an integer.
    pub fn as_u32(&self) -> u32 {
        match self {
            FieldValue::Integer(raw) => match raw.len() {
                1 => u32::from(raw[0]),
                2 => u32::from(u16::from_be_bytes([raw[0], raw[1]])),
                4 => u32::from_be_bytes([raw[0], raw[1], raw[2], raw[3]]),
                width => unreachable!("integer field of width {}", width),
            },
            other => panic!("not an integer field: {:?}", other),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// Renders bytes as `0x`-prefixed uppercase hex, the form used by the
/// diagnostic report.
pub(crate) fn hex_string(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(2 + bytes.len() * 2);
    out.push_str("0x");
    for byte in bytes {
        out.push_str(&format!("{:02X}", byte));
    }
    out
}
