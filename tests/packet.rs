//! End-to-end codec tests against a captured BOOTP frame.

use std::net::Ipv4Addr;

use eui48::MacAddress;

use dhcp_wire::constants::{MAGIC_COOKIE, OFFSET_OPTIONS, OFFSET_TRANSACTION_ID};
use dhcp_wire::{DecodeError, Message, NamedByte, OP_CODES};

/// A DHCPACK captured from a real exchange, 300 bytes: the 236-byte fixed
/// header plus a 64-byte options span.
const CAPTURED: &str = "020106009EA03D7A0000000000000000C0A8FC81C0A8FCFE00000000000C29AAC43B00000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000638253633501053604C0A8FCFE3304000007080104FFFFFF001C04C0A8FCFF0304C0A8FC020F0B6C6F63616C646F6D61696E0604C0A8FC022C04C0A8FC02FF00";

fn captured_bytes() -> Vec<u8> {
    let hex = CAPTURED.as_bytes();
    hex.chunks(2)
        .map(|pair| {
            let digits = std::str::from_utf8(pair).unwrap();
            u8::from_str_radix(digits, 16).unwrap()
        })
        .collect()
}

#[test]
fn decodes_the_captured_frame() {
    let raw = captured_bytes();
    let message = Message::decode(&raw, 0, raw.len()).unwrap();
    let header = message.header();

    assert_eq!(header.op().value(), 2);
    assert_eq!(header.op().name(), "BOOTREPLY");
    assert_eq!(header.htype().value(), 1);
    assert_eq!(header.htype().name(), "Ethernet (10Mb)");
    assert_eq!(header.hlen().value(), 6);
    assert_eq!(header.hlen().name(), "10mb ethernet");
    assert_eq!(header.hops(), 0);
    assert_eq!(header.xid(), 0x9EA0_3D7A);
    assert_eq!(header.secs(), 0);
    assert!(!header.is_broadcast());
    assert_eq!(header.ciaddr(), Ipv4Addr::UNSPECIFIED);
    assert_eq!(header.yiaddr(), Ipv4Addr::new(192, 168, 252, 129));
    assert_eq!(header.siaddr(), Ipv4Addr::new(192, 168, 252, 254));
    assert_eq!(header.giaddr(), Ipv4Addr::UNSPECIFIED);
    assert_eq!(
        header.chaddr(),
        MacAddress::from_bytes(&[0x00, 0x0C, 0x29, 0xAA, 0xC4, 0x3B]).unwrap()
    );
    assert_eq!(header.sname(), "");
    assert_eq!(header.file(), "");

    let options = message.options().expect("the frame carries options");
    assert_eq!(options.len(), raw.len() - OFFSET_OPTIONS);
    assert_eq!(&options.raw()[..4], MAGIC_COOKIE);
}

#[test]
fn round_trips_the_captured_frame() {
    let raw = captured_bytes();
    let message = Message::decode(&raw, 0, raw.len()).unwrap();
    assert_eq!(message.to_bytes(), raw);

    // An untouched builder reproduces the bytes too.
    let rebuilt = message.builder().build();
    assert_eq!(rebuilt.to_bytes(), raw);
    assert_eq!(rebuilt, message);
}

#[test]
fn round_trips_a_header_only_frame() {
    let full = captured_bytes();
    let raw = &full[..OFFSET_OPTIONS];
    let message = Message::decode(raw, 0, raw.len()).unwrap();
    assert!(message.options().is_none());
    assert_eq!(message.to_bytes(), raw);
}

#[test]
fn decode_respects_the_offset() {
    let mut padded = vec![0xAAu8; 11];
    padded.extend_from_slice(&captured_bytes());
    let message = Message::decode(&padded, 11, padded.len() - 11).unwrap();
    assert_eq!(message.header().xid(), 0x9EA0_3D7A);
    assert_eq!(message.to_bytes(), &padded[11..]);
}

#[test]
fn short_buffers_are_rejected() {
    let raw = captured_bytes();
    for length in &[0usize, 1, 100, OFFSET_OPTIONS - 1] {
        match Message::decode(&raw[..*length], 0, *length) {
            Err(DecodeError::TooShort { required, length: reported }) => {
                assert_eq!(required, OFFSET_OPTIONS);
                assert_eq!(reported, *length);
            }
            other => panic!("expected TooShort, got {:?}", other),
        }
    }
}

#[test]
fn inconsistent_bounds_are_rejected() {
    let raw = captured_bytes();
    assert!(matches!(
        Message::decode(&raw, 0, raw.len() + 1),
        Err(DecodeError::OutOfBounds { .. })
    ));
    assert!(matches!(
        Message::decode(&raw, 1, raw.len()),
        Err(DecodeError::OutOfBounds { .. })
    ));
    assert!(matches!(
        Message::decode(&raw, usize::MAX, 1),
        Err(DecodeError::OutOfBounds { .. })
    ));
}

#[test]
fn builder_changes_only_what_it_sets() {
    let raw = captured_bytes();
    let message = Message::decode(&raw, 0, raw.len()).unwrap();

    let rebuilt = message.builder().xid(0x1122_3344).build();
    assert_eq!(rebuilt.header().xid(), 0x1122_3344);

    let rebuilt_raw = rebuilt.to_bytes();
    assert_eq!(rebuilt_raw.len(), raw.len());
    for (index, (before, after)) in raw.iter().zip(rebuilt_raw.iter()).enumerate() {
        let in_xid = (OFFSET_TRANSACTION_ID..OFFSET_TRANSACTION_ID + 4).contains(&index);
        if in_xid {
            assert_eq!(*after, 0x11223344u32.to_be_bytes()[index - OFFSET_TRANSACTION_ID]);
        } else {
            assert_eq!(before, after, "byte {} must be untouched", index);
        }
    }

    // Only the transaction-ID line of the report differs.
    let before_report = message.render();
    let after_report = rebuilt.render();
    let before_lines: Vec<&str> = before_report.lines().map(str::trim_end).collect();
    let after_lines: Vec<&str> = after_report.lines().map(str::trim_end).collect();
    assert_eq!(before_lines.len(), after_lines.len());
    for (before, after) in before_lines.iter().zip(after_lines.iter()) {
        if before.contains("Transaction ID") {
            assert_ne!(before, after);
        } else {
            assert_eq!(before, after);
        }
    }
}

#[test]
fn builder_round_trips_every_field() {
    let raw = captured_bytes();
    let message = Message::decode(&raw, 0, raw.len()).unwrap();

    let rebuilt = message
        .builder()
        .op(OP_CODES.lookup(1))
        .htype(NamedByte::new(1, "Ethernet (10Mb)"))
        .hlen(NamedByte::new(6, "10mb ethernet"))
        .hops(3)
        .xid(0xDEAD_BEEF)
        .secs(7)
        .broadcast(true)
        .ciaddr(Ipv4Addr::new(10, 0, 0, 1))
        .yiaddr(Ipv4Addr::new(10, 0, 0, 2))
        .siaddr(Ipv4Addr::new(10, 0, 0, 3))
        .giaddr(Ipv4Addr::new(10, 0, 0, 4))
        .chaddr(MacAddress::from_bytes(&[1, 2, 3, 4, 5, 6]).unwrap())
        .sname("boot.example.org")
        .file("pxelinux.0")
        .options(vec![0x63, 0x82, 0x53, 0x63, 0xFF])
        .build();

    let header = rebuilt.header();
    assert_eq!(header.op().name(), "BOOTREQUEST");
    assert_eq!(header.hops(), 3);
    assert_eq!(header.xid(), 0xDEAD_BEEF);
    assert_eq!(header.secs(), 7);
    assert!(header.is_broadcast());
    assert_eq!(header.ciaddr(), Ipv4Addr::new(10, 0, 0, 1));
    assert_eq!(header.yiaddr(), Ipv4Addr::new(10, 0, 0, 2));
    assert_eq!(header.siaddr(), Ipv4Addr::new(10, 0, 0, 3));
    assert_eq!(header.giaddr(), Ipv4Addr::new(10, 0, 0, 4));
    assert_eq!(
        header.chaddr(),
        MacAddress::from_bytes(&[1, 2, 3, 4, 5, 6]).unwrap()
    );
    assert_eq!(header.sname(), "boot.example.org");
    assert_eq!(header.file(), "pxelinux.0");
    assert_eq!(rebuilt.options().unwrap().raw(), &[0x63, 0x82, 0x53, 0x63, 0xFF]);

    // The built bytes decode back to an equal message.
    let rebuilt_raw = rebuilt.to_bytes();
    let decoded = Message::decode(&rebuilt_raw, 0, rebuilt_raw.len()).unwrap();
    assert_eq!(decoded, rebuilt);
}

#[test]
fn clearing_the_options_drops_the_span() {
    let raw = captured_bytes();
    let message = Message::decode(&raw, 0, raw.len()).unwrap();
    let stripped = message.builder().options(Vec::new()).build();
    assert!(stripped.options().is_none());
    assert_eq!(stripped.to_bytes(), &raw[..OFFSET_OPTIONS]);
}

#[test]
fn render_reports_every_field() {
    let raw = captured_bytes();
    let message = Message::decode(&raw, 0, raw.len()).unwrap();
    let report = message.render();

    assert!(report.starts_with("[DHCP Packet (300 bytes)]"));
    assert!(report.contains("  (sec)     Seconds        : 0 (0x0000)"));
    assert!(report.contains("OP Code        : BOOTREPLY (0x02)"));
    assert!(report.contains("H/W Type       : Ethernet (10Mb) (0x01)"));
    assert!(report.contains("H/W Addr. Len  : 10mb ethernet (0x06)"));
    assert!(report.contains("Transaction ID : 2661301626 (0x9EA03D7A)"));
    assert!(report.contains("Your IP        : 192.168.252.129 (0xC0A8FC81)"));
    assert!(report.contains("Server IP      : 192.168.252.254 (0xC0A8FCFE)"));
    assert!(report.contains("Client H/W     : 00:0C:29:AA:C4:3B (0x000C29AAC43B00000000000000000000)"));
    assert!(report.contains("Options        : 64 bytes, 0x63825363"));
    assert_eq!(report.lines().count(), 16);
}
