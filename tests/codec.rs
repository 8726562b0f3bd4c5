use std::{io::SeekFrom, net::Ipv4Addr};

use bytes::{BufMut, BytesMut};
use dns_lookup::{
    build_query, decode_name, decode_response, encode_name, ByteCursor, CodecError, Flags, Header,
    Opcode, QueryClass, QueryType, Rdata, ResourceRecord, ResponseCode,
};

fn hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

#[test]
fn name_encoding_matches_reference_bytes() {
    let mut buf = BytesMut::new();
    encode_name("dns.google.com", &mut buf).unwrap();
    assert_eq!(hex(&buf), "03646e7306676f6f676c6503636f6d00");
}

#[test]
fn query_suffix_after_random_id() {
    let mut rng = fastrand::Rng::new();
    let query = build_query("dns.google.com", false, &mut rng);
    let bytes = query.to_bytes().unwrap();
    assert_eq!(
        hex(&bytes[2..]),
        "00000001000000000000".to_string() + "03646e7306676f6f676c6503636f6d0000010001"
    );
    assert_eq!(query.header.flags.opcode, Opcode::StandardQuery);
    assert_eq!(query.questions[0].qtype, QueryType::A);
    assert_eq!(query.questions[0].qclass, QueryClass::IN);
}

#[test]
fn name_decodes_and_stops_after_terminator() {
    let bytes = [
        0x03, 0x64, 0x6e, 0x73, 0x06, 0x67, 0x6f, 0x6f, 0x67, 0x6c, 0x65, 0x03, 0x63, 0x6f, 0x6d,
        0x00,
    ];
    let mut cursor = ByteCursor::new(&bytes);
    assert_eq!(decode_name(&mut cursor).unwrap(), "dns.google.com");
    assert_eq!(cursor.position(), 16);
}

#[test]
fn compression_pointer_leaves_cursor_after_pointer() {
    let mut buf = BytesMut::new();
    Header {
        id: 1,
        qdcount: 1,
        ancount: 1,
        ..Header::default()
    }
    .write(&mut buf);
    buf.put_slice(&[0x03, b'w', b'w', b'w', 0x00]);
    buf.put_u16(1);
    buf.put_u16(1);
    let pointer_at = buf.len();
    buf.put_slice(&[0xC0, 0x0C]);

    let mut cursor = ByteCursor::new(&buf);
    cursor.seek(SeekFrom::Start(pointer_at as u64)).unwrap();
    assert_eq!(decode_name(&mut cursor).unwrap(), "www");
    assert_eq!(cursor.position(), pointer_at + 2);
}

#[test]
fn sequential_records_end_exactly_at_last_rdata() {
    let records = [
        ResourceRecord::a("a.example", Ipv4Addr::new(192, 0, 2, 1), 10),
        ResourceRecord {
            name: "example".to_string(),
            rtype: QueryType::MX,
            class: QueryClass::IN,
            ttl: 20,
            data: Rdata::Unknown(vec![0x00, 0x0A, 0x02, b'm', b'x', 0x00]),
        },
        ResourceRecord::a("b.example", Ipv4Addr::new(192, 0, 2, 2), 30),
    ];
    let mut buf: Vec<u8> = Vec::new();
    for record in &records {
        record.write(&mut buf).unwrap();
    }

    let mut cursor = ByteCursor::new(&buf);
    let decoded: Vec<_> = (0..records.len())
        .map(|_| ResourceRecord::read(&mut cursor).unwrap())
        .collect();
    assert_eq!(decoded, records);
    assert_eq!(cursor.position(), buf.len());
    assert_eq!(cursor.remaining(), 0);
}

#[test]
fn short_read_reports_insufficient_data() {
    let data = [0u8; 5];
    let mut cursor = ByteCursor::new(&data);
    cursor.read_bytes(2).unwrap();
    assert_eq!(
        cursor.read_bytes(4).unwrap_err(),
        CodecError::InsufficientData {
            requested: 4,
            remaining: 3
        }
    );
    assert_eq!(cursor.position(), 2);
}

#[test]
fn address_record_renders_dotted_quad() {
    let mut buf = BytesMut::new();
    buf.put_u8(0);
    buf.put_u16(1);
    buf.put_u16(1);
    buf.put_u32(60);
    buf.put_u16(4);
    buf.put_slice(&[8, 8, 8, 8]);
    let record = ResourceRecord::read(&mut ByteCursor::new(&buf)).unwrap();
    assert_eq!(record.address().as_deref(), Some("8.8.8.8"));
}

#[test]
fn header_round_trips_through_bytes() {
    let header = Header {
        id: 0xBEEF,
        flags: Flags {
            response: true,
            opcode: Opcode::InverseQuery,
            authoritative_answer: true,
            truncated: true,
            recursion_desired: false,
            recursion_available: true,
            response_code: ResponseCode::Refused,
        },
        qdcount: 1,
        ancount: 2,
        nscount: 3,
        arcount: 4,
    };
    let mut buf = BytesMut::new();
    header.write(&mut buf);
    assert_eq!(hex(&buf), "beef8e850001000200030004");
    assert_eq!(Header::read(&mut ByteCursor::new(&buf)).unwrap(), header);
}

#[test]
fn real_world_response_with_authority_and_additional() {
    // Answer uses a pointer to the question; authority NS points into the
    // question name suffix; additional A record points into the NS rdata.
    let mut buf = BytesMut::new();
    Header {
        id: 0x0102,
        flags: Flags {
            response: true,
            recursion_desired: true,
            recursion_available: true,
            ..Flags::default()
        },
        qdcount: 1,
        ancount: 1,
        nscount: 1,
        arcount: 1,
    }
    .write(&mut buf);
    // 12: www.example.com
    encode_name("www.example.com", &mut buf).unwrap();
    buf.put_u16(1);
    buf.put_u16(1);
    // answer
    buf.put_u16(0xC00C);
    buf.put_u16(1);
    buf.put_u16(1);
    buf.put_u32(300);
    buf.put_u16(4);
    buf.put_slice(&[93, 184, 216, 34]);
    // authority: example.com (offset 16) NS ns1.example.com
    buf.put_u16(0xC010);
    buf.put_u16(2);
    buf.put_u16(1);
    buf.put_u32(86400);
    buf.put_u16(6);
    let ns_name_at = buf.len() as u16;
    buf.put_slice(&[0x03, b'n', b's', b'1', 0xC0, 0x10]);
    // additional: ns1.example.com A
    buf.put_u16(0xC000 | ns_name_at);
    buf.put_u16(1);
    buf.put_u16(1);
    buf.put_u32(86400);
    buf.put_u16(4);
    buf.put_slice(&[192, 0, 2, 53]);

    let response = decode_response(&buf).unwrap();
    assert_eq!(response.questions[0].name, "www.example.com");
    assert_eq!(response.answers[0].name, "www.example.com");
    assert_eq!(response.addresses(), vec!["93.184.216.34"]);
    assert_eq!(response.authorities[0].name, "example.com");
    assert_eq!(response.authorities[0].rtype, QueryType::NS);
    assert_eq!(response.additionals[0].name, "ns1.example.com");
    assert_eq!(
        response.additionals[0].address().as_deref(),
        Some("192.0.2.53")
    );
}

#[test]
fn corrupt_pointer_is_invalid_offset() {
    let mut buf = BytesMut::new();
    Header {
        qdcount: 1,
        ..Header::default()
    }
    .write(&mut buf);
    buf.put_u16(0xC0FF);
    buf.put_u16(1);
    buf.put_u16(1);
    assert!(matches!(
        decode_response(&buf),
        Err(CodecError::InvalidOffset { offset: 255, .. })
    ));
}
