#![allow(dead_code)]
use portare_dns_application::ports::ZoneRepository;
use portare_dns_domain::{Record, RecordClass, RecordSet, RecordType};
use portare_dns_infrastructure::repositories::InMemoryZoneStore;
use std::sync::Arc;

pub const QTYPE_A: u16 = 1;
pub const QTYPE_MX: u16 = 15;
pub const QTYPE_TXT: u16 = 16;
pub const QTYPE_AAAA: u16 = 28;
pub const QTYPE_ANY: u16 = 255;

/// Raw query with RD set and one IN question.
pub fn build_query(id: u16, domain: &str, qtype: u16) -> Vec<u8> {
    let mut buf = Vec::with_capacity(32);
    buf.extend_from_slice(&id.to_be_bytes());
    buf.extend_from_slice(&[0x01, 0x00]); // flags: RD set
    buf.extend_from_slice(&[0x00, 0x01]); // QDCOUNT = 1
    buf.extend_from_slice(&[0x00, 0x00, 0x00, 0x00, 0x00, 0x00]);
    for label in domain.split('.').filter(|l| !l.is_empty()) {
        buf.push(label.len() as u8);
        buf.extend_from_slice(label.as_bytes());
    }
    buf.push(0x00); // root label
    buf.extend_from_slice(&qtype.to_be_bytes());
    buf.extend_from_slice(&[0x00, 0x01]); // QCLASS = IN
    buf
}

/// An answer as read back from a response datagram.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawAnswer {
    pub pointer: u16,
    pub rtype: u16,
    pub class: u16,
    pub ttl: u32,
    pub data: Vec<u8>,
}

/// Just enough of a response to make assertions on.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub id: u16,
    pub flags: u16,
    pub qdcount: u16,
    pub ancount: u16,
    pub nscount: u16,
    pub arcount: u16,
    pub question: Vec<u8>,
    pub answers: Vec<RawAnswer>,
}

impl RawResponse {
    pub fn rcode(&self) -> u8 {
        (self.flags & 0x000F) as u8
    }

    pub fn is_response(&self) -> bool {
        self.flags & 0x8000 != 0
    }
}

/// Parses a response produced for `query` (single question, pointer-named answers).
pub fn parse_response(query: &[u8], response: &[u8]) -> RawResponse {
    let word = |i: usize| u16::from_be_bytes([response[i], response[i + 1]]);
    let question_len = query.len() - 12;
    let mut pos = 12 + question_len;

    let ancount = word(6);
    let mut answers = Vec::new();
    for _ in 0..ancount {
        let rdlen = word(pos + 10) as usize;
        answers.push(RawAnswer {
            pointer: word(pos),
            rtype: word(pos + 2),
            class: word(pos + 4),
            ttl: u32::from_be_bytes([
                response[pos + 6],
                response[pos + 7],
                response[pos + 8],
                response[pos + 9],
            ]),
            data: response[pos + 12..pos + 12 + rdlen].to_vec(),
        });
        pos += 12 + rdlen;
    }
    assert_eq!(pos, response.len(), "trailing bytes after answers");

    RawResponse {
        id: word(0),
        flags: word(2),
        qdcount: word(4),
        ancount,
        nscount: word(8),
        arcount: word(10),
        question: response[12..12 + question_len].to_vec(),
        answers,
    }
}

pub fn record_set(name: &str, record_type: RecordType, ttl: u32, records: &[&str]) -> RecordSet {
    RecordSet::new(
        name,
        record_type,
        RecordClass::IN,
        ttl,
        records.iter().map(|c| Record::new(*c)).collect(),
    )
}

/// Store holding `test.com.` with A, AAAA, MX, TXT, a mixed set, a disabled set
/// and a set whose content cannot be encoded.
pub async fn seeded_store() -> Arc<InMemoryZoneStore> {
    let store = Arc::new(InMemoryZoneStore::new());
    store.insert_zone("test.com.").await.unwrap();

    let sets = vec![
        record_set("test.com.", RecordType::A, 300, &["127.0.0.1"]),
        record_set("test.com.", RecordType::AAAA, 300, &["::1"]),
        record_set("test.com.", RecordType::MX, 3600, &["10 mail.test.com."]),
        record_set("test.com.", RecordType::TXT, 60, &["hello"]),
        record_set(
            "multi.test.com.",
            RecordType::A,
            120,
            &["10.0.0.1", "10.0.0.2", "10.0.0.3"],
        ),
        RecordSet::new(
            "off.test.com.",
            RecordType::A,
            RecordClass::IN,
            300,
            vec![Record::disabled("10.0.0.9")],
        ),
        record_set("broken.test.com.", RecordType::A, 300, &["not-an-address"]),
    ];
    for set in sets {
        store.insert_record_set("test.com.", set).await.unwrap();
    }
    store
}
