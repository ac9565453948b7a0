#![allow(dead_code)]
use portare_dns_domain::{Record, RecordClass, RecordSet, RecordType, Zone};

pub struct RecordSetBuilder {
    name: String,
    record_type: RecordType,
    ttl: u32,
    records: Vec<Record>,
}

impl RecordSetBuilder {
    pub fn new(name: &str, record_type: RecordType) -> Self {
        Self {
            name: name.to_string(),
            record_type,
            ttl: 300,
            records: vec![],
        }
    }

    pub fn ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn record(mut self, content: &str) -> Self {
        self.records.push(Record::new(content));
        self
    }

    pub fn disabled_record(mut self, content: &str) -> Self {
        self.records.push(Record::disabled(content));
        self
    }

    pub fn build(self) -> RecordSet {
        RecordSet::new(
            self.name,
            self.record_type,
            RecordClass::IN,
            self.ttl,
            self.records,
        )
    }
}

/// `test.com.` with an A, an MX, a CNAME, a mixed A set and a fully disabled set.
pub fn test_zone() -> Zone {
    Zone::new("test.com.").with_record_sets(vec![
        RecordSetBuilder::new("test.com.", RecordType::A)
            .record("127.0.0.1")
            .build(),
        RecordSetBuilder::new("test.com.", RecordType::MX)
            .record("10 mail.test.com.")
            .build(),
        RecordSetBuilder::new("www.test.com.", RecordType::CNAME)
            .record("test.com.")
            .build(),
        RecordSetBuilder::new("mixed.test.com.", RecordType::A)
            .record("10.0.0.1")
            .disabled_record("10.0.0.2")
            .record("10.0.0.3")
            .build(),
        RecordSetBuilder::new("off.test.com.", RecordType::A)
            .disabled_record("10.0.0.9")
            .build(),
    ])
}

/// `com.` claiming `test.com.` with a different address, to tell match orders apart.
pub fn parent_zone() -> Zone {
    Zone::new("com.").with_record_sets(vec![RecordSetBuilder::new("test.com.", RecordType::A)
        .record("192.0.2.1")
        .build()])
}
