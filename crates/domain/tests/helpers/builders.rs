#![allow(dead_code)]
use portare_dns_domain::{Record, RecordClass, RecordSet, RecordType, Zone};

pub struct RecordSetBuilder {
    name: String,
    record_type: RecordType,
    record_class: RecordClass,
    ttl: u32,
    records: Vec<Record>,
}

impl RecordSetBuilder {
    pub fn new() -> Self {
        Self {
            name: "test.com.".to_string(),
            record_type: RecordType::A,
            record_class: RecordClass::IN,
            ttl: 300,
            records: vec![],
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn record_type(mut self, record_type: RecordType) -> Self {
        self.record_type = record_type;
        self
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
            self.record_class,
            self.ttl,
            self.records,
        )
    }
}

impl Default for RecordSetBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn test_zone() -> Zone {
    Zone::new("test.com.").with_record_sets(vec![
        RecordSetBuilder::new().record("127.0.0.1").build(),
        RecordSetBuilder::new()
            .record_type(RecordType::MX)
            .record("10 mail.test.com.")
            .build(),
        RecordSetBuilder::new()
            .name("www.test.com.")
            .record_type(RecordType::CNAME)
            .record("test.com.")
            .build(),
        RecordSetBuilder::new()
            .name("off.test.com.")
            .disabled_record("10.0.0.1")
            .build(),
    ])
}
