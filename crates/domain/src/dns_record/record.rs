use super::{RecordClass, RecordType};

/// One value of an RRset, kept in its textual form until it is encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub content: String,
    pub is_disabled: bool,
}

impl Record {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            is_disabled: false,
        }
    }

    pub fn disabled(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            is_disabled: true,
        }
    }
}

/// All records sharing one name, type, class and ttl.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSet {
    pub id: u64,
    pub name: String,
    pub record_type: RecordType,
    pub record_class: RecordClass,
    pub ttl: u32,
    pub records: Vec<Record>,
}

impl RecordSet {
    pub fn new(
        name: impl Into<String>,
        record_type: RecordType,
        record_class: RecordClass,
        ttl: u32,
        records: Vec<Record>,
    ) -> Self {
        Self {
            id: 0,
            name: name.into(),
            record_type,
            record_class,
            ttl,
            records,
        }
    }

    pub fn enabled_records(&self) -> impl Iterator<Item = &Record> {
        self.records.iter().filter(|r| !r.is_disabled)
    }

    pub fn has_enabled_records(&self) -> bool {
        self.enabled_records().next().is_some()
    }

    /// Owner name and type match for a query. Names compare ASCII case-insensitively.
    pub fn matches(&self, name: &str, query_type: RecordType) -> bool {
        self.name.eq_ignore_ascii_case(name) && self.record_type.answers(query_type)
    }
}
