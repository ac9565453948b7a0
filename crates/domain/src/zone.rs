use crate::dns_record::{RecordSet, RecordType};

/// An authoritative zone and the record sets it owns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Zone {
    pub name: String,
    pub record_sets: Vec<RecordSet>,
}

impl Zone {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            record_sets: Vec::new(),
        }
    }

    pub fn with_record_sets(mut self, record_sets: Vec<RecordSet>) -> Self {
        self.record_sets = record_sets;
        self
    }

    /// Record sets answering `name`/`query_type`, in zone order.
    pub fn select<'a>(
        &'a self,
        name: &'a str,
        query_type: RecordType,
    ) -> impl Iterator<Item = &'a RecordSet> + 'a {
        self.record_sets
            .iter()
            .filter(move |rs| rs.matches(name, query_type))
    }

    pub fn find_record_set(&self, name: &str, record_type: RecordType) -> Option<&RecordSet> {
        self.record_sets
            .iter()
            .find(|rs| rs.name.eq_ignore_ascii_case(name) && rs.record_type == record_type)
    }
}
