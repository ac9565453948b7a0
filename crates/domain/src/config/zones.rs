use serde::{Deserialize, Serialize};

/// Zone declared in the configuration file and loaded into the zone store at startup.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ZoneEntry {
    pub name: String,

    #[serde(default)]
    pub record_sets: Vec<RecordSetEntry>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RecordSetEntry {
    pub name: String,

    #[serde(rename = "type")]
    pub record_type: String,

    #[serde(default = "default_class")]
    pub class: String,

    #[serde(default = "default_ttl")]
    pub ttl: u32,

    #[serde(default)]
    pub records: Vec<RecordEntry>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RecordEntry {
    pub content: String,

    #[serde(default)]
    pub disabled: bool,
}

fn default_class() -> String {
    "IN".to_string()
}

fn default_ttl() -> u32 {
    300
}
