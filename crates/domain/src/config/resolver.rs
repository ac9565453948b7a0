use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Order in which candidate zone names are tried during the suffix walk.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ZoneMatchOrder {
    /// `com.`, then `test.com.`, ... First hit is the least specific zone.
    #[default]
    ShortestFirst,

    /// Full name first, dropping labels from the left. First hit is the most specific zone.
    LongestFirst,
}

impl ZoneMatchOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ShortestFirst => "shortest_first",
            Self::LongestFirst => "longest_first",
        }
    }
}

impl fmt::Display for ZoneMatchOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ZoneMatchOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "shortest_first" | "shortest" => Ok(Self::ShortestFirst),
            "longest_first" | "longest" => Ok(Self::LongestFirst),
            _ => Err(format!("Unknown zone match order: {}", s)),
        }
    }
}

/// How the resolver talks to the lookup collaborator.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum LookupMode {
    /// Suffix walk over `find_zone`, then selection inside the zone.
    #[default]
    ZoneWalk,

    /// `find_record_set` first; the zone walk only classifies a miss.
    RecordSet,
}

impl LookupMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ZoneWalk => "zone_walk",
            Self::RecordSet => "record_set",
        }
    }
}

/// Whether the receive loop waits for each request to finish.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum DispatchMode {
    #[default]
    Concurrent,

    Sequential,
}

impl DispatchMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Concurrent => "concurrent",
            Self::Sequential => "sequential",
        }
    }
}

impl FromStr for DispatchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "concurrent" => Ok(Self::Concurrent),
            "sequential" => Ok(Self::Sequential),
            _ => Err(format!("Unknown dispatch mode: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    #[serde(default = "default_lookup_timeout_ms")]
    pub lookup_timeout_ms: u64,

    #[serde(default)]
    pub zone_match_order: ZoneMatchOrder,

    #[serde(default)]
    pub lookup_mode: LookupMode,

    #[serde(default)]
    pub dispatch: DispatchMode,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            lookup_timeout_ms: default_lookup_timeout_ms(),
            zone_match_order: ZoneMatchOrder::default(),
            lookup_mode: LookupMode::default(),
            dispatch: DispatchMode::default(),
        }
    }
}

fn default_lookup_timeout_ms() -> u64 {
    2000
}
