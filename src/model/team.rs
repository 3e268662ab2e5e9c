use serde::{Deserialize, Serialize};

/// Top level of the stats team endpoint: `{ "data": [ ... ] }`.
#[derive(Debug, Serialize, Deserialize)]
pub struct TeamDocument {
    #[serde(default)]
    pub data: Vec<TeamRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRecord {
    pub id: u32,
    #[serde(rename = "fullName")]
    pub full_name: String,
    // The stats API calls it triCode, the web API abbrev.
    #[serde(rename = "triCode", alias = "abbrev")]
    pub abbrev: String,
}

impl TeamRecord {
    pub fn new(id: u32, full_name: impl Into<String>, abbrev: impl Into<String>) -> Self {
        Self { id, full_name: full_name.into(), abbrev: abbrev.into() }
    }
}
