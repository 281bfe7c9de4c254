use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifies one simulated case. Never interpreted, except as seed material
/// when sampling per case.
#[derive(Debug, Hash, PartialEq, Eq, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CaseId(pub String);

impl fmt::Display for CaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for CaseId {
    fn from(value: String) -> Self {
        CaseId(value)
    }
}

impl From<&str> for CaseId {
    fn from(value: &str) -> Self {
        CaseId(value.to_string())
    }
}

impl From<u64> for CaseId {
    fn from(value: u64) -> Self {
        CaseId(value.to_string())
    }
}

impl From<u32> for CaseId {
    fn from(value: u32) -> Self {
        CaseId(value.to_string())
    }
}

impl From<&CaseId> for CaseId {
    fn from(value: &CaseId) -> Self {
        value.clone()
    }
}
