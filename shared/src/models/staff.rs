//! Staff Model

use serde::{Deserialize, Serialize};

use super::Keyed;

/// Staff member (read shape)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Staff {
    pub idx: i64,
    pub name: String,
    /// Staff grade FK
    pub grade: Option<i64>,
    pub phone: Option<i64>,
    pub gender: String,
    pub grade_name: String,
}

/// Create/update payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffRequest {
    pub name: String,
    pub grade: Option<i64>,
    pub phone: Option<i64>,
    pub gender: String,
}

impl Keyed for Staff {
    fn idx(&self) -> i64 {
        self.idx
    }
}
