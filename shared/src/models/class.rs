//! Class Model

use serde::{Deserialize, Serialize};

use super::Keyed;

/// Scheduled class offering (read shape)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Class {
    pub idx: i64,
    pub class_name: String,
    /// Cash price
    pub cash: Option<i64>,
    /// Card price
    pub card: Option<i64>,
    pub description: Option<String>,
    /// Usage period in days
    pub duration: i64,
    /// Class type FK
    #[serde(rename = "type")]
    pub class_type: i64,
    pub use_count: i64,
    pub type_name: String,
    /// Instructor FK
    pub instructor: Option<i64>,
    pub instructor_name: Option<String>,
}

/// Create/update payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassRequest {
    pub class_name: String,
    pub cash: Option<i64>,
    pub card: Option<i64>,
    pub description: Option<String>,
    pub duration: i64,
    #[serde(rename = "type")]
    pub class_type: i64,
    pub use_count: i64,
    pub instructor: Option<i64>,
}

impl Keyed for Class {
    fn idx(&self) -> i64 {
        self.idx
    }
}
