//! Lookup category tables
//!
//! Controlled vocabularies referenced by id from the entity models.
//! Each table is a flat `{idx, label}` pair, but the label key differs
//! per table on the wire.

use serde::{Deserialize, Serialize};

use super::Keyed;

/// Visit path (how the member found the gym)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitPath {
    pub idx: i64,
    pub visit_path_name: String,
}

/// Workout purpose
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Purpose {
    pub idx: i64,
    pub purpose_name: String,
}

/// Member status
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberStatus {
    pub idx: i64,
    pub status_name: String,
}

/// Staff grade
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StaffGrade {
    pub idx: i64,
    pub name: String,
}

/// Goods type
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoodsType {
    pub idx: i64,
    pub type_name: String,
}

/// Class type
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassType {
    pub idx: i64,
    pub type_name: String,
}

impl Keyed for VisitPath {
    fn idx(&self) -> i64 {
        self.idx
    }
}

impl Keyed for Purpose {
    fn idx(&self) -> i64 {
        self.idx
    }
}

impl Keyed for MemberStatus {
    fn idx(&self) -> i64 {
        self.idx
    }
}

impl Keyed for StaffGrade {
    fn idx(&self) -> i64 {
        self.idx
    }
}

impl Keyed for GoodsType {
    fn idx(&self) -> i64 {
        self.idx
    }
}

impl Keyed for ClassType {
    fn idx(&self) -> i64 {
        self.idx
    }
}
