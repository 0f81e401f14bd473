//! Member Model

use serde::{Deserialize, Serialize};

use super::Keyed;

/// Gym member (read shape)
///
/// The `*_name` fields are display labels resolved server-side from the
/// matching foreign keys; they never appear in the request projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub idx: i64,
    pub user_name: String,
    /// Member status FK (1 = active)
    pub status: Option<i64>,
    pub gender: String,
    /// Birth date as integer (yyyymmdd)
    pub birth: Option<i64>,
    pub age: Option<i64>,
    pub phone: String,
    pub get_utilization: Option<i64>,
    pub get_renting: Option<i64>,
    pub locker: Option<i64>,
    pub sort: i64,
    /// First registration date
    pub reg_dt: Option<String>,
    /// Final expiry date
    pub end_dt: Option<String>,
    /// Days remaining until expiry
    pub day_num: Option<i64>,
    /// Most recent registration date
    pub regent_reg_dt: Option<String>,
    /// Most recent attendance date
    pub regent_at_dt: Option<String>,
    #[serde(rename = "AtNum")]
    pub at_num: Option<i64>,
    pub etc_comment: Option<String>,
    /// Workout purpose FK
    pub purpose: Option<i64>,
    /// Visit path FK
    pub visit_path: Option<i64>,
    /// Consulting staff FK
    pub consultant: Option<i64>,
    pub address: Option<String>,
    pub locker_name: Option<String>,
    pub get_renting_name: Option<String>,
    pub get_utilization_name: Option<String>,
    pub purpose_name: Option<String>,
    pub visit_path_name: Option<String>,
    pub consultant_name: Option<String>,
}

/// Create/update payload (no `idx`, no display fields)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberRequest {
    pub user_name: String,
    pub gender: String,
    pub birth: Option<i64>,
    pub age: Option<i64>,
    pub phone: String,
    pub get_utilization: Option<i64>,
    pub get_renting: Option<i64>,
    pub purpose: Option<i64>,
    pub visit_path: Option<i64>,
    pub consultant: Option<i64>,
    pub address: Option<String>,
}

impl Keyed for Member {
    fn idx(&self) -> i64 {
        self.idx
    }
}

impl Default for Member {
    /// Draft template for the new-member form (idx 0 marks it unsaved)
    fn default() -> Self {
        Self {
            idx: 0,
            user_name: String::new(),
            status: Some(1),
            gender: String::new(),
            birth: None,
            age: None,
            phone: String::new(),
            get_utilization: None,
            get_renting: None,
            locker: None,
            sort: 0,
            reg_dt: None,
            end_dt: None,
            day_num: None,
            regent_reg_dt: None,
            regent_at_dt: None,
            at_num: None,
            etc_comment: None,
            purpose: None,
            visit_path: None,
            consultant: None,
            address: None,
            locker_name: None,
            get_renting_name: None,
            get_utilization_name: None,
            purpose_name: None,
            visit_path_name: None,
            consultant_name: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names() {
        let member = Member {
            idx: 3,
            user_name: "Kim".to_string(),
            at_num: Some(12),
            ..Member::default()
        };

        let json = serde_json::to_value(&member).unwrap();
        assert_eq!(json["userName"], "Kim");
        assert_eq!(json["AtNum"], 12);
        assert_eq!(json["dayNum"], serde_json::Value::Null);
    }

    #[test]
    fn test_request_has_no_idx() {
        let request = MemberRequest {
            user_name: "Kim".to_string(),
            gender: "F".to_string(),
            birth: None,
            age: None,
            phone: "01012345678".to_string(),
            get_utilization: None,
            get_renting: None,
            purpose: Some(2),
            visit_path: None,
            consultant: None,
            address: None,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("idx").is_none());
        assert!(json.get("purposeName").is_none());
    }
}
