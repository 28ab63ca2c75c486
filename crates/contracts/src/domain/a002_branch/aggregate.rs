use serde::{Deserialize, Serialize};

use crate::shared::serde_ids;

/// Operating unit/site. Owns source names and belongs to an area.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Branch {
    #[serde(default, deserialize_with = "serde_ids::id")]
    pub id: String,
    #[serde(default)]
    pub branch_name: String,
    #[serde(default, deserialize_with = "serde_ids::opt_i64")]
    pub area_id: Option<i64>,
    #[serde(default)]
    pub is_active: bool,
}

/// Look up a branch by id.
pub fn find_branch<'a>(branches: &'a [Branch], branch_id: &str) -> Option<&'a Branch> {
    if branch_id.is_empty() {
        return None;
    }
    branches.iter().find(|b| b.id == branch_id)
}
