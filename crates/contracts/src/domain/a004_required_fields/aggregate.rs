use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};

/// Response of `GET /api/required-fields/{branchId}`.
///
/// One list of field keys per sheet type. This page only reads `daily`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequiredFieldsResponse {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub daily: Vec<String>,
    #[serde(flatten)]
    pub other_sheets: HashMap<String, serde_json::Value>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

impl RequiredFieldsResponse {
    pub fn into_daily(self) -> Vec<String> {
        self.daily
    }
}
