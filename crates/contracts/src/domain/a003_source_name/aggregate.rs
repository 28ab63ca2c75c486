use serde::{Deserialize, Serialize};

use crate::shared::serde_ids;

/// Named source linked to a branch and a source type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceName {
    #[serde(default, deserialize_with = "serde_ids::id")]
    pub id: String,
    #[serde(default)]
    pub source_name: String,
    #[serde(default, deserialize_with = "serde_ids::id")]
    pub source_type_id: String,
    #[serde(default, deserialize_with = "serde_ids::id")]
    pub branch_id: String,
    #[serde(default)]
    pub source_type_name: Option<String>,
}

/// Source names offered by the form for the selected source type.
/// An empty selection offers everything.
pub fn filter_by_source_type(source_names: &[SourceName], source_type_id: &str) -> Vec<SourceName> {
    if source_type_id.is_empty() {
        return source_names.to_vec();
    }
    source_names
        .iter()
        .filter(|sn| sn.source_type_id == source_type_id)
        .cloned()
        .collect()
}

/// Look up a source name by id.
pub fn find_source_name<'a>(source_names: &'a [SourceName], id: &str) -> Option<&'a SourceName> {
    if id.is_empty() {
        return None;
    }
    source_names.iter().find(|sn| sn.id == id)
}
