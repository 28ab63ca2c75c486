use serde::{Deserialize, Serialize};

use crate::domain::a003_source_name::aggregate::SourceName;
use crate::shared::serde_ids;
use crate::system::users::UserContext;

/// Category of a monitored source (well, spring, surface intake, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceType {
    #[serde(default, deserialize_with = "serde_ids::id")]
    pub id: String,
    #[serde(default)]
    pub source_type: String,
}

/// Entry of a source type dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceTypeOption {
    pub id: String,
    pub label: String,
}

/// Source types the user may pick, both in the filter panel and the form.
///
/// Super-admins get the global list. Branch users only get the types that
/// occur among their own source names, once per type id, in first-seen
/// order; when the same id shows up with different names the last one wins.
pub fn available_source_types(
    user: &UserContext,
    source_types: &[SourceType],
    source_names: &[SourceName],
) -> Vec<SourceTypeOption> {
    if user.is_super_admin() {
        return source_types
            .iter()
            .map(|st| SourceTypeOption {
                id: st.id.clone(),
                label: st.source_type.clone(),
            })
            .collect();
    }

    let mut options: Vec<SourceTypeOption> = Vec::new();
    for sn in source_names {
        let label = sn.source_type_name.clone().unwrap_or_default();
        match options.iter_mut().find(|o| o.id == sn.source_type_id) {
            Some(existing) => existing.label = label,
            None => options.push(SourceTypeOption {
                id: sn.source_type_id.clone(),
                label,
            }),
        }
    }
    options
}
