use contracts::domain::a001_source_type::aggregate::SourceType;

use crate::shared::api_utils::get_json;

/// Fetch every source type
pub async fn fetch_source_types() -> Result<Vec<SourceType>, String> {
    get_json("/api/source-types").await
}
