use contracts::domain::a002_branch::aggregate::Branch;

use crate::shared::api_utils::get_json;

/// Fetch every branch, active or not
pub async fn fetch_branches() -> Result<Vec<Branch>, String> {
    get_json("/api/branches").await
}
