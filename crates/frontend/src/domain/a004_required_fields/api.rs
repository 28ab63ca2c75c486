use contracts::domain::a004_required_fields::aggregate::RequiredFieldsResponse;

use crate::shared::api_utils::get_json;

/// Fetch the keys a branch requires on its daily sheet.
///
/// An empty branch id makes no request and yields an empty list.
pub async fn fetch_daily_required_fields(branch_id: &str) -> Result<Vec<String>, String> {
    if branch_id.is_empty() {
        return Ok(Vec::new());
    }
    let response: RequiredFieldsResponse =
        get_json(&format!("/api/required-fields/{}", branch_id)).await?;
    Ok(response.into_daily())
}
