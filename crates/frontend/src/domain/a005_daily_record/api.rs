use contracts::domain::a005_daily_record::aggregate::{DailyRecord, DailyRecordPayload};

use crate::shared::api_utils::{get_json, post_json};

/// Fetch all daily records
pub async fn fetch_records() -> Result<Vec<DailyRecord>, String> {
    get_json("/api/daily").await
}

/// Create a daily record
pub async fn create_record(payload: &DailyRecordPayload) -> Result<(), String> {
    post_json("/api/daily", payload).await
}
