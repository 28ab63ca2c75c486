use contracts::system::users::{UserContext, UserProfile};

use crate::shared::api_utils::get_json;

/// Fetch the signed-in user's branch and role
pub async fn fetch_user_context() -> Result<UserContext, String> {
    let profile: UserProfile = get_json("/api/user/profile").await?;
    Ok(UserContext::from(profile))
}
