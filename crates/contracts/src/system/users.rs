use serde::{Deserialize, Serialize};

use crate::shared::serde_ids;

/// Role id of a super-admin, who sees and filters across all branches.
pub const SUPER_ADMIN_ROLE_ID: i64 = 1;

/// Response of `GET /api/user/profile`. Only the fields this page reads.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default, deserialize_with = "serde_ids::opt_id")]
    pub branch_id: Option<String>,
    #[serde(default, deserialize_with = "serde_ids::opt_i64")]
    pub role_id: Option<i64>,
}

/// Branch and role of the signed-in user, as the page uses them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserContext {
    pub branch_id: Option<String>,
    pub role_id: Option<i64>,
}

/// Which source-name links the user may see.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceNameScope {
    /// Every branch-source link (super-admin).
    All,
    /// Links of one branch.
    Branch(String),
    /// Profile not resolved yet, or a branch user without a branch.
    Unresolved,
}

impl From<UserProfile> for UserContext {
    fn from(profile: UserProfile) -> Self {
        Self {
            branch_id: profile.branch_id,
            role_id: profile.role_id,
        }
    }
}

impl UserContext {
    pub fn is_super_admin(&self) -> bool {
        self.role_id == Some(SUPER_ADMIN_ROLE_ID)
    }

    /// A branch user whose profile carries no branch cannot use the page.
    pub fn missing_branch(&self) -> bool {
        !self.is_super_admin() && self.branch_id.is_none()
    }

    pub fn source_name_scope(&self) -> SourceNameScope {
        if self.is_super_admin() {
            SourceNameScope::All
        } else if let Some(branch_id) = &self.branch_id {
            SourceNameScope::Branch(branch_id.clone())
        } else {
            SourceNameScope::Unresolved
        }
    }

    /// Branch the table filter is pinned to. `None` leaves it free.
    pub fn locked_branch_filter(&self) -> Option<String> {
        if self.is_super_admin() {
            None
        } else {
            self.branch_id.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(branch: Option<&str>, role: Option<i64>) -> UserContext {
        UserContext {
            branch_id: branch.map(str::to_string),
            role_id: role,
        }
    }

    #[test]
    fn test_profile_with_numeric_branch() {
        let profile: UserProfile =
            serde_json::from_str(r#"{"branchId": 4, "roleId": 2, "username": "op"}"#).unwrap();
        let ctx = UserContext::from(profile);
        assert_eq!(ctx.branch_id.as_deref(), Some("4"));
        assert_eq!(ctx.role_id, Some(2));
        assert!(!ctx.is_super_admin());
    }

    #[test]
    fn test_profile_with_null_branch() {
        let profile: UserProfile =
            serde_json::from_str(r#"{"branchId": null, "roleId": 1}"#).unwrap();
        let ctx = UserContext::from(profile);
        assert!(ctx.is_super_admin());
        assert!(!ctx.missing_branch());
    }

    #[test]
    fn test_branch_user_without_branch_is_flagged() {
        assert!(ctx(None, Some(3)).missing_branch());
        assert!(ctx(None, None).missing_branch());
        assert!(!ctx(Some("2"), Some(3)).missing_branch());
    }

    #[test]
    fn test_source_name_scope() {
        assert_eq!(ctx(Some("2"), Some(1)).source_name_scope(), SourceNameScope::All);
        assert_eq!(
            ctx(Some("2"), Some(5)).source_name_scope(),
            SourceNameScope::Branch("2".into())
        );
        assert_eq!(ctx(None, Some(5)).source_name_scope(), SourceNameScope::Unresolved);
        assert_eq!(ctx(None, None).source_name_scope(), SourceNameScope::Unresolved);
    }

    #[test]
    fn test_branch_filter_locked_only_for_branch_users() {
        assert_eq!(ctx(Some("9"), Some(2)).locked_branch_filter().as_deref(), Some("9"));
        assert_eq!(ctx(Some("9"), Some(1)).locked_branch_filter(), None);
        assert_eq!(ctx(None, Some(2)).locked_branch_filter(), None);
    }
}
