use contracts::domain::a003_source_name::aggregate::SourceName;
use contracts::system::users::SourceNameScope;

use crate::shared::api_utils::get_json;

fn scope_path(scope: &SourceNameScope) -> Option<String> {
    match scope {
        SourceNameScope::All => Some("/api/branch-source-names".to_string()),
        SourceNameScope::Branch(branch_id) => {
            Some(format!("/api/branch/{}/source-names", branch_id))
        }
        SourceNameScope::Unresolved => None,
    }
}

/// Fetch the source names visible in `scope`.
///
/// An unresolved scope makes no request and yields an empty list.
pub async fn fetch_source_names(scope: &SourceNameScope) -> Result<Vec<SourceName>, String> {
    match scope_path(scope) {
        Some(path) => get_json(&path).await,
        None => Ok(Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_path() {
        assert_eq!(
            scope_path(&SourceNameScope::All).as_deref(),
            Some("/api/branch-source-names")
        );
        assert_eq!(
            scope_path(&SourceNameScope::Branch("5".into())).as_deref(),
            Some("/api/branch/5/source-names")
        );
        assert_eq!(scope_path(&SourceNameScope::Unresolved), None);
    }
}
