use crate::error::Result;
use crate::store::PasswordStore;

/// List stored account names, optionally filtered to a prefix.
/// Order is lexicographic and stable across calls.
pub fn list_accounts(store: &PasswordStore, prefix: Option<&str>) -> Result<Vec<String>> {
    store.list(prefix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_list_accounts_with_and_without_prefix() {
        let dir = tempdir().unwrap();
        let store = PasswordStore::open(&dir.path().join("passwords.db")).unwrap();
        store.insert("mail.example.com", &[1], None, 0).unwrap();
        store.insert("bank.example.com", &[2], None, 0).unwrap();

        assert_eq!(
            list_accounts(&store, None).unwrap(),
            vec!["bank.example.com".to_string(), "mail.example.com".to_string()]
        );
        assert_eq!(
            list_accounts(&store, Some("bank")).unwrap(),
            vec!["bank.example.com".to_string()]
        );
    }
}
