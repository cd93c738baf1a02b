use crate::cli::validate_account_name;
use crate::error::Result;
use crate::store::PasswordStore;

/// Delete an account's record. Fails with `NotFound` when absent.
pub fn delete_account(store: &PasswordStore, account_name: &str) -> Result<()> {
    validate_account_name(account_name)?;
    store.delete(account_name)
}
