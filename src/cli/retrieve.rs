use crate::cli::validate_account_name;
use crate::derivation::hex_tail;
use crate::error::{PepperboxError, Result};
use crate::store::PasswordStore;

/// What generate and retrieve present for an account: the pepper's hex tail
/// plus the stored stem hint. The pepper is read back as stored, never
/// recomputed from a live master password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountView {
    pub account_name: String,
    pub tail: String,
    pub stem_hint: Option<String>,
}

/// Retrieve the stored pepper tail and stem hint for an account.
pub fn retrieve_account(store: &PasswordStore, account_name: &str) -> Result<AccountView> {
    validate_account_name(account_name)?;

    let record = store
        .lookup(account_name)?
        .ok_or_else(|| PepperboxError::NotFound(account_name.to_string()))?;

    Ok(AccountView {
        account_name: record.account_name,
        tail: hex_tail(&record.pepper),
        stem_hint: record.stem_password,
    })
}
