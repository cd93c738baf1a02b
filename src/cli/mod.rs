pub mod delete;
pub mod generate;
pub mod list;
pub mod reset;
pub mod retrieve;

pub use delete::*;
pub use generate::*;
pub use list::*;
pub use reset::*;
pub use retrieve::*;

use crate::error::{PepperboxError, Result};

/// Account name that switches the invocation into list mode.
pub const LIST_SENTINEL: &str = "*";

/// Reject account names before they reach the store.
pub fn validate_account_name(account_name: &str) -> Result<()> {
    if account_name.trim().is_empty() {
        return Err(PepperboxError::MalformedAccountName(
            "account name is empty".to_string(),
        ));
    }
    if account_name == LIST_SENTINEL {
        return Err(PepperboxError::MalformedAccountName(format!(
            "'{}' is reserved for listing accounts",
            LIST_SENTINEL
        )));
    }
    Ok(())
}
