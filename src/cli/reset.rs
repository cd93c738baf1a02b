use crate::auth::Session;
use crate::cli::validate_account_name;
use crate::derivation::{derive_pepper, random_offset};
use crate::error::Result;
use crate::store::PasswordStore;
use rand::seq::SliceRandom;
use rand::Rng;

/// Replace the pepper for an existing account (the "forgot" flow).
///
/// A new bit offset is drawn and persisted together with the new pepper and
/// stem hint, so the stored offset always matches the stored pepper. Fails
/// with `NotFound` when the account does not exist.
pub fn reset_account(
    store: &PasswordStore,
    session: &Session,
    account_name: &str,
    hints: &[String],
    rng: &mut impl Rng,
) -> Result<()> {
    validate_account_name(account_name)?;

    let offset = random_offset(rng);
    let pepper = derive_pepper(account_name, session.master_password(), offset);
    let stem = hints.choose(rng).map(String::as_str);

    store.update(account_name, &pepper, stem, offset)
}
