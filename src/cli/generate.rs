use crate::auth::Session;
use crate::cli::retrieve::{retrieve_account, AccountView};
use crate::cli::validate_account_name;
use crate::derivation::{derive_pepper, random_offset};
use crate::error::Result;
use crate::store::PasswordStore;
use rand::seq::SliceRandom;
use rand::Rng;

/// Generate and store a pepper for a new account.
///
/// A fresh bit offset is drawn from `rng`, the pepper is derived from the
/// account name and the session's master password, and a stem hint is picked
/// from `hints` (NULL when the pool is empty). Fails with `DuplicateAccount`
/// when the account already exists.
///
/// The returned view is read back from the store, so what the caller prints
/// is exactly what a later retrieve will print.
pub fn generate_account(
    store: &PasswordStore,
    session: &Session,
    account_name: &str,
    hints: &[String],
    rng: &mut impl Rng,
) -> Result<AccountView> {
    validate_account_name(account_name)?;

    let offset = random_offset(rng);
    let pepper = derive_pepper(account_name, session.master_password(), offset);
    let stem = hints.choose(rng).map(String::as_str);

    store.insert(account_name, &pepper, stem, offset)?;
    retrieve_account(store, account_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::session_for_tests;
    use crate::derivation::{hex_tail, MAX_OFFSET};
    use crate::error::PepperboxError;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use tempfile::tempdir;

    fn hints() -> Vec<String> {
        vec!["garden".to_string(), "harbor".to_string()]
    }

    #[test]
    fn test_generate_stores_derivable_pepper() {
        let dir = tempdir().unwrap();
        let store = PasswordStore::open(&dir.path().join("passwords.db")).unwrap();
        let session = session_for_tests("correct horse battery staple");
        let mut rng = StdRng::seed_from_u64(42);

        let view = generate_account(&store, &session, "example.com", &hints(), &mut rng).unwrap();
        assert_eq!(view.account_name, "example.com");
        assert!(hints().iter().any(|h| Some(h.as_str()) == view.stem_hint.as_deref()));

        // The stored pepper must match a recomputation with the stored offset.
        let record = store.lookup("example.com").unwrap().unwrap();
        let offset = record.bit_offset.unwrap();
        assert!(offset <= MAX_OFFSET);
        assert_eq!(
            record.pepper,
            derive_pepper("example.com", session.master_password(), offset)
        );
        assert_eq!(view.tail, hex_tail(&record.pepper));
    }

    #[test]
    fn test_generate_existing_account_is_duplicate() {
        let dir = tempdir().unwrap();
        let store = PasswordStore::open(&dir.path().join("passwords.db")).unwrap();
        let session = session_for_tests("hunter2");
        let mut rng = StdRng::seed_from_u64(1);

        generate_account(&store, &session, "example.com", &hints(), &mut rng).unwrap();
        let before = store.lookup("example.com").unwrap().unwrap();

        let err = generate_account(&store, &session, "example.com", &hints(), &mut rng)
            .unwrap_err();
        assert!(matches!(err, PepperboxError::DuplicateAccount(_)));

        // The failed attempt must not have touched the stored record.
        let after = store.lookup("example.com").unwrap().unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn test_generate_with_empty_hint_pool_stores_null_stem() {
        let dir = tempdir().unwrap();
        let store = PasswordStore::open(&dir.path().join("passwords.db")).unwrap();
        let session = session_for_tests("hunter2");
        let mut rng = StdRng::seed_from_u64(3);

        let view = generate_account(&store, &session, "example.com", &[], &mut rng).unwrap();
        assert_eq!(view.stem_hint, None);
    }

    #[test]
    fn test_generate_matches_offset_zero_vector_end_to_end() {
        // Fixed offset round trip: with offset 0 the pepper is the plain XOR
        // of the two digests, 32 bytes, no truncation.
        let dir = tempdir().unwrap();
        let store = PasswordStore::open(&dir.path().join("passwords.db")).unwrap();

        let pepper = derive_pepper("example.com", "correct horse battery staple", 0);
        store.insert("example.com", &pepper, Some("garden"), 0).unwrap();

        let view = retrieve_account(&store, "example.com").unwrap();
        assert_eq!(view.tail, "2d83cd");
        assert_eq!(view.stem_hint.as_deref(), Some("garden"));
        assert_eq!(
            hex::encode(&store.lookup("example.com").unwrap().unwrap().pepper),
            "67c26de9506624c0e16e544d0c82cc97c5fe10a47e2bc428ca7db56e522d83cd"
        );
    }
}
