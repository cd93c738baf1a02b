//! Pepperbox - a pepper-based password manager
//!
//! Per named account, pepperbox stores a short derived secret (the "pepper")
//! that the user combines with a memorized "stem" to form the account's real
//! password. The master password is verified against an environment gate at
//! startup and is never persisted.
//!
//! ## Derivation pipeline
//!
//! ```text
//! account name    ─ SHA-256 ─ shift ─┐
//!                                    XOR (truncated to shorter) → pepper
//! master password ─ SHA-256 ─ shift ─┘
//! ```
//!
//! Both digests are right-shifted by the account's random bit offset and
//! re-encoded minimally, so the operand lengths (and hence the pepper's
//! length) depend on the digests' own bit patterns. The pepper is stored in
//! SQLite; retrieval reads it back as-is and shows the last six hex
//! characters next to the stem hint.
//!
//! This is obfuscation, not hardened cryptography: no verifier ties stored
//! peppers to the master password that created them, and a changed master
//! password silently desynchronizes every previously stored pepper.
//!
//! ## Example
//!
//! ```no_run
//! use pepperbox::auth;
//! use pepperbox::cli::{generate_account, retrieve_account};
//! use pepperbox::store::PasswordStore;
//! use std::path::Path;
//!
//! let store = PasswordStore::open(Path::new("passwords.db")).unwrap();
//! let session = auth::login("master password".into()).unwrap();
//! let hints = pepperbox::env::stem_hints();
//!
//! let view = generate_account(
//!     &store,
//!     &session,
//!     "example.com",
//!     &hints,
//!     &mut rand::thread_rng(),
//! ).unwrap();
//! println!("{} {}", view.account_name, view.tail);
//!
//! let same = retrieve_account(&store, "example.com").unwrap();
//! assert_eq!(view, same);
//! ```

pub mod auth;
pub mod cli;
pub mod derivation;
pub mod env;
pub mod error;
pub mod store;

pub use derivation::{derive_pepper, digest, hex_tail, shift_bits, MAX_OFFSET};
pub use error::{PepperboxError, Result};
pub use store::{PasswordRecord, PasswordStore};
