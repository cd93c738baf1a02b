//! Master-password login gate.
//!
//! The environment holds `MASTER_SALT` and `MASTER_PASSWORD`, the latter
//! being the hex SHA-256 of the real master password concatenated with the
//! salt. A successful login yields a [`Session`] carrying the plaintext
//! master password for the rest of the invocation; it is never persisted.

use crate::env;
use crate::error::{PepperboxError, Result};
use sha2::{Digest, Sha256};

/// Proof that the master password was verified this invocation.
#[derive(Debug)]
pub struct Session {
    master_password: String,
}

impl Session {
    pub fn master_password(&self) -> &str {
        &self.master_password
    }
}

/// Verify `master_password` against the environment gate.
pub fn login(master_password: String) -> Result<Session> {
    let salt = env::get_var("MASTER_SALT").ok_or(PepperboxError::MissingEnv("MASTER_SALT"))?;
    let stored =
        env::get_var("MASTER_PASSWORD").ok_or(PepperboxError::MissingEnv("MASTER_PASSWORD"))?;

    let mut hasher = Sha256::new();
    hasher.update(master_password.as_bytes());
    hasher.update(salt.as_bytes());
    let candidate = hex::encode(hasher.finalize());

    if candidate != stored.to_lowercase() {
        return Err(PepperboxError::AuthenticationFailure);
    }

    Ok(Session { master_password })
}

#[cfg(test)]
pub(crate) fn session_for_tests(master_password: &str) -> Session {
    Session {
        master_password: master_password.to_string(),
    }
}
