//! SQLite-backed store for password records.
//!
//! One row per account, keyed uniquely by account name. The pepper is an
//! opaque blob here; nothing in this module knows how it was derived.

use crate::error::{PepperboxError, Result};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

/// A stored password record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordRecord {
    pub account_name: String,
    pub pepper: Vec<u8>,
    pub stem_password: Option<String>,
    pub bit_offset: Option<u32>,
    pub created_at: String,
}

pub struct PasswordStore {
    conn: Connection,
}

impl PasswordStore {
    /// Open the database at `path`, creating it and its schema if needed.
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.init_schema()?;
        Ok(store)
    }

    fn init_schema(&self) -> Result<()> {
        self.conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS passwords (
                id INTEGER PRIMARY KEY,
                account_name TEXT NOT NULL UNIQUE,
                pepper BLOB NOT NULL,
                stem_password TEXT,
                bit_offset INTEGER,
                created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
            );
            "#,
        )?;
        Ok(())
    }

    /// Insert a new record. Fails with `DuplicateAccount` when the account
    /// name is already present; the existing row is left untouched.
    pub fn insert(
        &self,
        account_name: &str,
        pepper: &[u8],
        stem_password: Option<&str>,
        bit_offset: u32,
    ) -> Result<()> {
        let result = self.conn.execute(
            "INSERT INTO passwords (account_name, pepper, stem_password, bit_offset)
             VALUES (?1, ?2, ?3, ?4)",
            params![account_name, pepper, stem_password, bit_offset],
        );

        match result {
            Ok(_) => Ok(()),
            Err(e) if is_unique_violation(&e) => {
                Err(PepperboxError::DuplicateAccount(account_name.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Replace pepper, stem hint and bit offset for an existing record,
    /// refreshing its creation timestamp.
    pub fn update(
        &self,
        account_name: &str,
        pepper: &[u8],
        stem_password: Option<&str>,
        bit_offset: u32,
    ) -> Result<()> {
        let changed = self.conn.execute(
            "UPDATE passwords
             SET pepper = ?2, stem_password = ?3, bit_offset = ?4,
                 created_at = CURRENT_TIMESTAMP
             WHERE account_name = ?1",
            params![account_name, pepper, stem_password, bit_offset],
        )?;

        if changed == 0 {
            return Err(PepperboxError::NotFound(account_name.to_string()));
        }
        Ok(())
    }

    /// Fetch a record by account name. Absence is a value, not an error;
    /// the read paths decide how to present it.
    pub fn lookup(&self, account_name: &str) -> Result<Option<PasswordRecord>> {
        let record = self
            .conn
            .query_row(
                "SELECT account_name, pepper, stem_password, bit_offset, created_at
                 FROM passwords WHERE account_name = ?1",
                params![account_name],
                |row| {
                    Ok(PasswordRecord {
                        account_name: row.get(0)?,
                        pepper: row.get(1)?,
                        stem_password: row.get(2)?,
                        bit_offset: row.get(3)?,
                        created_at: row.get(4)?,
                    })
                },
            )
            .optional()?;
        Ok(record)
    }

    /// Delete a record. Fails with `NotFound` when absent.
    pub fn delete(&self, account_name: &str) -> Result<()> {
        let deleted = self.conn.execute(
            "DELETE FROM passwords WHERE account_name = ?1",
            params![account_name],
        )?;

        if deleted == 0 {
            return Err(PepperboxError::NotFound(account_name.to_string()));
        }
        Ok(())
    }

    /// List account names in lexicographic order, optionally filtered to
    /// those starting with `prefix`. An empty prefix lists everything.
    pub fn list(&self, prefix: Option<&str>) -> Result<Vec<String>> {
        let mut names = Vec::new();
        match prefix.filter(|p| !p.is_empty()) {
            Some(p) => {
                let mut stmt = self.conn.prepare(
                    "SELECT account_name FROM passwords
                     WHERE account_name LIKE ?1 ORDER BY account_name",
                )?;
                let rows = stmt.query_map(params![format!("{}%", p)], |row| row.get(0))?;
                for name in rows {
                    names.push(name?);
                }
            }
            None => {
                let mut stmt = self
                    .conn
                    .prepare("SELECT account_name FROM passwords ORDER BY account_name")?;
                let rows = stmt.query_map([], |row| row.get(0))?;
                for name in rows {
                    names.push(name?);
                }
            }
        }
        Ok(names)
    }
}

fn is_unique_violation(e: &rusqlite::Error) -> bool {
    matches!(
        e,
        rusqlite::Error::SqliteFailure(err, _)
            if err.code == rusqlite::ErrorCode::ConstraintViolation
    )
}
