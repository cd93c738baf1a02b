use thiserror::Error;

#[derive(Error, Debug)]
pub enum PepperboxError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("no record found for account '{0}'")]
    NotFound(String),

    #[error("account '{0}' already exists")]
    DuplicateAccount(String),

    #[error("invalid account name: {0}")]
    MalformedAccountName(String),

    #[error("incorrect master password")]
    AuthenticationFailure,

    #[error("{0} not set in environment")]
    MissingEnv(&'static str),
}

pub type Result<T> = std::result::Result<T, PepperboxError>;
