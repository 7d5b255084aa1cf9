/// SQLSTATE codes the HTTP layer knows how to translate.
pub mod sqlstate {
    pub const UNIQUE_VIOLATION: &str = "23505";
    pub const FOREIGN_KEY_VIOLATION: &str = "23503";
}

/// A failed persistence call, classified by what the database reported.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// The statement matched no row.
    #[error("record not found")]
    RowNotFound,
    /// The server rejected the statement with a SQLSTATE code.
    #[error("database error {code}: {message}")]
    Coded { code: String, message: String },
    #[error(transparent)]
    Other(sqlx::Error),
}

impl DbError {
    pub fn code(&self) -> Option<&str> {
        match self {
            DbError::Coded { code, .. } => Some(code.as_str()),
            _ => None,
        }
    }
}

impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => DbError::RowNotFound,
            sqlx::Error::Database(db_err) => {
                let code = db_err.code().map(|code| code.into_owned());
                match code {
                    Some(code) => DbError::Coded {
                        code,
                        message: db_err.message().to_string(),
                    },
                    None => DbError::Other(sqlx::Error::Database(db_err)),
                }
            }
            err => DbError::Other(err),
        }
    }
}
