//! Storage-specific errors and their conversion into [`MiniBankError`].

use minibank_domain::error::MiniBankError;

/// Errors originating from the `SQLite` storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A query or connection failed.
    #[error("database error")]
    Database(#[from] sqlx::Error),

    /// Failed to run migrations.
    #[error("migration error")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// A stored row holds a value that does not parse back into the domain.
    #[error("account {id} has an unreadable {column}")]
    Decode {
        id: String,
        column: &'static str,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl StorageError {
    pub(crate) fn decode(
        id: &str,
        column: &'static str,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Decode {
            id: id.to_string(),
            column,
            source: Box::new(source),
        }
    }
}

impl From<StorageError> for MiniBankError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_name_account_and_column_when_decoding_fails() {
        let err = StorageError::decode("abc", "balance", std::io::Error::other("lots"));
        assert_eq!(err.to_string(), "account abc has an unreadable balance");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn should_wrap_into_opaque_storage_error() {
        let err: MiniBankError = StorageError::decode("abc", "id", std::io::Error::other("x")).into();
        assert!(matches!(err, MiniBankError::Storage(_)));
    }
}
