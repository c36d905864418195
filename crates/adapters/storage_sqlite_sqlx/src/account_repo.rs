//! `SQLite` implementation of [`AccountRepository`].

use std::future::Future;
use std::str::FromStr;

use rust_decimal::Decimal;
use sqlx::SqlitePool;

use minibank_app::ports::AccountRepository;
use minibank_domain::account::Account;
use minibank_domain::error::{MiniBankError, NotFoundError};
use minibank_domain::id::AccountId;

use crate::error::StorageError;

/// An `accounts` row exactly as stored.
#[derive(sqlx::FromRow)]
struct AccountRow {
    id: String,
    first_name: String,
    last_name: String,
    iban: String,
    balance: String,
    created_at: String,
}

impl TryFrom<AccountRow> for Account {
    type Error = StorageError;

    fn try_from(row: AccountRow) -> Result<Self, Self::Error> {
        let id = AccountId::from_str(&row.id)
            .map_err(|err| StorageError::decode(&row.id, "id", err))?;
        let balance = Decimal::from_str(&row.balance)
            .map_err(|err| StorageError::decode(&row.id, "balance", err))?;
        let created_at = chrono::DateTime::parse_from_rfc3339(&row.created_at)
            .map_err(|err| StorageError::decode(&row.id, "created_at", err))?
            .to_utc();

        Ok(Account::builder()
            .id(id)
            .first_name(row.first_name)
            .last_name(row.last_name)
            .iban(row.iban)
            .balance(balance)
            .created_at(created_at)
            .build())
    }
}

const INSERT: &str = "INSERT INTO accounts (id, first_name, last_name, iban, balance, created_at) VALUES (?, ?, ?, ?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM accounts WHERE id = ?";
const UPDATE_BALANCE: &str = "UPDATE accounts SET balance = ? WHERE id = ?";

/// `SQLite`-backed account repository.
pub struct SqliteAccountRepository {
    pool: SqlitePool,
}

impl SqliteAccountRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl AccountRepository for SqliteAccountRepository {
    fn create(
        &self,
        account: Account,
    ) -> impl Future<Output = Result<Account, MiniBankError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(INSERT)
                .bind(account.id().to_string())
                .bind(account.first_name())
                .bind(account.last_name())
                .bind(account.iban())
                .bind(account.balance().to_string())
                .bind(account.created_at().to_rfc3339())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(account)
        }
    }

    fn get_by_id(
        &self,
        id: AccountId,
    ) -> impl Future<Output = Result<Option<Account>, MiniBankError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<AccountRow> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.to_string())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(row.map(Account::try_from).transpose()?)
        }
    }

    fn update_balance(
        &self,
        account: Account,
    ) -> impl Future<Output = Result<Account, MiniBankError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(UPDATE_BALANCE)
                .bind(account.balance().to_string())
                .bind(account.id().to_string())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            if result.rows_affected() == 0 {
                return Err(NotFoundError {
                    entity: "Account",
                    id: account.id().to_string(),
                }
                .into());
            }

            Ok(account)
        }
    }
}
