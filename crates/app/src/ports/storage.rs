//! Storage port — repository trait for account persistence.

use std::future::Future;
use std::sync::Arc;

use minibank_domain::account::Account;
use minibank_domain::error::MiniBankError;
use minibank_domain::id::AccountId;

/// Repository for persisting and querying [`Account`]s.
///
/// Dropping a returned future abandons the underlying IO; implementations
/// must not rely on being polled to completion.
pub trait AccountRepository {
    /// Persist a new account.
    fn create(
        &self,
        account: Account,
    ) -> impl Future<Output = Result<Account, MiniBankError>> + Send;

    /// Get an account by id. `Ok(None)` means no such account exists.
    fn get_by_id(
        &self,
        id: AccountId,
    ) -> impl Future<Output = Result<Option<Account>, MiniBankError>> + Send;

    /// Store the current balance of an existing account.
    ///
    /// Fails with [`MiniBankError::NotFound`] when the account was never created.
    fn update_balance(
        &self,
        account: Account,
    ) -> impl Future<Output = Result<Account, MiniBankError>> + Send;
}

impl<T: AccountRepository + Send + Sync> AccountRepository for Arc<T> {
    fn create(
        &self,
        account: Account,
    ) -> impl Future<Output = Result<Account, MiniBankError>> + Send {
        (**self).create(account)
    }

    fn get_by_id(
        &self,
        id: AccountId,
    ) -> impl Future<Output = Result<Option<Account>, MiniBankError>> + Send {
        (**self).get_by_id(id)
    }

    fn update_balance(
        &self,
        account: Account,
    ) -> impl Future<Output = Result<Account, MiniBankError>> + Send {
        (**self).update_balance(account)
    }
}
