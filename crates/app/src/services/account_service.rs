//! Account service — use-cases for opening accounts and moving money.

use chrono::Utc;

use minibank_domain::account::Account;
use minibank_domain::error::{MiniBankError, NotFoundError, ValidationError};
use minibank_domain::id::AccountId;

use crate::contracts::{
    AccountBalanceResult, AccountResult, CreateAccountModel, CreateTransferModel,
    GetAccountBalanceModel,
};
use crate::ports::{AccountRepository, IdGenerator};

/// Application service for account operations.
///
/// Every operation is a single fetch, mutate, persist round trip. Concurrent
/// operations on the same account are not coordinated.
pub struct AccountService<R, G> {
    repo: R,
    ids: G,
}

impl<R: AccountRepository, G: IdGenerator> AccountService<R, G> {
    /// Create a new service backed by the given repository and id generator.
    pub fn new(repo: R, ids: G) -> Self {
        Self { repo, ids }
    }

    /// Open a new account with a fresh id, stamped with the current time.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NilAccountId`] if the id generator hands out
    /// the nil id, or the storage error propagated from the repository.
    #[tracing::instrument(skip(self, model), fields(iban = %model.iban))]
    pub async fn add_account(
        &self,
        model: CreateAccountModel,
    ) -> Result<AccountResult, MiniBankError> {
        let id = self.ids.next_id();
        if id.is_nil() {
            tracing::error!("id generator returned the nil id");
            return Err(ValidationError::NilAccountId.into());
        }

        let account = Account::builder()
            .id(id)
            .first_name(model.first_name)
            .last_name(model.last_name)
            .iban(model.iban)
            .balance(model.balance)
            .created_at(Utc::now())
            .build();

        let account = self.repo.create(account).await?;
        tracing::info!(account_id = %account.id(), "account created");
        Ok(AccountResult::from(&account))
    }

    /// Add `model.amount` to the account and persist the new balance.
    ///
    /// # Errors
    ///
    /// Returns [`MiniBankError::NotFound`] when the account does not exist,
    /// [`ValidationError::AmountOutOfRange`] when the new balance would not be
    /// representable, or a storage error from the repository. Nothing is written
    /// unless the lookup and the arithmetic both succeed.
    #[tracing::instrument(skip(self, model), fields(account_id = %model.account_origin_id))]
    pub async fn deposit_money_to_account(
        &self,
        model: CreateTransferModel,
    ) -> Result<Account, MiniBankError> {
        let mut account = self.get_account(model.account_origin_id).await?;
        account.deposit(model.amount)?;
        let account = self.repo.update_balance(account).await?;
        tracing::info!(
            amount = %model.amount,
            balance = %account.balance(),
            "deposit applied"
        );
        Ok(account)
    }

    /// Subtract `model.amount` from the account and persist the new balance.
    ///
    /// Overdrafts are accepted: the stored balance may become negative.
    ///
    /// # Errors
    ///
    /// Returns [`MiniBankError::NotFound`] when the account does not exist,
    /// [`ValidationError::AmountOutOfRange`] when the new balance would not be
    /// representable, or a storage error from the repository.
    #[tracing::instrument(skip(self, model), fields(account_id = %model.account_origin_id))]
    pub async fn withdraw_money_from_account(
        &self,
        model: CreateTransferModel,
    ) -> Result<Account, MiniBankError> {
        let mut account = self.get_account(model.account_origin_id).await?;
        account.withdraw(model.amount)?;
        let account = self.repo.update_balance(account).await?;
        tracing::info!(
            amount = %model.amount,
            balance = %account.balance(),
            "withdrawal applied"
        );
        Ok(account)
    }

    /// Read the owner and current balance of an account.
    ///
    /// # Errors
    ///
    /// Returns [`MiniBankError::NotFound`] when no account with `model.id`
    /// exists, or a storage error from the repository.
    #[tracing::instrument(skip(self, model), fields(account_id = %model.id))]
    pub async fn get_balance(
        &self,
        model: GetAccountBalanceModel,
    ) -> Result<AccountBalanceResult, MiniBankError> {
        let account = self.get_account(model.id).await?;
        Ok(AccountBalanceResult::from(&account))
    }

    async fn get_account(&self, id: AccountId) -> Result<Account, MiniBankError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Account",
                id: id.to_string(),
            }
            .into()
        })
    }
}
