//! Request models and result snapshots exchanged with callers.
//!
//! Results are copies taken from an [`Account`] at one point in time; they
//! do not track later balance changes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use minibank_domain::account::Account;
use minibank_domain::id::AccountId;
use minibank_domain::money::Amount;

/// Input for opening an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateAccountModel {
    pub first_name: String,
    pub last_name: String,
    /// Expected to be validated by the caller.
    pub iban: String,
    /// Opening balance.
    pub balance: Amount,
}

/// Input for a deposit or a withdrawal on a single account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTransferModel {
    pub account_origin_id: AccountId,
    pub amount: Amount,
}

/// Input for a balance lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetAccountBalanceModel {
    pub id: AccountId,
}

/// Snapshot of a freshly created account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountResult {
    pub id: AccountId,
    pub first_name: String,
    pub last_name: String,
    pub iban: String,
    pub balance: Amount,
    pub creation_date: DateTime<Utc>,
}

impl From<&Account> for AccountResult {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id(),
            first_name: account.first_name().to_string(),
            last_name: account.last_name().to_string(),
            iban: account.iban().to_string(),
            balance: account.balance(),
            creation_date: account.created_at(),
        }
    }
}

/// Snapshot of an account's owner and balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountBalanceResult {
    pub first_name: String,
    pub last_name: String,
    pub iban: String,
    pub balance: Amount,
}

impl From<&Account> for AccountBalanceResult {
    fn from(account: &Account) -> Self {
        Self {
            first_name: account.first_name().to_string(),
            last_name: account.last_name().to_string(),
            iban: account.iban().to_string(),
            balance: account.balance(),
        }
    }
}
