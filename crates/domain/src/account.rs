//! Account — a bank account holding an owner, an IBAN and a balance.
//!
//! The balance is private: it changes only through [`Account::deposit`] and
//! [`Account::withdraw`]. Neither operation enforces a sign on the amount or
//! rejects an overdraft, so a balance may become negative. The only refusal
//! is a result outside the range of [`Amount`].
//!
//! `Account` serializes for responses but never deserializes: callers cannot
//! hand the service an account with a balance of their choosing.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::ValidationError;
use crate::id::AccountId;
use crate::money::Amount;

/// A bank account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Account {
    id: AccountId,
    first_name: String,
    last_name: String,
    iban: String,
    balance: Amount,
    created_at: DateTime<Utc>,
}

impl Account {
    /// Create a builder for constructing an [`Account`].
    #[must_use]
    pub fn builder() -> AccountBuilder {
        AccountBuilder::default()
    }

    #[must_use]
    pub fn id(&self) -> AccountId {
        self.id
    }

    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// The IBAN, as supplied at creation. It is not validated here.
    #[must_use]
    pub fn iban(&self) -> &str {
        &self.iban
    }

    #[must_use]
    pub fn balance(&self) -> Amount {
        self.balance
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Add `amount` to the balance.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::AmountOutOfRange`] when the sum does not fit
    /// in an [`Amount`]; the balance is left untouched.
    pub fn deposit(&mut self, amount: Amount) -> Result<(), ValidationError> {
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(ValidationError::AmountOutOfRange {
                balance: self.balance,
                amount,
            })?;
        Ok(())
    }

    /// Subtract `amount` from the balance. The result may be negative.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::AmountOutOfRange`] when the difference does
    /// not fit in an [`Amount`]; the balance is left untouched.
    pub fn withdraw(&mut self, amount: Amount) -> Result<(), ValidationError> {
        self.balance = self
            .balance
            .checked_sub(amount)
            .ok_or(ValidationError::AmountOutOfRange {
                balance: self.balance,
                amount,
            })?;
        Ok(())
    }
}

/// Step-by-step builder for [`Account`].
///
/// Missing fields fall back to defaults: a fresh random id, empty names,
/// a zero balance and the current time.
#[derive(Debug, Default)]
pub struct AccountBuilder {
    id: Option<AccountId>,
    first_name: Option<String>,
    last_name: Option<String>,
    iban: Option<String>,
    balance: Option<Amount>,
    created_at: Option<DateTime<Utc>>,
}

impl AccountBuilder {
    #[must_use]
    pub fn id(mut self, id: AccountId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    #[must_use]
    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    #[must_use]
    pub fn iban(mut self, iban: impl Into<String>) -> Self {
        self.iban = Some(iban.into());
        self
    }

    #[must_use]
    pub fn balance(mut self, balance: Amount) -> Self {
        self.balance = Some(balance);
        self
    }

    #[must_use]
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Consume the builder and return an [`Account`].
    #[must_use]
    pub fn build(self) -> Account {
        Account {
            id: self.id.unwrap_or_default(),
            first_name: self.first_name.unwrap_or_default(),
            last_name: self.last_name.unwrap_or_default(),
            iban: self.iban.unwrap_or_default(),
            balance: self.balance.unwrap_or_default(),
            created_at: self.created_at.unwrap_or_else(Utc::now),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn account_with_balance(balance: i64) -> Account {
        Account::builder()
            .first_name("Ana")
            .last_name("Lee")
            .iban("DE1234")
            .balance(Decimal::from(balance))
            .build()
    }

    #[test]
    fn should_expose_builder_fields_through_accessors() {
        let id = AccountId::new();
        let created_at = Utc::now();
        let account = Account::builder()
            .id(id)
            .first_name("Ana")
            .last_name("Lee")
            .iban("DE1234")
            .balance(Decimal::from(100))
            .created_at(created_at)
            .build();

        assert_eq!(account.id(), id);
        assert_eq!(account.first_name(), "Ana");
        assert_eq!(account.last_name(), "Lee");
        assert_eq!(account.iban(), "DE1234");
        assert_eq!(account.balance(), Decimal::from(100));
        assert_eq!(account.created_at(), created_at);
    }

    #[test]
    fn should_default_to_zero_balance_and_fresh_id() {
        let a = Account::builder().build();
        let b = Account::builder().build();
        assert_eq!(a.balance(), Decimal::ZERO);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn should_increase_balance_when_depositing() {
        let mut account = account_with_balance(100);
        account.deposit(Decimal::from(50)).unwrap();
        assert_eq!(account.balance(), Decimal::from(150));
    }

    #[test]
    fn should_keep_exact_cents_when_depositing_fractions() {
        let mut account = account_with_balance(0);
        account.deposit(Decimal::new(10, 2)).unwrap();
        account.deposit(Decimal::new(20, 2)).unwrap();
        assert_eq!(account.balance(), Decimal::new(30, 2));
    }

    #[test]
    fn should_decrease_balance_when_withdrawing() {
        let mut account = account_with_balance(150);
        account.withdraw(Decimal::from(50)).unwrap();
        assert_eq!(account.balance(), Decimal::from(100));
    }

    #[test]
    fn should_allow_negative_balance_when_overdrawn() {
        let mut account = account_with_balance(150);
        account.withdraw(Decimal::from(200)).unwrap();
        assert_eq!(account.balance(), Decimal::from(-50));
    }

    #[test]
    fn should_apply_negative_deposit_as_is() {
        let mut account = account_with_balance(10);
        account.deposit(Decimal::from(-25)).unwrap();
        assert_eq!(account.balance(), Decimal::from(-15));
    }

    #[test]
    fn should_hold_additive_law_for_deposit_and_withdraw() {
        for (start, amount) in [(0_i64, 0_i64), (100, 1), (-40, 75), (7, 1_000_000)] {
            let mut account = account_with_balance(start);
            account.deposit(Decimal::from(amount)).unwrap();
            assert_eq!(account.balance(), Decimal::from(start + amount));
            account.withdraw(Decimal::from(amount)).unwrap();
            assert_eq!(account.balance(), Decimal::from(start));
        }
    }

    #[test]
    fn should_not_touch_identity_when_mutating_balance() {
        let mut account = account_with_balance(100);
        let before = account.clone();
        account.deposit(Decimal::from(1)).unwrap();
        account.withdraw(Decimal::from(3)).unwrap();
        assert_eq!(account.id(), before.id());
        assert_eq!(account.created_at(), before.created_at());
        assert_eq!(account.iban(), before.iban());
    }

    #[test]
    fn should_serialize_balance_as_string() {
        let json = serde_json::to_value(account_with_balance(42)).unwrap();
        assert_eq!(json["balance"], "42");
        assert_eq!(json["iban"], "DE1234");
    }

    #[test]
    fn should_reject_deposit_when_balance_would_overflow() {
        let mut account = Account::builder().balance(Decimal::MAX).build();

        let result = account.deposit(Decimal::ONE);

        assert_eq!(
            result,
            Err(ValidationError::AmountOutOfRange {
                balance: Decimal::MAX,
                amount: Decimal::ONE,
            })
        );
        assert_eq!(account.balance(), Decimal::MAX);
    }

    #[test]
    fn should_reject_withdraw_when_balance_would_overflow() {
        let mut account = Account::builder().balance(Decimal::MIN).build();

        let result = account.withdraw(Decimal::ONE);

        assert!(matches!(
            result,
            Err(ValidationError::AmountOutOfRange { .. })
        ));
        assert_eq!(account.balance(), Decimal::MIN);
    }

    #[test]
    fn should_allow_overdraft_down_to_the_lower_bound() {
        let mut account = Account::builder().balance(Decimal::ZERO).build();
        account.withdraw(Decimal::MAX).unwrap();
        assert_eq!(account.balance(), Decimal::MIN);
    }
}
