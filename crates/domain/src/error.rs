//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`MiniBankError`] via `#[from]`.

use rust_decimal::Decimal;

/// Top-level error returned by services and ports.
#[derive(Debug, thiserror::Error)]
pub enum MiniBankError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// Opaque error raised by a persistence adapter.
    #[error("storage error: {0}")]
    Storage(Box<dyn std::error::Error + Send + Sync>),
}

/// Input that does not describe a usable value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("invalid account id {0:?}")]
    InvalidAccountId(String),

    /// The id generator handed out the all-zero id.
    #[error("refusing to open an account with the nil id")]
    NilAccountId,

    /// Applying the amount would leave the representable decimal range.
    #[error("amount {amount} would move balance {balance} out of range")]
    AmountOutOfRange { balance: Decimal, amount: Decimal },
}

/// A lookup by identifier found nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    /// Kind of the missing record, e.g. `"Account"`.
    pub entity: &'static str,
    pub id: String,
}
