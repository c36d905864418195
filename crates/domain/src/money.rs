//! Monetary amounts.
//!
//! Balances and transfer amounts are exact signed decimals. There is no
//! currency attached; an account's IBAN implies it.

pub use rust_decimal::Decimal;

/// A signed monetary amount.
pub type Amount = Decimal;
