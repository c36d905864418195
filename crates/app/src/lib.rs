//! # minibank-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `AccountRepository` — create, fetch and balance updates for accounts
//!   - `IdGenerator` — fresh account identifiers
//! - Define the request/result **contracts** exchanged with callers
//! - Define the **driving/inbound port** `AccountService` — open an account,
//!   deposit, withdraw, read a balance
//! - Provide in-process infrastructure that doesn't need IO (UUID id generator)
//!
//! ## Dependency rule
//! Depends on `minibank-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod contracts;
pub mod id_generator;
pub mod ports;
pub mod services;
