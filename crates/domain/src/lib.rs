//! # minibank-domain
//!
//! Pure domain model for the minibank account service.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, money
//! - Define the **Account** entity (identity, holder names, IBAN, balance)
//! - Own the balance arithmetic (`deposit`, `withdraw`)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod money;

pub mod account;
