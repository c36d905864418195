//! Random UUID-based id generator.

use minibank_domain::id::AccountId;

use crate::ports::IdGenerator;

/// Generates UUID v4 account ids. Stateless; collisions are left to chance.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&self) -> AccountId {
        AccountId::new()
    }
}
