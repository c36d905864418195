//! Id generation port.

use minibank_domain::id::AccountId;

/// Hands out account identifiers.
///
/// Every call must return an id that was never returned before. The nil id
/// is never a valid output.
pub trait IdGenerator {
    fn next_id(&self) -> AccountId;
}
