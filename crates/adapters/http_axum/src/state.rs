//! Shared application state for axum handlers.

use std::sync::Arc;

use minibank_app::ports::{AccountRepository, IdGenerator};
use minibank_app::services::account_service::AccountService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository and id generator to avoid dynamic dispatch.
/// `Clone` is implemented manually so the underlying types themselves do not
/// need to be `Clone` — only the `Arc` wrapper is cloned.
pub struct AppState<R, G> {
    /// Account use-cases.
    pub account_service: Arc<AccountService<R, G>>,
}

impl<R, G> Clone for AppState<R, G> {
    fn clone(&self) -> Self {
        Self {
            account_service: Arc::clone(&self.account_service),
        }
    }
}

impl<R, G> AppState<R, G>
where
    R: AccountRepository + Send + Sync + 'static,
    G: IdGenerator + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(account_service: AccountService<R, G>) -> Self {
        Self {
            account_service: Arc::new(account_service),
        }
    }
}
