//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod accounts;

use axum::Router;
use axum::routing::{get, post};

use minibank_app::ports::{AccountRepository, IdGenerator};

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<R, G>() -> Router<AppState<R, G>>
where
    R: AccountRepository + Send + Sync + 'static,
    G: IdGenerator + Send + Sync + 'static,
{
    Router::new()
        .route("/accounts", post(accounts::create::<R, G>))
        .route("/accounts/deposit", post(accounts::deposit::<R, G>))
        .route("/accounts/withdraw", post(accounts::withdraw::<R, G>))
        .route("/accounts/{id}/balance", get(accounts::balance::<R, G>))
}
