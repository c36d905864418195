//! JSON REST handlers for accounts.

use std::str::FromStr;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use minibank_app::contracts::{
    AccountBalanceResult, AccountResult, CreateAccountModel, CreateTransferModel,
    GetAccountBalanceModel,
};
use minibank_app::ports::{AccountRepository, IdGenerator};
use minibank_domain::account::Account;
use minibank_domain::id::AccountId;

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<AccountResult>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the deposit and withdraw endpoints.
pub enum TransferResponse {
    Ok(Json<Account>),
}

impl IntoResponse for TransferResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the balance endpoint.
pub enum BalanceResponse {
    Ok(Json<AccountBalanceResult>),
}

impl IntoResponse for BalanceResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `POST /api/accounts`
pub async fn create<R, G>(
    State(state): State<AppState<R, G>>,
    Json(req): Json<CreateAccountModel>,
) -> Result<CreateResponse, ApiError>
where
    R: AccountRepository + Send + Sync + 'static,
    G: IdGenerator + Send + Sync + 'static,
{
    let created = state.account_service.add_account(req).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `POST /api/accounts/deposit`
pub async fn deposit<R, G>(
    State(state): State<AppState<R, G>>,
    Json(req): Json<CreateTransferModel>,
) -> Result<TransferResponse, ApiError>
where
    R: AccountRepository + Send + Sync + 'static,
    G: IdGenerator + Send + Sync + 'static,
{
    let account = state.account_service.deposit_money_to_account(req).await?;
    Ok(TransferResponse::Ok(Json(account)))
}

/// `POST /api/accounts/withdraw`
pub async fn withdraw<R, G>(
    State(state): State<AppState<R, G>>,
    Json(req): Json<CreateTransferModel>,
) -> Result<TransferResponse, ApiError>
where
    R: AccountRepository + Send + Sync + 'static,
    G: IdGenerator + Send + Sync + 'static,
{
    let account = state
        .account_service
        .withdraw_money_from_account(req)
        .await?;
    Ok(TransferResponse::Ok(Json(account)))
}

/// `GET /api/accounts/{id}/balance`
pub async fn balance<R, G>(
    State(state): State<AppState<R, G>>,
    Path(id): Path<String>,
) -> Result<BalanceResponse, ApiError>
where
    R: AccountRepository + Send + Sync + 'static,
    G: IdGenerator + Send + Sync + 'static,
{
    let id = AccountId::from_str(&id)?;
    let balance = state
        .account_service
        .get_balance(GetAccountBalanceModel { id })
        .await?;
    Ok(BalanceResponse::Ok(Json(balance)))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use http_body_util::BodyExt;
    use minibank_app::services::account_service::AccountService;
    use minibank_domain::account::Account;
    use minibank_domain::error::MiniBankError;
    use minibank_domain::id::AccountId;
    use serde_json::{Value, json};
    use std::collections::HashMap;
    use std::sync::Mutex;
    use tower::ServiceExt;

    use super::*;

    #[derive(Default)]
    struct InMemoryAccountRepo {
        store: Mutex<HashMap<AccountId, Account>>,
    }

    impl AccountRepository for InMemoryAccountRepo {
        async fn create(&self, account: Account) -> Result<Account, MiniBankError> {
            self.store
                .lock()
                .unwrap()
                .insert(account.id(), account.clone());
            Ok(account)
        }
        async fn get_by_id(&self, id: AccountId) -> Result<Option<Account>, MiniBankError> {
            Ok(self.store.lock().unwrap().get(&id).cloned())
        }
        async fn update_balance(&self, account: Account) -> Result<Account, MiniBankError> {
            self.store
                .lock()
                .unwrap()
                .insert(account.id(), account.clone());
            Ok(account)
        }
    }

    struct FixedIds(AccountId);

    impl IdGenerator for FixedIds {
        fn next_id(&self) -> AccountId {
            self.0
        }
    }

    fn app(id: AccountId) -> axum::Router {
        let state = AppState::new(AccountService::new(
            InMemoryAccountRepo::default(),
            FixedIds(id),
        ));
        crate::router::build(state)
    }

    fn post_json(uri: &str, body: &Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn should_create_account_and_return_201() {
        let id = AccountId::new();
        let response = app(id)
            .oneshot(post_json(
                "/api/accounts",
                &json!({"first_name": "Ana", "last_name": "Lee", "iban": "DE1234", "balance": "100"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let body = body_json(response).await;
        assert_eq!(body["id"], id.to_string());
        assert_eq!(body["balance"], "100");
        assert!(body["creation_date"].is_string());
    }

    #[tokio::test]
    async fn should_return_404_when_depositing_to_unknown_account() {
        let response = app(AccountId::new())
            .oneshot(post_json(
                "/api/accounts/deposit",
                &json!({"account_origin_id": AccountId::new(), "amount": 10}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert!(body["error"].as_str().unwrap().contains("not found"));
    }

    #[tokio::test]
    async fn should_return_400_when_balance_id_is_malformed() {
        let response = app(AccountId::new())
            .oneshot(
                Request::builder()
                    .uri("/api/accounts/999/balance")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn should_apply_deposit_and_withdraw_then_report_balance() {
        let id = AccountId::new();
        let app = app(id);

        let create = json!({"first_name": "Ana", "last_name": "Lee", "iban": "DE1234", "balance": 100});
        let response = app
            .clone()
            .oneshot(post_json("/api/accounts", &create))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let deposit = json!({"account_origin_id": id, "amount": "50"});
        let response = app
            .clone()
            .oneshot(post_json("/api/accounts/deposit", &deposit))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["balance"], "150");

        let withdraw = json!({"account_origin_id": id, "amount": "200"});
        let response = app
            .clone()
            .oneshot(post_json("/api/accounts/withdraw", &withdraw))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["balance"], "-50");

        let response = app
            .oneshot(
                Request::builder()
                    .uri(format!("/api/accounts/{id}/balance"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["first_name"], "Ana");
        assert_eq!(body["iban"], "DE1234");
        assert_eq!(body["balance"], "-50");
    }

    #[tokio::test]
    async fn should_return_400_when_deposit_would_overflow_balance() {
        let id = AccountId::new();
        let app = app(id);
        let create = json!({
            "first_name": "Ana",
            "last_name": "Lee",
            "iban": "DE1234",
            "balance": "79228162514264337593543950335",
        });
        let response = app
            .clone()
            .oneshot(post_json("/api/accounts", &create))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let deposit = json!({"account_origin_id": id, "amount": "1"});
        let response = app
            .oneshot(post_json("/api/accounts/deposit", &deposit))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["code"], "validation");
        assert!(body["error"].as_str().unwrap().contains("out of range"));
    }
}
