use std::{sync::Arc, time::Duration};

use axum::{
    Json, Router,
    extract::{Path, State},
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use ledger_core::{
    CachedClient, LedgerClient, SAMPLE_ADDRESS, SAMPLE_HASH, decode, input,
    model::{AccountInfo, TransactionInfo},
    responder::{Endpoint, params},
    view::{AccountView, TransactionView, status_report},
};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{errors::ApiError, session::SessionContext, ui::UI_HTML};

pub type Backend = Arc<dyn LedgerClient>;

#[derive(Clone)]
pub struct AppState {
    pub client: Arc<CachedClient<Backend>>,
    pub session: Arc<Mutex<SessionContext>>,
}

impl AppState {
    pub fn new(backend: Backend, cache_ttl: Duration, node_url: &str) -> Self {
        Self {
            client: Arc::new(CachedClient::new(backend, cache_ttl)),
            session: Arc::new(Mutex::new(SessionContext::new(node_url))),
        }
    }
}

pub fn json_response<T: Serialize>(status: StatusCode, payload: T) -> Response {
    let mut headers = HeaderMap::new();
    headers.insert("Access-Control-Allow-Origin", HeaderValue::from_static("*"));
    (status, headers, Json(payload)).into_response()
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/index.html", get(index))
        .route("/api/status", get(node_status))
        .route("/api/samples", get(samples))
        .route("/api/account/:address", get(account))
        .route("/api/transaction/:hash", get(transaction))
        .route("/api/tx-type/:code", get(tx_type))
        .route("/api/session", get(session))
        .route("/api/session/accounts", post(add_account))
        .route("/api/session/select", post(select_account))
        .route("/api/session/node", post(set_node))
        .route("/api/cache/clear", post(clear_cache))
        .with_state(state)
}

async fn index() -> Html<&'static str> {
    Html(UI_HTML)
}

async fn node_status(State(state): State<AppState>) -> Response {
    let report = status_report(state.client.as_ref());
    json_response(StatusCode::OK, report)
}

async fn samples() -> Response {
    json_response(
        StatusCode::OK,
        serde_json::json!({ "address": SAMPLE_ADDRESS, "hash": SAMPLE_HASH }),
    )
}

async fn account(
    State(state): State<AppState>,
    Path(raw): Path<String>,
) -> Result<Response, ApiError> {
    let address = input::validate_address(&raw)?;
    debug!(address = %address, "account lookup");
    let data = state
        .client
        .query(Endpoint::AccountLookup.name(), &params(&[("address", &address)]))?;
    let info: AccountInfo = serde_json::from_value(data.clone())?;
    Ok(json_response(
        StatusCode::OK,
        serde_json::json!({ "account": AccountView::from_info(&info), "raw": data }),
    ))
}

async fn transaction(
    State(state): State<AppState>,
    Path(raw): Path<String>,
) -> Result<Response, ApiError> {
    let hash = input::validate_hash(&raw)?;
    debug!(hash = %hash, "transaction lookup");
    let data = state
        .client
        .query(Endpoint::TransactionLookup.name(), &params(&[("hash", &hash)]))?;
    let info: TransactionInfo = serde_json::from_value(data.clone())?;
    Ok(json_response(
        StatusCode::OK,
        serde_json::json!({ "transaction": TransactionView::from_info(&info), "raw": data }),
    ))
}

async fn tx_type(Path(raw): Path<String>) -> Result<Response, ApiError> {
    let code = raw
        .trim()
        .parse::<u32>()
        .map_err(|_| ApiError::BadRequest(format!("invalid transaction type code: {}", raw)))?;
    Ok(json_response(
        StatusCode::OK,
        serde_json::json!({ "code": code, "name": decode::transaction_type_name(code) }),
    ))
}

async fn session(State(state): State<AppState>) -> Response {
    let session = state.session.lock().clone();
    json_response(StatusCode::OK, session)
}

#[derive(Deserialize)]
struct AddAccountRequest {
    address: String,
    #[serde(default)]
    label: Option<String>,
}

async fn add_account(
    State(state): State<AppState>,
    Json(req): Json<AddAccountRequest>,
) -> Result<Response, ApiError> {
    let mut session = state.session.lock();
    session.add_account(&req.address, req.label)?;
    Ok(json_response(StatusCode::OK, session.clone()))
}

#[derive(Deserialize)]
struct SelectRequest {
    address: String,
}

async fn select_account(
    State(state): State<AppState>,
    Json(req): Json<SelectRequest>,
) -> Response {
    let mut session = state.session.lock();
    let changed = session.select(&req.address).is_some();
    // selection change invalidates memoized lookups
    state.client.clear();
    debug!(changed, "account selection");
    json_response(StatusCode::OK, session.clone())
}

#[derive(Deserialize)]
struct NodeRequest {
    url: String,
}

async fn set_node(
    State(state): State<AppState>,
    Json(req): Json<NodeRequest>,
) -> Result<Response, ApiError> {
    let mut session = state.session.lock();
    if !session.set_node(&req.url) {
        return Err(ApiError::BadRequest("node URL must not be empty".to_string()));
    }
    info!(node = session.selected_node(), "node changed");
    Ok(json_response(StatusCode::OK, session.clone()))
}

async fn clear_cache(State(state): State<AppState>) -> Response {
    let dropped = state.client.len();
    state.client.clear();
    json_response(StatusCode::OK, serde_json::json!({ "cleared": dropped }))
}
