//! Request handlers for the `/shopping-list` resource

use axum::{
    body::Bytes,
    extract::{RawQuery, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::Value;
use std::sync::Arc;

use shopping_list_core::{Collection, Item, ItemStore};

use crate::error::ApiError;
use crate::ITEMS_PATH;

/// State shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ItemStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn ItemStore>) -> Self {
        Self { store }
    }
}

/// Build the router for the shopping list resource.
///
/// Only [`ITEMS_PATH`] is routed; unknown verbs on it get 405 and every other
/// path gets 404, both as plain text.
pub fn router(store: Arc<dyn ItemStore>) -> Router {
    Router::new()
        .route(
            ITEMS_PATH,
            get(list_items)
                .post(add_item)
                .put(update_item)
                .patch(update_item)
                .delete(remove_item)
                .fallback(method_not_allowed),
        )
        .fallback(not_found)
        .with_state(AppState::new(store))
}

async fn list_items(State(state): State<AppState>) -> Result<Json<Collection>, ApiError> {
    let items = run_store(&state, |store| store.load()).await?;
    Ok(Json(items))
}

async fn add_item(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    let item = parse_item(&body)?;
    let created = run_store(&state, move |store| store.append(item)).await?;
    tracing::info!(name = %created.name, quantity = %created.quantity, "Item added");
    Ok((StatusCode::CREATED, Json(created)))
}

async fn update_item(State(state): State<AppState>, body: Bytes) -> Result<Json<Item>, ApiError> {
    let Item { name, quantity, .. } = parse_item(&body)?;
    let updated = run_store(&state, move |store| store.update_quantity(&name, quantity)).await?;
    tracing::info!(name = %updated.name, quantity = %updated.quantity, "Item updated");
    Ok(Json(updated))
}

async fn remove_item(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<StatusCode, ApiError> {
    let name = query_name(query.as_deref()).ok_or(ApiError::MissingName)?;
    let removed = run_store(&state, {
        let name = name.clone();
        move |store| store.remove(&name)
    })
    .await?;
    tracing::info!(name = %name, removed, "Item removed");
    Ok(StatusCode::NO_CONTENT)
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

async fn not_found() -> ApiError {
    ApiError::UnknownRoute
}

/// Parse a request body into a validated item.
///
/// Syntax errors are reported before any validation runs.
fn parse_item(body: &[u8]) -> Result<Item, ApiError> {
    let value: Value = serde_json::from_slice(body).map_err(|_| ApiError::InvalidJson)?;
    Ok(Item::from_json(value)?)
}

/// First non-empty `name` parameter of a query string
fn query_name(query: Option<&str>) -> Option<String> {
    let query = query?;
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == "name")
        .map(|(_, value)| value.into_owned())
        .filter(|name| !name.is_empty())
}

/// Run a blocking store operation off the async executor
async fn run_store<T, F>(state: &AppState, op: F) -> Result<T, ApiError>
where
    F: FnOnce(&dyn ItemStore) -> shopping_list_core::Result<T> + Send + 'static,
    T: Send + 'static,
{
    let store = Arc::clone(&state.store);
    tokio::task::spawn_blocking(move || op(store.as_ref()))
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?
        .map_err(ApiError::from)
}
