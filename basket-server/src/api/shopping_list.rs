//! Consolidated shopping list endpoints

use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
    Json,
};
use basket_common::render::render_checklist;
use basket_common::ShoppingListView;
use tracing::info;

use crate::AppState;

/// GET /api/shopping-list
pub async fn get_shopping_list(State(state): State<AppState>) -> Json<ShoppingListView> {
    let store = state.store.lock().await;
    Json(store.view())
}

/// DELETE /api/shopping-list
pub async fn clear_shopping_list(State(state): State<AppState>) -> Json<ShoppingListView> {
    let mut store = state.store.lock().await;
    if store.clear_all().await {
        info!("Shopping list cleared");
    }
    Json(store.view())
}

/// GET /api/shopping-list/print
///
/// Same rows as the JSON view, rendered as a plain-text checklist.
pub async fn print_shopping_list(State(state): State<AppState>) -> impl IntoResponse {
    let text = {
        let store = state.store.lock().await;
        render_checklist(&store.consolidated())
    };

    ([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], text)
}
