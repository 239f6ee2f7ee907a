//! basket-server library - HTTP surface for the shopping list
//!
//! Every handler locks the one shared store, applies its mutation (if any)
//! and answers with a freshly consolidated view.

use std::sync::Arc;

use axum::Router;
use basket_common::ShoppingListStore;
use tokio::sync::Mutex;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod api;
pub mod error;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Mutex<ShoppingListStore>>,
}

impl AppState {
    pub fn new(store: ShoppingListStore) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::{delete, get};

    let shopping_list = Router::new()
        .route(
            "/api/shopping-list",
            get(api::get_shopping_list).delete(api::clear_shopping_list),
        )
        .route("/api/shopping-list/print", get(api::print_shopping_list))
        .route("/api/recipes", get(api::list_recipes).post(api::add_recipe))
        .route(
            "/api/recipes/:slug",
            get(api::get_recipe).delete(api::remove_recipe),
        )
        .route(
            "/api/recipes/:slug/ingredients/:name",
            delete(api::remove_ingredient_from_recipe),
        )
        .route("/api/ingredients/:name", delete(api::remove_ingredient_globally));

    Router::new()
        .merge(shopping_list)
        .merge(api::health_routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        // The shopping-list page may be served from another origin
        .layer(CorsLayer::permissive())
}
