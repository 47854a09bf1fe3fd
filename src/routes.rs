use axum::{
    routing::get,
    Router,
};
use std::{sync::Arc, time::Duration};

use crate::{
    handlers::{
        health_check,
        recipes::{create_recipe, delete_recipe, get_all_recipes, get_recipe_by_id, update_recipe},
    },
    middleware::create_middleware_stack,
    store::RecipeStore,
};

/// Create the Axum router with all endpoints and middleware
pub fn create_router(store: Arc<RecipeStore>, request_timeout: Duration) -> Router {
    Router::new()
        // Health check endpoint
        .route("/health", get(health_check))
        // Recipe endpoints
        .route("/recipes", get(get_all_recipes).post(create_recipe))
        .route(
            "/recipes/:id",
            get(get_recipe_by_id).put(update_recipe).delete(delete_recipe),
        )
        // Shared recipe store
        .with_state(store)
        // Apply middleware stack
        .layer(create_middleware_stack(request_timeout))
}
