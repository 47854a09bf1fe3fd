// Recipe handlers
// HTTP handlers for recipe management operations

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::{
    error::{ApiError, ApiResult},
    models::recipe::{CreateRecipeRequest, UpdateRecipeRequest},
    store::RecipeStore,
};

/// Get all recipes
/// GET /recipes
pub async fn get_all_recipes(State(store): State<Arc<RecipeStore>>) -> impl IntoResponse {
    info!("Fetching all recipes");

    let recipes = store.list().await;

    info!("Retrieved {} recipes", recipes.len());
    (StatusCode::OK, Json(recipes))
}

/// Create a new recipe
/// POST /recipes
pub async fn create_recipe(
    State(store): State<Arc<RecipeStore>>,
    payload: Result<Json<CreateRecipeRequest>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Json(request) = payload?;
    let fields = request.validate().map_err(ApiError::Validation)?;

    info!("Creating new recipe with name: {}", fields.name);

    let recipe = store.create(fields).await;

    info!("Successfully created recipe with id: {}", recipe.id);
    Ok((StatusCode::CREATED, Json(recipe)))
}

/// Get recipe by ID
/// GET /recipes/:id
pub async fn get_recipe_by_id(
    State(store): State<Arc<RecipeStore>>,
    Path(recipe_id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    info!("Fetching recipe with id: {}", recipe_id);

    let recipe = store.get(parse_recipe_id(&recipe_id)?).await?;

    Ok((StatusCode::OK, Json(recipe)))
}

/// Update recipe by ID
/// PUT /recipes/:id
pub async fn update_recipe(
    State(store): State<Arc<RecipeStore>>,
    Path(recipe_id): Path<String>,
    payload: Result<Json<UpdateRecipeRequest>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    info!("Updating recipe with id: {}", recipe_id);

    let id = parse_recipe_id(&recipe_id)?;
    let Json(request) = payload?;
    let fields = request.validate(id).map_err(ApiError::Validation)?;

    let recipe = store.update(id, fields).await?;

    info!("Successfully updated recipe with id: {}", recipe.id);
    Ok((StatusCode::OK, Json(recipe)))
}

/// Delete recipe by ID
/// DELETE /recipes/:id
/// Deleting an id that does not exist still answers 204.
pub async fn delete_recipe(
    State(store): State<Arc<RecipeStore>>,
    Path(recipe_id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    info!("Deleting recipe with id: {}", recipe_id);

    let id = parse_recipe_id(&recipe_id)?;

    if store.delete(id).await {
        info!("Successfully deleted recipe with id: {}", id);
    } else {
        info!("No recipe with id: {} to delete", id);
    }

    Ok(StatusCode::NO_CONTENT)
}

fn parse_recipe_id(raw: &str) -> ApiResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| ApiError::validation("Invalid recipe ID format"))
}
