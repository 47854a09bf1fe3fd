// Library root for the recipe REST API

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod store;

// Re-export commonly used types
pub use error::{ApiError, ApiResult};
pub use models::{CreateRecipeRequest, Recipe, RecipeFields, UpdateRecipeRequest};
pub use routes::create_router;
pub use store::RecipeStore;
