// Models module

pub mod recipe;

// Re-export commonly used types
pub use recipe::{CreateRecipeRequest, Recipe, RecipeFields, UpdateRecipeRequest};
