use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::{ApiError, ApiResult};
use crate::models::recipe::{Recipe, RecipeFields};

/// In-memory recipe repository.
/// A single `RwLock` guards the whole collection: reads share it, every
/// mutation takes it exclusively. Insertion order is list order.
#[derive(Debug, Default)]
pub struct RecipeStore {
    recipes: RwLock<Vec<Recipe>>,
}

impl RecipeStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with a couple of recipes so a fresh server has
    /// something to list.
    pub fn seeded() -> Self {
        let recipes = vec![
            Recipe::new(RecipeFields::new(
                "boiled white rice",
                ["1 cup white rice", "2 cups water", "pinch of salt"],
            )),
            Recipe::new(RecipeFields::new(
                "milkshake",
                ["2 tbsp cocoa", "2 cups vanilla ice cream", "1 cup milk"],
            )),
        ];

        info!("Seeded recipe store with {} recipes", recipes.len());
        RecipeStore {
            recipes: RwLock::new(recipes),
        }
    }

    pub async fn len(&self) -> usize {
        self.recipes.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.recipes.read().await.is_empty()
    }

    /// Snapshot of every recipe, in insertion order.
    pub async fn list(&self) -> Vec<Recipe> {
        self.recipes.read().await.clone()
    }

    pub async fn get(&self, id: Uuid) -> ApiResult<Recipe> {
        self.recipes
            .read()
            .await
            .iter()
            .find(|recipe| recipe.id == id)
            .cloned()
            .ok_or_else(|| ApiError::not_found(format!("Recipe {}", id)))
    }

    /// Appends a new recipe with a freshly generated id and returns it.
    pub async fn create(&self, fields: RecipeFields) -> Recipe {
        let recipe = Recipe::new(fields);

        self.recipes.write().await.push(recipe.clone());

        debug!("Stored recipe with id: {}", recipe.id);
        recipe
    }

    /// Replaces name and ingredients of the recipe with `id` in place.
    pub async fn update(&self, id: Uuid, fields: RecipeFields) -> ApiResult<Recipe> {
        let mut recipes = self.recipes.write().await;

        let recipe = recipes
            .iter_mut()
            .find(|recipe| recipe.id == id)
            .ok_or_else(|| ApiError::not_found(format!("Recipe {}", id)))?;

        recipe.apply(fields);

        debug!("Updated recipe with id: {}", id);
        Ok(recipe.clone())
    }

    /// Removes the recipe with `id`. Returns `false` when nothing matched;
    /// callers treat that as success.
    pub async fn delete(&self, id: Uuid) -> bool {
        let mut recipes = self.recipes.write().await;
        let before = recipes.len();

        recipes.retain(|recipe| recipe.id != id);

        let removed = recipes.len() != before;
        debug!("Delete recipe {} (removed: {})", id, removed);
        removed
    }
}
