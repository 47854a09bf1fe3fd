use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A recipe held by the store.
/// Serializes to exactly `{"id", "name", "ingredients"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: Uuid,
    pub name: String,
    pub ingredients: Vec<String>,
}

/// Validated recipe contents. The store only accepts this type, so a
/// request must pass `validate` on its way in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeFields {
    pub name: String,
    pub ingredients: Vec<String>,
}

/// Payload for `POST /recipes`.
/// Fields are optional here so a missing one becomes a validation error
/// with a readable message instead of a deserialization failure.
#[derive(Debug, Deserialize)]
pub struct CreateRecipeRequest {
    pub name: Option<String>,
    pub ingredients: Option<Vec<String>>,
}

/// Payload for `PUT /recipes/:id`.
/// `id` may be omitted; when present it has to match the path.
#[derive(Debug, Deserialize)]
pub struct UpdateRecipeRequest {
    pub id: Option<Uuid>,
    pub name: Option<String>,
    pub ingredients: Option<Vec<String>>,
}

impl Recipe {
    /// Builds a recipe with a fresh random id.
    pub fn new(fields: RecipeFields) -> Self {
        Recipe {
            id: Uuid::new_v4(),
            name: fields.name,
            ingredients: fields.ingredients,
        }
    }

    /// Replaces name and ingredients. The id never changes.
    pub fn apply(&mut self, fields: RecipeFields) {
        self.name = fields.name;
        self.ingredients = fields.ingredients;
    }
}

impl RecipeFields {
    pub fn new(name: impl Into<String>, ingredients: impl IntoIterator<Item = impl Into<String>>) -> Self {
        RecipeFields {
            name: name.into(),
            ingredients: ingredients.into_iter().map(Into::into).collect(),
        }
    }
}

impl CreateRecipeRequest {
    /// Checks that both fields are present and hands back the typed contents.
    pub fn validate(self) -> Result<RecipeFields, String> {
        let name = require(self.name, "name")?;
        let ingredients = require(self.ingredients, "ingredients")?;

        Ok(RecipeFields { name, ingredients })
    }
}

impl UpdateRecipeRequest {
    /// Same presence rules as creation, plus the body id (if any) must
    /// agree with the id taken from the path.
    pub fn validate(self, path_id: Uuid) -> Result<RecipeFields, String> {
        if let Some(body_id) = self.id {
            if body_id != path_id {
                return Err(format!(
                    "Request path id ({}) and request body id ({}) must match",
                    path_id, body_id
                ));
            }
        }

        let name = require(self.name, "name")?;
        let ingredients = require(self.ingredients, "ingredients")?;

        Ok(RecipeFields { name, ingredients })
    }
}

fn require<T>(value: Option<T>, field: &str) -> Result<T, String> {
    value.ok_or_else(|| format!("Missing `{}` in request body", field))
}
