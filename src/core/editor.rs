// Validating write path for recipes
//
// All mutations go through here so the database never sees an empty
// name, absurdly long fields, or null bytes.

use crate::db::{Database, RecipeInput};
use crate::error::{LadleError, Result};
use crate::steps::strip_step_labels;
use std::sync::Arc;

// Nobody needs a 10KB ingredient list either, but block text gets
// some room to breathe.
const MAX_FIELD_LENGTH: usize = 10_000;

pub struct Editor {
    db: Arc<Database>,
}

impl Editor {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Validate and store a new recipe, returning its id.
    pub async fn add(&self, input: RecipeInput) -> Result<i64> {
        let input = self.prepare(input)?;
        self.db.add_recipe(input).await
    }

    /// Validate and apply a full update to an existing recipe.
    pub async fn update(&self, id: i64, input: RecipeInput) -> Result<()> {
        let input = self.prepare(input)?;
        self.db.update_recipe(id, input).await
    }

    /// Delete a recipe by id.
    pub async fn delete(&self, id: i64) -> Result<()> {
        self.db.delete_recipe(id).await
    }

    /// Save an edited step view back to storage.
    ///
    /// The "Step N:" labels are display-only: they are stripped here
    /// and only the remaining text lands in the cooking process field.
    pub async fn save_rendered_process(&self, id: i64, rendered_text: &str) -> Result<()> {
        let stored = strip_step_labels(rendered_text);
        let stored = sanitize_block(&stored);
        self.db.set_cooking_process(id, &stored).await
    }

    // Checks and cleans every field before it touches the database.
    fn prepare(&self, input: RecipeInput) -> Result<RecipeInput> {
        let name = sanitize_name(&input.name);
        if name.is_empty() {
            return Err(LadleError::InvalidRecipe("empty name".to_string()));
        }

        for field in [
            &name,
            &input.cooking_time,
            &input.ingredients,
            &input.cooking_process,
        ] {
            if field.len() > MAX_FIELD_LENGTH {
                return Err(LadleError::FieldTooLong(MAX_FIELD_LENGTH));
            }
        }

        Ok(RecipeInput {
            name,
            cooking_time: sanitize_block(&input.cooking_time),
            ingredients: sanitize_block(&input.ingredients),
            cooking_process: sanitize_block(&input.cooking_process),
            favorite: input.favorite,
        })
    }
}

/// Sanitize a recipe name
///
/// - Removes null bytes
/// - Trims whitespace
/// - Normalizes whitespace (multiple spaces to single)
fn sanitize_name(name: &str) -> String {
    name.replace('\0', "")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Sanitize block text
///
/// Line breaks carry meaning in ingredients and instructions, so only
/// null bytes and edge whitespace are removed.
fn sanitize_block(text: &str) -> String {
    text.replace('\0', "").trim().to_string()
}
