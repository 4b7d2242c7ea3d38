/// SQL query functions for database operations
///
/// All queries use parameterized statements through sqlx. Every operation
/// returns a Result; nothing is swallowed or printed here.

use crate::db::models::*;
use crate::db::Database;
use crate::error::{LadleError, Result};
use chrono::Utc;
use sqlx::Row;

impl Database {
    /// Insert a new recipe and return its store-assigned id
    ///
    /// # Arguments
    /// * `input` - Recipe field values
    ///
    /// # Returns
    /// * `Ok(i64)` - The new recipe id
    /// * `Err(LadleError)` - If the database operation fails
    pub async fn add_recipe(&self, input: RecipeInput) -> Result<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO recipes (name, cooking_time, ingredients, cooking_process, favorite)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(&input.name)
        .bind(&input.cooking_time)
        .bind(&input.ingredients)
        .bind(&input.cooking_process)
        .bind(input.favorite)
        .fetch_one(self.pool())
        .await?;

        Ok(result.get(0))
    }

    /// Get recipe by id
    pub async fn get_recipe_by_id(&self, id: i64) -> Result<Option<Recipe>> {
        let recipe = sqlx::query_as::<_, Recipe>("SELECT * FROM recipes WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool())
            .await?;

        Ok(recipe)
    }

    /// Get all recipes in insertion order
    pub async fn get_all_recipes(&self) -> Result<Vec<Recipe>> {
        let recipes = sqlx::query_as::<_, Recipe>("SELECT * FROM recipes ORDER BY id")
            .fetch_all(self.pool())
            .await?;

        Ok(recipes)
    }

    /// Update all user-editable fields of a recipe
    ///
    /// The id is immutable; a missing row is an error, not a no-op.
    pub async fn update_recipe(&self, id: i64, input: RecipeInput) -> Result<()> {
        let now = Utc::now().to_rfc3339();

        let result = sqlx::query(
            r#"
            UPDATE recipes
            SET name = ?, cooking_time = ?, ingredients = ?, cooking_process = ?,
                favorite = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&input.name)
        .bind(&input.cooking_time)
        .bind(&input.ingredients)
        .bind(&input.cooking_process)
        .bind(input.favorite)
        .bind(now)
        .bind(id)
        .execute(self.pool())
        .await?;

        if result.rows_affected() == 0 {
            return Err(LadleError::RecipeNotFound(id));
        }

        Ok(())
    }

    /// Replace only the cooking process text
    ///
    /// Save path of the step view: callers strip step labels first.
    pub async fn set_cooking_process(&self, id: i64, cooking_process: &str) -> Result<()> {
        let now = Utc::now().to_rfc3339();

        let result =
            sqlx::query("UPDATE recipes SET cooking_process = ?, updated_at = ? WHERE id = ?")
                .bind(cooking_process)
                .bind(now)
                .bind(id)
                .execute(self.pool())
                .await?;

        if result.rows_affected() == 0 {
            return Err(LadleError::RecipeNotFound(id));
        }

        Ok(())
    }

    /// Delete a recipe
    pub async fn delete_recipe(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM recipes WHERE id = ?")
            .bind(id)
            .execute(self.pool())
            .await?;

        if result.rows_affected() == 0 {
            return Err(LadleError::RecipeNotFound(id));
        }

        Ok(())
    }

    /// Search recipes by name (case-insensitive substring match)
    ///
    /// # Arguments
    /// * `search_text` - Text to look for inside recipe names
    pub async fn search_recipes(&self, search_text: &str) -> Result<Vec<Recipe>> {
        let pattern = format!("%{}%", search_text);

        let recipes =
            sqlx::query_as::<_, Recipe>("SELECT * FROM recipes WHERE name LIKE ? ORDER BY name")
                .bind(&pattern)
                .fetch_all(self.pool())
                .await?;

        Ok(recipes)
    }

    /// Get favorite recipes
    pub async fn get_favorite_recipes(&self) -> Result<Vec<Recipe>> {
        let recipes =
            sqlx::query_as::<_, Recipe>("SELECT * FROM recipes WHERE favorite = 1 ORDER BY name")
                .fetch_all(self.pool())
                .await?;

        Ok(recipes)
    }

    /// Get recently added recipes, newest first
    ///
    /// Ordered by id: ids are monotonically assigned, so the highest id
    /// is the newest row.
    pub async fn get_recently_added(&self, limit: i64) -> Result<Vec<Recipe>> {
        let recipes = sqlx::query_as::<_, Recipe>("SELECT * FROM recipes ORDER BY id DESC LIMIT ?")
            .bind(limit)
            .fetch_all(self.pool())
            .await?;

        Ok(recipes)
    }

    /// Get recipes sorted alphabetically by name
    pub async fn get_alphabetical(&self) -> Result<Vec<Recipe>> {
        let recipes =
            sqlx::query_as::<_, Recipe>("SELECT * FROM recipes ORDER BY name COLLATE NOCASE")
                .fetch_all(self.pool())
                .await?;

        Ok(recipes)
    }

    /// Toggle favorite status of a recipe
    ///
    /// # Arguments
    /// * `id` - The recipe to toggle
    pub async fn toggle_favorite(&self, id: i64) -> Result<bool> {
        let result =
            sqlx::query("UPDATE recipes SET favorite = NOT favorite WHERE id = ? RETURNING favorite")
                .bind(id)
                .fetch_optional(self.pool())
                .await?;

        match result {
            Some(row) => Ok(row.get(0)),
            None => Err(LadleError::RecipeNotFound(id)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pasta_input() -> RecipeInput {
        RecipeInput {
            name: "Spaghetti Carbonara".to_string(),
            cooking_time: "30 min".to_string(),
            ingredients: "spaghetti, eggs, guanciale, pecorino".to_string(),
            cooking_process: "Boil water. Add pasta. Stir occasionally.".to_string(),
            favorite: false,
        }
    }

    #[tokio::test]
    async fn test_add_and_get_recipe() {
        let db = Database::new_test().await.unwrap();

        let id = db.add_recipe(pasta_input()).await.unwrap();
        assert!(id > 0);

        let recipe = db.get_recipe_by_id(id).await.unwrap();
        assert!(recipe.is_some());

        let recipe = recipe.unwrap();
        assert_eq!(recipe.name, "Spaghetti Carbonara");
        assert_eq!(recipe.favorite, false);
        assert!(!recipe.created_at.is_empty());
    }

    #[tokio::test]
    async fn test_ids_are_unique_and_monotonic() {
        let db = Database::new_test().await.unwrap();

        let id1 = db.add_recipe(pasta_input()).await.unwrap();
        let id2 = db.add_recipe(pasta_input()).await.unwrap();

        assert!(id2 > id1);
    }

    #[tokio::test]
    async fn test_update_recipe() {
        let db = Database::new_test().await.unwrap();

        let id = db.add_recipe(pasta_input()).await.unwrap();

        let mut input = pasta_input();
        input.name = "Carbonara".to_string();
        input.favorite = true;
        db.update_recipe(id, input).await.unwrap();

        let recipe = db.get_recipe_by_id(id).await.unwrap().unwrap();
        assert_eq!(recipe.name, "Carbonara");
        assert!(recipe.favorite);
        assert!(recipe.updated_at.is_some());
    }

    #[tokio::test]
    async fn test_update_missing_recipe_fails() {
        let db = Database::new_test().await.unwrap();

        let result = db.update_recipe(999, pasta_input()).await;
        match result {
            Err(LadleError::RecipeNotFound(999)) => {}
            other => panic!("Expected RecipeNotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_set_cooking_process() {
        let db = Database::new_test().await.unwrap();

        let id = db.add_recipe(pasta_input()).await.unwrap();
        db.set_cooking_process(id, "Serve hot.").await.unwrap();

        let recipe = db.get_recipe_by_id(id).await.unwrap().unwrap();
        assert_eq!(recipe.cooking_process, "Serve hot.");
        // Other fields untouched
        assert_eq!(recipe.name, "Spaghetti Carbonara");
    }

    #[tokio::test]
    async fn test_delete_recipe() {
        let db = Database::new_test().await.unwrap();

        let id = db.add_recipe(pasta_input()).await.unwrap();
        db.delete_recipe(id).await.unwrap();

        assert!(db.get_recipe_by_id(id).await.unwrap().is_none());

        // Deleting again is an error, not a silent no-op
        assert!(db.delete_recipe(id).await.is_err());
    }

    #[tokio::test]
    async fn test_search_recipes() {
        let db = Database::new_test().await.unwrap();

        for name in ["Pasta Carbonara", "Pasta Bolognese", "Greek Salad"] {
            let mut input = pasta_input();
            input.name = name.to_string();
            db.add_recipe(input).await.unwrap();
        }

        let results = db.search_recipes("Pasta").await.unwrap();
        assert_eq!(results.len(), 2);

        let results = db.search_recipes("salad").await.unwrap();
        assert_eq!(results.len(), 1); // LIKE is case-insensitive for ASCII
    }

    #[tokio::test]
    async fn test_favorites_and_toggle() {
        let db = Database::new_test().await.unwrap();

        let id = db.add_recipe(pasta_input()).await.unwrap();
        assert!(db.get_favorite_recipes().await.unwrap().is_empty());

        let is_fav = db.toggle_favorite(id).await.unwrap();
        assert_eq!(is_fav, true);
        assert_eq!(db.get_favorite_recipes().await.unwrap().len(), 1);

        let is_fav = db.toggle_favorite(id).await.unwrap();
        assert_eq!(is_fav, false);

        // Toggling a missing id fails loudly
        assert!(db.toggle_favorite(999).await.is_err());
    }

    #[tokio::test]
    async fn test_recently_added_order_and_limit() {
        let db = Database::new_test().await.unwrap();

        for i in 1..=5 {
            let mut input = pasta_input();
            input.name = format!("Recipe {}", i);
            db.add_recipe(input).await.unwrap();
        }

        let recent = db.get_recently_added(3).await.unwrap();
        assert_eq!(recent.len(), 3);
        assert_eq!(recent[0].name, "Recipe 5");
        assert_eq!(recent[2].name, "Recipe 3");
    }

    #[tokio::test]
    async fn test_alphabetical_order() {
        let db = Database::new_test().await.unwrap();

        for name in ["banana bread", "Apple pie", "Cheesecake"] {
            let mut input = pasta_input();
            input.name = name.to_string();
            db.add_recipe(input).await.unwrap();
        }

        let sorted = db.get_alphabetical().await.unwrap();
        let names: Vec<&str> = sorted.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Apple pie", "banana bread", "Cheesecake"]);
    }

    #[tokio::test]
    async fn test_stats_count_recipes() {
        let db = Database::new_test().await.unwrap();

        let id = db.add_recipe(pasta_input()).await.unwrap();
        db.toggle_favorite(id).await.unwrap();
        db.add_recipe(pasta_input()).await.unwrap();

        let stats = db.stats().await.unwrap();
        assert_eq!(stats.total_recipes, 2);
        assert_eq!(stats.total_favorites, 1);
    }
}
