/// Recipe catalog
///
/// Read path over the database: listings, sorts, favorites.

use crate::db::{Database, Recipe, SortOrder};
use crate::error::Result;
use std::sync::Arc;

/// Handles recipe retrieval operations
pub struct Catalog {
    db: Arc<Database>,
}

impl Catalog {
    /// Create a new catalog instance
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Get every recipe in the book
    pub async fn all(&self) -> Result<Vec<Recipe>> {
        self.db.get_all_recipes().await
    }

    /// Get recipe by id
    pub async fn by_id(&self, id: i64) -> Result<Option<Recipe>> {
        self.db.get_recipe_by_id(id).await
    }

    /// Get favorite recipes
    pub async fn favorites(&self) -> Result<Vec<Recipe>> {
        self.db.get_favorite_recipes().await
    }

    /// Get recently added recipes, newest first
    pub async fn recently_added(&self, limit: i64) -> Result<Vec<Recipe>> {
        self.db.get_recently_added(limit).await
    }

    /// Get recipes in alphabetical order
    pub async fn alphabetical(&self) -> Result<Vec<Recipe>> {
        self.db.get_alphabetical().await
    }

    /// Get recipes in the requested sort order
    pub async fn sorted(&self, order: SortOrder, limit: i64) -> Result<Vec<Recipe>> {
        match order {
            SortOrder::RecentlyAdded => self.recently_added(limit).await,
            SortOrder::Alphabetical => self.alphabetical().await,
        }
    }

    /// Toggle favorite status
    pub async fn toggle_favorite(&self, id: i64) -> Result<bool> {
        self.db.toggle_favorite(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::RecipeInput;

    async fn setup() -> (Catalog, Arc<Database>) {
        let db = Arc::new(Database::new_test().await.unwrap());
        let catalog = Catalog::new(Arc::clone(&db));
        (catalog, db)
    }

    fn named(name: &str) -> RecipeInput {
        RecipeInput {
            name: name.to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_all_and_by_id() {
        let (catalog, db) = setup().await;

        let id = db.add_recipe(named("Pancakes")).await.unwrap();

        assert_eq!(catalog.all().await.unwrap().len(), 1);
        let recipe = catalog.by_id(id).await.unwrap().unwrap();
        assert_eq!(recipe.name, "Pancakes");
        assert!(catalog.by_id(id + 1).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_all_is_insertion_order_not_newest_first() {
        let (catalog, db) = setup().await;

        db.add_recipe(named("First In")).await.unwrap();
        db.add_recipe(named("Second In")).await.unwrap();

        // The full listing keeps insertion order, oldest first
        let all = catalog.all().await.unwrap();
        assert_eq!(all[0].name, "First In");
        assert_eq!(all[1].name, "Second In");

        // Newest-first is a different listing entirely
        let recent = catalog.recently_added(10).await.unwrap();
        assert_eq!(recent[0].name, "Second In");
    }

    #[tokio::test]
    async fn test_sorted_dispatch() {
        let (catalog, db) = setup().await;

        db.add_recipe(named("Zucchini Fritters")).await.unwrap();
        db.add_recipe(named("Apple Pie")).await.unwrap();

        let alpha = catalog.sorted(SortOrder::Alphabetical, 10).await.unwrap();
        assert_eq!(alpha[0].name, "Apple Pie");

        let recent = catalog.sorted(SortOrder::RecentlyAdded, 10).await.unwrap();
        assert_eq!(recent[0].name, "Apple Pie"); // added last
        assert_eq!(recent[1].name, "Zucchini Fritters");
    }

    #[tokio::test]
    async fn test_toggle_favorite() {
        let (catalog, db) = setup().await;

        let id = db.add_recipe(named("Focaccia")).await.unwrap();

        assert_eq!(catalog.toggle_favorite(id).await.unwrap(), true);
        assert_eq!(catalog.favorites().await.unwrap().len(), 1);
    }
}
