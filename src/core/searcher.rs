/// Recipe searcher with fuzzy matching
///
/// Provides fuzzy search capabilities for finding recipes by name.

use crate::db::{Database, Recipe, SearchResult};
use crate::error::Result;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use std::sync::Arc;

/// Handles recipe searching with fuzzy matching
pub struct Searcher {
    db: Arc<Database>,
    matcher: SkimMatcherV2,
}

impl Searcher {
    /// Create a new searcher instance
    pub fn new(db: Arc<Database>) -> Self {
        Self {
            db,
            matcher: SkimMatcherV2::default(),
        }
    }

    /// Search recipes with fuzzy matching on the name
    ///
    /// # Arguments
    /// * `query` - Search query
    /// * `limit` - Maximum results to return
    ///
    /// # Returns
    /// * `Ok(Vec<SearchResult>)` - Search results sorted by score
    pub async fn search(&self, query: &str, limit: usize) -> Result<Vec<SearchResult>> {
        let recipes = self.db.get_all_recipes().await?;

        // Apply fuzzy matching
        let mut results: Vec<SearchResult> = recipes
            .into_iter()
            .filter_map(|recipe| {
                self.matcher
                    .fuzzy_match(&recipe.name, query)
                    .map(|score| SearchResult {
                        recipe,
                        score: score as f64,
                    })
            })
            .collect();

        // Sort by score (highest first)
        results.sort_by(|a, b| b.score.total_cmp(&a.score));
        results.truncate(limit);

        Ok(results)
    }

    /// Plain substring search, straight through to SQL LIKE
    pub async fn search_exact(&self, query: &str) -> Result<Vec<Recipe>> {
        self.db.search_recipes(query).await
    }
}
