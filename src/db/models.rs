/// Data models for database entities
///
/// All models map to database tables and use sqlx for type-safe queries.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A persisted recipe
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Recipe {
    pub id: i64,
    pub name: String,
    pub cooking_time: String,    // free-form text, not a structured duration
    pub ingredients: String,     // free-form block text
    pub cooking_process: String, // free-form block text, source of the step view
    pub favorite: bool,
    pub created_at: String, // ISO 8601 format from SQLite
    pub updated_at: Option<String>,
}

impl Recipe {
    /// One-line summary for list output
    pub fn summary(&self) -> String {
        let marker = if self.favorite { "*" } else { " " };
        if self.cooking_time.is_empty() {
            format!("{} {}", marker, self.name)
        } else {
            format!("{} {} ({})", marker, self.name, self.cooking_time)
        }
    }
}

/// Input for creating or updating a recipe
///
/// Everything except the store-assigned id and timestamps.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RecipeInput {
    pub name: String,
    pub cooking_time: String,
    pub ingredients: String,
    pub cooking_process: String,
    pub favorite: bool,
}

/// Sort orders offered by the catalog
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    RecentlyAdded,
    Alphabetical,
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SortOrder::RecentlyAdded => "recently_added",
            SortOrder::Alphabetical => "alphabetical",
        };
        write!(f, "{}", s)
    }
}

/// Search results with metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    pub recipe: Recipe,
    pub score: f64, // Fuzzy match score
}
