/// Error types for ladle
///
/// This module defines all possible errors that can occur in the application.
/// Uses thiserror for ergonomic error handling.

use thiserror::Error;

/// Main error type for ladle operations
#[derive(Error, Debug)]
pub enum LadleError {
    /// Database-related errors
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// I/O errors (file operations, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Recipe id does not exist in the database
    #[error("Recipe not found: {0}")]
    RecipeNotFound(i64),

    /// Invalid recipe content (empty name, etc.)
    #[error("Invalid recipe: {0}")]
    InvalidRecipe(String),

    /// A text field exceeds the maximum allowed length
    #[error("Field exceeds maximum allowed length of {0} characters")]
    FieldTooLong(usize),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Completion provider error
    #[error("Assist error: {0}")]
    Assist(String),

    /// Generic error with message
    #[error("{0}")]
    Generic(String),
}

/// Result type alias for ladle operations
pub type Result<T> = std::result::Result<T, LadleError>;

/// Convert LadleError to a user-friendly error message
impl LadleError {
    pub fn user_message(&self) -> String {
        match self {
            LadleError::Database(e) => {
                format!("Database error occurred. Please try again. Details: {}", e)
            }
            LadleError::Io(e) => {
                format!("File system error. Check permissions. Details: {}", e)
            }
            LadleError::Serialization(e) => {
                format!("Data format error: {}", e)
            }
            LadleError::RecipeNotFound(id) => {
                format!("No recipe with id {} in your cookbook", id)
            }
            LadleError::InvalidRecipe(reason) => {
                format!("Invalid recipe: {}", reason)
            }
            LadleError::FieldTooLong(max) => {
                format!("Field exceeds maximum length of {} characters", max)
            }
            LadleError::Config(msg) => {
                format!("Configuration issue: {}", msg)
            }
            LadleError::Assist(msg) => {
                format!("Assist unavailable: {}", msg)
            }
            LadleError::Generic(msg) => msg.clone(),
        }
    }
}
