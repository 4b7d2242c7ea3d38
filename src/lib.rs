/// ladle library
///
/// Core functionality for the recipe book: storage, search,
/// and cooking-step segmentation.

pub mod assist;
pub mod config;
pub mod core;
pub mod db;
pub mod error;
pub mod steps;

// Re-exports for convenience
pub use config::Config;
pub use db::Database;
pub use error::{LadleError, Result};
