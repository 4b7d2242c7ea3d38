/// Core functionality modules
///
/// Contains the main business logic for recipe creation, retrieval,
/// searching, and the step-view save path.

pub mod catalog;
pub mod editor;
pub mod searcher;

pub use catalog::Catalog;
pub use editor::Editor;
pub use searcher::Searcher;
