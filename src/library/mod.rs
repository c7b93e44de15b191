mod catalog;
mod library;

pub use catalog::{Catalog, Category, ClipGroup};
pub use library::Library;
