//! Defines the category store trait.

use crate::{
    Error,
    category::{Category, CategoryId, CategoryName},
};

/// Creates and retrieves expense categories.
pub trait CategoryStore {
    /// Create a new category and add it to the store.
    fn create_category(&self, name: CategoryName) -> Result<Category, Error>;

    /// Get a category by its ID.
    ///
    /// Returns [Error::NotFound] if no category has the ID `category_id`.
    fn get_category(&self, category_id: CategoryId) -> Result<Category, Error>;

    /// Get all categories in insertion order.
    fn get_all_categories(&self) -> Result<Vec<Category>, Error>;
}
