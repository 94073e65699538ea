//! Spending categories such as Groceries or Rent.

mod create;
mod domain;

pub use create::{add_category_endpoint, get_add_category_page};
pub use domain::{Category, CategoryForm, CategoryId, CategoryName};

/// The label shown for an expense whose category ID does not match any category.
pub const UNLABELLED_CATEGORY: &str = "Unlabelled";
