//! Defines the budget store trait.

use crate::{
    Error,
    budget::{Budget, NewBudget},
};

/// Creates and retrieves budgets.
pub trait BudgetStore {
    /// Create a new budget and add it to the store.
    ///
    /// Budgets for the same user, category and month are not merged or rejected.
    fn create_budget(&self, budget: NewBudget) -> Result<Budget, Error>;

    /// Get all budgets in insertion order.
    fn get_all_budgets(&self) -> Result<Vec<Budget>, Error>;
}
