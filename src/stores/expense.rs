//! Defines the expense store trait.

use crate::{
    Error,
    expense::{Expense, NewExpense},
};

/// Creates and retrieves expenses.
pub trait ExpenseStore {
    /// Create a new expense and add it to the store.
    fn create_expense(&self, expense: NewExpense) -> Result<Expense, Error>;

    /// Get all expenses in insertion order.
    fn get_all_expenses(&self) -> Result<Vec<Expense>, Error>;
}
