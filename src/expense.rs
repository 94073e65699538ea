//! Recording individual expenses.

mod create;
mod domain;

pub use create::{add_expense_endpoint, get_add_expense_page};
pub use domain::{Expense, ExpenseForm, NewExpense};
