//! Monthly budgets for a user and category combination.

mod create;
mod domain;

pub use create::{get_set_budget_page, set_budget_endpoint};
pub use domain::{Budget, BudgetForm, DEFAULT_ALERT_THRESHOLD, NewBudget};
