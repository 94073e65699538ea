//! Monthly spending aggregation and budget status classification.
//!
//! Expenses are matched to a month by string prefix on their date, so no date
//! parsing happens here. Amounts are summed per category and each category is
//! compared with the first budget set for the same user, category and month.

use std::fmt::Display;

use serde::Serialize;

use crate::{
    Error,
    budget::Budget,
    category::{Category, CategoryId, UNLABELLED_CATEGORY},
    expense::Expense,
    stores::{BudgetStore, CategoryStore, ExpenseStore, RecordStore},
    user::UserId,
};

/// How close spending in a category is to its budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BudgetStatus {
    /// Spending is below the alert trigger, or there is no budget.
    Ok,
    /// Spending has reached the alert trigger but not passed the budget.
    NearLimit,
    /// Spending is over the budget.
    Exceeded,
}

impl Display for BudgetStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            BudgetStatus::Ok => "OK",
            BudgetStatus::NearLimit => "NEAR LIMIT",
            BudgetStatus::Exceeded => "EXCEEDED",
        };

        write!(f, "{label}")
    }
}

/// The spending in one category for the report month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySummary {
    /// The category name, or "Unlabelled" if the category does not exist.
    pub category: String,
    /// The sum of the category's expenses for the month.
    pub spent: f64,
    /// The budget amount, zero when no budget was set.
    pub budget: f64,
    pub status: BudgetStatus,
}

impl CategorySummary {
    /// The amount left before the budget is exceeded, if a budget was set.
    pub fn remaining(&self) -> Option<f64> {
        (self.budget > 0.0).then(|| self.budget - self.spent)
    }
}

/// A user's spending for one month, broken down by category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyReport {
    /// The sum of every expense in the month.
    pub total: f64,
    /// One row per category with at least one expense, in order of the
    /// category's first expense.
    pub categories: Vec<CategorySummary>,
}

/// Classify `spent` against a budget of `budget` where the alert triggers
/// within `alert_threshold` percent of the budget.
///
/// A budget of zero or less is treated as no budget and is always
/// [BudgetStatus::Ok].
pub fn classify(spent: f64, budget: f64, alert_threshold: f64) -> BudgetStatus {
    if budget <= 0.0 {
        return BudgetStatus::Ok;
    }

    let trigger = budget * (1.0 - alert_threshold / 100.0);

    if spent > budget {
        BudgetStatus::Exceeded
    } else if spent >= trigger {
        BudgetStatus::NearLimit
    } else {
        BudgetStatus::Ok
    }
}

/// The expenses paid by `user_id` whose date starts with `month`.
fn expenses_for<'a>(
    expenses: &'a [Expense],
    user_id: UserId,
    month: &'a str,
) -> impl Iterator<Item = &'a Expense> {
    expenses
        .iter()
        .filter(move |expense| expense.user_id == user_id && expense.date.starts_with(month))
}

/// Sum expense amounts per category, keeping categories in the order they
/// first appear.
fn sum_by_category<'a>(expenses: impl Iterator<Item = &'a Expense>) -> Vec<(CategoryId, f64)> {
    let mut totals: Vec<(CategoryId, f64)> = Vec::new();

    for expense in expenses {
        match totals
            .iter_mut()
            .find(|(category_id, _)| *category_id == expense.category_id)
        {
            Some((_, total)) => *total += expense.amount,
            None => totals.push((expense.category_id, expense.amount)),
        }
    }

    totals
}

fn find_budget<'a>(
    budgets: &'a [Budget],
    user_id: UserId,
    category_id: CategoryId,
    month: &str,
) -> Option<&'a Budget> {
    budgets.iter().find(|budget| {
        budget.user_id == user_id && budget.category_id == category_id && budget.month == month
    })
}

fn category_name(categories: &[Category], category_id: CategoryId) -> String {
    categories
        .iter()
        .find(|category| category.id == category_id)
        .map_or_else(
            || UNLABELLED_CATEGORY.to_owned(),
            |category| category.name.to_string(),
        )
}

/// Build the report for `user_id` and `month` from already loaded records.
pub fn build_report(
    expenses: &[Expense],
    categories: &[Category],
    budgets: &[Budget],
    user_id: UserId,
    month: &str,
) -> MonthlyReport {
    let totals = sum_by_category(expenses_for(expenses, user_id, month));

    let rows: Vec<CategorySummary> = totals
        .into_iter()
        .map(|(category_id, spent)| {
            let (budget, status) = match find_budget(budgets, user_id, category_id, month) {
                Some(budget) => (
                    budget.amount,
                    classify(spent, budget.amount, budget.alert_threshold),
                ),
                None => (0.0, BudgetStatus::Ok),
            };

            CategorySummary {
                category: category_name(categories, category_id),
                spent,
                budget,
                status,
            }
        })
        .collect();

    let total = rows.iter().map(|summary| summary.spent).sum();

    MonthlyReport {
        total,
        categories: rows,
    }
}

/// Generate the monthly report for `user_id` from the records in `store`.
///
/// # Errors
///
/// Returns [Error::StoreLockError] if the store could not be read.
pub fn generate_report(
    store: &dyn RecordStore,
    user_id: UserId,
    month: &str,
) -> Result<MonthlyReport, Error> {
    let expenses = store.get_all_expenses()?;
    let categories = store.get_all_categories()?;
    let budgets = store.get_all_budgets()?;

    Ok(build_report(&expenses, &categories, &budgets, user_id, month))
}
