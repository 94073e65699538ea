//! Core budget domain types.

use serde::{Deserialize, Serialize};

use crate::{
    DatabaseId, Error,
    category::CategoryId,
    form::{parse_decimal, parse_id},
    user::UserId,
};

/// The percentage of a budget remaining at which the "near limit" alert
/// starts, used when the form leaves the threshold blank.
pub const DEFAULT_ALERT_THRESHOLD: f64 = 10.0;

/// A monthly spending limit for one user and category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    pub id: DatabaseId,
    pub user_id: UserId,
    pub category_id: CategoryId,
    /// The spending limit in dollars.
    pub amount: f64,
    /// The month the budget applies to, formatted as YYYY-MM.
    pub month: String,
    /// Alert when spending is within this percentage of the budget.
    pub alert_threshold: f64,
}

/// A validated budget that has not been assigned an ID yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBudget {
    pub user_id: UserId,
    pub category_id: CategoryId,
    pub amount: f64,
    pub month: String,
    pub alert_threshold: f64,
}

/// Form data for setting a budget.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct BudgetForm {
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub category_id: String,
    #[serde(default)]
    pub amount: String,
    #[serde(default)]
    pub month: String,
    /// Optional, an empty value means [DEFAULT_ALERT_THRESHOLD].
    #[serde(default)]
    pub alert_threshold: String,
}

impl TryFrom<&BudgetForm> for NewBudget {
    type Error = Error;

    /// # Errors
    ///
    /// Returns [Error::InvalidBudgetNumber] if an ID, the amount or the
    /// threshold is not a number, and [Error::MissingMonth] if the month is
    /// empty.
    fn try_from(form: &BudgetForm) -> Result<Self, Self::Error> {
        let alert_threshold = if form.alert_threshold.trim().is_empty() {
            Some(DEFAULT_ALERT_THRESHOLD)
        } else {
            parse_decimal(&form.alert_threshold)
        };

        let (Some(amount), Some(alert_threshold), Some(user_id), Some(category_id)) = (
            parse_decimal(&form.amount),
            alert_threshold,
            parse_id(&form.user_id),
            parse_id(&form.category_id),
        ) else {
            return Err(Error::InvalidBudgetNumber);
        };

        let month = form.month.trim();
        if month.is_empty() {
            return Err(Error::MissingMonth);
        }

        Ok(Self {
            user_id,
            category_id,
            amount,
            month: month.to_owned(),
            alert_threshold,
        })
    }
}

#[cfg(test)]
mod new_budget_tests {
    use crate::{
        Error,
        budget::domain::{BudgetForm, DEFAULT_ALERT_THRESHOLD, NewBudget},
    };

    fn form(amount: &str, month: &str, alert_threshold: &str) -> BudgetForm {
        BudgetForm {
            user_id: "1".to_owned(),
            category_id: "3".to_owned(),
            amount: amount.to_owned(),
            month: month.to_owned(),
            alert_threshold: alert_threshold.to_owned(),
        }
    }

    #[test]
    fn blank_threshold_uses_default() {
        let budget = NewBudget::try_from(&form("250", " 2024-03 ", "")).unwrap();

        assert_eq!(
            budget,
            NewBudget {
                user_id: 1,
                category_id: 3,
                amount: 250.0,
                month: "2024-03".to_owned(),
                alert_threshold: DEFAULT_ALERT_THRESHOLD,
            }
        );
    }

    #[test]
    fn keeps_explicit_threshold() {
        let budget = NewBudget::try_from(&form("250", "2024-03", "25")).unwrap();

        assert_eq!(budget.alert_threshold, 25.0);
    }

    #[test]
    fn rejects_non_numeric_values() {
        assert_eq!(
            NewBudget::try_from(&form("lots", "2024-03", "")),
            Err(Error::InvalidBudgetNumber)
        );
        assert_eq!(
            NewBudget::try_from(&form("250", "2024-03", "ten")),
            Err(Error::InvalidBudgetNumber)
        );
    }

    #[test]
    fn numbers_are_checked_before_month() {
        assert_eq!(
            NewBudget::try_from(&form("lots", "", "")),
            Err(Error::InvalidBudgetNumber)
        );
    }

    #[test]
    fn rejects_missing_month() {
        assert_eq!(
            NewBudget::try_from(&form("250", "  ", "")),
            Err(Error::MissingMonth)
        );
    }
}
