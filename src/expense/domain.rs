//! Core expense domain types.

use serde::{Deserialize, Serialize};

use crate::{
    DatabaseId, Error, category::CategoryId, form::parse_decimal, form::parse_id, user::UserId,
};

/// A single expense paid by a user in a category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: DatabaseId,
    pub user_id: UserId,
    pub category_id: CategoryId,
    /// The amount spent in dollars, always greater than zero.
    pub amount: f64,
    pub description: String,
    /// The date the expense was paid, expected to be formatted as YYYY-MM-DD.
    pub date: String,
}

/// A validated expense that has not been assigned an ID yet.
///
/// The user and category IDs are not checked against existing records.
#[derive(Debug, Clone, PartialEq)]
pub struct NewExpense {
    pub user_id: UserId,
    pub category_id: CategoryId,
    pub amount: f64,
    pub description: String,
    pub date: String,
}

/// Form data for recording an expense.
///
/// Every field is kept as text so that parsing failures can be shown next to
/// the form.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ExpenseForm {
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub category_id: String,
    #[serde(default)]
    pub amount: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub date: String,
}

impl TryFrom<&ExpenseForm> for NewExpense {
    type Error = Error;

    /// # Errors
    ///
    /// Returns [Error::InvalidExpenseNumber] if an ID or the amount is not a
    /// number, and [Error::NonPositiveAmount] if the amount is zero or less.
    fn try_from(form: &ExpenseForm) -> Result<Self, Self::Error> {
        let (Some(user_id), Some(category_id), Some(amount)) = (
            parse_id(&form.user_id),
            parse_id(&form.category_id),
            parse_decimal(&form.amount),
        ) else {
            return Err(Error::InvalidExpenseNumber);
        };

        if amount <= 0.0 {
            return Err(Error::NonPositiveAmount);
        }

        Ok(Self {
            user_id,
            category_id,
            amount,
            description: form.description.trim().to_owned(),
            date: form.date.clone(),
        })
    }
}

#[cfg(test)]
mod new_expense_tests {
    use crate::{
        Error,
        expense::domain::{ExpenseForm, NewExpense},
    };

    fn form(user_id: &str, category_id: &str, amount: &str) -> ExpenseForm {
        ExpenseForm {
            user_id: user_id.to_owned(),
            category_id: category_id.to_owned(),
            amount: amount.to_owned(),
            description: "  Weekly shop ".to_owned(),
            date: "2024-03-02".to_owned(),
        }
    }

    #[test]
    fn parses_valid_form() {
        let expense = NewExpense::try_from(&form("1", "2", "30.5")).unwrap();

        assert_eq!(
            expense,
            NewExpense {
                user_id: 1,
                category_id: 2,
                amount: 30.5,
                description: "Weekly shop".to_owned(),
                date: "2024-03-02".to_owned(),
            }
        );
    }

    #[test]
    fn rejects_non_numeric_ids() {
        assert_eq!(
            NewExpense::try_from(&form("", "2", "30")),
            Err(Error::InvalidExpenseNumber)
        );
        assert_eq!(
            NewExpense::try_from(&form("1", "two", "30")),
            Err(Error::InvalidExpenseNumber)
        );
    }

    #[test]
    fn rejects_non_numeric_amount() {
        assert_eq!(
            NewExpense::try_from(&form("1", "2", "thirty")),
            Err(Error::InvalidExpenseNumber)
        );
    }

    #[test]
    fn rejects_zero_and_negative_amounts() {
        assert_eq!(
            NewExpense::try_from(&form("1", "2", "0")),
            Err(Error::NonPositiveAmount)
        );
        assert_eq!(
            NewExpense::try_from(&form("1", "2", "-4.5")),
            Err(Error::NonPositiveAmount)
        );
    }
}
