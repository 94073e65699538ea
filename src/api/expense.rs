//! Expenses recorded through the JSON API.

use std::sync::Mutex;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::{DatabaseId, Error, api::ApiState};

/// An expense recorded through the JSON API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiExpense {
    pub id: DatabaseId,
    pub description: String,
    pub amount: f64,
    /// The date as sent by the client, not parsed.
    pub date: String,
}

/// The request body for adding an expense.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewApiExpense {
    pub description: String,
    pub amount: f64,
    pub date: String,
}

/// An append-only list of API expenses.
#[derive(Debug, Default)]
pub struct ApiExpenseStore {
    expenses: Mutex<Vec<ApiExpense>>,
}

impl ApiExpenseStore {
    /// Add an expense, its ID is the number of expenses before it plus one.
    ///
    /// # Errors
    ///
    /// Returns [Error::StoreLockError] if the lock is poisoned.
    pub fn add(&self, expense: NewApiExpense) -> Result<ApiExpense, Error> {
        let mut expenses = self
            .expenses
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire API store lock: {error}"))
            .map_err(|_| Error::StoreLockError)?;

        let expense = ApiExpense {
            id: expenses.len() as DatabaseId + 1,
            description: expense.description,
            amount: expense.amount,
            date: expense.date,
        };
        expenses.push(expense.clone());
        tracing::debug!("created API expense {}", expense.id);

        Ok(expense)
    }

    /// Get every expense in the order they were added.
    pub fn get_all(&self) -> Result<Vec<ApiExpense>, Error> {
        self.expenses
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire API store lock: {error}"))
            .map(|expenses| expenses.clone())
            .map_err(|_| Error::StoreLockError)
    }
}

/// A route handler for adding an expense, responds with 201 and the new expense.
pub(super) async fn add_expense(
    State(state): State<ApiState>,
    Json(expense): Json<NewApiExpense>,
) -> Response {
    match state.store.add(expense) {
        Ok(expense) => (StatusCode::CREATED, Json(expense)).into_response(),
        Err(error) => error.into_json_response(),
    }
}

/// A route handler for listing every expense.
pub(super) async fn get_expenses(State(state): State<ApiState>) -> Response {
    match state.store.get_all() {
        Ok(expenses) => Json(expenses).into_response(),
        Err(error) => error.into_json_response(),
    }
}
