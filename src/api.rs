//! A small JSON API for recording expenses.
//!
//! The API keeps its own list of expenses and shares nothing with the
//! form-driven app.

mod expense;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};

pub use expense::{ApiExpense, ApiExpenseStore, NewApiExpense};

use crate::endpoints;

/// The state of the JSON API.
#[derive(Debug, Clone, Default)]
pub struct ApiState {
    /// The expenses recorded through the API.
    pub store: Arc<ApiExpenseStore>,
}

impl ApiState {
    /// Create the API state with an empty expense list.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Return a router with the JSON API routes.
pub fn build_api_router(state: ApiState) -> Router {
    Router::new()
        .route(endpoints::API_ADD_EXPENSE, post(expense::add_expense))
        .route(endpoints::API_EXPENSES, get(expense::get_expenses))
        .with_state(state)
}
