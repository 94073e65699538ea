//! Expense Tracker is a small web app for recording expenses and checking
//! them against monthly budgets.
//!
//! This library provides two routers:
//! - [build_router] serves HTML pages with forms for users, categories,
//!   expenses and budgets, plus a monthly report.
//! - [build_api_router] serves a tiny, independent JSON API for recording
//!   expenses.
//!
//! All records live in process memory and are lost on restart.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum_server::Handle;
use tokio::signal;

mod api;
mod app_state;
mod budget;
mod category;
mod database_id;
mod endpoints;
mod error;
mod expense;
mod flash;
mod form;
mod html;
mod index;
mod internal_server_error;
mod logging;
mod navigation;
mod not_found;
mod report;
mod routing;
mod stores;
mod timezone;
mod user;

#[cfg(test)]
mod test_utils;

pub use api::{ApiExpense, ApiExpenseStore, ApiState, NewApiExpense, build_api_router};
pub use app_state::{AppState, create_cookie_key};
pub use budget::{Budget, DEFAULT_ALERT_THRESHOLD};
pub use category::{Category, CategoryId, CategoryName};
pub use database_id::DatabaseId;
pub use error::Error;
pub use expense::Expense;
pub use logging::{LOG_BODY_LENGTH_LIMIT, add_tracing_layer, logging_middleware};
pub use report::{
    BudgetStatus, CategorySummary, MonthlyReport, build_report, classify, generate_report,
};
pub use routing::build_router;
pub use stores::{
    BudgetStore, CategoryStore, ExpenseStore, MemoryStore, RecordStore, SharedStore, UserStore,
};
pub use timezone::get_local_offset;
pub use user::{User, UserId};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}
