//! Defines the app level error type and conversions to rendered HTML pages and JSON bodies.
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::{internal_server_error::InternalServerError, not_found::NotFoundError};

/// The errors that may occur in the application.
///
/// The validation variants display the message shown to the user next to the
/// form that was submitted.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A user was submitted without a username or email.
    #[error("Both name and email are required.")]
    MissingUserDetails,

    /// An empty string was used to create a category name.
    #[error("Category name cannot be empty.")]
    EmptyCategoryName,

    /// A user ID, category ID or amount for an expense could not be parsed as
    /// a number.
    #[error("Please provide valid numeric values.")]
    InvalidExpenseNumber,

    /// An expense amount was zero or negative.
    #[error("Amount must be greater than zero.")]
    NonPositiveAmount,

    /// A user ID, category ID, amount or alert threshold for a budget could
    /// not be parsed as a number.
    #[error("Please supply valid numeric values for budget and threshold.")]
    InvalidBudgetNumber,

    /// A budget or report was requested without a month.
    #[error("Month is required (format YYYY-MM).")]
    MissingMonth,

    /// A report was requested without a valid user ID.
    #[error("Select a user to generate a report.")]
    MissingReportUser,

    /// The requested resource was not found.
    #[error("the requested resource could not be found")]
    NotFound,

    /// The lock guarding an in-memory store was poisoned by a panicking thread.
    #[error("could not acquire the store lock")]
    StoreLockError,

    /// An error occurred while getting the local timezone from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezoneError(String),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound => NotFoundError.into_response(),
            Error::InvalidTimezoneError(timezone) => InternalServerError {
                description: "Invalid Timezone Settings",
                fix: &format!(
                    "Could not get local timezone \"{timezone}\". Check your server settings and \
                    ensure the timezone has been set to valid, canonical timezone string"
                ),
            }
            .into_response(),
            Error::StoreLockError => InternalServerError::default().into_response(),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                InternalServerError::default().into_response()
            }
        }
    }
}

impl Error {
    /// Convert the error into an HTTP response with a JSON body of the form
    /// `{"error": "..."}`.
    pub fn into_json_response(self) -> Response {
        let status_code = match self {
            Error::NotFound => StatusCode::NOT_FOUND,
            Error::StoreLockError | Error::InvalidTimezoneError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            _ => StatusCode::UNPROCESSABLE_ENTITY,
        };

        (status_code, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
