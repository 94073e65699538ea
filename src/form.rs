//! Helpers shared by the entry forms.
//!
//! Form fields are deserialized as strings so that a non-numeric value is
//! reported next to the form instead of as an extractor rejection.

use crate::{
    DatabaseId, Error,
    stores::{CategoryStore, RecordStore, UserStore},
};

/// The users and categories offered as choices in a form, as (ID, label) pairs.
#[derive(Debug, Default, Clone, PartialEq)]
pub(crate) struct FormChoices {
    pub users: Vec<(DatabaseId, String)>,
    pub categories: Vec<(DatabaseId, String)>,
}

impl FormChoices {
    /// Load every user and category from `store`.
    pub(crate) fn load(store: &dyn RecordStore) -> Result<Self, Error> {
        let users = store
            .get_all_users()
            .inspect_err(|error| tracing::error!("Failed to retrieve users: {error}"))?
            .into_iter()
            .map(|user| (user.id, user.username))
            .collect();

        let categories = store
            .get_all_categories()
            .inspect_err(|error| tracing::error!("Failed to retrieve categories: {error}"))?
            .into_iter()
            .map(|category| (category.id, category.name.to_string()))
            .collect();

        Ok(Self { users, categories })
    }
}

/// Parse a record ID, ignoring surrounding whitespace.
pub(crate) fn parse_id(text: &str) -> Option<DatabaseId> {
    text.trim().parse().ok()
}

/// Parse a finite decimal number, ignoring surrounding whitespace.
pub(crate) fn parse_decimal(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|number| number.is_finite())
}
