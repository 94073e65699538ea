//! Core user domain types.

use serde::{Deserialize, Serialize};

use crate::{DatabaseId, Error};

/// Identifier for a user.
pub type UserId = DatabaseId;

/// A person whose expenses and budgets are tracked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
}

/// A validated user that has not been assigned an ID yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub email: String,
}

impl NewUser {
    /// Create a new user from untrimmed form input.
    ///
    /// # Errors
    ///
    /// Returns [Error::MissingUserDetails] if either field is empty after trimming.
    pub fn new(username: &str, email: &str) -> Result<Self, Error> {
        let username = username.trim();
        let email = email.trim();

        if username.is_empty() || email.is_empty() {
            return Err(Error::MissingUserDetails);
        }

        Ok(Self {
            username: username.to_owned(),
            email: email.to_owned(),
        })
    }
}

/// Form data for adding a user.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct UserForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
}

#[cfg(test)]
mod new_user_tests {
    use crate::{Error, user::domain::NewUser};

    #[test]
    fn trims_fields() {
        let user = NewUser::new("  alice ", " alice@example.com\t").unwrap();

        assert_eq!(user.username, "alice");
        assert_eq!(user.email, "alice@example.com");
    }

    #[test]
    fn rejects_blank_username() {
        assert_eq!(
            NewUser::new("   ", "alice@example.com"),
            Err(Error::MissingUserDetails)
        );
    }

    #[test]
    fn rejects_missing_email() {
        assert_eq!(NewUser::new("alice", ""), Err(Error::MissingUserDetails));
    }
}
