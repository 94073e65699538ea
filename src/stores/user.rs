//! Defines the user store trait.

use crate::{
    Error,
    user::{NewUser, User},
};

/// Creates and retrieves users.
pub trait UserStore {
    /// Create a new user and add it to the store.
    fn create_user(&self, user: NewUser) -> Result<User, Error>;

    /// Get all users in insertion order.
    fn get_all_users(&self) -> Result<Vec<User>, Error>;
}
