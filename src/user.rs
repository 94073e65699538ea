//! User management for the people whose expenses are tracked.

mod create;
mod domain;

pub use create::{add_user_endpoint, get_add_user_page};
pub use domain::{NewUser, User, UserForm, UserId};
