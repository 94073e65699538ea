//! Contains traits and implementations for objects that store the domain records.

mod budget;
mod category;
mod expense;
mod memory;
mod user;

use std::sync::Arc;

pub use budget::BudgetStore;
pub use category::CategoryStore;
pub use expense::ExpenseStore;
pub use memory::MemoryStore;
pub use user::UserStore;

/// A store for every record type used by the form-driven app.
pub trait RecordStore: UserStore + CategoryStore + ExpenseStore + BudgetStore + Send + Sync {}

impl<T> RecordStore for T where T: UserStore + CategoryStore + ExpenseStore + BudgetStore + Send + Sync
{}

/// A record store shared between request handlers.
pub type SharedStore = Arc<dyn RecordStore>;
